use relay_core::Action;

/// Start of a fallback pair. Attach the fallback with [`Try::fallback`].
#[derive(Debug, Clone, Copy)]
pub struct Try<P> {
    primary: P,
}

impl<P> Try<P> {
    pub fn new(primary: P) -> Self {
        Self { primary }
    }

    pub fn fallback<F>(self, fallback: F) -> TryFallback<P, F> {
        TryFallback {
            primary: self.primary,
            fallback,
        }
    }
}

/// Runs `primary`; only when it reports failure runs `fallback` and reports
/// its result.
///
/// ```
/// use relay_core::{effect, gate, Action};
/// use relay_flow::Try;
///
/// let mut parse = Try::new(gate(|(raw, out): &mut (String, i64)| match raw.parse() {
///     Ok(value) => {
///         *out = value;
///         true
///     }
///     Err(_) => false,
/// }))
/// .fallback(effect(|(_, out): &mut (String, i64)| *out = -1));
///
/// let mut args = ("12".to_string(), 0i64);
/// assert!(parse.call(&mut args));
/// assert_eq!(args.1, 12);
///
/// let mut args = ("twelve".to_string(), 0i64);
/// assert!(parse.call(&mut args));
/// assert_eq!(args.1, -1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TryFallback<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> TryFallback<P, F> {
    /// Add another fallback, tried only when every earlier one failed.
    pub fn fallback<G>(self, next: G) -> TryFallback<Self, G> {
        TryFallback {
            primary: self,
            fallback: next,
        }
    }
}

impl<A, P, F> Action<A> for TryFallback<P, F>
where
    A: ?Sized,
    P: Action<A>,
    F: Action<A>,
{
    fn call(&mut self, args: &mut A) -> bool {
        if self.primary.call(args) {
            return true;
        }
        tracing::trace!("primary failed, running fallback");
        self.fallback.call(args)
    }
}
