use relay_core::{Action, Gate};

/// Start of a predicate branch. Attach the then-action with [`If::then`].
#[derive(Debug, Clone, Copy)]
pub struct If<P> {
    predicate: P,
}

impl<F> If<Gate<F>> {
    /// Branch on a closure returning `bool`.
    pub fn new(predicate: F) -> Self {
        Self {
            predicate: Gate::new(predicate),
        }
    }
}

impl<P> If<P> {
    /// Branch on an action's continuation signal.
    pub fn gated(predicate: P) -> Self {
        Self { predicate }
    }

    pub fn then<T>(self, action: T) -> IfThen<P, T> {
        IfThen {
            predicate: self.predicate,
            then: action,
        }
    }
}

/// Runs `then` when the predicate holds. When it does not, nothing runs and
/// the branch reports "continue".
#[derive(Debug, Clone, Copy)]
pub struct IfThen<P, T> {
    predicate: P,
    then: T,
}

impl<P, T> IfThen<P, T> {
    /// Attach the action that runs when the predicate does not hold.
    pub fn otherwise<E>(self, action: E) -> IfThenElse<P, T, E> {
        IfThenElse {
            predicate: self.predicate,
            then: self.then,
            otherwise: action,
        }
    }
}

impl<A, P, T> Action<A> for IfThen<P, T>
where
    A: ?Sized,
    P: Action<A>,
    T: Action<A>,
{
    fn call(&mut self, args: &mut A) -> bool {
        if self.predicate.call(args) {
            tracing::trace!(branch = "then", "predicate held");
            self.then.call(args)
        } else {
            tracing::trace!(branch = "skip", "predicate failed");
            true
        }
    }
}

/// Runs `then` when the predicate holds and `otherwise` when it does not,
/// reporting the continuation signal of whichever ran.
#[derive(Debug, Clone, Copy)]
pub struct IfThenElse<P, T, E> {
    predicate: P,
    then: T,
    otherwise: E,
}

impl<A, P, T, E> Action<A> for IfThenElse<P, T, E>
where
    A: ?Sized,
    P: Action<A>,
    T: Action<A>,
    E: Action<A>,
{
    fn call(&mut self, args: &mut A) -> bool {
        if self.predicate.call(args) {
            tracing::trace!(branch = "then", "predicate held");
            self.then.call(args)
        } else {
            tracing::trace!(branch = "otherwise", "predicate failed");
            self.otherwise.call(args)
        }
    }
}
