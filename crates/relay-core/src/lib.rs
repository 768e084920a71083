use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Action, Effect, Gate
// ---------------------------------------------------------------------------

/// A unit of behavior invoked in place on a shared argument pack.
///
/// The argument pack `A` is usually a tuple such as `(i32, String)` or a
/// caller-defined context struct. Every action of one invocation receives the
/// same `&mut A`, so mutations made by an action are visible to the actions
/// that run after it.
///
/// The returned boolean is the continuation signal: `true` means
/// continue/succeeded, `false` means stop/failed. Plain sequences and chains
/// ignore it; the flow combinators interpret it.
///
/// `Send + Sync` are required so chains holding actions can be moved to or
/// shared with other threads. A closure capturing `Rc` or `RefCell` is
/// rejected; capture `Arc<Mutex<_>>` or an atomic instead.
///
/// A type may implement `Action` for several argument packs. Such an action is
/// accepted by any sequence or chain whose pack it supports.
///
/// ```
/// use relay_core::Action;
///
/// #[derive(Clone)]
/// struct Double;
///
/// impl Action<(i32, i32)> for Double {
///     fn call(&mut self, (a, b): &mut (i32, i32)) -> bool {
///         *a *= 2;
///         *b *= 2;
///         true
///     }
/// }
///
/// let mut args = (1, 2);
/// Double.call(&mut args);
/// assert_eq!(args, (2, 4));
/// ```
pub trait Action<A: ?Sized>: Send + Sync {
    /// Run the action on the shared arguments and report whether to continue.
    fn call(&mut self, args: &mut A) -> bool;
}

impl<A: ?Sized, X: Action<A> + ?Sized> Action<A> for Box<X> {
    fn call(&mut self, args: &mut A) -> bool {
        (**self).call(args)
    }
}

/// An effect-only action: runs a closure and always reports "continue".
///
/// ```
/// use relay_core::{effect, Action};
///
/// let mut bump = effect(|(a, _): &mut (i32, i32)| *a += 1);
/// let mut args = (0, 0);
/// assert!(bump.call(&mut args));
/// assert_eq!(args, (1, 0));
/// ```
#[derive(Clone, Copy)]
pub struct Effect<F> {
    func: F,
}

impl<F> Effect<F> {
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<A: ?Sized, F> Action<A> for Effect<F>
where
    F: FnMut(&mut A) + Send + Sync,
{
    fn call(&mut self, args: &mut A) -> bool {
        (self.func)(args);
        true
    }
}

/// A gated action: runs a closure whose boolean result is the continuation
/// signal. Use it for predicates and for steps that can fail.
#[derive(Clone, Copy)]
pub struct Gate<F> {
    func: F,
}

impl<F> Gate<F> {
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<A: ?Sized, F> Action<A> for Gate<F>
where
    F: FnMut(&mut A) -> bool + Send + Sync,
{
    fn call(&mut self, args: &mut A) -> bool {
        (self.func)(args)
    }
}

/// Shorthand for [`Effect::new`].
pub fn effect<F>(func: F) -> Effect<F> {
    Effect::new(func)
}

/// Shorthand for [`Gate::new`].
pub fn gate<F>(func: F) -> Gate<F> {
    Gate::new(func)
}

// ---------------------------------------------------------------------------
// ChainConfig
// ---------------------------------------------------------------------------

/// Descriptive settings carried by a chain into its tracing spans.
///
/// The config never changes what a chain does when invoked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChainConfig {
    #[serde(default)]
    pub run_name: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub metadata: HashMap<String, Value>,
}

impl ChainConfig {
    pub fn with_run_name(mut self, name: impl Into<String>) -> Self {
        self.run_name = Some(name.into());
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// The run name, or `"anonymous"` when none was configured.
    pub fn display_name(&self) -> &str {
        self.run_name.as_deref().unwrap_or("anonymous")
    }
}

// ---------------------------------------------------------------------------
// RelayError
// ---------------------------------------------------------------------------

/// Recoverable errors raised by the Relay containers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    /// The object's dynamic type differs from the declared concrete type, so
    /// the automatic clone strategy could not reproduce it.
    #[error("dynamic and static type mismatch in polymorphic value construction: declared {declared}")]
    BadConstruction { declared: &'static str },
    #[error("polymorphic value is empty")]
    EmptyValue,
}
