//! Combinators that build new actions out of existing ones.
//!
//! Both combinators follow the continuation protocol of
//! [`Action`](relay_core::Action), so their results can be stored in
//! sequences and chains like any other action.
//!
//! - [`If`] evaluates a predicate and runs a then-action, or an optional
//!   else-action.
//! - [`Try`] runs a primary action and falls back to the next one only when
//!   the primary reports failure.
//!
//! ```
//! use relay_core::{effect, Action};
//! use relay_flow::If;
//!
//! let mut halve_or_double = If::new(|a: &mut i32| *a > 5)
//!     .then(effect(|a: &mut i32| *a *= 2))
//!     .otherwise(effect(|a: &mut i32| *a /= 2));
//!
//! let mut a = 10;
//! halve_or_double.call(&mut a);
//! assert_eq!(a, 20);
//!
//! let mut a = 4;
//! halve_or_double.call(&mut a);
//! assert_eq!(a, 2);
//! ```

mod branch;
mod fallback;

pub use branch::{If, IfThen, IfThenElse};
pub use fallback::{Try, TryFallback};
