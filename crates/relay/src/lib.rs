//! Relay: chain-of-responsibility action pipelines.
//!
//! This crate re-exports the Relay sub-crates for single-import usage.
//!
//! # Quick Start
//!
//! ```
//! use relay::prelude::*;
//!
//! let mut chain: DynamicChain<(i32, i32)> = DynamicChain::new();
//! chain |= start() | effect(|(a, _): &mut (i32, i32)| *a += 1);
//! chain |= If::new(|(a, _): &mut (i32, i32)| *a > 5)
//!     .then(effect(|(_, b): &mut (i32, i32)| *b = 1))
//!     .otherwise(effect(|(_, b): &mut (i32, i32)| *b = -1));
//!
//! let mut args = (5, 0);
//! chain.invoke(&mut args);
//! assert_eq!(args, (6, 1));
//! ```

/// Core types: Action, Effect, Gate, ChainConfig, RelayError.
pub use relay_core as core;

/// Value-semantic type-erased container: PolymorphicValue and the `polymorphic!` macro.
#[cfg(feature = "polymorphic")]
pub use relay_polymorphic as polymorphic;

/// Action chains: ActionBlock, Sequence (with `start()` and the pipe operator), DynamicChain.
#[cfg(feature = "chain")]
pub use relay_chain as chain;

/// Control-flow combinators: If/Then/Else and Try/Fallback.
#[cfg(feature = "flow")]
pub use relay_flow as flow;

/// The commonly used names of every enabled sub-crate.
pub mod prelude {
    pub use relay_core::{effect, gate, Action, ChainConfig, Effect, Gate, RelayError};

    #[cfg(feature = "polymorphic")]
    pub use relay_polymorphic::{polymorphic, PolymorphicValue};

    #[cfg(feature = "chain")]
    pub use relay_chain::{start, ActionBlock, DynamicChain, Sequence};

    #[cfg(feature = "flow")]
    pub use relay_flow::{If, IfThen, IfThenElse, Try, TryFallback};
}
