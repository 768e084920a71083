//! Ordered chains of actions that run in place on a shared argument pack.
//!
//! - [`Sequence`] is built at compile time with `start() | a | b`. Its type
//!   records every step, so there is no indirection between steps, and it can
//!   be invoked with any argument pack all of its steps accept.
//! - [`DynamicChain`] stores type-erased [`ActionBlock`]s for one argument
//!   pack. It can be grown, cleared and reassigned at runtime, and cloning it
//!   deep-copies every action.
//!
//! ```
//! use relay_chain::{start, DynamicChain};
//! use relay_core::effect;
//!
//! let mut chain: DynamicChain<(i32, i32)> = DynamicChain::new();
//! chain |= effect(|(a, b): &mut (i32, i32)| {
//!     *a = 1;
//!     *b = 2;
//! });
//! chain |= start() | effect(|(a, _): &mut (i32, i32)| *a *= 2)
//!     | effect(|(_, b): &mut (i32, i32)| *b *= 2);
//!
//! let mut args = (0, 0);
//! chain.invoke(&mut args);
//! assert_eq!(args, (2, 4));
//! ```
//!
//! Attaching an action that does not accept the chain's argument pack is a
//! build failure:
//!
//! ```compile_fail
//! use relay_chain::DynamicChain;
//! use relay_core::effect;
//!
//! let mut chain: DynamicChain<(i32, String)> = DynamicChain::new();
//! chain.append(effect(|(a, b): &mut (i32, i32)| *a += *b));
//! ```

mod block;
mod chain;
mod sequence;

pub use block::ActionBlock;
pub use chain::DynamicChain;
pub use sequence::{start, Concat, Cons, Nil, Sequence, StepList};
