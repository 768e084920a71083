//! Value-semantic type erasure.
//!
//! [`PolymorphicValue<T>`] owns one object of an unknown concrete type behind
//! the interface `T` (usually a trait object such as `dyn Shape`). Cloning the
//! value deep-copies the held object through a behavior table captured from
//! the concrete type when the value was built, so the interface itself never
//! needs a cloning method.
//!
//! ```
//! use relay_polymorphic::{polymorphic, PolymorphicValue};
//!
//! trait Shape: Send + Sync {
//!     fn area(&self) -> f64;
//!     fn scale(&mut self, factor: f64);
//! }
//!
//! #[derive(Clone)]
//! struct Square(f64);
//!
//! impl Shape for Square {
//!     fn area(&self) -> f64 { self.0 * self.0 }
//!     fn scale(&mut self, factor: f64) { self.0 *= factor; }
//! }
//!
//! let original: PolymorphicValue<dyn Shape> = polymorphic!(Square(2.0) => dyn Shape);
//! let mut copy = original.clone();
//! copy.scale(2.0);
//!
//! assert_eq!(original.area(), 4.0);
//! assert_eq!(copy.area(), 16.0);
//! assert!(copy.is::<Square>());
//! ```

mod control_block;
mod value;

pub use value::PolymorphicValue;

/// Build a [`PolymorphicValue`] holding `value` behind the interface type.
///
/// `polymorphic!(Square(2.0) => dyn Shape)` expands to
/// `PolymorphicValue::<dyn Shape>::from_concrete(Square(2.0), |v| v, |v| v)`;
/// the projections are plain unsizing coercions.
#[macro_export]
macro_rules! polymorphic {
    ($value:expr => $interface:ty) => {
        $crate::PolymorphicValue::<$interface>::from_concrete($value, |v| v, |v| v)
    };
}
