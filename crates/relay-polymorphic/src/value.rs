use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::ops::{Deref, DerefMut};

use relay_core::RelayError;

use crate::control_block::{ControlBlock, CopierBlock, DelegatingBlock, DirectBlock};

/// Owns zero or one object of an unknown concrete type behind the interface
/// `T`, with value semantics.
///
/// - `clone()` deep-copies the held object using the copy behavior of its
///   concrete type (or a custom copier), never a method of `T`.
/// - Moving transfers ownership; [`take`](Self::take) leaves the source empty.
/// - Dereferencing an empty value panics; use [`get`](Self::get) or
///   [`try_get`](Self::try_get) when emptiness is expected.
///
/// The `view`/`view_mut` projections passed to the constructors turn a
/// reference to the concrete type into a reference to the interface. For a
/// trait object interface they are plain coercions (`|v| v`), which the
/// [`polymorphic!`](crate::polymorphic) macro fills in.
pub struct PolymorphicValue<T: ?Sized + 'static> {
    block: Option<Box<dyn ControlBlock<T>>>,
}

impl<T: ?Sized + 'static> PolymorphicValue<T> {
    /// A value holding nothing.
    pub fn empty() -> Self {
        Self { block: None }
    }

    /// Store `value` behind the interface `T`, cloning it with `U::clone`.
    pub fn from_concrete<U>(value: U, view: fn(&U) -> &T, view_mut: fn(&mut U) -> &mut T) -> Self
    where
        U: Clone + Send + Sync + 'static,
    {
        Self {
            block: Some(Box::new(DirectBlock {
                value,
                view,
                view_mut,
            })),
        }
    }

    /// Take ownership of a boxed object.
    pub fn from_box<U>(value: Box<U>, view: fn(&U) -> &T, view_mut: fn(&mut U) -> &mut T) -> Self
    where
        U: Clone + Send + Sync + 'static,
    {
        Self::from_concrete(*value, view, view_mut)
    }

    /// Take ownership of a boxed object that is copied with `copier` instead
    /// of `Clone`. The concrete type does not need to implement `Clone`.
    pub fn with_copier<U, C>(
        value: Box<U>,
        copier: C,
        view: fn(&U) -> &T,
        view_mut: fn(&mut U) -> &mut T,
    ) -> Self
    where
        U: Send + Sync + 'static,
        C: Fn(&U) -> U + Clone + Send + Sync + 'static,
    {
        Self {
            block: Some(Box::new(CopierBlock {
                value,
                copier,
                view,
                view_mut,
            })),
        }
    }

    /// Build the object with `make` directly into a new value.
    pub fn in_place<U, F>(make: F, view: fn(&U) -> &T, view_mut: fn(&mut U) -> &mut T) -> Self
    where
        U: Clone + Send + Sync + 'static,
        F: FnOnce() -> U,
    {
        Self::from_concrete(make(), view, view_mut)
    }

    /// Take ownership of an already type-erased object declared to be a `U`.
    ///
    /// Fails with [`RelayError::BadConstruction`] when the object's dynamic
    /// type is not `U`, because `U::clone` could not reproduce it.
    ///
    /// Name the interface type on the call; the projections alone would
    /// make it default to `U`.
    ///
    /// ```
    /// use std::any::Any;
    ///
    /// use relay_core::RelayError;
    /// use relay_polymorphic::PolymorphicValue;
    ///
    /// trait Shape: Send + Sync { fn area(&self) -> f64; }
    ///
    /// #[derive(Clone)]
    /// struct Square(f64);
    /// impl Shape for Square { fn area(&self) -> f64 { self.0 * self.0 } }
    ///
    /// #[derive(Clone)]
    /// struct Circle(f64);
    ///
    /// let erased: Box<dyn Any + Send + Sync> = Box::new(Square(3.0));
    /// let shape = PolymorphicValue::<dyn Shape>::try_from_any::<Square>(erased, |v| v, |v| v)?;
    /// assert_eq!(shape.area(), 9.0);
    ///
    /// let erased: Box<dyn Any + Send + Sync> = Box::new(Circle(1.0));
    /// let rejected = PolymorphicValue::<dyn Shape>::try_from_any::<Square>(erased, |v| v, |v| v);
    /// assert!(matches!(rejected, Err(RelayError::BadConstruction { .. })));
    /// # Ok::<(), RelayError>(())
    /// ```
    pub fn try_from_any<U>(
        value: Box<dyn Any + Send + Sync>,
        view: fn(&U) -> &T,
        view_mut: fn(&mut U) -> &mut T,
    ) -> Result<Self, RelayError>
    where
        U: Clone + Send + Sync + 'static,
    {
        match value.downcast::<U>() {
            Ok(concrete) => Ok(Self::from_box(concrete, view, view_mut)),
            Err(_) => {
                let declared = type_name::<U>();
                tracing::debug!(declared, "rejected polymorphic value construction");
                Err(RelayError::BadConstruction { declared })
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.block.is_none()
    }

    pub fn get(&self) -> Option<&T> {
        self.block.as_deref().map(|block| block.get())
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.block.as_deref_mut().map(|block| block.get_mut())
    }

    pub fn try_get(&self) -> Result<&T, RelayError> {
        self.get().ok_or(RelayError::EmptyValue)
    }

    pub fn try_get_mut(&mut self) -> Result<&mut T, RelayError> {
        self.get_mut().ok_or(RelayError::EmptyValue)
    }

    /// The held object, or `default` when empty.
    pub fn value_or<'a>(&'a self, default: &'a T) -> &'a T {
        self.get().unwrap_or(default)
    }

    /// Identity of the concrete type, `None` when empty.
    pub fn concrete_type_id(&self) -> Option<TypeId> {
        self.block.as_ref().map(|block| block.held_type_id())
    }

    /// Name of the concrete type, `None` when empty.
    pub fn concrete_type_name(&self) -> Option<&'static str> {
        self.block.as_ref().map(|block| block.held_type_name())
    }

    /// Whether the held object is a `U`.
    pub fn is<U: 'static>(&self) -> bool {
        self.concrete_type_id() == Some(TypeId::of::<U>())
    }

    /// The held object as its concrete type, `None` if it is not a `U`.
    pub fn downcast_ref<U: 'static>(&self) -> Option<&U> {
        self.block.as_ref()?.as_any().downcast_ref::<U>()
    }

    pub fn downcast_mut<U: 'static>(&mut self) -> Option<&mut U> {
        self.block.as_mut()?.as_any_mut().downcast_mut::<U>()
    }

    /// Move the content out, leaving this value empty.
    pub fn take(&mut self) -> Self {
        Self {
            block: self.block.take(),
        }
    }

    /// Release the held object.
    pub fn reset(&mut self) {
        self.block = None;
    }

    /// Install `other` and return the previous content.
    pub fn replace(&mut self, other: Self) -> Self {
        std::mem::replace(self, other)
    }

    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.block, &mut other.block);
    }

    /// Convert into a value of a related interface that keeps owning the
    /// same object. No copy is made; the source is consumed.
    ///
    /// ```
    /// use relay_polymorphic::{polymorphic, PolymorphicValue};
    ///
    /// trait Named: Send + Sync { fn name(&self) -> String; }
    /// trait Greeter: Named { fn greet(&self) -> String { format!("hi {}", self.name()) } }
    ///
    /// #[derive(Clone)]
    /// struct Ada;
    /// impl Named for Ada { fn name(&self) -> String { "ada".into() } }
    /// impl Greeter for Ada {}
    ///
    /// let greeter: PolymorphicValue<dyn Greeter> = polymorphic!(Ada => dyn Greeter);
    /// let named: PolymorphicValue<dyn Named> = greeter.into_view::<dyn Named>(|v| v, |v| v);
    /// assert_eq!(named.name(), "ada");
    /// assert!(named.is::<Ada>());
    /// ```
    pub fn into_view<S: ?Sized + 'static>(
        self,
        view: fn(&T) -> &S,
        view_mut: fn(&mut T) -> &mut S,
    ) -> PolymorphicValue<S> {
        PolymorphicValue {
            block: self.block.map(|delegate| {
                Box::new(DelegatingBlock {
                    delegate,
                    view,
                    view_mut,
                }) as Box<dyn ControlBlock<S>>
            }),
        }
    }

    /// Like [`into_view`](Self::into_view) but on a deep copy, leaving this
    /// value untouched.
    pub fn to_view<S: ?Sized + 'static>(
        &self,
        view: fn(&T) -> &S,
        view_mut: fn(&mut T) -> &mut S,
    ) -> PolymorphicValue<S> {
        self.clone().into_view(view, view_mut)
    }

    /// Borrow the held object through a related interface.
    pub fn view_as<S: ?Sized>(&self, view: fn(&T) -> &S) -> Option<&S> {
        self.get().map(view)
    }
}

impl<T: Clone + Send + Sync + 'static> PolymorphicValue<T> {
    /// Store a value of the interface type itself.
    pub fn new(value: T) -> Self {
        Self::from_concrete(value, identity, identity_mut)
    }
}

fn identity<T>(value: &T) -> &T {
    value
}

fn identity_mut<T>(value: &mut T) -> &mut T {
    value
}

impl<T: ?Sized + 'static> Default for PolymorphicValue<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: ?Sized + 'static> Clone for PolymorphicValue<T> {
    fn clone(&self) -> Self {
        Self {
            block: self.block.as_ref().map(|block| block.clone_block()),
        }
    }
}

impl<T: ?Sized + 'static> Deref for PolymorphicValue<T> {
    type Target = T;

    fn deref(&self) -> &T {
        match &self.block {
            Some(block) => block.get(),
            None => panic!("dereferenced an empty PolymorphicValue<{}>", type_name::<T>()),
        }
    }
}

impl<T: ?Sized + 'static> DerefMut for PolymorphicValue<T> {
    fn deref_mut(&mut self) -> &mut T {
        match &mut self.block {
            Some(block) => block.get_mut(),
            None => panic!("dereferenced an empty PolymorphicValue<{}>", type_name::<T>()),
        }
    }
}

impl<T: ?Sized + PartialEq + 'static> PartialEq for PolymorphicValue<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.get(), other.get()) {
            (None, None) => true,
            (Some(lhs), Some(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}

/// Compares the held object with a plain value; an empty container is
/// never equal to one.
impl<T: PartialEq + 'static> PartialEq<T> for PolymorphicValue<T> {
    fn eq(&self, other: &T) -> bool {
        self.get().is_some_and(|held| held == other)
    }
}

impl<T: ?Sized + 'static> fmt::Debug for PolymorphicValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.concrete_type_name() {
            Some(name) => f.debug_tuple("PolymorphicValue").field(&name).finish(),
            None => f.write_str("PolymorphicValue(<empty>)"),
        }
    }
}
