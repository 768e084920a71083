use std::fmt;

use relay_core::Action;
use relay_polymorphic::PolymorphicValue;

/// One type-erased action accepting the argument pack `A`.
///
/// Built once from a concrete action; cloning the block deep-copies the
/// action through the behavior table captured at construction.
pub struct ActionBlock<A: ?Sized + 'static> {
    action: PolymorphicValue<dyn Action<A>>,
}

impl<A: ?Sized + 'static> ActionBlock<A> {
    pub fn new<X>(action: X) -> Self
    where
        X: Action<A> + Clone + 'static,
    {
        Self {
            action: PolymorphicValue::from_concrete(action, erase::<A, X>, erase_mut::<A, X>),
        }
    }

    /// Run the held action and return its continuation signal.
    pub fn invoke(&mut self, args: &mut A) -> bool {
        self.action.call(args)
    }

    pub fn type_name(&self) -> &'static str {
        self.action.concrete_type_name().unwrap_or("<empty>")
    }

    pub fn is<X: 'static>(&self) -> bool {
        self.action.is::<X>()
    }

    pub fn downcast_ref<X: 'static>(&self) -> Option<&X> {
        self.action.downcast_ref::<X>()
    }

    pub fn downcast_mut<X: 'static>(&mut self) -> Option<&mut X> {
        self.action.downcast_mut::<X>()
    }
}

fn erase<A, X>(action: &X) -> &(dyn Action<A> + 'static)
where
    A: ?Sized + 'static,
    X: Action<A> + 'static,
{
    action
}

fn erase_mut<A, X>(action: &mut X) -> &mut (dyn Action<A> + 'static)
where
    A: ?Sized + 'static,
    X: Action<A> + 'static,
{
    action
}

impl<A: ?Sized + 'static> Clone for ActionBlock<A> {
    fn clone(&self) -> Self {
        Self {
            action: self.action.clone(),
        }
    }
}

impl<A: ?Sized + 'static> Action<A> for ActionBlock<A> {
    fn call(&mut self, args: &mut A) -> bool {
        self.invoke(args)
    }
}

impl<A: ?Sized + 'static> fmt::Debug for ActionBlock<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ActionBlock").field(&self.type_name()).finish()
    }
}
