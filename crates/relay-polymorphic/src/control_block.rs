use std::any::{type_name, Any, TypeId};

/// Behavior table bound to one concrete type at construction time.
pub(crate) trait ControlBlock<T: ?Sized + 'static>: Send + Sync {
    fn clone_block(&self) -> Box<dyn ControlBlock<T>>;
    fn get(&self) -> &T;
    fn get_mut(&mut self) -> &mut T;
    fn held_type_id(&self) -> TypeId;
    fn held_type_name(&self) -> &'static str;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Holds the object inline and copies it with its own `Clone`.
pub(crate) struct DirectBlock<T: ?Sized, U> {
    pub(crate) value: U,
    pub(crate) view: fn(&U) -> &T,
    pub(crate) view_mut: fn(&mut U) -> &mut T,
}

impl<T, U> ControlBlock<T> for DirectBlock<T, U>
where
    T: ?Sized + 'static,
    U: Clone + Send + Sync + 'static,
{
    fn clone_block(&self) -> Box<dyn ControlBlock<T>> {
        Box::new(DirectBlock {
            value: self.value.clone(),
            view: self.view,
            view_mut: self.view_mut,
        })
    }

    fn get(&self) -> &T {
        (self.view)(&self.value)
    }

    fn get_mut(&mut self) -> &mut T {
        (self.view_mut)(&mut self.value)
    }

    fn held_type_id(&self) -> TypeId {
        TypeId::of::<U>()
    }

    fn held_type_name(&self) -> &'static str {
        type_name::<U>()
    }

    fn as_any(&self) -> &dyn Any {
        &self.value
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        &mut self.value
    }
}

/// Holds a boxed object and copies it with a caller-supplied strategy.
pub(crate) struct CopierBlock<T: ?Sized, U, C> {
    pub(crate) value: Box<U>,
    pub(crate) copier: C,
    pub(crate) view: fn(&U) -> &T,
    pub(crate) view_mut: fn(&mut U) -> &mut T,
}

impl<T, U, C> ControlBlock<T> for CopierBlock<T, U, C>
where
    T: ?Sized + 'static,
    U: Send + Sync + 'static,
    C: Fn(&U) -> U + Clone + Send + Sync + 'static,
{
    fn clone_block(&self) -> Box<dyn ControlBlock<T>> {
        Box::new(CopierBlock {
            value: Box::new((self.copier)(&self.value)),
            copier: self.copier.clone(),
            view: self.view,
            view_mut: self.view_mut,
        })
    }

    fn get(&self) -> &T {
        (self.view)(&self.value)
    }

    fn get_mut(&mut self) -> &mut T {
        (self.view_mut)(&mut self.value)
    }

    fn held_type_id(&self) -> TypeId {
        TypeId::of::<U>()
    }

    fn held_type_name(&self) -> &'static str {
        type_name::<U>()
    }

    fn as_any(&self) -> &dyn Any {
        &*self.value
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        &mut *self.value
    }
}

/// Presents another value's object through a related interface without
/// copying it. Type queries answer for the underlying concrete object.
pub(crate) struct DelegatingBlock<T: ?Sized + 'static, S: ?Sized + 'static> {
    pub(crate) delegate: Box<dyn ControlBlock<S>>,
    pub(crate) view: fn(&S) -> &T,
    pub(crate) view_mut: fn(&mut S) -> &mut T,
}

impl<T, S> ControlBlock<T> for DelegatingBlock<T, S>
where
    T: ?Sized + 'static,
    S: ?Sized + 'static,
{
    fn clone_block(&self) -> Box<dyn ControlBlock<T>> {
        Box::new(DelegatingBlock {
            delegate: self.delegate.clone_block(),
            view: self.view,
            view_mut: self.view_mut,
        })
    }

    fn get(&self) -> &T {
        (self.view)(self.delegate.get())
    }

    fn get_mut(&mut self) -> &mut T {
        (self.view_mut)(self.delegate.get_mut())
    }

    fn held_type_id(&self) -> TypeId {
        self.delegate.held_type_id()
    }

    fn held_type_name(&self) -> &'static str {
        self.delegate.held_type_name()
    }

    fn as_any(&self) -> &dyn Any {
        self.delegate.as_any()
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self.delegate.as_any_mut()
    }
}
