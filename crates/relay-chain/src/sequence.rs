use std::ops::BitOr;

use relay_core::Action;

/// The empty step list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nil;

/// A step list made of the steps in `Prev` followed by `Last`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cons<Prev, Last> {
    prev: Prev,
    last: Last,
}

/// Type-level step count.
pub trait StepList {
    const LEN: usize;
}

impl StepList for Nil {
    const LEN: usize = 0;
}

impl<P: StepList, X> StepList for Cons<P, X> {
    const LEN: usize = P::LEN + 1;
}

/// Flat concatenation of two step lists.
pub trait Concat<Rhs> {
    type Output;

    fn concat(self, rhs: Rhs) -> Self::Output;
}

impl<L> Concat<Nil> for L {
    type Output = L;

    fn concat(self, _rhs: Nil) -> L {
        self
    }
}

impl<L, P, X> Concat<Cons<P, X>> for L
where
    L: Concat<P>,
{
    type Output = Cons<<L as Concat<P>>::Output, X>;

    fn concat(self, rhs: Cons<P, X>) -> Self::Output {
        Cons {
            prev: <L as Concat<P>>::concat(self, rhs.prev),
            last: rhs.last,
        }
    }
}

impl<A: ?Sized> Action<A> for Nil {
    fn call(&mut self, _args: &mut A) -> bool {
        true
    }
}

impl<A, P, X> Action<A> for Cons<P, X>
where
    A: ?Sized,
    P: Action<A>,
    X: Action<A>,
{
    fn call(&mut self, args: &mut A) -> bool {
        self.prev.call(args);
        self.last.call(args);
        true
    }
}

/// A compile-time ordered list of actions.
///
/// Composition with `|` is pure: it consumes the sequence and returns a new
/// one with the action appended, so clone a sequence first to reuse it as a
/// prefix. Invocation runs every step in order on the same arguments and
/// ignores the steps' continuation signals.
///
/// A sequence can be invoked with any argument pack that every step accepts:
///
/// ```
/// use relay_chain::start;
/// use relay_core::effect;
///
/// let increment_first = effect(|(x, _): &mut (i32, i32)| *x += 1);
/// let double_second = effect(|(_, y): &mut (i32, i32)| *y *= 2);
///
/// let mut sequence = start() | increment_first | double_second;
/// let mut args = (3, 5);
/// sequence.invoke(&mut args);
/// assert_eq!(args, (4, 10));
/// ```
///
/// ```compile_fail
/// use relay_chain::start;
/// use relay_core::effect;
///
/// let mut sequence = start() | effect(|x: &mut i32| *x += 1);
/// sequence.invoke(&mut String::new());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Sequence<L = Nil> {
    steps: L,
}

/// The empty sequence every composition starts from.
pub fn start() -> Sequence {
    Sequence::new()
}

impl Sequence {
    pub const fn new() -> Self {
        Sequence { steps: Nil }
    }
}

impl<L> Sequence<L> {
    /// Append one action. Same as `self | action`.
    pub fn then<X>(self, action: X) -> Sequence<Cons<L, X>> {
        Sequence {
            steps: Cons {
                prev: self.steps,
                last: action,
            },
        }
    }

    /// Append every step of `other`, keeping the result flat.
    pub fn concat<R>(self, other: Sequence<R>) -> Sequence<<L as Concat<R>>::Output>
    where
        L: Concat<R>,
    {
        Sequence {
            steps: <L as Concat<R>>::concat(self.steps, other.steps),
        }
    }

    /// Number of top-level steps.
    pub fn len(&self) -> usize
    where
        L: StepList,
    {
        L::LEN
    }

    pub fn is_empty(&self) -> bool
    where
        L: StepList,
    {
        L::LEN == 0
    }

    /// Run every step in order on `args`.
    pub fn invoke<A: ?Sized>(&mut self, args: &mut A)
    where
        L: Action<A>,
    {
        self.steps.call(args);
    }
}

impl<L, X> BitOr<X> for Sequence<L> {
    type Output = Sequence<Cons<L, X>>;

    fn bitor(self, rhs: X) -> Self::Output {
        self.then(rhs)
    }
}

impl<A: ?Sized, L: Action<A>> Action<A> for Sequence<L> {
    fn call(&mut self, args: &mut A) -> bool {
        self.steps.call(args);
        true
    }
}
