use std::any::Any;
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use relay_core::{Action, ChainConfig};

use crate::block::ActionBlock;
use crate::sequence::Sequence;

/// A runtime-mutable, ordered list of type-erased actions that all accept
/// the argument pack `A`.
///
/// - Invocation calls every block once, in append order, on the same
///   arguments. Continuation signals are ignored; only the flow combinators
///   short-circuit.
/// - Cloning deep-copies every block, so a copy and its source never affect
///   each other.
/// - Anything implementing `Action<A> + Clone` can be appended, including
///   sequences, combinators and other chains. [`append`](Self::append) keeps
///   another chain as a single block; `|` and `|=` move its blocks in one by
///   one, and [`append_chain`](Self::append_chain) copies them.
pub struct DynamicChain<A: ?Sized + 'static> {
    blocks: Vec<ActionBlock<A>>,
    config: ChainConfig,
}

impl<A: ?Sized + 'static> DynamicChain<A> {
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            config: ChainConfig::default(),
        }
    }

    pub fn from_action<X>(action: X) -> Self
    where
        X: Action<A> + Clone + 'static,
    {
        let mut chain = Self::new();
        chain.append(action);
        chain
    }

    pub fn with_config(mut self, config: ChainConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    pub fn append<X>(&mut self, action: X) -> &mut Self
    where
        X: Action<A> + Clone + 'static,
    {
        self.blocks.push(ActionBlock::new(action));
        tracing::debug!(
            run_name = self.config.display_name(),
            blocks = self.blocks.len(),
            "appended action block"
        );
        self
    }

    /// Append copies of every block of `other`.
    pub fn append_chain(&mut self, other: &DynamicChain<A>) -> &mut Self {
        self.blocks.extend(other.blocks.iter().cloned());
        tracing::debug!(
            run_name = self.config.display_name(),
            blocks = self.blocks.len(),
            copied = other.blocks.len(),
            "appended chain"
        );
        self
    }

    /// Replace all blocks with `action`.
    pub fn assign<X>(&mut self, action: X) -> &mut Self
    where
        X: Action<A> + Clone + 'static,
    {
        self.clear();
        self.append(action)
    }

    /// Replace all blocks with copies of `other`'s blocks. The config is kept.
    pub fn assign_chain(&mut self, other: &DynamicChain<A>) -> &mut Self {
        self.clear();
        self.append_chain(other)
    }

    pub fn clear(&mut self) {
        self.blocks.clear();
        tracing::debug!(run_name = self.config.display_name(), "cleared chain");
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn blocks(&self) -> &[ActionBlock<A>] {
        &self.blocks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ActionBlock<A>> {
        self.blocks.iter()
    }

    /// Move the blocks of `action` in when it is itself a chain, otherwise
    /// append it as one block.
    fn splice<X>(&mut self, action: X)
    where
        X: Action<A> + Clone + 'static,
    {
        let mut slot = Some(action);
        let spliced = (&mut slot as &mut dyn Any)
            .downcast_mut::<Option<DynamicChain<A>>>()
            .and_then(Option::take);

        match spliced {
            Some(other) => {
                let moved = other.blocks.len();
                self.blocks.extend(other.blocks);
                tracing::debug!(
                    run_name = self.config.display_name(),
                    blocks = self.blocks.len(),
                    moved,
                    "spliced chain"
                );
            }
            None => {
                if let Some(action) = slot {
                    self.append(action);
                }
            }
        }
    }

    /// Run every block in order on `args`.
    pub fn invoke(&mut self, args: &mut A) {
        let span = tracing::trace_span!(
            "action_chain",
            run_name = self.config.display_name(),
            tags = ?self.config.tags,
            blocks = self.blocks.len()
        );
        let _entered = span.enter();

        for (index, block) in self.blocks.iter_mut().enumerate() {
            let proceed = block.invoke(args);
            tracing::trace!(index, action = block.type_name(), proceed, "action block finished");
        }
    }
}

impl<A: ?Sized + 'static> Default for DynamicChain<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ?Sized + 'static> Clone for DynamicChain<A> {
    fn clone(&self) -> Self {
        Self {
            blocks: self.blocks.clone(),
            config: self.config.clone(),
        }
    }
}

impl<A: ?Sized + 'static> fmt::Debug for DynamicChain<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicChain")
            .field("config", &self.config)
            .field("blocks", &self.blocks)
            .finish()
    }
}

impl<A: ?Sized + 'static> Action<A> for DynamicChain<A> {
    fn call(&mut self, args: &mut A) -> bool {
        self.invoke(args);
        true
    }
}

impl<A, L> From<Sequence<L>> for DynamicChain<A>
where
    A: ?Sized + 'static,
    Sequence<L>: Action<A> + Clone + 'static,
{
    fn from(sequence: Sequence<L>) -> Self {
        Self::from_action(sequence)
    }
}

impl<A: ?Sized + 'static> FromIterator<ActionBlock<A>> for DynamicChain<A> {
    fn from_iter<I: IntoIterator<Item = ActionBlock<A>>>(iter: I) -> Self {
        Self {
            blocks: iter.into_iter().collect(),
            config: ChainConfig::default(),
        }
    }
}

impl<A: ?Sized + 'static> Extend<ActionBlock<A>> for DynamicChain<A> {
    fn extend<I: IntoIterator<Item = ActionBlock<A>>>(&mut self, iter: I) {
        self.blocks.extend(iter);
    }
}

impl<'a, A: ?Sized + 'static> IntoIterator for &'a DynamicChain<A> {
    type Item = &'a ActionBlock<A>;
    type IntoIter = std::slice::Iter<'a, ActionBlock<A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

/// `chain | action` appends and returns the chain. A right-hand chain is
/// spliced in block by block instead of becoming one nested block.
impl<A, X> BitOr<X> for DynamicChain<A>
where
    A: ?Sized + 'static,
    X: Action<A> + Clone + 'static,
{
    type Output = DynamicChain<A>;

    fn bitor(mut self, rhs: X) -> DynamicChain<A> {
        self.splice(rhs);
        self
    }
}

impl<A, X> BitOrAssign<X> for DynamicChain<A>
where
    A: ?Sized + 'static,
    X: Action<A> + Clone + 'static,
{
    fn bitor_assign(&mut self, rhs: X) {
        self.splice(rhs);
    }
}

/// `&lhs | &rhs` builds a new chain holding copies of both operands' blocks,
/// left to right, without touching either. The left operand's config is kept.
impl<A: ?Sized + 'static> BitOr<&DynamicChain<A>> for &DynamicChain<A> {
    type Output = DynamicChain<A>;

    fn bitor(self, rhs: &DynamicChain<A>) -> DynamicChain<A> {
        let mut output = self.clone();
        output.append_chain(rhs);
        output
    }
}
