//! Printable identifiers and the per-session registry that assigns them.

use core::fmt;
use std::cell::OnceCell;

use crate::{
    entity::{Block, BlockArg, Inst},
    entity_map::SecondaryMap,
    graph::Graph,
    value::Value,
};

/// What an [`Id`] names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdKind {
    /// A basic block, printed `bb<n>`
    Block,
    /// A value, printed `%<n>`
    Value,
}

/// A short printable handle for a block or value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id {
    /// Block or value
    pub kind: IdKind,
    /// Zero-based sequence number within the render session
    pub number: u32,
}

impl Id {
    /// Number given to values that cannot be resolved yet (block arguments).
    pub const UNRESOLVED: u32 = u32::MAX;

    /// A block identifier.
    pub fn block(number: u32) -> Self {
        Self {
            kind: IdKind::Block,
            number,
        }
    }

    /// A value identifier.
    pub fn value(number: u32) -> Self {
        Self {
            kind: IdKind::Value,
            number,
        }
    }

    /// Check if this is a real sequence number rather than the placeholder.
    pub fn is_resolved(&self) -> bool {
        self.number != Self::UNRESOLVED
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            IdKind::Block => write!(f, "bb{}", self.number),
            IdKind::Value => write!(f, "%{}", self.number),
        }
    }
}

/// Assigns identifiers for one render session.
///
/// Block numbers follow layout order. Value numbers follow layout order of
/// blocks, then definition order of instructions within each block. Each
/// numbering is computed in a single pass the first time an identifier of
/// that kind is requested, then served from a cache.
///
/// The registry borrows the graph it numbers, so it cannot be reused for a
/// different graph. It is not `Sync`: threads rendering the same graph
/// concurrently each need their own registry.
#[derive(Debug)]
pub struct IdRegistry<'g> {
    graph: &'g Graph,
    block_ids: OnceCell<SecondaryMap<Block, u32>>,
    inst_ids: OnceCell<SecondaryMap<Inst, u32>>,
}

impl<'g> IdRegistry<'g> {
    /// Create an empty registry for `graph`. No numbering happens until the
    /// first lookup.
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            block_ids: OnceCell::new(),
            inst_ids: OnceCell::new(),
        }
    }

    /// The graph this registry numbers.
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Identifier of a block.
    ///
    /// # Panics
    ///
    /// Panics if `block` is not laid out in this registry's graph.
    pub fn block_id(&self, block: Block) -> Id {
        let ids = self.block_ids.get_or_init(|| {
            let mut ids = SecondaryMap::with_capacity(self.graph.blocks.len());
            let mut count = 0u32;
            for b in self.graph.blocks() {
                ids.insert(b, count);
                count += 1;
            }
            tracing::trace!(blocks = count, "numbered blocks");
            ids
        });
        match ids.get(block) {
            Some(&number) => Id::block(number),
            None => panic!("{} is not laid out in the printed graph", block),
        }
    }

    /// Identifier of an instruction's result.
    ///
    /// # Panics
    ///
    /// Panics if `inst` is not in a block laid out in this registry's graph.
    pub fn inst_id(&self, inst: Inst) -> Id {
        let ids = self.inst_ids.get_or_init(|| {
            let mut ids = SecondaryMap::with_capacity(self.graph.dfg.insts.len());
            let mut count = 0u32;
            for block in self.graph.blocks() {
                for i in self.graph.block_insts(block) {
                    ids.insert(i, count);
                    count += 1;
                }
            }
            tracing::trace!(values = count, "numbered instructions");
            ids
        });
        match ids.get(inst) {
            Some(&number) => Id::value(number),
            None => panic!("{} is not laid out in the printed graph", inst),
        }
    }

    /// Identifier of a block argument.
    ///
    /// Block arguments are not numbered yet; every one gets the
    /// [`Id::UNRESOLVED`] placeholder.
    pub fn block_arg_id(&self, _arg: BlockArg) -> Id {
        Id::value(Id::UNRESOLVED)
    }

    /// Identifier of any value reference.
    pub fn value_id(&self, value: Value) -> Id {
        match value {
            Value::Inst(inst) => self.inst_id(inst),
            Value::BlockArg(arg) => self.block_arg_id(arg),
        }
    }

    /// Check whether the block numbering pass has run.
    pub fn has_block_ids(&self) -> bool {
        self.block_ids.get().is_some()
    }

    /// Check whether the value numbering pass has run.
    pub fn has_value_ids(&self) -> bool {
        self.inst_ids.get().is_some()
    }
}
