//! Block data (instructions, predecessors, arguments).

use crate::entity::{Block, BlockArg, Inst};

/// Block data
///
/// A block owns the order of its instructions; the instructions themselves
/// live in the DFG. Predecessors are non-owning back references kept only
/// for display and verification, in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct BlockData {
    /// Instructions in definition order
    pub insts: Vec<Inst>,
    /// Predecessor blocks (a set; insertion order is kept, duplicates are not)
    pub preds: Vec<Block>,
    /// Block-entry arguments, in order
    pub args: Vec<BlockArg>,
}

impl BlockData {
    /// Create a new empty block
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `pred` as a predecessor. Returns false if it already was one.
    pub fn add_pred(&mut self, pred: Block) -> bool {
        if self.preds.contains(&pred) {
            return false;
        }
        self.preds.push(pred);
        true
    }

    /// Get the number of instructions in this block
    pub fn inst_count(&self) -> usize {
        self.insts.len()
    }

    /// Last instruction in the block, if any
    pub fn last_inst(&self) -> Option<Inst> {
        self.insts.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_data_new() {
        let data = BlockData::new();
        assert_eq!(data.inst_count(), 0);
        assert!(data.preds.is_empty());
        assert_eq!(data.last_inst(), None);
    }

    #[test]
    fn test_block_preds_are_a_set() {
        let mut data = BlockData::new();
        assert!(data.add_pred(Block::new(3)));
        assert!(data.add_pred(Block::new(1)));
        assert!(!data.add_pred(Block::new(3)));
        assert_eq!(data.preds, vec![Block::new(3), Block::new(1)]);
    }
}
