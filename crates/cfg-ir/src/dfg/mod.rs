//! Data Flow Graph (instruction and block-argument data).

use crate::{
    entity::{Block, BlockArg, Inst},
    entity_map::PrimaryMap,
    types::Type,
};

pub mod inst_data;
pub mod opcode;

pub use inst_data::InstData;
pub use opcode::Opcode;

/// An instruction slot: its data and the block it is laid out in.
#[derive(Debug, Clone)]
pub struct InstNode {
    /// What the instruction does
    pub data: InstData,
    /// Containing block, or `None` while the instruction is detached
    pub block: Option<Block>,
}

/// A block-entry argument: its owning block and type.
#[derive(Debug, Clone)]
pub struct BlockArgData {
    /// Block the argument belongs to
    pub block: Block,
    /// Argument type
    pub ty: Type,
}

/// Data Flow Graph - stores instruction and block argument data
///
/// The DFG stores what instructions do, separate from where they appear in
/// the layout. Arena order here is allocation order and says nothing about
/// definition order.
#[derive(Debug, Clone, Default)]
pub struct DFG {
    /// Instruction data
    pub insts: PrimaryMap<Inst, InstNode>,
    /// Block-entry arguments
    pub block_args: PrimaryMap<BlockArg, BlockArgData>,
}

impl DFG {
    /// Create a new empty DFG
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detached instruction and return its entity
    pub fn create_inst(&mut self, data: InstData) -> Inst {
        self.insts.push(InstNode { data, block: None })
    }

    /// Create a block argument owned by `block`
    pub fn create_block_arg(&mut self, block: Block, ty: Type) -> BlockArg {
        self.block_args.push(BlockArgData { block, ty })
    }

    /// Get instruction data
    pub fn inst_data(&self, inst: Inst) -> Option<&InstData> {
        self.insts.get(inst).map(|node| &node.data)
    }

    /// Get mutable instruction data
    pub fn inst_data_mut(&mut self, inst: Inst) -> Option<&mut InstData> {
        self.insts.get_mut(inst).map(|node| &mut node.data)
    }

    /// Get the block an instruction is laid out in
    pub fn inst_block(&self, inst: Inst) -> Option<Block> {
        self.insts.get(inst).and_then(|node| node.block)
    }

    /// Get block argument data
    pub fn block_arg_data(&self, arg: BlockArg) -> Option<&BlockArgData> {
        self.block_args.get(arg)
    }
}
