//! Function bodies as control-flow graphs.

use core::fmt;
use std::io::{self, Write as _};

use crate::{
    block::BlockData,
    dfg::{BlockArgData, InstData, DFG},
    entity::{Block, BlockArg, Inst},
    entity_map::PrimaryMap,
    printer::{IdRegistry, Printer},
    types::Type,
};

/// The control-flow graph of one function body
///
/// A graph consists of:
/// - Block data (instructions, predecessors, arguments of each block)
/// - Layout (the order blocks appear in)
/// - DFG (what instructions and block arguments are)
///
/// The graph is the sole owner of all IR storage. Every cross reference is an
/// entity index into one of its arenas.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Block data (what blocks are)
    pub blocks: PrimaryMap<Block, BlockData>,
    /// Data Flow Graph (what instructions are)
    pub dfg: DFG,
    /// Blocks in layout order
    layout: Vec<Block>,
}

impl Graph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Block operations
    // ========================================================================

    /// Create a new block and return its entity
    ///
    /// The block is not laid out yet. Use `append_block`, `insert_block` or
    /// `insert_block_after` to place it.
    pub fn create_block(&mut self) -> Block {
        self.blocks.push(BlockData::new())
    }

    /// Check if a block is currently in the layout
    pub fn is_block_inserted(&self, block: Block) -> bool {
        self.layout.contains(&block)
    }

    /// Append a block to the end of the layout
    pub fn append_block(&mut self, block: Block) {
        self.assert_insertable(block);
        self.layout.push(block);
    }

    /// Insert a block before another block
    pub fn insert_block(&mut self, block: Block, before: Block) {
        self.assert_insertable(block);
        let pos = self.layout_position(before);
        self.layout.insert(pos, block);
    }

    /// Insert a block after another block
    pub fn insert_block_after(&mut self, block: Block, after: Block) {
        self.assert_insertable(block);
        let pos = self.layout_position(after);
        self.layout.insert(pos + 1, block);
    }

    fn assert_insertable(&self, block: Block) {
        assert!(self.blocks.is_valid(block), "{} does not exist", block);
        assert!(
            !self.is_block_inserted(block),
            "{} is already in the layout",
            block
        );
    }

    fn layout_position(&self, block: Block) -> usize {
        self.layout
            .iter()
            .position(|&b| b == block)
            .unwrap_or_else(|| panic!("{} is not in the layout", block))
    }

    /// Add an argument of type `ty` to the end of `block`'s argument list
    pub fn append_block_arg(&mut self, block: Block, ty: Type) -> BlockArg {
        let arg = self.dfg.create_block_arg(block, ty);
        self.block_data_mut(block).args.push(arg);
        arg
    }

    /// Record `pred` as a predecessor of `block`
    pub fn add_pred(&mut self, block: Block, pred: Block) {
        self.block_data_mut(block).add_pred(pred);
    }

    fn block_data_mut(&mut self, block: Block) -> &mut BlockData {
        self.blocks
            .get_mut(block)
            .unwrap_or_else(|| panic!("{} does not exist", block))
    }

    /// Get an iterator over blocks in layout order
    pub fn blocks(&self) -> impl Iterator<Item = Block> + '_ {
        self.layout.iter().copied()
    }

    /// Get the entry block (first block in layout order)
    pub fn entry_block(&self) -> Option<Block> {
        self.layout.first().copied()
    }

    /// Get the number of blocks in the layout
    pub fn block_count(&self) -> usize {
        self.layout.len()
    }

    /// Get block data
    pub fn block_data(&self, block: Block) -> Option<&BlockData> {
        self.blocks.get(block)
    }

    /// Predecessors of `block`, in the order they were added
    pub fn preds(&self, block: Block) -> &[Block] {
        self.blocks
            .get(block)
            .map(|data| data.preds.as_slice())
            .unwrap_or(&[])
    }

    /// Arguments of `block`, in order
    pub fn block_args(&self, block: Block) -> &[BlockArg] {
        self.blocks
            .get(block)
            .map(|data| data.args.as_slice())
            .unwrap_or(&[])
    }

    /// Get block argument data
    pub fn block_arg_data(&self, arg: BlockArg) -> Option<&BlockArgData> {
        self.dfg.block_arg_data(arg)
    }

    // ========================================================================
    // Instruction operations
    // ========================================================================

    /// Create an instruction and return its entity
    ///
    /// The instruction is created in the DFG but not yet placed in a block.
    /// Use `append_inst` or `insert_inst` to add it to a block.
    pub fn create_inst(&mut self, data: InstData) -> Inst {
        self.dfg.create_inst(data)
    }

    /// Append an instruction to the end of a block
    pub fn append_inst(&mut self, inst: Inst, block: Block) {
        self.attach_inst(inst, block);
        self.block_data_mut(block).insts.push(inst);
    }

    /// Insert an instruction before another instruction, in the same block
    pub fn insert_inst(&mut self, inst: Inst, before: Inst) {
        let block = self
            .inst_block(before)
            .unwrap_or_else(|| panic!("{} is not in the layout", before));
        self.attach_inst(inst, block);
        let insts = &mut self.block_data_mut(block).insts;
        let pos = insts
            .iter()
            .position(|&i| i == before)
            .unwrap_or_else(|| panic!("{} is not in {}", before, block));
        insts.insert(pos, inst);
    }

    fn attach_inst(&mut self, inst: Inst, block: Block) {
        assert!(self.blocks.is_valid(block), "{} does not exist", block);
        let node = self
            .dfg
            .insts
            .get_mut(inst)
            .unwrap_or_else(|| panic!("{} does not exist", inst));
        assert!(node.block.is_none(), "{} is already in a block", inst);
        node.block = Some(block);
    }

    /// Get an iterator over instructions in a block, in definition order
    pub fn block_insts(&self, block: Block) -> impl Iterator<Item = Inst> + '_ {
        self.blocks
            .get(block)
            .map(|data| data.insts.as_slice())
            .unwrap_or(&[])
            .iter()
            .copied()
    }

    /// Get instruction data
    pub fn inst_data(&self, inst: Inst) -> Option<&InstData> {
        self.dfg.inst_data(inst)
    }

    /// Get the block containing an instruction
    pub fn inst_block(&self, inst: Inst) -> Option<Block> {
        self.dfg.inst_block(inst)
    }

    // ========================================================================
    // Printing
    // ========================================================================

    /// Print the whole graph to `out`.
    pub fn print<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        Printer::new(out, IdRegistry::new(self)).print_graph()
    }

    /// Print one block, numbered relative to this graph, to `out`.
    pub fn print_block<W: fmt::Write>(&self, block: Block, out: &mut W) -> fmt::Result {
        Printer::new(out, IdRegistry::new(self)).print_block(block)
    }

    /// Print one instruction line, numbered relative to this graph, to `out`.
    pub fn print_inst<W: fmt::Write>(&self, inst: Inst, out: &mut W) -> fmt::Result {
        Printer::new(out, IdRegistry::new(self)).print_inst(inst)
    }

    /// Print the whole graph to stderr.
    pub fn dump(&self) -> io::Result<()> {
        dump_to_stderr(&self.to_string())
    }

    /// Print one block to stderr.
    pub fn dump_block(&self, block: Block) -> io::Result<()> {
        dump_to_stderr(&self.display_block(block).to_string())
    }

    /// Print one instruction line to stderr.
    pub fn dump_inst(&self, inst: Inst) -> io::Result<()> {
        dump_to_stderr(&self.display_inst(inst).to_string())
    }

    /// `Display` adapter printing one block.
    pub fn display_block(&self, block: Block) -> DisplayBlock<'_> {
        DisplayBlock { graph: self, block }
    }

    /// `Display` adapter printing one instruction line.
    pub fn display_inst(&self, inst: Inst) -> DisplayInst<'_> {
        DisplayInst { graph: self, inst }
    }
}

fn dump_to_stderr(text: &str) -> io::Result<()> {
    tracing::debug!(bytes = text.len(), "dumping graph text to stderr");
    let mut stderr = io::stderr().lock();
    stderr.write_all(text.as_bytes())?;
    stderr.flush()
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print(f)
    }
}

/// Displays one block of a graph. See [`Graph::display_block`].
pub struct DisplayBlock<'g> {
    graph: &'g Graph,
    block: Block,
}

impl fmt::Display for DisplayBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.graph.print_block(self.block, f)
    }
}

/// Displays one instruction of a graph. See [`Graph::display_inst`].
pub struct DisplayInst<'g> {
    graph: &'g Graph,
    inst: Inst,
}

impl fmt::Display for DisplayInst<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.graph.print_inst(self.inst, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_new() {
        let graph = Graph::new();
        assert_eq!(graph.block_count(), 0);
        assert_eq!(graph.entry_block(), None);
    }

    #[test]
    fn test_create_block_is_detached() {
        let mut graph = Graph::new();
        let block = graph.create_block();
        assert!(graph.block_data(block).is_some());
        assert!(!graph.is_block_inserted(block));
        assert_eq!(graph.block_count(), 0);
    }

    #[test]
    fn test_block_layout_order() {
        let mut graph = Graph::new();
        let b0 = graph.create_block();
        let b1 = graph.create_block();
        let b2 = graph.create_block();
        let b3 = graph.create_block();

        graph.append_block(b0);
        graph.append_block(b1);
        graph.insert_block(b2, b1);
        graph.insert_block_after(b3, b1);

        assert_eq!(graph.blocks().collect::<Vec<_>>(), vec![b0, b2, b1, b3]);
        assert_eq!(graph.entry_block(), Some(b0));
    }

    #[test]
    #[should_panic(expected = "already in the layout")]
    fn test_append_block_twice() {
        let mut graph = Graph::new();
        let block = graph.create_block();
        graph.append_block(block);
        graph.append_block(block);
    }

    #[test]
    fn test_inst_order() {
        let mut graph = Graph::new();
        let block = graph.create_block();
        graph.append_block(block);

        let ret = graph.create_inst(InstData::ret(None));
        graph.append_inst(ret, block);
        let lit = graph.create_inst(InstData::integer(1, 8));
        graph.insert_inst(lit, ret);

        assert_eq!(graph.block_insts(block).collect::<Vec<_>>(), vec![lit, ret]);
        assert_eq!(graph.inst_block(lit), Some(block));
    }

    #[test]
    fn test_preds_and_args() {
        let mut graph = Graph::new();
        let b0 = graph.create_block();
        let b1 = graph.create_block();
        graph.add_pred(b1, b0);
        graph.add_pred(b1, b0);
        let arg = graph.append_block_arg(b1, Type::BuiltinInt(64));

        assert_eq!(graph.preds(b1), &[b0]);
        assert!(graph.preds(b0).is_empty());
        assert_eq!(graph.block_args(b1), &[arg]);
        assert_eq!(graph.block_arg_data(arg).map(|d| d.block), Some(b1));
    }
}
