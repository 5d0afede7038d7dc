//! Graph builder.

use crate::{
    dfg::InstData,
    entity::{Block, Inst},
    graph::Graph,
    literal::Decl,
    types::Type,
    value::Value,
};

/// Builder for constructing a graph block by block.
///
/// Blocks are laid out in creation order. Instructions are appended to the
/// current block, selected with `switch_to_block`. Branches record the
/// current block as a predecessor of each target.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: Graph,
    current: Option<Block>,
}

impl GraphBuilder {
    /// Create a builder for an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a block and append it to the layout.
    pub fn create_block(&mut self) -> Block {
        let block = self.graph.create_block();
        self.graph.append_block(block);
        block
    }

    /// Add an argument to `block` and return it as a value.
    pub fn append_block_arg(&mut self, block: Block, ty: Type) -> Value {
        self.graph.append_block_arg(block, ty).into()
    }

    /// Make `block` the target of subsequent instructions.
    pub fn switch_to_block(&mut self, block: Block) {
        self.current = Some(block);
    }

    /// The block instructions are currently appended to.
    pub fn current_block(&self) -> Option<Block> {
        self.current
    }

    /// Read-only view of the graph under construction.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Finish building and return the graph.
    pub fn finish(self) -> Graph {
        self.graph
    }

    /// Append `data` to the current block.
    ///
    /// # Panics
    ///
    /// Panics if no block has been selected with `switch_to_block`.
    pub fn ins(&mut self, data: InstData) -> Inst {
        let block = self
            .current
            .expect("switch_to_block must be called before adding instructions");
        for &succ in data.successors() {
            self.graph.add_pred(succ, block);
        }
        let inst = self.graph.create_inst(data);
        self.graph.append_inst(inst, block);
        inst
    }

    /// `callee(args...)`
    pub fn call(&mut self, callee: Value, args: Vec<Value>) -> Value {
        self.ins(InstData::call(callee, args)).into()
    }

    /// Reference the declaration named `name`
    pub fn decl_ref(&mut self, name: &str) -> Value {
        self.ins(InstData::decl_ref(Decl::new(name))).into()
    }

    /// Integer literal of `width` bits
    pub fn integer(&mut self, value: i128, width: u32) -> Value {
        self.ins(InstData::integer(value, width)).into()
    }

    /// Load from `lvalue`
    pub fn load(&mut self, lvalue: Value) -> Value {
        self.ins(InstData::load(lvalue)).into()
    }

    /// Call `callee` with `arg` as the implicit `this`
    pub fn this_apply(&mut self, callee: Value, arg: Value) -> Value {
        self.ins(InstData::this_apply(callee, arg)).into()
    }

    /// Build a tuple of `elements`
    pub fn tuple(&mut self, elements: Vec<Value>) -> Value {
        self.ins(InstData::tuple(elements)).into()
    }

    /// Query the static type `ty`
    pub fn type_of(&mut self, ty: Type) -> Value {
        self.ins(InstData::type_of(ty)).into()
    }

    /// Return, optionally with a value
    pub fn ret(&mut self, value: Option<Value>) -> Inst {
        self.ins(InstData::ret(value))
    }

    /// Branch to `target` passing `args`
    pub fn br(&mut self, target: Block, args: Vec<Value>) -> Inst {
        self.ins(InstData::br(target, args))
    }

    /// Branch to `if_true` or `if_false` on `cond`
    pub fn cond_br(&mut self, cond: Value, if_true: Block, if_false: Block) -> Inst {
        self.ins(InstData::cond_br(cond, if_true, if_false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_layout() {
        let mut b = GraphBuilder::new();
        let entry = b.create_block();
        let exit = b.create_block();

        b.switch_to_block(entry);
        let one = b.integer(1, 64);
        b.br(exit, vec![one]);

        b.switch_to_block(exit);
        b.ret(None);

        let graph = b.finish();
        assert_eq!(graph.blocks().collect::<Vec<_>>(), vec![entry, exit]);
        assert_eq!(graph.block_insts(entry).count(), 2);
        assert_eq!(graph.block_insts(exit).count(), 1);
    }

    #[test]
    fn test_builder_records_preds() {
        let mut b = GraphBuilder::new();
        let entry = b.create_block();
        let then = b.create_block();
        let other = b.create_block();

        b.switch_to_block(entry);
        let c = b.integer(1, 1);
        b.cond_br(c, then, other);
        b.switch_to_block(then);
        b.br(other, vec![]);

        let graph = b.graph();
        assert_eq!(graph.preds(then), &[entry]);
        assert_eq!(graph.preds(other), &[entry, then]);
        assert!(graph.preds(entry).is_empty());
    }

    #[test]
    #[should_panic(expected = "switch_to_block")]
    fn test_builder_requires_block() {
        let mut b = GraphBuilder::new();
        b.ret(None);
    }
}
