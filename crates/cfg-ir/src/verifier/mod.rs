//! IR verifier.
//!
//! The printer does not require a verified graph, but a graph that passes
//! verification is guaranteed to print without hitting a registry panic.

use thiserror::Error;

use crate::{
    entity::{Block, BlockArg, Inst},
    Graph,
};

mod cfg;
mod entities;

pub use cfg::verify_cfg;
pub use entities::verify_entities;

/// Verifier error, located at the block or instruction where it was found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifierError {
    /// An operand names an instruction that is not in a laid-out block
    #[error("{inst}: operand {operand} is not laid out in this graph")]
    DanglingOperand {
        /// The using instruction
        inst: Inst,
        /// The referenced instruction
        operand: Inst,
    },
    /// An operand names a block argument whose block is not laid out
    #[error("{inst}: block argument {arg} does not belong to a laid-out block")]
    DanglingBlockArg {
        /// The using instruction
        inst: Inst,
        /// The referenced argument
        arg: BlockArg,
    },
    /// A branch targets a block that is not laid out
    #[error("{inst}: branch target {target} is not laid out")]
    InvalidBranchTarget {
        /// The branch
        inst: Inst,
        /// The missing target
        target: Block,
    },
    /// A branch edge is missing from the target's predecessor set
    #[error("{inst}: {block} branches to {target} but is not one of its predecessors")]
    MissingPredecessor {
        /// The branch
        inst: Inst,
        /// Block containing the branch
        block: Block,
        /// Branch target
        target: Block,
    },
    /// A predecessor is not laid out
    #[error("{block}: predecessor {pred} is not laid out")]
    InvalidPredecessor {
        /// The block listing the predecessor
        block: Block,
        /// The missing predecessor
        pred: Block,
    },
    /// An instruction appears in a block other than the one it records
    #[error("{block}: {inst} is listed here but belongs to another block")]
    InstBlockMismatch {
        /// The block listing the instruction
        block: Block,
        /// The misplaced instruction
        inst: Inst,
    },
    /// A terminator is followed by more instructions
    #[error("{block}: terminator {inst} is not the last instruction")]
    MisplacedTerminator {
        /// The block
        block: Block,
        /// The early terminator
        inst: Inst,
    },
    /// A block does not end in a terminator
    #[error("{block} has no terminator")]
    MissingTerminator {
        /// The block
        block: Block,
    },
}

/// Verify a graph is well-formed
///
/// This runs all verification checks and returns every error found, in
/// layout order. Returns `Ok(())` if the graph is valid.
pub fn verify(graph: &Graph) -> Result<(), Vec<VerifierError>> {
    let mut errors = Vec::new();

    verify_entities(graph, &mut errors);
    verify_cfg(graph, &mut errors);
    verify_terminators(graph, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        tracing::debug!(errors = errors.len(), "graph failed verification");
        Err(errors)
    }
}

/// Verify that every block ends in exactly one terminator
fn verify_terminators(graph: &Graph, errors: &mut Vec<VerifierError>) {
    for block in graph.blocks() {
        let insts: Vec<Inst> = graph.block_insts(block).collect();
        let is_terminator =
            |inst: Inst| graph.inst_data(inst).map_or(false, |data| data.is_terminator());

        if let Some((&last, init)) = insts.split_last() {
            for &inst in init {
                if is_terminator(inst) {
                    errors.push(VerifierError::MisplacedTerminator { block, inst });
                }
            }
            if is_terminator(last) {
                continue;
            }
        }
        errors.push(VerifierError::MissingTerminator { block });
    }
}
