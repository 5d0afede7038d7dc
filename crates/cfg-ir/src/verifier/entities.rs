//! Entity existence validation.
//!
//! Validates that every referenced instruction and block argument is reachable
//! through the layout, and that block instruction lists agree with the
//! block each instruction records as its own.

use crate::{value::Value, Graph, VerifierError};

/// Verify that all referenced entities are laid out
pub fn verify_entities(graph: &Graph, errors: &mut Vec<VerifierError>) {
    for block in graph.blocks() {
        for inst in graph.block_insts(block) {
            if graph.inst_block(inst) != Some(block) {
                errors.push(VerifierError::InstBlockMismatch { block, inst });
            }

            let Some(data) = graph.inst_data(inst) else {
                continue;
            };
            for operand in data.operands() {
                match operand {
                    Value::Inst(operand) => {
                        let laid_out = graph
                            .inst_block(operand)
                            .map_or(false, |b| graph.is_block_inserted(b));
                        if !laid_out {
                            errors.push(VerifierError::DanglingOperand { inst, operand });
                        }
                    }
                    Value::BlockArg(arg) => {
                        let laid_out = graph
                            .block_arg_data(arg)
                            .map_or(false, |data| graph.is_block_inserted(data.block));
                        if !laid_out {
                            errors.push(VerifierError::DanglingBlockArg { inst, arg });
                        }
                    }
                }
            }
        }
    }
}
