//! CFG (Control Flow Graph) verification.

use crate::{Graph, VerifierError};

/// Verify CFG integrity
///
/// Checks:
/// - All branch targets are laid out
/// - Every branch edge appears in the target's predecessors
/// - All recorded predecessors are laid out
pub fn verify_cfg(graph: &Graph, errors: &mut Vec<VerifierError>) {
    for block in graph.blocks() {
        for &pred in graph.preds(block) {
            if !graph.is_block_inserted(pred) {
                errors.push(VerifierError::InvalidPredecessor { block, pred });
            }
        }

        for inst in graph.block_insts(block) {
            let Some(data) = graph.inst_data(inst) else {
                continue;
            };
            for &target in data.successors() {
                if !graph.is_block_inserted(target) {
                    errors.push(VerifierError::InvalidBranchTarget { inst, target });
                } else if !graph.preds(target).contains(&block) {
                    errors.push(VerifierError::MissingPredecessor {
                        inst,
                        block,
                        target,
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dfg::InstData, entity::Block};

    #[test]
    fn test_verify_cfg_valid() {
        let mut graph = Graph::new();
        let block0 = graph.create_block();
        let block1 = graph.create_block();
        graph.append_block(block0);
        graph.append_block(block1);
        graph.add_pred(block1, block0);

        let inst = graph.create_inst(InstData::br(block1, Vec::new()));
        graph.append_inst(inst, block0);

        let mut errors = Vec::new();
        verify_cfg(&graph, &mut errors);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_verify_cfg_invalid_target() {
        let mut graph = Graph::new();
        let block0 = graph.create_block();
        graph.append_block(block0);
        let detached = graph.create_block();

        let inst = graph.create_inst(InstData::br(detached, Vec::new()));
        graph.append_inst(inst, block0);

        let mut errors = Vec::new();
        verify_cfg(&graph, &mut errors);
        assert_eq!(
            errors,
            vec![VerifierError::InvalidBranchTarget {
                inst,
                target: detached
            }]
        );
    }

    #[test]
    fn test_verify_cfg_missing_pred() {
        let mut graph = Graph::new();
        let block0 = graph.create_block();
        graph.append_block(block0);

        let inst = graph.create_inst(InstData::br(block0, Vec::new()));
        graph.append_inst(inst, block0);

        let mut errors = Vec::new();
        verify_cfg(&graph, &mut errors);
        assert_eq!(
            errors[0].to_string(),
            "inst0: block0 branches to block0 but is not one of its predecessors"
        );
    }

    #[test]
    fn test_verify_cfg_invalid_pred() {
        let mut graph = Graph::new();
        let block0 = graph.create_block();
        graph.append_block(block0);
        graph.add_pred(block0, Block::new(5));

        let mut errors = Vec::new();
        verify_cfg(&graph, &mut errors);
        assert_eq!(
            errors,
            vec![VerifierError::InvalidPredecessor {
                block: block0,
                pred: Block::new(5)
            }]
        );
    }
}
