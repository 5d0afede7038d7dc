//! Control-flow-graph Intermediate Representation (IR) and its printer.
//!
//! This crate defines:
//! - Entities (blocks, instructions, block arguments) and the arenas owning them
//! - Instructions (call, load, tuple, return, branches, etc.)
//! - Graphs (one function body: blocks in layout order)
//! - A builder and a structural verifier
//! - A deterministic textual printer for debugging dumps
//!
//! ```
//! use cfg_ir::GraphBuilder;
//!
//! let mut b = GraphBuilder::new();
//! let entry = b.create_block();
//! b.switch_to_block(entry);
//! b.ret(None);
//!
//! assert_eq!(b.finish().to_string(), "bb0:\t ; Preds:\n  %0 = Return\n\n");
//! ```

mod block;
mod builder;
mod dfg;
mod entity;
mod entity_map;
mod graph;
mod literal;
mod printer;
mod types;
mod value;
mod verifier;

pub use block::BlockData;
pub use builder::GraphBuilder;
pub use dfg::{BlockArgData, InstData, InstNode, Opcode, DFG};
pub use entity::{Block, BlockArg, EntityRef, Inst};
pub use entity_map::{PrimaryMap, SecondaryMap};
pub use graph::{DisplayBlock, DisplayInst, Graph};
pub use literal::{Decl, IntLiteral, MAX_LITERAL_WIDTH};
pub use printer::{Id, IdKind, IdRegistry, Printer};
pub use types::Type;
pub use value::Value;
pub use verifier::{verify, verify_cfg, verify_entities, VerifierError};
