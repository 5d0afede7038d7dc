//! File-based tests for the CFG printer.
//!
//! Similar to Cranelift's filetests, these tests read `.cfg` files that contain:
//! - A test command (`test print` or `test verifier`)
//! - Graphs written in a small description language
//! - Filecheck directives in `;` comments after each graph

pub mod filecheck;
pub mod graph_text;
pub mod parser;

pub mod test_print;
pub mod test_verifier;

pub use filecheck::match_filecheck;
pub use graph_text::{parse_graph, ParseError};
pub use parser::{parse_test_file, TestCase};
