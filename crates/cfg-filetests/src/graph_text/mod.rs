//! Parser for the graph description language used by the filetests.
//!
//! ```text
//! graph {
//! entry:
//!   %f = decl_ref foo
//!   %one = integer 1 : 64
//!   %r = call %f(%one)
//!   br exit(%r)
//! exit(%x: Builtin.Int64):
//!   return %x
//! }
//! ```
//!
//! Blocks are laid out in text order and each branch registers its block as
//! a predecessor of its targets. A header may instead list its predecessors
//! explicitly with `label preds(a, b):`, in which case branches into that
//! block add nothing; the verifier filetests use this to describe broken
//! edges.

mod error;
mod lower;
mod primitives;
mod syntax;
mod whitespace;

use cfg_ir::Graph;
use error::parse_error;
pub use error::ParseError;
use lower::lower_graph;
use syntax::parse_graph_ast;

/// Parse a `graph { ... }` body into a graph.
pub fn parse_graph(input: &str) -> Result<Graph, ParseError> {
    // Trim leading/trailing whitespace
    let trimmed = input.trim();
    match parse_graph_ast(trimmed) {
        Ok((remaining, ast)) => {
            // Allow trailing whitespace
            if !remaining.trim().is_empty() {
                return Err(parse_error(
                    trimmed,
                    remaining,
                    &format!("Unexpected input remaining: {}", remaining),
                ));
            }
            lower_graph(trimmed, &ast)
        }
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(parse_error(
            trimmed,
            e.input,
            &format!("Parse error: {:?}", e.code),
        )),
        Err(nom::Err::Incomplete(_)) => Err(parse_error(trimmed, "", "Incomplete input")),
    }
}
