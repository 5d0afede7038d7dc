//! Textual dump of graphs, blocks and instructions.
//!
//! The output is a diagnostic format, not a serialization format:
//!
//! ```text
//! bb0:	 ; Preds: bb1
//!   %0 = Integer(val=1,width=64)
//!   %1 = br bb1
//!
//! ```
//!
//! Identifiers are assigned per render session by an [`IdRegistry`]; the same
//! graph always prints the same text.

use core::fmt::{self, Write};

use crate::entity::{Block, Inst};

mod ids;
mod inst;

pub use ids::{Id, IdKind, IdRegistry};

/// Renders blocks and instructions of one graph into a sink.
///
/// All output written through one printer shares its registry, so
/// identifiers are consistent across everything it prints.
pub struct Printer<'w, 'g, W: Write + ?Sized> {
    out: &'w mut W,
    ids: IdRegistry<'g>,
}

impl<'w, 'g, W: Write + ?Sized> Printer<'w, 'g, W> {
    /// Create a printer writing to `out` with the given registry.
    pub fn new(out: &'w mut W, ids: IdRegistry<'g>) -> Self {
        Self { out, ids }
    }

    /// The registry used for identifiers.
    pub fn ids(&self) -> &IdRegistry<'g> {
        &self.ids
    }

    /// Print every block of the graph in layout order.
    pub fn print_graph(&mut self) -> fmt::Result {
        let graph = self.ids.graph();
        for block in graph.blocks() {
            self.print_block(block)?;
        }
        Ok(())
    }

    /// Print a block header, its instructions, and a trailing blank line.
    pub fn print_block(&mut self, block: Block) -> fmt::Result {
        let graph = self.ids.graph();
        write!(self.out, "{}:\t", self.ids.block_id(block))?;

        self.out.write_str(" ; Preds:")?;
        for &pred in graph.preds(block) {
            write!(self.out, " {}", self.ids.block_id(pred))?;
        }
        self.out.write_char('\n')?;

        for inst in graph.block_insts(block) {
            self.print_inst(inst)?;
        }

        self.out.write_char('\n')
    }

    /// Print one instruction as an indented `<id> = <rendering>` line.
    ///
    /// # Panics
    ///
    /// Panics if `inst` does not exist in the graph.
    pub fn print_inst(&mut self, inst: Inst) -> fmt::Result {
        let graph = self.ids.graph();
        let data = graph
            .inst_data(inst)
            .unwrap_or_else(|| panic!("{} does not exist in the printed graph", inst));
        write!(self.out, "  {} = ", self.ids.inst_id(inst))?;
        inst::write_inst_data(&mut *self.out, &self.ids, data)?;
        self.out.write_char('\n')
    }
}
