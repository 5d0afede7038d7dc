//! Instruction opcodes.

use core::fmt;

/// Instruction opcode
///
/// The fieldless counterpart of [`InstData`](crate::InstData): one opcode per
/// instruction variant, without operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// Function call: callee(args...)
    Call,
    /// Reference to a named declaration
    DeclRef,
    /// Integer literal
    Integer,
    /// Load from an lvalue
    Load,
    /// Method call with an implicit `this` argument
    ThisApply,
    /// Tuple construction
    Tuple,
    /// Static type of an expression
    TypeOf,
    /// Return, optionally with a value
    Return,
    /// Unconditional branch with block arguments
    Br,
    /// Two-way conditional branch
    CondBr,
}

impl Opcode {
    /// Printed mnemonic.
    pub fn name(self) -> &'static str {
        match self {
            Opcode::Call => "Call",
            Opcode::DeclRef => "DeclRef",
            Opcode::Integer => "Integer",
            Opcode::Load => "Load",
            Opcode::ThisApply => "ThisApply",
            Opcode::Tuple => "Tuple",
            Opcode::TypeOf => "TypeOf",
            Opcode::Return => "Return",
            Opcode::Br => "br",
            Opcode::CondBr => "cond_br",
        }
    }

    /// Check if this opcode ends a block.
    pub fn is_terminator(self) -> bool {
        matches!(self, Opcode::Return | Opcode::Br | Opcode::CondBr)
    }

    /// Check if this opcode transfers control to other blocks.
    pub fn is_branch(self) -> bool {
        matches!(self, Opcode::Br | Opcode::CondBr)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
