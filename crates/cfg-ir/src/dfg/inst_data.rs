//! Instruction data.

use crate::{
    dfg::opcode::Opcode,
    entity::Block,
    literal::{Decl, IntLiteral},
    types::Type,
    value::Value,
};

/// Instruction data (variant + operands)
///
/// This stores what an instruction does, separate from where it appears in
/// the layout. The variant set is closed: every consumer matches on it
/// exhaustively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstData {
    /// Call `callee` with `args`
    Call {
        /// The function being called
        callee: Value,
        /// Call arguments, in order
        args: Vec<Value>,
    },
    /// Reference to a named declaration
    DeclRef {
        /// The referenced declaration
        decl: Decl,
    },
    /// Integer literal
    IntegerLiteral {
        /// Value and bit width
        literal: IntLiteral,
    },
    /// Load the value stored in an lvalue
    Load {
        /// Storage to read
        lvalue: Value,
    },
    /// Call `callee` passing `arg` as the implicit `this`
    ThisApply {
        /// The method being called
        callee: Value,
        /// The implicit receiver
        arg: Value,
    },
    /// Construct a tuple from `elements`
    Tuple {
        /// Tuple elements, in order
        elements: Vec<Value>,
    },
    /// The static type of an expression
    TypeOf {
        /// The queried type
        ty: Type,
    },
    /// Return from the function
    Return {
        /// Returned value, if any
        value: Option<Value>,
    },
    /// Unconditional branch to `target`
    Br {
        /// Destination block
        target: Block,
        /// Values passed to the destination's block arguments
        args: Vec<Value>,
    },
    /// Branch to `branches[0]` if `cond` holds, otherwise `branches[1]`
    CondBr {
        /// Branch condition
        cond: Value,
        /// True and false destinations
        branches: [Block; 2],
    },
}

impl InstData {
    /// Create a call instruction
    pub fn call(callee: impl Into<Value>, args: Vec<Value>) -> Self {
        InstData::Call {
            callee: callee.into(),
            args,
        }
    }

    /// Create a declaration reference
    pub fn decl_ref(decl: Decl) -> Self {
        InstData::DeclRef { decl }
    }

    /// Create an integer literal of `width` bits
    pub fn integer(value: i128, width: u32) -> Self {
        InstData::IntegerLiteral {
            literal: IntLiteral::new(value, width),
        }
    }

    /// Create a load
    pub fn load(lvalue: impl Into<Value>) -> Self {
        InstData::Load {
            lvalue: lvalue.into(),
        }
    }

    /// Create an implicit-this method call
    pub fn this_apply(callee: impl Into<Value>, arg: impl Into<Value>) -> Self {
        InstData::ThisApply {
            callee: callee.into(),
            arg: arg.into(),
        }
    }

    /// Create a tuple construction
    pub fn tuple(elements: Vec<Value>) -> Self {
        InstData::Tuple { elements }
    }

    /// Create a type query
    pub fn type_of(ty: Type) -> Self {
        InstData::TypeOf { ty }
    }

    /// Create a return, with or without a value
    pub fn ret(value: Option<Value>) -> Self {
        InstData::Return { value }
    }

    /// Create an unconditional branch
    pub fn br(target: Block, args: Vec<Value>) -> Self {
        InstData::Br { target, args }
    }

    /// Create a conditional branch
    pub fn cond_br(cond: impl Into<Value>, if_true: Block, if_false: Block) -> Self {
        InstData::CondBr {
            cond: cond.into(),
            branches: [if_true, if_false],
        }
    }

    /// The opcode of this instruction
    pub fn opcode(&self) -> Opcode {
        match self {
            InstData::Call { .. } => Opcode::Call,
            InstData::DeclRef { .. } => Opcode::DeclRef,
            InstData::IntegerLiteral { .. } => Opcode::Integer,
            InstData::Load { .. } => Opcode::Load,
            InstData::ThisApply { .. } => Opcode::ThisApply,
            InstData::Tuple { .. } => Opcode::Tuple,
            InstData::TypeOf { .. } => Opcode::TypeOf,
            InstData::Return { .. } => Opcode::Return,
            InstData::Br { .. } => Opcode::Br,
            InstData::CondBr { .. } => Opcode::CondBr,
        }
    }

    /// Value operands, in operand order
    ///
    /// This includes branch arguments and the branch condition even though
    /// the printer renders those specially.
    pub fn operands(&self) -> Vec<Value> {
        match self {
            InstData::Call { callee, args } => {
                let mut ops = Vec::with_capacity(args.len() + 1);
                ops.push(*callee);
                ops.extend_from_slice(args);
                ops
            }
            InstData::Load { lvalue } => vec![*lvalue],
            InstData::ThisApply { callee, arg } => vec![*callee, *arg],
            InstData::Tuple { elements } => elements.clone(),
            InstData::Return { value } => value.iter().copied().collect(),
            InstData::Br { args, .. } => args.clone(),
            InstData::CondBr { cond, .. } => vec![*cond],
            InstData::DeclRef { .. } | InstData::IntegerLiteral { .. } | InstData::TypeOf { .. } => {
                Vec::new()
            }
        }
    }

    /// Successor blocks, in branch order
    pub fn successors(&self) -> &[Block] {
        match self {
            InstData::Br { target, .. } => core::slice::from_ref(target),
            InstData::CondBr { branches, .. } => branches,
            _ => &[],
        }
    }

    /// Check if this instruction ends a block
    pub fn is_terminator(&self) -> bool {
        self.opcode().is_terminator()
    }
}
