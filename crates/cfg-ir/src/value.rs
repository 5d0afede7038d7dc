//! Value references.

use core::fmt;

use crate::entity::{BlockArg, EntityRef, Inst};

/// An operand naming a value.
///
/// A value is either the result of a previously defined instruction or an
/// argument supplied on entry to a block. Either way it is a non-owning
/// reference into the owning graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Value {
    /// The result of an instruction
    Inst(Inst),
    /// A block-entry argument
    BlockArg(BlockArg),
}

impl Value {
    /// The referenced instruction, if this is an instruction result.
    pub fn as_inst(self) -> Option<Inst> {
        match self {
            Value::Inst(inst) => Some(inst),
            Value::BlockArg(_) => None,
        }
    }

    /// The referenced block argument, if this is one.
    pub fn as_block_arg(self) -> Option<BlockArg> {
        match self {
            Value::Inst(_) => None,
            Value::BlockArg(arg) => Some(arg),
        }
    }

    /// Arena index of the referenced entity, whichever kind it is.
    pub fn raw_index(self) -> u32 {
        match self {
            Value::Inst(inst) => inst.index() as u32,
            Value::BlockArg(arg) => arg.index() as u32,
        }
    }
}

impl From<Inst> for Value {
    fn from(inst: Inst) -> Self {
        Value::Inst(inst)
    }
}

impl From<BlockArg> for Value {
    fn from(arg: BlockArg) -> Self {
        Value::BlockArg(arg)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Inst(inst) => write!(f, "{}", inst),
            Value::BlockArg(arg) => write!(f, "{}", arg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_variants() {
        let v: Value = Inst::new(3).into();
        assert_eq!(v.as_inst(), Some(Inst::new(3)));
        assert_eq!(v.as_block_arg(), None);
        assert_eq!(v.raw_index(), 3);

        let a: Value = BlockArg::new(1).into();
        assert_eq!(a.as_block_arg(), Some(BlockArg::new(1)));
        assert_eq!(a.raw_index(), 1);
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Inst(Inst::new(2)).to_string(), "inst2");
        assert_eq!(Value::BlockArg(BlockArg::new(0)).to_string(), "arg0");
    }
}
