//! Entity reference system for type-safe entity IDs.
//!
//! Blocks, instructions and block arguments are plain `u32` indices into the
//! arenas owned by a [`Graph`](crate::Graph). Cross references between IR
//! nodes (operands, branch targets, predecessors) are always one of these
//! entities, never an owning pointer.
//!
//! The `Display` forms here (`block3`, `inst7`, `arg0`) name arena slots and
//! are meant for diagnostics. The printer never uses them: printed
//! identifiers are positions in layout order, assigned per render session.

use core::fmt;

/// Base trait for entity references.
///
/// Entities provide O(1) conversion to and from arena indices while keeping
/// different entity kinds apart at the type level.
pub trait EntityRef: Copy + Clone + PartialEq + Eq + core::hash::Hash + fmt::Debug {
    /// Get the arena index of this entity
    fn index(self) -> usize;

    /// Create an entity from an arena index
    fn from_index(index: usize) -> Self;
}

macro_rules! entity_impl {
    ($entity:ident, $prefix:expr) => {
        impl $entity {
            /// Create a new entity with the given arena index
            pub fn new(index: u32) -> Self {
                $entity(index)
            }

            /// Get the arena index as a `u32`
            pub fn as_u32(self) -> u32 {
                self.0
            }
        }

        impl EntityRef for $entity {
            fn index(self) -> usize {
                self.0 as usize
            }

            fn from_index(index: usize) -> Self {
                debug_assert!(index < u32::MAX as usize, "entity index overflow");
                $entity(index as u32)
            }
        }

        impl fmt::Display for $entity {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }
    };
}

/// A basic block in a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Block(u32);
entity_impl!(Block, "block");

/// An instruction in a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Inst(u32);
entity_impl!(Inst, "inst");

/// A value supplied on entry to a block (a control-flow merge value).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockArg(u32);
entity_impl!(BlockArg, "arg");

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn test_entity_ref_roundtrip() {
        let block = Block::from_index(5);
        assert_eq!(EntityRef::index(block), 5);
        assert_eq!(block.as_u32(), 5);
        assert_eq!(Inst::from_index(10), Inst::new(10));
    }

    #[test]
    fn test_entity_ordering() {
        assert!(Block::new(1) < Block::new(2));
        assert_eq!(Inst::new(3), Inst::new(3));

        let mut set = BTreeSet::new();
        set.insert(BlockArg::new(1));
        set.insert(BlockArg::new(2));
        set.insert(BlockArg::new(1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_entity_display() {
        assert_eq!(Block::new(42).to_string(), "block42");
        assert_eq!(Inst::new(7).to_string(), "inst7");
        assert_eq!(BlockArg::new(0).to_string(), "arg0");
    }
}
