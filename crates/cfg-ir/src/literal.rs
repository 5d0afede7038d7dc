//! Integer literals and declarations referenced by instructions.

use core::fmt;

/// Widest integer literal the IR can hold.
pub const MAX_LITERAL_WIDTH: u32 = 128;

/// A fixed-width two's-complement integer.
///
/// The value is stored truncated to `width` bits and printed as a signed
/// decimal, so `IntLiteral::new(255, 8)` prints as `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntLiteral {
    bits: u128,
    width: u32,
}

impl IntLiteral {
    /// Create a literal of `width` bits from `value`, truncating high bits.
    ///
    /// # Panics
    ///
    /// Panics if `width` is zero or wider than [`MAX_LITERAL_WIDTH`].
    pub fn new(value: i128, width: u32) -> Self {
        Self::from_bits(value as u128, width)
    }

    /// Create a literal of `width` bits from a raw bit pattern.
    ///
    /// # Panics
    ///
    /// Panics if `width` is zero or wider than [`MAX_LITERAL_WIDTH`].
    pub fn from_bits(bits: u128, width: u32) -> Self {
        assert!(
            (1..=MAX_LITERAL_WIDTH).contains(&width),
            "integer literal width must be in 1..={}, got {}",
            MAX_LITERAL_WIDTH,
            width
        );
        Self {
            bits: bits & Self::mask(width),
            width,
        }
    }

    fn mask(width: u32) -> u128 {
        if width == MAX_LITERAL_WIDTH {
            u128::MAX
        } else {
            (1u128 << width) - 1
        }
    }

    /// Bit width of the literal.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Raw bit pattern, zero-extended.
    pub fn bits(&self) -> u128 {
        self.bits
    }

    /// Value interpreted as signed, sign-extended from `width` bits.
    pub fn signed_value(&self) -> i128 {
        let shift = MAX_LITERAL_WIDTH - self.width;
        ((self.bits << shift) as i128) >> shift
    }
}

impl fmt::Display for IntLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.signed_value())
    }
}

/// A named declaration referenced by a `DeclRef` instruction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Decl {
    name: String,
}

impl Decl {
    /// Create a declaration with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The declared name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Decl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
