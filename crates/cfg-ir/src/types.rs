//! Type system for the IR.
//!
//! The printer only needs the textual form of a type (for `TypeOf`), so this
//! is a small structural model rather than a full type checker.

use core::fmt;

/// A type in the IR.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// Builtin fixed-width integer, printed `Builtin.Int<width>`
    BuiltinInt(u32),
    /// A nominal type referenced by name
    Named(String),
    /// Tuple of element types; the empty tuple is `()`
    Tuple(Vec<Type>),
    /// Function from `input` to `result`
    Function {
        /// Parameter type (usually a tuple)
        input: Box<Type>,
        /// Result type
        result: Box<Type>,
    },
    /// Assignable storage holding a value of the inner type
    LValue(Box<Type>),
}

impl Type {
    /// The empty tuple type `()`.
    pub fn unit() -> Self {
        Type::Tuple(Vec::new())
    }

    /// A nominal type with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Type::Named(name.into())
    }

    /// A function type `input -> result`.
    pub fn function(input: Type, result: Type) -> Self {
        Type::Function {
            input: Box::new(input),
            result: Box::new(result),
        }
    }

    /// An lvalue of `object`.
    pub fn lvalue(object: Type) -> Self {
        Type::LValue(Box::new(object))
    }

    /// Check if this is the empty tuple.
    pub fn is_unit(&self) -> bool {
        matches!(self, Type::Tuple(elems) if elems.is_empty())
    }

    /// Check if this is an lvalue type.
    pub fn is_lvalue(&self) -> bool {
        matches!(self, Type::LValue(_))
    }

    /// For an lvalue, the type of the stored object; otherwise `None`.
    pub fn object_type(&self) -> Option<&Type> {
        match self {
            Type::LValue(object) => Some(object),
            _ => None,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::BuiltinInt(width) => write!(f, "Builtin.Int{}", width),
            Type::Named(name) => write!(f, "{}", name),
            Type::Tuple(elems) => {
                write!(f, "(")?;
                for (i, elem) in elems.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", elem)?;
                }
                write!(f, ")")
            }
            Type::Function { input, result } => {
                // `->` is right-associative, so only a function input needs parens.
                if matches!(**input, Type::Function { .. }) {
                    write!(f, "({}) -> {}", input, result)
                } else {
                    write!(f, "{} -> {}", input, result)
                }
            }
            Type::LValue(object) => write!(f, "@lvalue {}", object),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_display() {
        assert_eq!(Type::BuiltinInt(64).to_string(), "Builtin.Int64");
        assert_eq!(Type::named("Int").to_string(), "Int");
        assert_eq!(Type::unit().to_string(), "()");
        assert_eq!(
            Type::Tuple(vec![Type::named("Int"), Type::BuiltinInt(1)]).to_string(),
            "(Int, Builtin.Int1)"
        );
        assert_eq!(
            Type::function(Type::Tuple(vec![Type::named("Int")]), Type::unit()).to_string(),
            "(Int) -> ()"
        );
        assert_eq!(Type::lvalue(Type::named("Int")).to_string(), "@lvalue Int");
    }

    #[test]
    fn test_type_kinds() {
        assert!(Type::unit().is_unit());
        assert!(!Type::named("Int").is_unit());

        let lv = Type::lvalue(Type::BuiltinInt(8));
        assert!(lv.is_lvalue());
        assert_eq!(lv.object_type(), Some(&Type::BuiltinInt(8)));
        assert_eq!(Type::BuiltinInt(8).object_type(), None);
    }
}
