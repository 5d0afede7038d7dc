//! Primitive parsers for names, literals, and types.

use cfg_ir::Type;
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, digit1, space1},
    combinator::{map, map_res, opt, recognize},
    multi::separated_list0,
    sequence::{delimited, pair, preceded, terminated, tuple},
    IResult,
};

use super::whitespace::blank;

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}

/// Parse an identifier (declaration names, nominal types)
pub(crate) fn identifier(input: &str) -> IResult<&str, &str> {
    take_while1(is_ident_char)(input)
}

/// Parse a block label (entry, loop_1, etc.)
pub(crate) fn label(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_')(input)
}

/// Parse a value name (%x, %tmp.1) and return the name without the sigil
pub(crate) fn value_name(input: &str) -> IResult<&str, &str> {
    preceded(char('%'), take_while1(is_ident_char))(input)
}

/// Parse a signed integer literal
pub(crate) fn integer(input: &str) -> IResult<&str, i128> {
    map_res(recognize(pair(opt(char('-')), digit1)), |s: &str| {
        s.parse::<i128>()
    })(input)
}

/// Parse an unsigned bit width
pub(crate) fn width(input: &str) -> IResult<&str, u32> {
    map_res(digit1, |s: &str| s.parse::<u32>())(input)
}

/// Parse a type: `Builtin.Int64`, `Int`, `(A, B)`, `A -> B`, `@lvalue A`
///
/// `->` is right-associative and binds looser than `@lvalue`.
pub(crate) fn parse_type(input: &str) -> IResult<&str, Type> {
    let (input, lhs) = type_atom(input)?;
    let (input, rhs) = opt(preceded(tuple((blank, tag("->"), blank)), parse_type))(input)?;
    let ty = match rhs {
        Some(result) => Type::function(lhs, result),
        None => lhs,
    };
    Ok((input, ty))
}

fn type_atom(input: &str) -> IResult<&str, Type> {
    alt((lvalue_type, builtin_int_type, tuple_type, named_type))(input)
}

fn lvalue_type(input: &str) -> IResult<&str, Type> {
    map(preceded(pair(tag("@lvalue"), space1), type_atom), Type::lvalue)(input)
}

fn builtin_int_type(input: &str) -> IResult<&str, Type> {
    map(preceded(tag("Builtin.Int"), width), Type::BuiltinInt)(input)
}

fn tuple_type(input: &str) -> IResult<&str, Type> {
    map(
        delimited(
            terminated(char('('), blank),
            separated_list0(tuple((blank, char(','), blank)), parse_type),
            preceded(blank, char(')')),
        ),
        Type::Tuple,
    )(input)
}

fn named_type(input: &str) -> IResult<&str, Type> {
    map(identifier, Type::named)(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer() {
        assert_eq!(integer("42"), Ok(("", 42)));
        assert_eq!(integer("-42"), Ok(("", -42)));
        assert_eq!(integer("0 "), Ok((" ", 0)));
        assert!(integer("abc").is_err());
    }

    #[test]
    fn test_integer_overflow() {
        let result = integer("999999999999999999999999999999999999999999");
        assert!(result.is_err(), "Should fail on overflow");
    }

    #[test]
    fn test_value_name() {
        assert_eq!(value_name("%x"), Ok(("", "x")));
        assert_eq!(value_name("%tmp.1,"), Ok((",", "tmp.1")));
        assert!(value_name("x").is_err());
    }

    #[test]
    fn test_label() {
        assert_eq!(label("entry:"), Ok((":", "entry")));
        assert_eq!(label("loop_1(%x"), Ok(("(%x", "loop_1")));
    }

    #[test]
    fn test_parse_type_simple() {
        assert_eq!(parse_type("Builtin.Int64"), Ok(("", Type::BuiltinInt(64))));
        assert_eq!(parse_type("Int"), Ok(("", Type::named("Int"))));
        assert_eq!(parse_type("()"), Ok(("", Type::unit())));
        assert_eq!(
            parse_type("@lvalue Int"),
            Ok(("", Type::lvalue(Type::named("Int"))))
        );
    }

    #[test]
    fn test_parse_type_tuple_and_function() {
        assert_eq!(
            parse_type("(Int, Builtin.Int1)"),
            Ok((
                "",
                Type::Tuple(vec![Type::named("Int"), Type::BuiltinInt(1)])
            ))
        );
        let (rest, ty) = parse_type("(Int) -> () -> Int").unwrap();
        assert_eq!(rest, "");
        assert_eq!(
            ty,
            Type::function(
                Type::Tuple(vec![Type::named("Int")]),
                Type::function(Type::unit(), Type::named("Int"))
            )
        );
    }

    #[test]
    fn test_parse_type_display_is_reparseable() {
        let text = "((Int) -> Int) -> @lvalue (Int, Builtin.Int8)";
        let (rest, ty) = parse_type(text).unwrap();
        assert_eq!(rest, "");
        assert_eq!(ty.to_string(), text);
    }

    #[test]
    fn test_parse_type_stops_before_newline_statement() {
        let (rest, ty) = parse_type("Int\n  return").unwrap();
        assert_eq!(ty, Type::named("Int"));
        assert_eq!(rest, "\n  return");
    }
}
