//! Whitespace parsing utilities.

use nom::{
    branch::alt,
    bytes::complete::{is_not, tag},
    character::complete::multispace1,
    combinator::{map, opt, recognize},
    multi::many0,
    sequence::pair,
    IResult,
};

/// Parse whitespace and `;` line comments - returns the matched string
pub(crate) fn blank_space(input: &str) -> IResult<&str, &str> {
    recognize(many0(alt((
        map(multispace1, |_| ()),
        map(pair(tag(";"), opt(is_not("\n"))), |_| ()),
    ))))(input)
}

/// Parse whitespace and discard result - returns ()
/// This is the main whitespace parser to use throughout
pub(crate) fn blank(input: &str) -> IResult<&str, ()> {
    map(blank_space, |_| ())(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_space() {
        assert_eq!(blank_space("   "), Ok(("", "   ")));
        assert_eq!(blank_space("\n\t  "), Ok(("", "\n\t  ")));
        assert_eq!(blank_space("  %v"), Ok(("%v", "  ")));
        assert_eq!(blank_space(""), Ok(("", "")));
    }

    #[test]
    fn test_blank_skips_comments() {
        assert_eq!(blank("; note\n  return"), Ok(("return", ())));
        assert_eq!(blank(";\nreturn"), Ok(("return", ())));
        assert_eq!(blank("  ; trailing"), Ok(("", ())));
    }
}
