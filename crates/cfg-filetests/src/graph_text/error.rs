//! Parse error types.

use thiserror::Error;

/// Parse error with position information.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Parse error at position {position}: {message}")]
pub struct ParseError {
    pub message: String,
    pub position: usize,
}

impl ParseError {
    pub(crate) fn new(message: impl Into<String>, position: usize) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }
}

pub(crate) fn parse_error(original_input: &str, remaining_input: &str, message: &str) -> ParseError {
    ParseError::new(message, original_input.len() - remaining_input.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_position() {
        let input = "graph { oops }";
        let err = parse_error(input, &input[8..], "unexpected token");
        assert_eq!(err.position, 8);
        assert_eq!(
            err.to_string(),
            "Parse error at position 8: unexpected token"
        );
    }
}
