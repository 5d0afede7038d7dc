//! Filecheck directive matching using the filecheck crate

use filecheck::{Checker, CheckerBuilder, NO_VARIABLES};

/// Build a filechecker from expected text containing directives
pub fn build_filechecker(expected_text: &str) -> Result<Checker, String> {
    let mut builder = CheckerBuilder::new();

    for line in expected_text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        builder
            .directive(trimmed)
            .map_err(|e| format!("Failed to parse filecheck directive '{}': {}", trimmed, e))?;
    }

    Ok(builder.finish())
}

/// Match actual output against filecheck directives
pub fn match_filecheck(actual: &str, expected_text: &str) -> Result<(), String> {
    let checker = build_filechecker(expected_text)?;

    if checker
        .check(actual, NO_VARIABLES)
        .map_err(|e| format!("Filecheck error: {}", e))?
    {
        Ok(())
    } else {
        let (_, explain) = checker
            .explain(actual, NO_VARIABLES)
            .map_err(|e| format!("Failed to get filecheck explanation: {}", e))?;

        Err(format!("Filecheck failed:\n{}", explain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_filecheck_passes() {
        let actual = "bb0:\t ; Preds:\n  %0 = Return\n\n";
        let expected = "check: bb0:\nnextln: %0 = Return\n";
        assert_eq!(match_filecheck(actual, expected), Ok(()));
    }

    #[test]
    fn test_match_filecheck_fails() {
        let actual = "bb0:\t ; Preds:\n  %0 = Return\n\n";
        let expected = "check: %0 = Return(%1)\n";
        assert!(match_filecheck(actual, expected).is_err());
    }
}
