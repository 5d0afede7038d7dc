//! The `print` subtest - renders each graph and filechecks the dump

use crate::{filecheck::match_filecheck, graph_text::parse_graph, parser::parse_test_file};

/// Run tests from print test files
pub fn run_tests_from_file(content: &str) {
    let test_cases = parse_test_file(content);

    assert!(!test_cases.is_empty(), "No test cases found in test file");

    for case in test_cases {
        assert_eq!(
            case.command, "test print",
            "Unexpected test command: {}",
            case.command
        );
        run_print_test(&case.graph_text, &case.expected_text, case.line);
    }
}

/// Run a single print test
fn run_print_test(graph_text: &str, expected_text: &str, line: usize) {
    let graph = parse_graph(graph_text).unwrap_or_else(|e| {
        panic!(
            "Failed to parse graph at line {}: {}\n\nGraph text:\n{}",
            line, e, graph_text
        )
    });

    let actual = graph.to_string();

    if let Err(msg) = match_filecheck(&actual, expected_text) {
        panic!(
            "Print test at line {} failed:\n{}\n\nActual output:\n{}\n\nGraph text:\n{}",
            line, msg, actual, graph_text
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_basic() {
        let content = include_str!("../filetests/print/basic.cfg");
        run_tests_from_file(content);
    }

    #[test]
    fn test_print_instructions() {
        let content = include_str!("../filetests/print/instructions.cfg");
        run_tests_from_file(content);
    }

    #[test]
    fn test_print_branches() {
        let content = include_str!("../filetests/print/branches.cfg");
        run_tests_from_file(content);
    }

    #[test]
    fn test_print_types() {
        let content = include_str!("../filetests/print/types.cfg");
        run_tests_from_file(content);
    }
}
