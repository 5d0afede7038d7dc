//! The `verifier` subtest - verifier error detection tests
//!
//! A graph with no directives must verify cleanly. Otherwise the verifier
//! must fail and its error messages, one per line, are filechecked against
//! the directives.

use cfg_ir::verify;

use crate::{filecheck::match_filecheck, graph_text::parse_graph, parser::parse_test_file};

/// Run tests from verifier test files
pub fn run_tests_from_file(content: &str) {
    let test_cases = parse_test_file(content);

    assert!(!test_cases.is_empty(), "No test cases found in test file");

    for case in test_cases {
        assert_eq!(
            case.command, "test verifier",
            "Unexpected test command: {}",
            case.command
        );
        run_verifier_test(&case.graph_text, &case.expected_text, case.line);
    }
}

/// Run a single verifier test
fn run_verifier_test(graph_text: &str, expected_text: &str, line: usize) {
    let graph = parse_graph(graph_text).unwrap_or_else(|e| {
        panic!(
            "Failed to parse graph at line {}: {}\n\nGraph text:\n{}",
            line, e, graph_text
        )
    });

    match verify(&graph) {
        Ok(()) if expected_text.trim().is_empty() => {}
        Ok(()) => panic!(
            "Verifier test at line {} failed: expected errors but graph is valid\n\nGraph:\n{}",
            line, graph
        ),
        Err(errors) => {
            let actual = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("\n");

            if expected_text.trim().is_empty() {
                panic!(
                    "Verifier test at line {} failed: expected valid graph but got errors:\n{}\n\nGraph:\n{}",
                    line, actual, graph
                );
            }

            if let Err(msg) = match_filecheck(&actual, expected_text) {
                panic!(
                    "Verifier test at line {} failed:\n{}\n\nActual errors:\n{}\n\nGraph:\n{}",
                    line, msg, actual, graph
                );
            }
        }
    }
}
