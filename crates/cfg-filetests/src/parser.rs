//! Test file parsing

/// A test case extracted from a test file
#[derive(Debug, Clone)]
pub struct TestCase {
    /// The `graph { ... }` text
    pub graph_text: String,
    /// The expected output text (from comments), one directive per line
    pub expected_text: String,
    /// The test command type
    pub command: String,
    /// 1-based line of the `graph` keyword, for failure messages
    pub line: usize,
}

/// Parse a test file and extract graphs with their expected outputs
pub fn parse_test_file(content: &str) -> Vec<TestCase> {
    let lines: Vec<&str> = content.lines().collect();
    let mut test_cases = Vec::new();
    let mut i = 0;

    // Parse test command from header
    let mut command = String::new();
    while i < lines.len() {
        let line = lines[i].trim();
        i += 1;
        if line.starts_with("test ") {
            command = String::from(line);
            break;
        }
    }

    while i < lines.len() {
        if !lines[i].trim().starts_with("graph") {
            i += 1;
            continue;
        }

        let graph_start = i;
        let graph_end = find_closing_brace(&lines, i);
        let graph_text = lines[graph_start..=graph_end].join("\n");

        // Collect the `;` directives that follow; a blank line after them
        // ends the group so comments introducing the next graph stay out
        let mut expected = Vec::new();
        let mut j = graph_end + 1;
        while j < lines.len() {
            let line = lines[j].trim();
            if let Some(directive) = line.strip_prefix(';') {
                expected.push(directive.trim());
            } else if !line.is_empty() || !expected.is_empty() {
                break;
            }
            j += 1;
        }

        test_cases.push(TestCase {
            graph_text,
            expected_text: expected.join("\n"),
            command: command.clone(),
            line: graph_start + 1,
        });

        i = j;
    }

    test_cases
}

/// Index of the line holding the brace that closes the one opened on `start`
fn find_closing_brace(lines: &[&str], start: usize) -> usize {
    let mut depth = 0i32;
    for (j, line) in lines.iter().enumerate().skip(start) {
        // Braces inside `;` comments do not count
        let code = line.split(';').next().unwrap_or("");
        for ch in code.chars() {
            match ch {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        return j;
                    }
                }
                _ => {}
            }
        }
    }
    lines.len() - 1
}
