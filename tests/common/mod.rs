pub mod fixtures;

use jelly2groovy::{ConvertError, ConvertOptions, ConverterBuilder};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Converts an in-memory view with the given options.
pub fn convert_with(source: &str, options: ConvertOptions) -> Result<String, ConvertError> {
    ConverterBuilder::new()
        .with_source(source)
        .with_options(options)
        .build()?
        .convert_to_string()
}

/// Strips the namespace preamble, leaving only the converted body.
pub fn body(output: &str) -> &str {
    output.split_once("\n\n\n").map_or(output, |(_, body)| body)
}

/// Asserts that every `{` is closed by a `}` at the indent of the line that opened it.
pub fn assert_balanced(output: &str) {
    let mut open: Vec<usize> = Vec::new();
    for line in body(output).lines() {
        let indent = line.len() - line.trim_start().len();
        assert_eq!(indent % 2, 0, "odd indentation in line {:?}", line);
        let trimmed = line.trim();
        if trimmed == "}" {
            let opened_at = open.pop().expect("closing brace without an open block");
            assert_eq!(opened_at, indent, "brace closed at the wrong indent: {:?}", line);
        } else if trimmed.ends_with('{') {
            open.push(indent);
        }
    }
    assert!(open.is_empty(), "unclosed blocks at indents {:?}", open);
}
