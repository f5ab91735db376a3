use std::sync::LazyLock;

use regex::Regex;

/// A newline, any whitespace-only lines, then a newline.
static BLANK_LINE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("valid blank line regex"));

/// Splits a document into trimmed blocks separated by blank lines.
///
/// Runs of blank lines collapse to one separator. Each line of a block is
/// trimmed on its own; blocks left empty are dropped. Order is preserved.
pub fn markdown_to_blocks(document: &str) -> Vec<String> {
    BLANK_LINE_RUN
        .split(document.trim())
        .map(|block| {
            block
                .split('\n')
                .map(str::trim)
                .collect::<Vec<_>>()
                .join("\n")
                .trim()
                .to_string()
        })
        .filter(|block| !block.is_empty())
        .collect()
}
