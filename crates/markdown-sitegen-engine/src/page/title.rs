use super::PageError;
use crate::parsing::blocks::{BlockType, classify, markdown_to_blocks};

const TITLE_MARKER: &str = "# ";

/// Text of the first level-one heading, trimmed.
///
/// Lines are seen as the block splitter sees them, so indentation is ignored
/// and fenced code never supplies a title.
pub fn extract_title(markdown: &str) -> Result<String, PageError> {
    markdown_to_blocks(markdown)
        .iter()
        .filter(|block| classify(block) != BlockType::Code)
        .flat_map(|block| block.lines())
        .find_map(|line| line.strip_prefix(TITLE_MARKER))
        .map(|title| title.trim().to_string())
        .ok_or_else(|| PageError::MissingTitle(markdown.to_string()))
}
