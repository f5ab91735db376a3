use super::kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList};

/// Structural type of one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Paragraph,
    /// Level 1 to 6.
    Heading(usize),
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

/// Assigns a block its structural type.
///
/// Total: every string maps to exactly one type. Rules are tried in priority
/// order and the first match wins; `Paragraph` is the fallback, including for
/// the empty string.
pub fn classify(block: &str) -> BlockType {
    if let Some(level) = Heading::level(block) {
        return BlockType::Heading(level);
    }
    if CodeFence::is_fenced(block) {
        return BlockType::Code;
    }

    let lines = || block.split('\n');
    if lines().all(BlockQuote::is_quote_line) {
        BlockType::Quote
    } else if lines().all(|line| UnorderedList::item_text(line).is_some()) {
        BlockType::UnorderedList
    } else if OrderedList::is_numbered_in_sequence(lines()) {
        BlockType::OrderedList
    } else {
        BlockType::Paragraph
    }
}
