/// Paragraph block type.
///
/// Paragraphs have no delimiters; they are the fallback when no other block
/// type matches. Their lines are joined into one line of running text.
pub struct Paragraph;

impl Paragraph {
    pub const LINE_JOIN: &'static str = " ";

    /// Joins trimmed non-blank lines with a single space.
    pub fn running_text(block: &str) -> String {
        block
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(Self::LINE_JOIN)
    }
}
