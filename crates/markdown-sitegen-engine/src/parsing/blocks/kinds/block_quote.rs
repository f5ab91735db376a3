/// Blockquote: every line starts with `>`.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    pub fn is_quote_line(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }

    /// Removes one `>` and the whitespace after it.
    pub fn strip_prefix(line: &str) -> &str {
        line.strip_prefix(Self::PREFIX).unwrap_or(line).trim_start()
    }
}
