/// Unordered list: every line starts with `- `.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKER: &'static str = "- ";

    pub fn item_text(line: &str) -> Option<&str> {
        line.strip_prefix(Self::MARKER)
    }
}

/// Ordered list: every line starts with `<digits>. `.
pub struct OrderedList;

impl OrderedList {
    pub const SEPARATOR: &'static str = ". ";

    /// Splits `12. text` into `(12, "text")`.
    ///
    /// `None` when the line has no marker or the number does not fit a `u64`.
    pub fn split_marker(line: &str) -> Option<(u64, &str)> {
        let digits = line.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        let text = line[digits..].strip_prefix(Self::SEPARATOR)?;
        let number = line[..digits].parse().ok()?;
        Some((number, text))
    }

    /// Item text with the marker removed, whatever its number.
    pub fn item_text(line: &str) -> Option<&str> {
        Self::split_marker(line).map(|(_, text)| text)
    }

    /// Every line carries a marker and the numbers run exactly `1, 2, .., n`.
    pub fn is_numbered_in_sequence<'a>(lines: impl IntoIterator<Item = &'a str>) -> bool {
        lines.into_iter().zip(1u64..).all(|(line, expected)| {
            Self::split_marker(line).is_some_and(|(number, _)| number == expected)
        })
    }
}
