use std::sync::LazyLock;

use regex::Regex;

/// Text and url exclude all four of `[`, `]`, `(`, `)`.
///
/// The leading `!` is optional in the pattern so an image is consumed as one
/// match; link extraction then discards the matches that carry it. This gives
/// the same result as a "not preceded by `!`" lookbehind.
static BRACKET_SPAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(!?)\[([^\[\]()]*)\]\(([^\[\]()]*)\)").expect("valid bracket span regex")
});

/// `[text](url)` and `![alt](url)` spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketSpan {
    Link,
    Image,
}

/// One matched span: byte range in the source plus its captured parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanMatch<'a> {
    pub start: usize,
    pub end: usize,
    pub text: &'a str,
    pub url: &'a str,
}

impl BracketSpan {
    pub const IMAGE_MARKER: &'static str = "!";

    /// Non-overlapping matches of this span kind, left to right.
    pub fn find_iter(self, s: &str) -> Vec<SpanMatch<'_>> {
        BRACKET_SPAN
            .captures_iter(s)
            .filter_map(|caps| {
                let is_image = caps.get(1).is_some_and(|m| m.as_str() == Self::IMAGE_MARKER);
                if is_image != (self == BracketSpan::Image) {
                    return None;
                }
                let full = caps.get(0)?;
                Some(SpanMatch {
                    start: full.start(),
                    end: full.end(),
                    text: caps.get(2)?.as_str(),
                    url: caps.get(3)?.as_str(),
                })
            })
            .collect()
    }
}
