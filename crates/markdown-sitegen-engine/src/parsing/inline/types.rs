use std::fmt;
use std::str::FromStr;

use crate::parsing::ParseError;

/// The style of an inline token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Unstyled text. The only kind later tokenizer stages look inside.
    Plain,
    Bold,
    Italic,
    Code,
    /// `[text](url)`
    Link,
    /// `![alt](url)`
    Image,
}

impl TokenKind {
    pub const ALL: [TokenKind; 6] = [
        TokenKind::Plain,
        TokenKind::Bold,
        TokenKind::Italic,
        TokenKind::Code,
        TokenKind::Link,
        TokenKind::Image,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Plain => "text",
            TokenKind::Bold => "bold",
            TokenKind::Italic => "italic",
            TokenKind::Code => "code",
            TokenKind::Link => "link",
            TokenKind::Image => "image",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TokenKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ParseError::InvalidTokenKind(s.to_string()))
    }
}

/// One inline markdown unit produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextToken {
    pub text: String,
    pub kind: TokenKind,
    /// Present for `Link` and `Image`, absent otherwise.
    pub url: Option<String>,
}

impl TextToken {
    pub fn new(text: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            text: text.into(),
            kind,
            url: None,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, TokenKind::Plain)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: TokenKind::Link,
            url: Some(url.into()),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: alt.into(),
            kind: TokenKind::Image,
            url: Some(url.into()),
        }
    }

    pub fn is_plain(&self) -> bool {
        self.kind == TokenKind::Plain
    }
}

impl fmt::Display for TextToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TextToken({}, {}, {})",
            self.text,
            self.kind,
            self.url.as_deref().unwrap_or("None")
        )
    }
}
