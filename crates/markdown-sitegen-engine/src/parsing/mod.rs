//! # Markdown Parsing
//!
//! Markdown text to HTML node tree.
//!
//! ```text
//! markdown ─▶ blocks::split ─▶ blocks::classify ─▶ tree ─▶ HtmlNode (div)
//!                                                   │
//!                                                   └─▶ inline::tokenize ─▶ leaves
//! ```
//!
//! Everything here is a pure function of its input: no I/O and no shared state.

pub mod blocks;
pub mod inline;
pub mod tree;

use crate::html::HtmlNode;

use inline::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Unclosed delimiter '{delimiter}' in text: {text}")]
    UnclosedDelimiter { delimiter: String, text: String },
    #[error("Invalid text type: {0}")]
    InvalidTokenKind(String),
    #[error("{kind} token has no url")]
    MissingUrl { kind: TokenKind },
}

/// Parses a markdown document into its root `div` node.
pub fn parse(markdown: &str) -> Result<HtmlNode, ParseError> {
    tree::markdown_to_html_node(markdown)
}
