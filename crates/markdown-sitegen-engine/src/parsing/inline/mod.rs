//! # Inline Tokenizing
//!
//! Turns the running text of one block into typed tokens, then into HTML leaves.
//!
//! ## Architecture
//!
//! Tokenizing is a chain of splitting stages over a flat token list. The
//! list starts as a single `Plain` token; every stage rewrites only the
//! `Plain` tokens and passes styled tokens through. Earlier stages therefore
//! win: `**_x_**` is bold text `_x_`, never bold-italic.
//!
//! ## Modules
//!
//! - **`types`**: `TextToken` and `TokenKind`
//! - **`kinds`**: delimiter and bracket-span knowledge (`Delimited`, `BracketSpan`)
//! - **`parser`**: `tokenize()` plus the individual splitting stages
//! - **`convert`**: token to `HtmlNode` leaf mapping

pub mod convert;
pub mod kinds;
pub mod parser;
pub mod types;

pub use convert::{text_token_to_html_node, text_tokens_to_html_nodes};
pub use parser::{extract_markdown_images, extract_markdown_links, tokenize};
pub use types::{TextToken, TokenKind};

use crate::html::HtmlNode;

use super::ParseError;

/// Tokenizes `text` and maps the tokens to leaves in one step.
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, ParseError> {
    text_tokens_to_html_nodes(&tokenize(text)?)
}
