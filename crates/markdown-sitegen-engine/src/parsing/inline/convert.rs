use crate::html::HtmlNode;
use crate::parsing::ParseError;

use super::types::{TextToken, TokenKind};

/// Maps one token to its HTML leaf.
///
/// | kind   | tag    | value      | props  |
/// |--------|--------|------------|--------|
/// | Plain  | none   | text       |        |
/// | Bold   | `b`    | text       |        |
/// | Italic | `i`    | text       |        |
/// | Code   | `code` | text       |        |
/// | Link   | `a`    | text       | `href` |
/// | Image  | `img`  | none       | `src`  |
pub fn text_token_to_html_node(token: &TextToken) -> Result<HtmlNode, ParseError> {
    let node = match token.kind {
        TokenKind::Plain => HtmlNode::text(token.text.as_str()),
        TokenKind::Bold => HtmlNode::leaf(Some("b"), token.text.as_str()),
        TokenKind::Italic => HtmlNode::leaf(Some("i"), token.text.as_str()),
        TokenKind::Code => HtmlNode::leaf(Some("code"), token.text.as_str()),
        TokenKind::Link => {
            HtmlNode::leaf(Some("a"), token.text.as_str()).with_prop("href", required_url(token)?)
        }
        TokenKind::Image => HtmlNode::empty_leaf("img").with_prop("src", required_url(token)?),
    };
    Ok(node)
}

fn required_url(token: &TextToken) -> Result<&str, ParseError> {
    token
        .url
        .as_deref()
        .ok_or(ParseError::MissingUrl { kind: token.kind })
}

/// Maps a token sequence to leaves, preserving order.
pub fn text_tokens_to_html_nodes(tokens: &[TextToken]) -> Result<Vec<HtmlNode>, ParseError> {
    tokens.iter().map(text_token_to_html_node).collect()
}
