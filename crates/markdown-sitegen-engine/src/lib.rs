pub mod html;
pub mod io;
pub mod page;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use html::{HtmlNode, RenderError, render, render_document};
pub use page::{PageError, Template, extract_title, generate_page, generate_pages_recursive};
pub use parsing::{
    ParseError,
    blocks::{BlockType, classify, markdown_to_blocks},
    inline::{TextToken, TokenKind, tokenize},
    parse,
};

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Parses and renders a markdown document in one call.
pub fn markdown_to_html(markdown: &str) -> Result<String, ConvertError> {
    Ok(render_document(&parse(markdown)?)?)
}
