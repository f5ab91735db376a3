use crate::html::HtmlNode;

use super::{
    ParseError,
    blocks::{
        BlockType, classify,
        kinds::{BlockQuote, CodeFence, Heading, OrderedList, Paragraph, UnorderedList},
        markdown_to_blocks,
    },
    inline::text_to_children,
};

/// Root container tag for a whole document.
pub const ROOT_TAG: &str = "div";

/// Converts a markdown document into one `div` holding a node per block.
///
/// A document without blocks yields a `div` with no children.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode, ParseError> {
    let children = markdown_to_blocks(markdown)
        .iter()
        .map(|block| {
            let block_type = classify(block);
            log::debug!("block {block_type:?}: {} bytes", block.len());
            block_to_html_node(block, block_type)
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent(ROOT_TAG, children))
}

/// Builds the node for one already-classified block.
pub fn block_to_html_node(block: &str, block_type: BlockType) -> Result<HtmlNode, ParseError> {
    match block_type {
        BlockType::Paragraph => paragraph_to_html_node(block),
        BlockType::Heading(level) => heading_to_html_node(block, level),
        BlockType::Code => Ok(code_to_html_node(block)),
        BlockType::Quote => quote_to_html_node(block),
        BlockType::UnorderedList => list_to_html_node(block, "ul", UnorderedList::item_text),
        BlockType::OrderedList => list_to_html_node(block, "ol", OrderedList::item_text),
    }
}

fn paragraph_to_html_node(block: &str) -> Result<HtmlNode, ParseError> {
    let text = Paragraph::running_text(block);
    Ok(HtmlNode::parent("p", text_to_children(&text)?))
}

fn heading_to_html_node(block: &str, level: usize) -> Result<HtmlNode, ParseError> {
    let children = text_to_children(Heading::strip(block))?;
    Ok(HtmlNode::parent(&format!("h{level}"), children))
}

fn code_to_html_node(block: &str) -> HtmlNode {
    let code = HtmlNode::parent("code", vec![HtmlNode::text(CodeFence::literal(block))]);
    HtmlNode::parent("pre", vec![code])
}

fn quote_to_html_node(block: &str) -> Result<HtmlNode, ParseError> {
    let text = block
        .split('\n')
        .map(BlockQuote::strip_prefix)
        .collect::<Vec<_>>()
        .join("\n");
    Ok(HtmlNode::parent("blockquote", text_to_children(&text)?))
}

/// One `li` per line; `strip` removes the item marker.
fn list_to_html_node(
    block: &str,
    tag: &str,
    strip: fn(&str) -> Option<&str>,
) -> Result<HtmlNode, ParseError> {
    let items = block
        .split('\n')
        .map(|line| {
            let text = strip(line).unwrap_or(line);
            Ok(HtmlNode::parent("li", text_to_children(text)?))
        })
        .collect::<Result<Vec<_>, ParseError>>()?;
    Ok(HtmlNode::parent(tag, items))
}
