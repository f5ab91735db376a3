use super::node::{HtmlNode, Props};

/// Elements that never carry content and have no closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("leaf node <{}> has no value", .tag.as_deref().unwrap_or("text"))]
    MissingValue { tag: Option<String> },
    #[error("parent node <{}> needs a tag and at least one child", .tag.as_deref().unwrap_or("?"))]
    EmptyTree { tag: Option<String> },
}

/// Renders a node tree to an HTML string with no whitespace added between elements.
///
/// Fails atomically: on error no partial output is returned.
pub fn render(node: &HtmlNode) -> Result<String, RenderError> {
    let mut out = String::new();
    write_node(&mut out, node)?;
    Ok(out)
}

/// Renders the root of a parsed document.
///
/// A document with no blocks yields a childless root, which renders as an
/// empty element. Every node below the root is held to the rules of [`render`].
pub fn render_document(root: &HtmlNode) -> Result<String, RenderError> {
    match root {
        HtmlNode::Parent {
            tag: Some(tag),
            children,
            props,
        } if children.is_empty() => {
            let mut out = String::new();
            open_tag(&mut out, tag, props);
            close_tag(&mut out, tag);
            Ok(out)
        }
        _ => render(root),
    }
}

/// Serializes props as ` key="value" key2="value2"`, or `""` when empty.
pub fn props_to_html(props: &Props) -> String {
    props
        .iter()
        .map(|(key, value)| format!(" {key}=\"{value}\""))
        .collect()
}

fn write_node(out: &mut String, node: &HtmlNode) -> Result<(), RenderError> {
    match node {
        HtmlNode::Leaf { tag, value, props } => match (tag.as_deref(), value) {
            (None, Some(value)) => out.push_str(value),
            (Some(tag), Some(value)) => {
                open_tag(out, tag, props);
                out.push_str(value);
                close_tag(out, tag);
            }
            (Some(tag), None) if VOID_ELEMENTS.contains(&tag) => open_tag(out, tag, props),
            (tag, None) => {
                return Err(RenderError::MissingValue {
                    tag: tag.map(str::to_string),
                });
            }
        },
        HtmlNode::Parent {
            tag,
            children,
            props,
        } => {
            let Some(tag) = tag.as_deref().filter(|_| !children.is_empty()) else {
                return Err(RenderError::EmptyTree { tag: tag.clone() });
            };
            open_tag(out, tag, props);
            for child in children {
                write_node(out, child)?;
            }
            close_tag(out, tag);
        }
    }
    Ok(())
}

fn open_tag(out: &mut String, tag: &str, props: &Props) {
    out.push('<');
    out.push_str(tag);
    out.push_str(&props_to_html(props));
    out.push('>');
}

fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
