/// Ordered HTML attributes. Insertion order is serialization order.
pub type Props = Vec<(String, String)>;

/// A node of the HTML render tree.
///
/// Leaves hold a literal value, parents hold children. Both carry their own
/// attributes; neither variant shares fields with the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// A childless node. Without a tag it renders as its raw value.
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        props: Props,
    },
    /// A node whose content is the concatenation of its children.
    Parent {
        tag: Option<String>,
        children: Vec<HtmlNode>,
        props: Props,
    },
}

impl HtmlNode {
    /// A leaf with an optional tag and a value.
    pub fn leaf(tag: Option<&str>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: tag.map(str::to_string),
            value: Some(value.into()),
            props: Props::new(),
        }
    }

    /// A tagless leaf: plain text.
    pub fn text(value: impl Into<String>) -> Self {
        Self::leaf(None, value)
    }

    /// A tagged leaf that carries no value, e.g. `img`.
    pub fn empty_leaf(tag: &str) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.to_string()),
            value: None,
            props: Props::new(),
        }
    }

    pub fn parent(tag: &str, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: Some(tag.to_string()),
            children,
            props: Props::new(),
        }
    }

    /// Appends an attribute, keeping earlier ones in front.
    pub fn with_prop(mut self, key: &str, value: impl Into<String>) -> Self {
        match &mut self {
            HtmlNode::Leaf { props, .. } | HtmlNode::Parent { props, .. } => {
                props.push((key.to_string(), value.into()));
            }
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } | HtmlNode::Parent { tag, .. } => tag.as_deref(),
        }
    }

    pub fn props(&self) -> &Props {
        match self {
            HtmlNode::Leaf { props, .. } | HtmlNode::Parent { props, .. } => props,
        }
    }

    /// Children of a parent; empty for leaves.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf { .. } => &[],
            HtmlNode::Parent { children, .. } => children,
        }
    }

    /// Value of a leaf; `None` for parents and valueless leaves.
    pub fn value(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { value, .. } => value.as_deref(),
            HtmlNode::Parent { .. } => None,
        }
    }

    /// Serializes this node and everything beneath it.
    pub fn to_html(&self) -> Result<String, super::RenderError> {
        super::render(self)
    }
}
