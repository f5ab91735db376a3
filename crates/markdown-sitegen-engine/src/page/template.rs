use std::path::Path;

use crate::io::{self, IoError};

/// An HTML page skeleton with `{{ Title }}` and `{{ Content }}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Template {
    pub const TITLE: &'static str = "{{ Title }}";
    pub const CONTENT: &'static str = "{{ Content }}";

    /// Root-relative attribute prefixes rewritten to the base path.
    const ROOT_ATTRS: [&'static str; 2] = ["href=\"/", "src=\"/"];

    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn load(path: &Path) -> Result<Self, IoError> {
        io::read_path(path).map(Self::new)
    }

    /// Fills every placeholder, then points root-relative links at `basepath`.
    ///
    /// `basepath` should end with `/`; the default site root is `"/"`.
    pub fn render(&self, title: &str, content: &str, basepath: &str) -> String {
        let page = self
            .source
            .replace(Self::TITLE, title)
            .replace(Self::CONTENT, content);
        rebase(&page, basepath)
    }
}

fn rebase(page: &str, basepath: &str) -> String {
    if basepath == "/" {
        return page.to_string();
    }
    Template::ROOT_ATTRS
        .iter()
        .fold(page.to_string(), |page, attr| {
            let rebased = format!("{}{basepath}", &attr[..attr.len() - 1]);
            page.replace(attr, &rebased)
        })
}
