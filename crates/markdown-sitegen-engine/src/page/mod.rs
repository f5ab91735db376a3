//! # Page Generation
//!
//! Wraps rendered markdown in an HTML template and writes it out.
//!
//! - **`title`**: first `# ` heading of a document
//! - **`template`**: `{{ Title }}` / `{{ Content }}` substitution and base path rewriting
//!
//! `generate_pages_recursive` mirrors a content directory into an output
//! directory, one `.html` per `.md`.

pub mod template;
pub mod title;

pub use template::Template;
pub use title::extract_title;

use std::path::{Path, PathBuf};

use crate::html::{self, RenderError};
use crate::io::{self, IoError};
use crate::parsing::{self, ParseError};

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("No title found in {0}")]
    MissingTitle(String),
    #[error("Failed to parse {path}: {source}")]
    Parse { path: PathBuf, source: ParseError },
    #[error("Failed to render {path}: {source}")]
    Render { path: PathBuf, source: RenderError },
    #[error(transparent)]
    Io(#[from] IoError),
}

/// Converts one markdown file into one HTML page.
pub fn generate_page(
    from_path: &Path,
    template: &Template,
    dest_path: &Path,
    basepath: &str,
) -> Result<(), PageError> {
    log::info!(
        "Generating page from {} to {}",
        from_path.display(),
        dest_path.display()
    );

    let markdown = io::read_path(from_path)?;
    let root = parsing::parse(&markdown).map_err(|source| PageError::Parse {
        path: from_path.to_path_buf(),
        source,
    })?;
    let title = extract_title(&markdown)?;
    let content = html::render_document(&root).map_err(|source| PageError::Render {
        path: from_path.to_path_buf(),
        source,
    })?;

    let page = template.render(&title, &content, basepath);
    io::write_path(dest_path, &page)?;
    Ok(())
}

/// Generates a page for every markdown file below `content_dir`.
///
/// `content/blog/post.md` becomes `dest_dir/blog/post.html`. Returns the
/// written paths in content order. Stops at the first failing page.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template: &Template,
    dest_dir: &Path,
    basepath: &str,
) -> Result<Vec<PathBuf>, PageError> {
    let sources = io::scan_markdown_files(content_dir)?;
    let mut written = Vec::with_capacity(sources.len());

    for source in sources {
        let from_path = source.to_path(content_dir);
        let dest_path = source.with_extension("html").to_path(dest_dir);
        generate_page(&from_path, template, &dest_path, basepath)?;
        written.push(dest_path);
    }

    log::info!("Generated {} pages into {}", written.len(), dest_dir.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_dir, create_test_file};
    use pretty_assertions::assert_eq;

    const TEMPLATE: &str =
        "<html><head><title>{{ Title }}</title></head><body>{{ Content }}</body></html>";

    #[test]
    fn test_generate_page_writes_filled_template() {
        let content = create_test_dir();
        let out = create_test_dir();
        let from = create_test_file(&content, "index.md", "# Home\n\n[About](/about)");
        let dest = out.path().join("index.html");

        generate_page(&from, &Template::new(TEMPLATE), &dest, "/").unwrap();

        assert_eq!(
            io::read_path(&dest).unwrap(),
            "<html><head><title>Home</title></head><body><div><h1>Home</h1><p><a href=\"/about\">About</a></p></div></body></html>"
        );
    }

    #[test]
    fn test_generate_page_applies_basepath() {
        let content = create_test_dir();
        let out = create_test_dir();
        let from = create_test_file(&content, "index.md", "# Home\n\n![logo](/logo.png)");
        let dest = out.path().join("index.html");

        generate_page(&from, &Template::new("{{ Content }}"), &dest, "/site/").unwrap();

        assert_eq!(
            io::read_path(&dest).unwrap(),
            "<div><h1>Home</h1><p><img src=\"/site/logo.png\"></p></div>"
        );
    }

    #[test]
    fn test_generate_page_without_title_fails() {
        let content = create_test_dir();
        let out = create_test_dir();
        let from = create_test_file(&content, "untitled.md", "## Only a subtitle");

        let result = generate_page(
            &from,
            &Template::new(TEMPLATE),
            &out.path().join("untitled.html"),
            "/",
        );

        assert!(matches!(result, Err(PageError::MissingTitle(_))));
    }

    #[test]
    fn test_generate_page_reports_parse_errors_with_path() {
        let content = create_test_dir();
        let out = create_test_dir();
        let from = create_test_file(&content, "broken.md", "# Title\n\nsome **bold");

        let err = generate_page(
            &from,
            &Template::new(TEMPLATE),
            &out.path().join("broken.html"),
            "/",
        )
        .unwrap_err();

        assert!(matches!(err, PageError::Parse { .. }));
        assert!(err.to_string().contains("broken.md"));
    }

    #[test]
    fn test_generate_pages_recursive_mirrors_tree() {
        // Given nested content
        let content = create_test_dir();
        let out = create_test_dir();
        create_test_file(&content, "index.md", "# Home");
        create_test_file(&content, "blog/first/index.md", "# First post\n\n- a\n- b");

        // When generating the whole site
        let written =
            generate_pages_recursive(content.path(), &Template::new(TEMPLATE), out.path(), "/")
                .unwrap();

        // Then every markdown file has an html sibling at the mirrored path
        assert_eq!(
            written,
            vec![
                out.path().join("blog/first/index.html"),
                out.path().join("index.html"),
            ]
        );
        let post = io::read_path(&out.path().join("blog/first/index.html")).unwrap();
        assert!(post.contains("<title>First post</title>"));
        assert!(post.contains("<ul><li>a</li><li>b</li></ul>"));
    }
}
