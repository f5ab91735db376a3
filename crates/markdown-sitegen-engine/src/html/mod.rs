//! # HTML Node Model
//!
//! The render tree produced by the markdown pipeline.
//!
//! ## Modules
//!
//! - **`node`**: `HtmlNode` (Leaf / Parent) and ordered `Props`
//! - **`render`**: `render()` serializes a tree to an HTML string;
//!   `render_document()` additionally accepts a childless document root
//!
//! ## Key Invariants
//!
//! - Nodes form a strict tree: every child is owned by exactly one parent
//! - A Parent needs a tag and at least one child at render time, except an
//!   empty document root rendered through `render_document`
//! - A Leaf needs a value at render time (void elements such as `img` excepted)
//! - Attribute order follows prop insertion order
//! - No escaping is performed: markdown-sourced text passes through verbatim

pub mod node;
pub mod render;

pub use node::{HtmlNode, Props};
pub use render::{RenderError, props_to_html, render, render_document};
