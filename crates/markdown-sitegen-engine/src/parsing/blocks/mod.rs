//! # Block Parsing
//!
//! Two-phase block parsing over an in-memory document.
//!
//! ## Parsing Phases
//!
//! 1. **Splitting** (`split`): the document is cut into trimmed blocks at blank lines
//! 2. **Classification** (`classify`): each block gets exactly one `BlockType`
//!
//! ## Modules
//!
//! - **`split`**: `markdown_to_blocks` blank-line splitter
//! - **`classify`**: `BlockType` and the priority-ordered `classify`
//! - **`kinds`**: block-specific types owning their markers (Heading, CodeFence,
//!   BlockQuote, UnorderedList, OrderedList, Paragraph)
//!
//! ## Key Invariants
//!
//! - Block order matches document order
//! - No block is empty
//! - Classification is total; `Paragraph` is the fallback

pub mod classify;
pub mod kinds;
pub mod split;

pub use classify::{BlockType, classify};
pub use split::markdown_to_blocks;
