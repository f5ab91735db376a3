//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Delimited`**: `**` bold, `_` italic, `` ` `` code; split by literal occurrence
//! - **`BracketSpan`**: `[text](url)` links and `![alt](url)` images; matched by pattern
//!
//! The tokenizer reads these constants; it never hardcodes `**` or `](`.

pub mod bracket_span;
pub mod delimited;

pub use bracket_span::BracketSpan;
pub use delimited::Delimited;
