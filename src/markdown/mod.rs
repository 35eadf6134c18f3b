//! Markdown-subset parsing into a typed element tree.
//!
//! This module handles:
//! - Parsing the custom markdown subset with a single-pass priority grammar
//! - The [`Element`] tree rendering layers pattern-match over
//! - Plain-text extraction for search indexing and copy-to-clipboard
//!
//! The grammar is a small, deliberate subset — headers, quotes, unordered
//! lists, emphasis, strikethrough, inline code, links, and rules — not a
//! CommonMark implementation. Parsing is total: anything the grammar does
//! not claim stays plain text.

mod parser;
mod types;


pub use parser::{clear, parse};
pub use types::{BlockCodeKind, Element, ElementKind, MarkdownText};
