//! Element tree types produced by the markdown parser.

use serde::{Deserialize, Serialize};

/// A parsed markdown string: the ordered top-level elements.
///
/// This is the parser's only externally visible result type. Rendering
/// layers walk `elements` and pattern-match on each node's [`ElementKind`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkdownText {
    /// Top-level elements in source order.
    pub elements: Vec<Element>,
}

impl MarkdownText {
    /// Plain-text rendering of the whole tree, all markup stripped.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for element in &self.elements {
            element.collect_plain_text(&mut out);
        }
        out
    }

    /// Returns true if the source contained no text at all.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// A single node in the parsed element tree.
///
/// `text` holds the node's literal content with this level's markup
/// characters stripped; `elements` holds the recursive parse of `text`,
/// empty when no further markup was found. Trees are immutable value
/// objects, built once per parse and owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Which grammar production matched.
    pub kind: ElementKind,
    /// Literal content with this node's delimiters removed.
    pub text: String,
    /// Recursive parse of `text`.
    pub elements: Vec<Element>,
}

impl Element {
    /// Create a node.
    pub fn new(kind: ElementKind, text: impl Into<String>, elements: Vec<Element>) -> Self {
        Self {
            kind,
            text: text.into(),
            elements,
        }
    }

    /// Create a plain text leaf.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(ElementKind::Text, text, Vec::new())
    }

    /// Returns true if no further markup was found inside this node.
    pub fn is_leaf(&self) -> bool {
        self.elements.is_empty()
    }

    /// Plain-text rendering of this node, all markup stripped.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_plain_text(&mut out);
        out
    }

    /// Append leaf text across the whole subtree, in pre-order.
    pub(crate) fn collect_plain_text(&self, out: &mut String) {
        if self.elements.is_empty() {
            out.push_str(&self.text);
        } else {
            for child in &self.elements {
                child.collect_plain_text(out);
            }
        }
    }
}

/// The closed set of grammar productions.
///
/// `OrderedListItem` and `BlockCode` are reserved tags: the current grammar
/// has no production for them, so the parser never emits them. They exist so
/// the rendering contract does not change when those productions land.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementKind {
    /// Plain run with no markup.
    Text,
    /// One list line (`* `, `+ `, or `- ` prefix).
    UnorderedListItem,
    /// `#`-prefixed heading line, level 1 through 6.
    Header {
        /// Number of `#` characters.
        level: u8,
    },
    /// `> `-prefixed quote line.
    Quote,
    /// Single `*…*` or `_…_` emphasis.
    Italic,
    /// Double `**…**` or `__…__` emphasis.
    Bold,
    /// Double `~~…~~` strikethrough.
    Strike,
    /// Horizontal divider line: exactly `---`, `___`, or `***`.
    Rule,
    /// Backtick-delimited inline code span.
    InlineCode,
    /// `[title](url)` link; the node text is the title.
    Link {
        /// The url between the parentheses.
        link: String,
    },
    /// Numbered list line. Reserved, never produced.
    OrderedListItem {
        /// The literal order prefix, e.g. `1.`.
        order: String,
    },
    /// Fenced code block line. Reserved, never produced.
    BlockCode {
        /// Position of the line within its fence.
        kind: BlockCodeKind,
    },
}

/// Position of a line within a fenced code block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockCodeKind {
    /// Opening fence line.
    Start,
    /// Closing fence line.
    End,
    /// Line between the fences.
    Middle,
    /// Single-line block.
    Single,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_leaf_has_no_children() {
        let element = Element::plain("hello");
        assert!(element.is_leaf());
        assert_eq!(element.kind, ElementKind::Text);
        assert_eq!(element.text, "hello");
    }

    #[test]
    fn test_plain_text_takes_all_children() {
        let element = Element::new(
            ElementKind::Quote,
            "a b c",
            vec![
                Element::plain("a "),
                Element::new(ElementKind::Bold, "b", vec![Element::plain("b")]),
                Element::plain(" c"),
            ],
        );
        assert_eq!(element.plain_text(), "a b c");
    }

    #[test]
    fn test_empty_markdown_text() {
        let text = MarkdownText::default();
        assert!(text.is_empty());
        assert_eq!(text.plain_text(), "");
    }
}
