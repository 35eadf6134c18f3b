//! Markdown-subset parsing with a single-pass priority grammar.
//!
//! One combined alternation is compiled once and scanned left to right per
//! recursion level. The sub-grammars are tried in a fixed priority order at
//! each position, so precedence is deterministic: a quote line is never
//! re-matched as emphasis, a header swallows its whole line, and anything
//! the grammar does not claim degrades to plain text.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{error, trace};

use super::types::{Element, ElementKind, MarkdownText};

/// Line starting with `* `, `+ `, or `- `, rest of line.
const UNORDERED_LIST_GROUP: &str = r"(^[*+-] .+)";
/// Line starting with 1-6 `#` then a space, rest of line.
const HEADER_GROUP: &str = r"(^#{1,6} .+?$)";
/// Line starting with `> `, rest of line.
const QUOTE_GROUP: &str = r"(^> .+?$)";
/// Single `*…*` or `_…_`. Double-delimiter runs are rejected after the
/// match by the boundary check below.
const ITALIC_GROUP: &str = r"(\*[^*].*?[^*]?\*|_[^_].*?[^_]?_)";
/// Double `**…**` or `__…__`, triple runs rejected by the boundary check.
const BOLD_GROUP: &str = r"(\*{2}[^*].*?[^*]?\*{2}|_{2}[^_].*?[^_]?_{2})";
/// Double `~~…~~`.
const STRIKE_GROUP: &str = r"(~{2}[^~].*?~{2})";
/// A line that is exactly `---`, `___`, or `***`.
const RULE_GROUP: &str = r"(^[-_*]{3}$)";
/// Backtick-delimited span; the first content char is neither a backtick
/// nor whitespace.
const INLINE_CODE_GROUP: &str = r"(`[^`\s].*?[`\s]?`)";
/// `[title](url)`; the title may be empty.
const LINK_GROUP: &str = r"(\[[^\[\]]*?\]\(.+?\)|^\[*?\]\(.*?\))";

const GROUP_UNORDERED_LIST: usize = 1;
const GROUP_HEADER: usize = 2;
const GROUP_QUOTE: usize = 3;
const GROUP_ITALIC: usize = 4;
const GROUP_BOLD: usize = 5;
const GROUP_STRIKE: usize = 6;
const GROUP_RULE: usize = 7;
const GROUP_INLINE_CODE: usize = 8;
const GROUP_LINK: usize = 9;
const GROUP_COUNT: usize = 9;

/// The combined alternation. Group number is priority order.
static ELEMENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        "(?m){UNORDERED_LIST_GROUP}|{HEADER_GROUP}|{QUOTE_GROUP}|{ITALIC_GROUP}|\
         {BOLD_GROUP}|{STRIKE_GROUP}|{RULE_GROUP}|{INLINE_CODE_GROUP}|{LINK_GROUP}"
    );
    Regex::new(&pattern).expect("markdown grammar pattern is valid")
});

/// Secondary extraction splitting a matched link span into title and url.
static LINK_PARTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*)\]\((.*)\)").expect("link parts pattern is valid"));

impl MarkdownText {
    /// Parse markdown source into an element tree.
    pub fn parse(source: &str) -> Self {
        parse(source)
    }
}

/// Parse markdown source into an ordered tree of typed elements.
///
/// Total over all inputs: malformed or unterminated markup degrades to
/// plain [`ElementKind::Text`] nodes, and an empty string parses to an
/// empty tree.
///
/// # Example
///
/// ```
/// use inkmark::markdown::{self, ElementKind};
///
/// let parsed = markdown::parse("plain *italic* plain");
/// assert_eq!(parsed.elements.len(), 3);
/// assert_eq!(parsed.elements[1].kind, ElementKind::Italic);
/// assert_eq!(parsed.elements[1].text, "italic");
/// ```
pub fn parse(input: &str) -> MarkdownText {
    MarkdownText {
        elements: find_elements(input),
    }
}

/// Strip all markup from `input`, keeping only literal text.
///
/// `None` passes through. Used for search indexing and copy-to-clipboard,
/// where only the rendered characters matter.
///
/// # Example
///
/// ```
/// use inkmark::markdown;
///
/// assert_eq!(markdown::clear(Some("**_x_** y")), Some("x y".to_string()));
/// assert_eq!(markdown::clear(None), None);
/// ```
pub fn clear(input: Option<&str>) -> Option<String> {
    let input = input?;
    let text = parse(input).plain_text();
    trace!(chars = text.len(), "cleared markdown to plain text");
    Some(text)
}

/// Scan one recursion level of `input` into elements.
///
/// The cursor walks left to right; gaps between matches become `Text`
/// nodes, each match becomes a typed node with its delimiters stripped and
/// its content re-parsed, and the remainder after the last match becomes a
/// trailing `Text` node. Matches never overlap and never leave gaps.
fn find_elements(input: &str) -> Vec<Element> {
    let mut elements = Vec::new();
    let mut cursor = 0;
    let mut search_from = 0;

    while let Some(caps) = ELEMENT_PATTERN.captures_at(input, search_from) {
        let matched = caps.get(0).unwrap();
        let (start, end) = (matched.start(), matched.end());
        let span = matched.as_str();

        let Some(group) = (1..=GROUP_COUNT).find(|&group| caps.get(group).is_some()) else {
            // Unreachable if the alternation is built correctly: every
            // branch is a capture group.
            debug_assert!(false, "alternation matched without a capture group");
            error!("markdown alternation matched without a capture group, stopping scan");
            break;
        };

        // The regex crate has no lookaround, so the emphasis grammars match
        // relaxed candidates which are filtered here: a span bounded by the
        // same delimiter character on either side is not a real match.
        // Rejected starts are re-scanned one character later.
        if let Some(delimiter) = boundary_delimiter(group, span) {
            if !delimiter_boundary_ok(input, start, end, delimiter) {
                search_from = next_char_boundary(input, start);
                continue;
            }
        }

        if cursor < start {
            elements.push(Element::plain(&input[cursor..start]));
        }

        let element = match group {
            GROUP_UNORDERED_LIST => {
                let text = &span[2..];
                Element::new(ElementKind::UnorderedListItem, text, find_elements(text))
            }
            GROUP_HEADER => {
                let level = span.bytes().take_while(|&byte| byte == b'#').count();
                let text = &span[level + 1..];
                Element::new(ElementKind::Header { level: level as u8 }, text, Vec::new())
            }
            GROUP_QUOTE => {
                let text = &span[2..];
                Element::new(ElementKind::Quote, text, find_elements(text))
            }
            GROUP_ITALIC => {
                let text = &span[1..span.len() - 1];
                Element::new(ElementKind::Italic, text, find_elements(text))
            }
            GROUP_BOLD => {
                let text = &span[2..span.len() - 2];
                Element::new(ElementKind::Bold, text, find_elements(text))
            }
            GROUP_STRIKE => {
                let text = &span[2..span.len() - 2];
                Element::new(ElementKind::Strike, text, find_elements(text))
            }
            GROUP_RULE => Element::new(ElementKind::Rule, " ", Vec::new()),
            GROUP_INLINE_CODE => {
                let text = &span[1..span.len() - 1];
                Element::new(ElementKind::InlineCode, text, find_elements(text))
            }
            GROUP_LINK => link_element(span),
            _ => {
                debug_assert!(false, "unmapped grammar group {group}");
                error!(group, "markdown alternation matched an unmapped group, stopping scan");
                break;
            }
        };

        elements.push(element);
        cursor = end;
        search_from = end;
    }

    if cursor < input.len() {
        elements.push(Element::plain(&input[cursor..]));
    }

    elements
}

/// Split a matched link span into title and url.
///
/// The secondary extraction matches every span the primary link alternative
/// can produce. The degenerate line-start `](…)` form has no opening
/// bracket for it to find; that span degrades to plain text rather than
/// failing the parse.
fn link_element(span: &str) -> Element {
    if let Some(caps) = LINK_PARTS.captures(span) {
        let link = caps[2].to_string();
        Element::new(ElementKind::Link { link }, &caps[1], Vec::new())
    } else {
        debug_assert!(
            !span.contains('['),
            "link span with a bracket must split into parts: {span:?}"
        );
        Element::plain(span)
    }
}

/// Delimiter character whose boundary rule applies to `group`, if any.
///
/// Only the emphasis-style grammars carry lookaround in the original
/// grammar; the line-anchored ones are unambiguous.
fn boundary_delimiter(group: usize, span: &str) -> Option<char> {
    match group {
        GROUP_ITALIC | GROUP_BOLD => span.chars().next(),
        GROUP_STRIKE => Some('~'),
        GROUP_INLINE_CODE => Some('`'),
        _ => None,
    }
}

/// True if the match at `start..end` is not flanked by `delimiter`.
fn delimiter_boundary_ok(input: &str, start: usize, end: usize, delimiter: char) -> bool {
    let before = input[..start].chars().next_back();
    let after = input[end..].chars().next();
    before != Some(delimiter) && after != Some(delimiter)
}

fn next_char_boundary(input: &str, index: usize) -> usize {
    input[index..]
        .chars()
        .next()
        .map_or(input.len(), |ch| index + ch.len_utf8())
}
