//! Search index helpers.
//!
//! Pure functions behind in-article search:
//! - Word-wise substring lookup over cleared (markup-free) text
//! - Grouping of match spans by block bounds, so hits can be distributed
//!   over the rendered blocks that contain them
//!
//! Neither function knows about markdown; callers typically feed them the
//! output of [`crate::markdown::clear`].

use std::ops::Range;

/// Find the starting byte indexes of `query` within `text`.
///
/// The text is scanned word by word (split on single spaces) and each word
/// contributes at most its first case-insensitive occurrence. Returned
/// offsets index into `text` itself. Blank text or a blank query yields no
/// matches.
///
/// # Example
///
/// ```
/// use inkmark::search::indexes_of;
///
/// assert_eq!(indexes_of("Dog dog dogma", "dog"), vec![0, 4, 8]);
/// assert_eq!(indexes_of("nothing here", ""), Vec::<usize>::new());
/// ```
pub fn indexes_of(text: &str, query: &str) -> Vec<usize> {
    let mut indexes = Vec::new();
    if text.trim().is_empty() || query.trim().is_empty() {
        return indexes;
    }

    let mut offset = 0;
    for word in text.split(' ') {
        if let Some(position) = find_ignore_case(word, query) {
            indexes.push(offset + position);
        }
        // account for the split-off space
        offset += word.len() + 1;
    }
    indexes
}

/// Clip `spans` into per-bound groups.
///
/// For each bound the result holds every span overlapping it, clamped to
/// the bound's edges. One output group per bound, in bound order; a span
/// crossing a bound edge shows up clipped in both neighbours.
pub fn group_by_bounds(spans: &[Range<usize>], bounds: &[Range<usize>]) -> Vec<Vec<Range<usize>>> {
    bounds
        .iter()
        .map(|bound| {
            spans
                .iter()
                .filter(|span| span.end > bound.start && span.start < bound.end)
                .map(|span| span.start.max(bound.start)..span.end.min(bound.end))
                .collect()
        })
        .collect()
}

/// First case-insensitive occurrence of `needle` in `haystack`, as a byte
/// offset into `haystack`.
fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .char_indices()
        .map(|(index, _)| index)
        .find(|&index| starts_with_ignore_case(&haystack[index..], needle))
}

fn starts_with_ignore_case(haystack: &str, prefix: &str) -> bool {
    let mut haystack = haystack.chars().flat_map(char::to_lowercase);
    prefix
        .chars()
        .flat_map(char::to_lowercase)
        .all(|expected| haystack.next() == Some(expected))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexes_of_finds_each_word_hit() {
        assert_eq!(indexes_of("one two one", "one"), vec![0, 8]);
    }

    #[test]
    fn test_indexes_of_is_case_insensitive() {
        assert_eq!(indexes_of("Rust rUST RUST", "rust"), vec![0, 5, 10]);
    }

    #[test]
    fn test_indexes_of_offsets_point_into_text() {
        let text = "alpha beta gamma";
        let indexes = indexes_of(text, "ta");
        assert_eq!(indexes, vec![8]);
        assert_eq!(&text[8..10], "ta");
    }

    #[test]
    fn test_indexes_of_takes_first_hit_per_word() {
        // Word-wise scan: "papa" only reports the leading hit.
        assert_eq!(indexes_of("papa", "pa"), vec![0]);
    }

    #[test]
    fn test_indexes_of_blank_inputs() {
        assert!(indexes_of("", "x").is_empty());
        assert!(indexes_of("   ", "x").is_empty());
        assert!(indexes_of("text", "").is_empty());
        assert!(indexes_of("text", "  ").is_empty());
    }

    #[test]
    fn test_indexes_of_missing_query() {
        assert!(indexes_of("nothing to see", "zebra").is_empty());
    }

    #[test]
    fn test_indexes_of_mid_word_match() {
        assert_eq!(indexes_of("unmarked", "mark"), vec![2]);
    }

    #[test]
    fn test_group_by_bounds_one_group_per_bound() {
        let spans = [1..3, 5..7, 12..14];
        let bounds = [0..8, 8..16];
        let groups = group_by_bounds(&spans, &bounds);
        assert_eq!(groups, vec![vec![1..3, 5..7], vec![12..14]]);
    }

    #[test]
    fn test_group_by_bounds_clips_straddling_span() {
        let spans = [6..10];
        let bounds = [0..8, 8..16];
        let groups = group_by_bounds(&spans, &bounds);
        assert_eq!(groups, vec![vec![6..8], vec![8..10]]);
    }

    #[test]
    fn test_group_by_bounds_empty_inputs() {
        assert_eq!(group_by_bounds(&[], &[0..4]), vec![Vec::<Range<usize>>::new()]);
        assert!(group_by_bounds(&[0..4], &[]).is_empty());
    }

    #[test]
    fn test_group_by_bounds_span_touching_edge_is_excluded() {
        // Half-open spans: ending exactly at a bound start does not overlap it.
        let spans = [0..8];
        let bounds = [8..16];
        assert_eq!(group_by_bounds(&spans, &bounds), vec![Vec::<Range<usize>>::new()]);
    }
}
