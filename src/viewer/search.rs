//! Text search over rendered cells.
//!
//! Matching is case-insensitive and works on the unescaped cell text, so a
//! query for `&` finds `&amp;` in the payload. Offsets are in characters.

use serde::{Deserialize, Serialize};

use crate::render::{escape_html, unescape_html};
use crate::types::RenderCell;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchMatch {
    pub row: u32,
    pub col: u32,
    /// Character offset of the match in the unescaped text.
    pub start: usize,
    /// Character offset one past the match.
    pub end: usize,
    /// The match the view should scroll to.
    pub first: bool,
    /// Cell content with the match wrapped in `<mark>`.
    pub html: String,
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Character offset of the first case-insensitive occurrence of `needle`.
fn find_ignore_case(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|window| {
        window
            .iter()
            .zip(needle)
            .all(|(&h, &n)| chars_eq_ignore_case(h, n))
    })
}

/// Wrap characters `start..end` of `text` in `<mark>`, escaping every part.
pub fn highlight(text: &str, start: usize, end: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    let end = end.min(chars.len());
    let start = start.min(end);
    let part = |from: usize, to: usize| -> String {
        chars.get(from..to).unwrap_or_default().iter().collect()
    };
    format!(
        "{}<mark>{}</mark>{}",
        escape_html(&part(0, start)),
        escape_html(&part(start, end)),
        escape_html(&part(end, chars.len()))
    )
}

/// Find the first occurrence of `query` in each cell, in row-major order.
///
/// The query is trimmed; an empty query matches nothing.
pub fn search(cells: &[RenderCell], query: &str) -> Vec<SearchMatch> {
    let needle: Vec<char> = query.trim().chars().collect();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut ordered: Vec<&RenderCell> = cells.iter().collect();
    ordered.sort_by_key(|cell| (cell.row, cell.col));

    let mut matches = Vec::new();
    for cell in ordered {
        let text = unescape_html(&cell.text);
        let haystack: Vec<char> = text.chars().collect();
        let Some(start) = find_ignore_case(&haystack, &needle) else {
            continue;
        };
        let end = start + needle.len();
        matches.push(SearchMatch {
            row: cell.row,
            col: cell.col,
            start,
            end,
            first: matches.is_empty(),
            html: highlight(&text, start, end),
        });
    }
    matches
}
