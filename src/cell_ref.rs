//! A1-style cell references and spreadsheet column labels.
//!
//! Everything here is 1-indexed: `A1` is `(row 1, col 1)`.

use crate::types::MergeRange;

/// Parse a cell reference like "B3" into `(row, col)`. `$` anchors are ignored.
pub fn parse_cell_ref(cell_ref: &str) -> Option<(u32, u32)> {
    parse_cell_ref_bytes(cell_ref.trim().as_bytes())
}

/// Bytes equivalent of [`parse_cell_ref`] for raw quick-xml attribute values.
pub fn parse_cell_ref_bytes(ref_bytes: &[u8]) -> Option<(u32, u32)> {
    let mut col: u32 = 0;
    let mut row: u32 = 0;
    let mut saw_col = false;
    let mut saw_row = false;

    for &b in ref_bytes {
        if b == b'$' {
            continue;
        }
        if b.is_ascii_alphabetic() {
            if saw_row {
                return None;
            }
            let upper = b.to_ascii_uppercase();
            col = col
                .checked_mul(26)?
                .checked_add(u32::from(upper - b'A') + 1)?;
            saw_col = true;
        } else if b.is_ascii_digit() {
            row = row.checked_mul(10)?.checked_add(u32::from(b - b'0'))?;
            saw_row = true;
        } else {
            return None;
        }
    }

    if !saw_col || !saw_row || row == 0 {
        return None;
    }

    Some((row, col))
}

/// Parse a range like "A1:C4" (or a single cell "A1") into a [`MergeRange`].
///
/// Corners are normalized so that start <= end.
pub fn parse_range(range: &str) -> Option<MergeRange> {
    let (start, end) = range.split_once(':').unwrap_or((range, range));
    let (r1, c1) = parse_cell_ref(start)?;
    let (r2, c2) = parse_cell_ref(end)?;
    Some(MergeRange {
        start_row: r1.min(r2),
        start_col: c1.min(c2),
        end_row: r1.max(r2),
        end_col: c1.max(c2),
    })
}

/// Spreadsheet column label for a 1-indexed column (bijective base-26).
///
/// `1 -> "A"`, `26 -> "Z"`, `27 -> "AA"`, `702 -> "ZZ"`, `703 -> "AAA"`.
/// Column 0 has no label and yields an empty string.
pub fn column_label(col: u32) -> String {
    let mut letters = Vec::new();
    let mut n = col;
    while n > 0 {
        n -= 1;
        letters.push(b'A' + u8::try_from(n % 26).unwrap_or(0));
        n /= 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

/// Inverse of [`column_label`]. Returns `None` for empty or non-alphabetic input.
pub fn column_index(label: &str) -> Option<u32> {
    if label.is_empty() {
        return None;
    }
    let mut col: u32 = 0;
    for b in label.bytes() {
        if !b.is_ascii_alphabetic() {
            return None;
        }
        col = col
            .checked_mul(26)?
            .checked_add(u32::from(b.to_ascii_uppercase() - b'A') + 1)?;
    }
    Some(col)
}

/// Format `(row, col)` back into an A1 reference.
pub fn format_cell_ref(row: u32, col: u32) -> String {
    format!("{}{row}", column_label(col))
}
