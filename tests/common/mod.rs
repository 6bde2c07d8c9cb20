//! Common test utilities and assertion helpers.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use xlgrid::{decode, render_bytes, RenderCell, RenderOptions, RenderPayload, Workbook};

pub use super::fixtures::*;

/// Decode XLSX bytes, panicking on failure.
#[must_use]
pub fn decode_xlsx(data: &[u8]) -> Workbook {
    decode(data, Some("test.xlsx")).expect("Failed to decode XLSX")
}

/// Render the active sheet with default options.
#[must_use]
pub fn render_default(data: &[u8]) -> RenderPayload {
    render_with(data, None, &RenderOptions::default())
}

/// Render a sheet with explicit options.
#[must_use]
pub fn render_with(data: &[u8], sheet: Option<&str>, options: &RenderOptions) -> RenderPayload {
    render_bytes(data, Some("test.xlsx"), sheet, options, None).expect("Failed to render")
}

/// The render record anchored at `(row, col)`, if any.
#[must_use]
pub fn find_cell(payload: &RenderPayload, row: u32, col: u32) -> Option<&RenderCell> {
    payload.cells.iter().find(|c| c.row == row && c.col == col)
}

/// The render record anchored at `(row, col)`; panics when absent.
#[must_use]
pub fn get_cell(payload: &RenderPayload, row: u32, col: u32) -> &RenderCell {
    find_cell(payload, row, col)
        .unwrap_or_else(|| panic!("no render record at row {row}, col {col}"))
}

pub fn assert_cell_text(payload: &RenderPayload, row: u32, col: u32, expected: &str) {
    let cell = get_cell(payload, row, col);
    assert_eq!(
        cell.text, expected,
        "text at row {row}, col {col}: expected {expected:?}, got {:?}",
        cell.text
    );
}

/// Every grid position is covered by exactly one record.
pub fn assert_full_coverage(payload: &RenderPayload) {
    let rows = payload.row_heights.len();
    let cols = payload.col_widths.len();
    let mut seen = vec![0_u32; rows * cols];
    for cell in &payload.cells {
        for r in cell.row..cell.row + cell.row_span {
            for c in cell.col..cell.col + cell.col_span {
                let idx = (r as usize - 1) * cols + (c as usize - 1);
                seen[idx] += 1;
            }
        }
    }
    assert!(
        seen.iter().all(|&n| n == 1),
        "grid positions not covered exactly once: {seen:?}"
    );
}
