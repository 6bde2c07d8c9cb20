//! Merged cell resolution through the full render pipeline.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

mod common;
mod fixtures;

use common::{assert_cell_text, assert_full_coverage, find_cell, get_cell, render_default};
use fixtures::{SheetBuilder, XlsxBuilder};
use xlgrid::layout::{resolve, Placement};
use xlgrid::{MergeRange, RenderOptions, Sheet, SheetRenderer, Workbook, XlgridError};

fn grid_3x3() -> SheetBuilder {
    let mut sheet = SheetBuilder::new("Sheet1");
    for (i, r) in ["A1", "B1", "C1", "A2", "B2", "C2", "A3", "B3", "C3"]
        .iter()
        .enumerate()
    {
        sheet = sheet.cell(r, format!("v{i}"), None);
    }
    sheet
}

#[test]
fn test_vertical_merge() {
    let xlsx = XlsxBuilder::new().sheet(grid_3x3().merge("A1:A3")).build();
    let payload = render_default(&xlsx);

    assert_eq!(payload.cells.len(), 7);
    let primary = get_cell(&payload, 1, 1);
    assert_eq!((primary.row_span, primary.col_span), (3, 1));
    assert!(primary.is_merged_primary);
    assert!(find_cell(&payload, 2, 1).is_none());
    assert!(find_cell(&payload, 3, 1).is_none());
    assert_full_coverage(&payload);
}

#[test]
fn test_block_merge_keeps_primary_text_only() {
    let xlsx = XlsxBuilder::new().sheet(grid_3x3().merge("B2:C3")).build();
    let payload = render_default(&xlsx);

    assert_eq!(payload.cells.len(), 6);
    assert_cell_text(&payload, 2, 2, "v4");
    assert!(payload.cells.iter().all(|c| c.text != "v5" && c.text != "v8"));
    assert_full_coverage(&payload);
}

#[test]
fn test_merge_extends_sheet() {
    let xlsx = XlsxBuilder::new()
        .sheet(SheetBuilder::new("Sheet1").cell("A1", "wide", None).merge("A1:D2"))
        .build();
    let payload = render_default(&xlsx);

    assert_eq!(payload.col_widths.len(), 4);
    assert_eq!(payload.row_heights.len(), 2);
    assert_eq!(payload.cells.len(), 1);
    assert_full_coverage(&payload);
}

#[test]
fn test_overlapping_merges_last_wins() {
    let xlsx = XlsxBuilder::new()
        .sheet(grid_3x3().merge("A1:B2").merge("B2:C3"))
        .build();
    let payload = render_default(&xlsx);

    let later = get_cell(&payload, 2, 2);
    assert_eq!((later.row_span, later.col_span), (2, 2));
    let released = get_cell(&payload, 1, 1);
    assert_eq!((released.row_span, released.col_span), (1, 1));
    assert!(!released.is_merged_primary);
    assert_eq!(payload.cells.len(), 6);
    assert_full_coverage(&payload);
}

#[test]
fn test_disjoint_merges() {
    let xlsx = XlsxBuilder::new()
        .sheet(grid_3x3().merge("A1:B1").merge("C2:C3"))
        .build();
    let payload = render_default(&xlsx);
    let primaries: Vec<(u32, u32)> = payload
        .cells
        .iter()
        .filter(|c| c.is_merged_primary)
        .map(|c| (c.row, c.col))
        .collect();
    assert_eq!(primaries, vec![(1, 1), (2, 3)]);
    assert_eq!(payload.cells.len(), 7);
}

#[test]
fn test_single_cell_merge_is_primary() {
    let xlsx = XlsxBuilder::new().sheet(grid_3x3().merge("B2:B2")).build();
    let payload = render_default(&xlsx);
    let cell = get_cell(&payload, 2, 2);
    assert!(cell.is_merged_primary);
    assert_eq!((cell.row_span, cell.col_span), (1, 1));
    assert_eq!(payload.cells.len(), 9);
}

#[test]
fn test_merge_outside_sheet_fails_render() {
    let mut sheet = Sheet::with_dimensions("Sheet1", 2, 2);
    sheet.add_merge(MergeRange::new(1, 1, 3, 1));
    let workbook = Workbook::new(vec![sheet]);

    let err = SheetRenderer::new(RenderOptions::default())
        .render(&workbook, None)
        .unwrap_err();
    assert!(matches!(err, XlgridError::InvalidMergeRange { ref range, .. } if range == "A1:A3"));
    assert_eq!(err.status_code(), 422);
}

#[test]
fn test_resolver_placements() {
    let grid = resolve(&[MergeRange::new(2, 2, 3, 4)], 4, 4).unwrap();
    assert_eq!(grid.get(1, 1), Some(Placement::Normal));
    assert_eq!(
        grid.get(2, 2),
        Some(Placement::Primary {
            row_span: 2,
            col_span: 3
        })
    );
    assert_eq!(
        grid.get(3, 4),
        Some(Placement::Covered {
            origin_row: 2,
            origin_col: 2
        })
    );
    assert_eq!(grid.get(5, 1), None);
    assert_eq!(grid.primaries().collect::<Vec<_>>(), vec![(2, 2, 2, 3)]);
}
