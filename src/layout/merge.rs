//! Merge resolution.
//!
//! Turns a sheet's merge ranges into a placement grid where every position is
//! either a normal cell, the primary (top-left) cell of a merge, or covered by
//! exactly one primary. Only merged positions are stored.
//!
//! Ranges are applied in order. A range that overlaps earlier ranges releases
//! each of them entirely before it is placed, so the last range wins and no
//! two primaries ever overlap.

use std::collections::HashMap;

use crate::error::{Result, XlgridError};
use crate::types::MergeRange;

/// What occupies one grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    #[default]
    Normal,
    /// Top-left cell of a merge spanning `row_span × col_span` positions.
    Primary { row_span: u32, col_span: u32 },
    /// Part of a merge whose primary cell sits at the origin.
    Covered { origin_row: u32, origin_col: u32 },
}

/// `rows × cols` placement map, 1-indexed. Positions absent from `merged`
/// are `Normal`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementGrid {
    rows: u32,
    cols: u32,
    merged: HashMap<(u32, u32), Placement>,
}

impl PlacementGrid {
    /// A grid with every position `Normal`.
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            rows,
            cols,
            merged: HashMap::new(),
        }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Placement at `(row, col)`, `None` outside the grid.
    pub fn get(&self, row: u32, col: u32) -> Option<Placement> {
        self.contains(row, col)
            .then(|| self.merged.get(&(row, col)).copied().unwrap_or_default())
    }

    /// Primary cells in row-major order as `(row, col, row_span, col_span)`.
    pub fn primaries(&self) -> impl Iterator<Item = (u32, u32, u32, u32)> {
        let mut primaries: Vec<_> = self
            .merged
            .iter()
            .filter_map(|(&(row, col), placement)| match *placement {
                Placement::Primary { row_span, col_span } => Some((row, col, row_span, col_span)),
                _ => None,
            })
            .collect();
        primaries.sort_unstable();
        primaries.into_iter()
    }

    fn contains(&self, row: u32, col: u32) -> bool {
        row > 0 && col > 0 && row <= self.rows && col <= self.cols
    }

    fn set(&mut self, row: u32, col: u32, placement: Placement) {
        if !self.contains(row, col) {
            return;
        }
        if placement == Placement::Normal {
            self.merged.remove(&(row, col));
        } else {
            self.merged.insert((row, col), placement);
        }
    }
}

/// Check that a range is upright and lies inside the sheet.
fn validate(range: &MergeRange, rows: u32, cols: u32) -> Result<()> {
    let inverted = range.start_row > range.end_row || range.start_col > range.end_col;
    let outside = range.start_row == 0
        || range.start_col == 0
        || range.end_row > rows
        || range.end_col > cols;
    if inverted || outside {
        return Err(XlgridError::InvalidMergeRange {
            range: range.to_string(),
            rows,
            cols,
        });
    }
    Ok(())
}

/// Every `(row, col)` a range covers, row-major.
fn positions(range: &MergeRange) -> impl Iterator<Item = (u32, u32)> {
    let (start_col, end_col) = (range.start_col, range.end_col);
    (range.start_row..=range.end_row)
        .flat_map(move |row| (start_col..=end_col).map(move |col| (row, col)))
}

/// Resolve merge ranges into a placement grid.
///
/// Every range is validated before any is applied; one bad range fails the
/// whole resolution.
pub fn resolve(ranges: &[MergeRange], rows: u32, cols: u32) -> Result<PlacementGrid> {
    for range in ranges {
        validate(range, rows, cols)?;
    }

    let mut grid = PlacementGrid::new(rows, cols);
    // Which applied range owns each merged position.
    let mut owner: HashMap<(u32, u32), usize> = HashMap::new();
    let mut applied: Vec<Option<MergeRange>> = vec![None; ranges.len()];

    for (id, range) in ranges.iter().enumerate() {
        let mut displaced: Vec<usize> = Vec::new();
        for pos in positions(range) {
            if let Some(&prev) = owner.get(&pos) {
                if !displaced.contains(&prev) {
                    displaced.push(prev);
                }
            }
        }

        for prev_id in displaced {
            let Some(prev) = applied.get_mut(prev_id).and_then(Option::take) else {
                continue;
            };
            log::warn!("merge {range} overlaps earlier merge {prev}; keeping {range}");
            for (row, col) in positions(&prev) {
                grid.set(row, col, Placement::Normal);
                owner.remove(&(row, col));
            }
        }

        let primary = Placement::Primary {
            row_span: range.row_span(),
            col_span: range.col_span(),
        };
        let covered = Placement::Covered {
            origin_row: range.start_row,
            origin_col: range.start_col,
        };
        for (row, col) in positions(range) {
            let is_origin = row == range.start_row && col == range.start_col;
            grid.set(row, col, if is_origin { primary } else { covered });
            owner.insert((row, col), id);
        }
        if let Some(slot) = applied.get_mut(id) {
            *slot = Some(*range);
        }
    }

    Ok(grid)
}
