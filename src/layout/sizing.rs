//! Column sizing policies.
//!
//! Each policy turns a sheet into one pixel width per column. The geometry
//! builder picks exactly one policy per sheet.

use crate::error::Result;
use crate::measure::TextMeasurer;
use crate::render::CancelToken;
use crate::types::Sheet;

use super::{f64_ceil_to_u32, f64_round_to_u32};

/// Upper bound for character-count widths when no maximum is configured.
pub const CHAR_COUNT_MAX_WIDTH: u32 = 400;

/// Computes pixel widths for every column of a sheet.
pub trait SizingPolicy: Sync {
    /// Short name for logging.
    fn name(&self) -> &'static str;

    /// One width per column, `sheet.col_count` entries, each at least the
    /// policy's minimum.
    fn column_widths(
        &self,
        sheet: &Sheet,
        measurer: &dyn TextMeasurer,
        cancel: &CancelToken,
    ) -> Result<Vec<u32>>;
}

/// Declared width converted to pixels: `round(chars * factor)`.
fn declared_px(sheet: &Sheet, col: u32, width_factor: f64) -> u32 {
    let chars = sheet
        .declared_col_width(col)
        .unwrap_or(sheet.default_col_width);
    f64_round_to_u32(chars * width_factor)
}

/// Declared width raised to the widest measured text in the column.
#[derive(Debug, Clone, Copy)]
pub struct ContentAware {
    pub min_width: u32,
    pub max_width: Option<u32>,
    pub width_factor: f64,
    pub font_size_pt: f64,
}

impl SizingPolicy for ContentAware {
    fn name(&self) -> &'static str {
        "content-aware"
    }

    fn column_widths(
        &self,
        sheet: &Sheet,
        measurer: &dyn TextMeasurer,
        cancel: &CancelToken,
    ) -> Result<Vec<u32>> {
        let measured = measure_columns(sheet, measurer, self.font_size_pt, cancel)?;

        let mut widths = Vec::with_capacity(measured.len());
        for (col, widest) in (1..=sheet.col_count).zip(measured) {
            cancel.checkpoint()?;
            let mut width = declared_px(sheet, col, self.width_factor).max(self.min_width);
            width = width.max(f64_ceil_to_u32(widest));
            if let Some(max) = self.max_width {
                width = width.min(max.max(self.min_width));
            }
            widths.push(width);
        }
        Ok(widths)
    }
}

/// Longest text length (in characters) times a fixed character width.
#[derive(Debug, Clone, Copy)]
pub struct CharCount {
    pub min_width: u32,
    pub max_width: u32,
    pub char_width_px: u32,
}

impl SizingPolicy for CharCount {
    fn name(&self) -> &'static str {
        "char-count"
    }

    fn column_widths(
        &self,
        sheet: &Sheet,
        _measurer: &dyn TextMeasurer,
        cancel: &CancelToken,
    ) -> Result<Vec<u32>> {
        let mut longest = vec![0_u32; sheet.col_count as usize];
        for row in 1..=sheet.row_count {
            cancel.checkpoint()?;
            for cell in sheet.row_cells(row) {
                let Some(slot) = column_slot(&mut longest, cell.c) else {
                    continue;
                };
                let chars = u32::try_from(cell.v.trim().chars().count()).unwrap_or(u32::MAX);
                *slot = (*slot).max(chars);
            }
        }

        let upper = self.max_width.max(self.min_width);
        Ok(longest
            .into_iter()
            .map(|chars| {
                chars
                    .saturating_mul(self.char_width_px)
                    .clamp(self.min_width, upper)
            })
            .collect())
    }
}

/// Declared width only.
#[derive(Debug, Clone, Copy)]
pub struct Declared {
    pub min_width: u32,
    pub width_factor: f64,
}

impl SizingPolicy for Declared {
    fn name(&self) -> &'static str {
        "declared"
    }

    fn column_widths(
        &self,
        sheet: &Sheet,
        _measurer: &dyn TextMeasurer,
        cancel: &CancelToken,
    ) -> Result<Vec<u32>> {
        let mut widths = Vec::with_capacity(sheet.col_count as usize);
        for col in 1..=sheet.col_count {
            cancel.checkpoint()?;
            widths.push(declared_px(sheet, col, self.width_factor).max(self.min_width));
        }
        Ok(widths)
    }
}

fn column_slot<T>(columns: &mut [T], col: u32) -> Option<&mut T> {
    (col as usize)
        .checked_sub(1)
        .and_then(|idx| columns.get_mut(idx))
}

/// Fold the widest measurement of one row into the per-column maxima.
fn fold_row(
    widest: &mut [f64],
    sheet: &Sheet,
    row: u32,
    measurer: &dyn TextMeasurer,
    font_size_pt: f64,
) {
    for cell in sheet.row_cells(row) {
        let text = cell.v.trim();
        if text.is_empty() {
            continue;
        }
        if let Some(slot) = column_slot(widest, cell.c) {
            *slot = slot.max(measurer.measure(text, font_size_pt));
        }
    }
}

/// Widest measured text per column, `0.0` for columns with no text.
#[cfg(not(feature = "parallel"))]
fn measure_columns(
    sheet: &Sheet,
    measurer: &dyn TextMeasurer,
    font_size_pt: f64,
    cancel: &CancelToken,
) -> Result<Vec<f64>> {
    let mut widest = vec![0.0_f64; sheet.col_count as usize];
    for row in 1..=sheet.row_count {
        cancel.checkpoint()?;
        fold_row(&mut widest, sheet, row, measurer, font_size_pt);
    }
    Ok(widest)
}

/// Widest measured text per column, measured row by row on the rayon pool.
#[cfg(feature = "parallel")]
fn measure_columns(
    sheet: &Sheet,
    measurer: &dyn TextMeasurer,
    font_size_pt: f64,
    cancel: &CancelToken,
) -> Result<Vec<f64>> {
    use rayon::prelude::*;

    let cols = sheet.col_count as usize;
    (1..=sheet.row_count)
        .into_par_iter()
        .try_fold(
            || vec![0.0_f64; cols],
            |mut widest, row| -> Result<Vec<f64>> {
                cancel.checkpoint()?;
                fold_row(&mut widest, sheet, row, measurer, font_size_pt);
                Ok(widest)
            },
        )
        .try_reduce(
            || vec![0.0_f64; cols],
            |mut left, right| -> Result<Vec<f64>> {
                for (l, r) in left.iter_mut().zip(right) {
                    *l = l.max(r);
                }
                Ok(left)
            },
        )
}
