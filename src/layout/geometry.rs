//! Pixel geometry for a sheet.
//!
//! Column widths and row heights are computed once per render and are
//! read-only input to cell placement and markup.

use crate::config::{RenderOptions, SizingMode};
use crate::error::Result;
use crate::measure::TextMeasurer;
use crate::render::CancelToken;
use crate::types::Sheet;

use super::sizing::{CharCount, ContentAware, Declared, SizingPolicy, CHAR_COUNT_MAX_WIDTH};
use super::f64_round_to_u32;

/// Final column widths and row heights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridGeometry {
    /// Width of each column in pixels (`col_widths[0]` is column 1)
    pub col_widths: Vec<u32>,
    /// Height of each row in pixels (`row_heights[0]` is row 1)
    pub row_heights: Vec<u32>,
}

fn px_list(sizes: &[u32]) -> String {
    sizes
        .iter()
        .map(|size| format!("{size}px"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn sum(sizes: &[u32]) -> u64 {
    sizes.iter().copied().map(u64::from).sum()
}

impl GridGeometry {
    pub fn new(col_widths: Vec<u32>, row_heights: Vec<u32>) -> Self {
        Self {
            col_widths,
            row_heights,
        }
    }

    pub fn col_count(&self) -> usize {
        self.col_widths.len()
    }

    pub fn row_count(&self) -> usize {
        self.row_heights.len()
    }

    pub fn total_width(&self) -> u64 {
        sum(&self.col_widths)
    }

    pub fn total_height(&self) -> u64 {
        sum(&self.row_heights)
    }

    /// `grid-template-columns` value, e.g. `"60px 151px"`.
    pub fn template_columns(&self) -> String {
        px_list(&self.col_widths)
    }

    /// `grid-template-rows` value.
    pub fn template_rows(&self) -> String {
        px_list(&self.row_heights)
    }
}

/// Builds [`GridGeometry`] for a sheet under one set of [`RenderOptions`].
#[derive(Debug, Clone, Copy)]
pub struct GridGeometryBuilder<'a> {
    options: &'a RenderOptions,
}

impl<'a> GridGeometryBuilder<'a> {
    pub fn new(options: &'a RenderOptions) -> Self {
        Self { options }
    }

    /// The sizing policy for this sheet. `Auto` switches to character
    /// counting once the sheet has more cells than the threshold.
    pub fn policy_for(&self, sheet: &Sheet) -> Box<dyn SizingPolicy> {
        let options = self.options;
        let mode = match options.sizing {
            SizingMode::Auto if sheet.area() > options.auto_char_count_threshold => {
                SizingMode::CharCount
            }
            SizingMode::Auto => SizingMode::ContentAware,
            other => other,
        };

        match mode {
            SizingMode::CharCount => Box::new(CharCount {
                min_width: options.min_col_width,
                max_width: options.max_col_width.unwrap_or(CHAR_COUNT_MAX_WIDTH),
                char_width_px: options.char_width_px,
            }),
            SizingMode::Declared => Box::new(Declared {
                min_width: options.min_col_width,
                width_factor: options.width_factor,
            }),
            SizingMode::Auto | SizingMode::ContentAware => Box::new(ContentAware {
                min_width: options.min_col_width,
                max_width: options.max_col_width,
                width_factor: options.width_factor,
                font_size_pt: options.font_size_pt,
            }),
        }
    }

    pub fn build_widths(
        &self,
        sheet: &Sheet,
        measurer: &dyn TextMeasurer,
        cancel: &CancelToken,
    ) -> Result<Vec<u32>> {
        let policy = self.policy_for(sheet);
        log::debug!(
            "sheet {:?}: {} column sizing over {}x{}",
            sheet.name,
            policy.name(),
            sheet.row_count,
            sheet.col_count
        );
        policy.column_widths(sheet, measurer, cancel)
    }

    /// Declared row heights (points) converted to pixels. A zero height
    /// counts as undeclared.
    pub fn build_heights(&self, sheet: &Sheet) -> Vec<u32> {
        let options = self.options;
        (1..=sheet.row_count)
            .map(|row| {
                let points = sheet
                    .declared_row_height(row)
                    .filter(|pt| *pt > 0.0)
                    .unwrap_or(options.default_row_height_pt);
                f64_round_to_u32(points * options.row_height_scale).max(options.min_row_height)
            })
            .collect()
    }

    pub fn build(
        &self,
        sheet: &Sheet,
        measurer: &dyn TextMeasurer,
        cancel: &CancelToken,
    ) -> Result<GridGeometry> {
        let widths = self.build_widths(sheet, measurer, cancel)?;
        cancel.checkpoint()?;
        let heights = self.build_heights(sheet);
        Ok(GridGeometry::new(widths, heights))
    }
}
