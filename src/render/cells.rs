//! Flattening a sheet into row-major render records.

use crate::color::{is_black, is_white};
use crate::error::Result;
use crate::layout::{Placement, PlacementGrid};
use crate::types::{CellStyle, RenderCell, RenderStyle, Sheet};

use super::cancel::CancelToken;
use super::escape::escape_html;

/// Display-ready style: default colors are dropped.
pub fn render_style(style: &CellStyle) -> RenderStyle {
    RenderStyle {
        bold: style.bold,
        italic: style.italic,
        color: style.font_color.clone().filter(|c| !is_black(c)),
        background: style.fill_color.clone().filter(|c| !is_white(c)),
        align_h: style.align_h,
        align_v: style.align_v,
        wrap: style.wrap,
    }
}

/// Builds one [`RenderCell`] per visible grid position.
#[derive(Debug, Clone, Copy)]
pub struct CellRenderModelBuilder<'a> {
    cancel: &'a CancelToken,
}

impl<'a> CellRenderModelBuilder<'a> {
    pub fn new(cancel: &'a CancelToken) -> Self {
        Self { cancel }
    }

    /// Walk the grid row by row. Covered positions produce nothing, merge
    /// primaries carry their spans.
    pub fn build(&self, sheet: &Sheet, grid: &PlacementGrid) -> Result<Vec<RenderCell>> {
        let visible = usize::try_from(sheet.area()).unwrap_or(usize::MAX);
        let mut cells = Vec::with_capacity(visible.min(1 << 20));

        for row in 1..=grid.rows() {
            self.cancel.checkpoint()?;
            for col in 1..=grid.cols() {
                let (row_span, col_span, is_merged_primary) = match grid.get(row, col) {
                    Some(Placement::Covered { .. }) | None => continue,
                    Some(Placement::Primary { row_span, col_span }) => (row_span, col_span, true),
                    Some(Placement::Normal) => (1, 1, false),
                };
                cells.push(RenderCell {
                    row,
                    col,
                    row_span,
                    col_span,
                    text: escape_html(sheet.value(row, col)).into_owned(),
                    style: render_style(sheet.style(row, col)),
                    is_merged_primary,
                });
            }
        }

        Ok(cells)
    }
}
