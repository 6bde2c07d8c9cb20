//! Sheet-level rendering: ties merge resolution, geometry and cell records
//! together into one [`RenderPayload`].

use crate::cell_ref::column_label;
use crate::config::RenderOptions;
use crate::error::{Result, XlgridError};
use crate::layout::{resolve, GridGeometryBuilder};
use crate::measure::{ApproxMeasurer, TextMeasurer};
use crate::types::{RenderPayload, Workbook};

use super::cancel::CancelToken;
use super::cells::CellRenderModelBuilder;
use super::markup::sheet_markup;

#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::time::Instant;
    thread_local! {
        static START: Instant = Instant::now();
    }
    START.with(|s| s.elapsed().as_secs_f64() * 1000.0)
}

/// `A`, `B`, ... for columns `1..=cols`.
pub fn col_labels(cols: u32) -> Vec<String> {
    (1..=cols).map(column_label).collect()
}

/// `"1"`, `"2"`, ... for rows `1..=rows`.
pub fn row_labels(rows: u32) -> Vec<String> {
    (1..=rows).map(|r| r.to_string()).collect()
}

pub fn sheet_info(rows: u32, cols: u32) -> String {
    format!("{rows} rows × {cols} cols")
}

/// Renders one sheet of a workbook.
///
/// The renderer holds no per-sheet state; one instance can serve any number
/// of requests.
pub struct SheetRenderer<'a> {
    options: RenderOptions,
    measurer: Box<dyn TextMeasurer + 'a>,
    cancel: CancelToken,
}

impl<'a> SheetRenderer<'a> {
    /// Renderer with the character-count measurer and a fresh cancel token.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            measurer: Box::new(ApproxMeasurer),
            cancel: CancelToken::new(),
        }
    }

    #[must_use]
    pub fn with_measurer(mut self, measurer: Box<dyn TextMeasurer + 'a>) -> Self {
        self.measurer = measurer;
        self
    }

    #[must_use]
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render `sheet_name`, or the workbook's active sheet when `None`.
    ///
    /// Nothing is returned unless every stage succeeds.
    pub fn render(&self, workbook: &Workbook, sheet_name: Option<&str>) -> Result<RenderPayload> {
        let start = now_ms();
        self.options.validate()?;

        let sheet = match sheet_name {
            Some(name) => workbook
                .sheet_by_name(name)
                .ok_or_else(|| XlgridError::SheetNotFound(name.to_string()))?,
            None => workbook
                .active()
                .ok_or_else(|| XlgridError::SheetNotFound(String::new()))?,
        };

        if sheet.area() > self.options.max_cells {
            return Err(XlgridError::SheetTooLarge {
                rows: sheet.row_count,
                cols: sheet.col_count,
                limit: self.options.max_cells,
            });
        }

        let grid = resolve(&sheet.merges, sheet.row_count, sheet.col_count)?;
        let geometry = GridGeometryBuilder::new(&self.options).build(
            sheet,
            self.measurer.as_ref(),
            &self.cancel,
        )?;
        let layout_ms = now_ms() - start;

        let cells = CellRenderModelBuilder::new(&self.cancel).build(sheet, &grid)?;

        let col_labels = col_labels(sheet.col_count);
        let row_labels = row_labels(sheet.row_count);
        let markup = if self.options.include_markup {
            self.cancel.checkpoint()?;
            Some(sheet_markup(&cells, &geometry, &col_labels, &row_labels))
        } else {
            None
        };

        log::debug!(
            "rendered sheet {:?}: {} cells, layout {:.1}ms, total {:.1}ms",
            sheet.name,
            cells.len(),
            layout_ms,
            now_ms() - start
        );

        Ok(RenderPayload {
            total_width: geometry.total_width(),
            total_height: geometry.total_height(),
            wrap_padding_px: self.options.wrap_padding_px,
            info: sheet_info(sheet.row_count, sheet.col_count),
            sheets: workbook.sheet_names(),
            current_sheet: sheet.name.clone(),
            cells,
            col_widths: geometry.col_widths,
            row_heights: geometry.row_heights,
            col_labels,
            row_labels,
            markup,
        })
    }
}
