//! Measurement-based row height correction.
//!
//! The server only estimates row heights. Once the client has laid out real
//! fonts it reports the content height of wrapped cells, and rows that
//! overflow are grown to fit. Rows are never shrunk below the estimate.

use serde::{Deserialize, Serialize};

use crate::config::RenderOptions;
use crate::layout::f64_ceil_to_u32;
use crate::types::{RenderCell, RenderPayload};

/// Padding added to the tallest measured content of a row, in pixels.
pub const DEFAULT_WRAP_PADDING_PX: u32 = 16;

/// A cell the client has to measure after layout.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementTarget {
    pub row: u32,
    pub col: u32,
}

/// Rendered content height of one cell as reported by the client.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CellMeasurement {
    pub row: u32,
    pub content_height: f64,
    #[serde(default)]
    pub wrap: bool,
}

/// One row whose height changed.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RowAdjustment {
    pub row: u32,
    pub from: u32,
    pub to: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Reconciliation {
    /// Display heights, same length as the estimate.
    pub row_heights: Vec<u32>,
    /// Rows that grew, in row order.
    pub adjusted: Vec<RowAdjustment>,
}

/// Wrap-enabled cells that occupy a single row.
///
/// Cells spanning several rows are skipped: their height is shared and
/// cannot be attributed to one row.
pub fn measurement_targets(cells: &[RenderCell]) -> Vec<MeasurementTarget> {
    cells
        .iter()
        .filter(|cell| cell.style.wrap && cell.row_span == 1)
        .map(|cell| MeasurementTarget {
            row: cell.row,
            col: cell.col,
        })
        .collect()
}

#[derive(Debug, Clone, Copy)]
pub struct RowHeightReconciler {
    pub padding: u32,
}

impl Default for RowHeightReconciler {
    fn default() -> Self {
        Self {
            padding: DEFAULT_WRAP_PADDING_PX,
        }
    }
}

impl RowHeightReconciler {
    pub fn new(padding: u32) -> Self {
        Self { padding }
    }

    /// Reconciler using the configured `wrap_padding_px`.
    pub fn from_options(options: &RenderOptions) -> Self {
        Self::new(options.wrap_padding_px)
    }

    /// Reconciler matching the options a payload was rendered with.
    pub fn for_payload(payload: &RenderPayload) -> Self {
        Self::new(payload.wrap_padding_px)
    }

    /// Grow rows so wrapped content fits.
    ///
    /// For each row with at least one wrap-enabled measurement the needed
    /// height is `ceil(tallest) + padding`; the row takes it only when it is
    /// larger than the estimate. Measurements for unknown rows, non-wrapping
    /// cells or non-finite heights are ignored.
    pub fn reconcile(&self, estimated: &[u32], measurements: &[CellMeasurement]) -> Reconciliation {
        let mut tallest: Vec<Option<f64>> = vec![None; estimated.len()];
        for m in measurements {
            if !m.wrap || !m.content_height.is_finite() {
                continue;
            }
            let Some(slot) = (m.row as usize)
                .checked_sub(1)
                .and_then(|idx| tallest.get_mut(idx))
            else {
                continue;
            };
            let height = m.content_height.max(0.0);
            *slot = Some(slot.map_or(height, |h| h.max(height)));
        }

        let mut row_heights = estimated.to_vec();
        let mut adjusted = Vec::new();
        for ((row, height), measured) in (1_u32..).zip(row_heights.iter_mut()).zip(tallest) {
            let Some(measured) = measured else {
                continue;
            };
            let needed = f64_ceil_to_u32(measured).saturating_add(self.padding);
            if needed > *height {
                adjusted.push(RowAdjustment {
                    row,
                    from: *height,
                    to: needed,
                });
                *height = needed;
            }
        }

        Reconciliation {
            row_heights,
            adjusted,
        }
    }
}
