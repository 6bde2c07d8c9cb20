//! Client-side view logic that runs after the payload is displayed.
//!
//! Both halves are pure functions over payload data so the same code backs
//! the wasm exports and native tests.

mod reconcile;
mod search;

pub use reconcile::{
    measurement_targets, CellMeasurement, MeasurementTarget, Reconciliation, RowAdjustment,
    RowHeightReconciler, DEFAULT_WRAP_PADDING_PX,
};
pub use search::{highlight, search, SearchMatch};
