//! Rendering: from a decoded sheet to a client payload.
//!
//! This module provides:
//! - Row-major render records with display-ready styles
//! - HTML escaping and optional grid/header markup
//! - Sheet selection, labels and payload assembly
//! - Cooperative cancellation

mod cancel;
mod cells;
pub mod escape;
pub mod markup;
mod sheet;

pub use cancel::CancelToken;
pub use cells::{render_style, CellRenderModelBuilder};
pub use escape::{escape_html, unescape_html};
pub use sheet::{col_labels, row_labels, sheet_info, SheetRenderer};
