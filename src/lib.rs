//! xlgrid - spreadsheet grid layout for the web
//!
//! Decodes XLSX, CSV and TSV files and lays one sheet out as an HTML grid:
//! - Column widths from declared sizes or measured content
//! - Row heights from declared sizes, grown later by client measurement
//! - Merged cells resolved into spans, covered cells suppressed
//! - Styled, escaped cell records with optional pre-built markup
//!
//! # Usage (Rust)
//!
//! ```no_run
//! use xlgrid::{render_bytes, RenderOptions};
//!
//! let data = std::fs::read("report.xlsx").unwrap();
//! let payload = render_bytes(&data, Some("report.xlsx"), None, &RenderOptions::default(), None).unwrap();
//! println!("{} cells, {}", payload.cells.len(), payload.info);
//! ```
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { render_sheet_to_js, reconcile_row_heights } from 'xlgrid';
//! await init();
//! const payload = render_sheet_to_js(bytes, 'report.xlsx', null, '{"includeMarkup":true}', null);
//! ```

pub mod cell_ref;
pub mod color;
pub mod config;
pub mod csv;
pub mod error;
pub mod layout;
pub mod measure;
pub mod parser;
pub mod render;
pub mod response;
pub mod types;
pub mod viewer;
pub mod xml_helpers;

use wasm_bindgen::prelude::*;

pub use config::{RenderOptions, SizingMode};
pub use error::{Result, XlgridError};
pub use parser::decode;
pub use render::{CancelToken, SheetRenderer};
pub use response::{respond, RenderResponse};
pub use types::*;

/// Decode `data` and render one sheet.
///
/// `file_name` only steers delimiter detection for non-ZIP input.
/// `sheet_name` selects a sheet, the workbook's active sheet otherwise.
/// `font` is TrueType/OpenType data used for content measurement.
///
/// # Errors
/// Decode failures, an unknown sheet, invalid merges or invalid options.
pub fn render_bytes(
    data: &[u8],
    file_name: Option<&str>,
    sheet_name: Option<&str>,
    options: &RenderOptions,
    font: Option<&[u8]>,
) -> Result<RenderPayload> {
    let workbook = decode(data, file_name)?;
    SheetRenderer::new(options.clone())
        .with_measurer(measure::select_measurer(font))
        .render(&workbook, sheet_name)
}

/// Options from optional JSON; absent or blank input means defaults.
fn options_from_json(json: Option<&str>) -> Result<RenderOptions> {
    match json.map(str::trim).filter(|s| !s.is_empty()) {
        Some(json) => RenderOptions::from_json(json),
        None => Ok(RenderOptions::default()),
    }
}

fn render_request(
    data: &[u8],
    file_name: Option<&str>,
    sheet_name: Option<&str>,
    options_json: Option<&str>,
    font: Option<&[u8]>,
) -> Result<RenderPayload> {
    let options = options_from_json(options_json)?;
    render_bytes(data, file_name, sheet_name, &options, font)
}

/// Render a sheet and return the payload as a JSON string
///
/// # Errors
/// Returns an error if the file cannot be decoded or the sheet does not exist.
#[wasm_bindgen]
pub fn render_sheet(
    data: &[u8],
    file_name: Option<String>,
    sheet_name: Option<String>,
    options_json: Option<String>,
    font: Option<Vec<u8>>,
) -> std::result::Result<String, JsValue> {
    console_error_panic_hook::set_once();
    let payload = render_request(
        data,
        file_name.as_deref(),
        sheet_name.as_deref(),
        options_json.as_deref(),
        font.as_deref(),
    )?;

    serde_json::to_string(&payload)
        .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {e}")))
}

/// Render a sheet and return the payload as a `JsValue`
///
/// This avoids a JSON round trip when the result is used directly in JavaScript.
///
/// # Errors
/// Returns an error if the file cannot be decoded or the sheet does not exist.
#[wasm_bindgen]
pub fn render_sheet_to_js(
    data: &[u8],
    file_name: Option<String>,
    sheet_name: Option<String>,
    options_json: Option<String>,
    font: Option<Vec<u8>>,
) -> std::result::Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();
    let payload = render_request(
        data,
        file_name.as_deref(),
        sheet_name.as_deref(),
        options_json.as_deref(),
        font.as_deref(),
    )?;

    serde_wasm_bindgen::to_value(&payload)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Render a sheet into `{status, body}`; errors become a non-2xx status.
///
/// # Errors
/// Only when the response itself cannot be converted to a `JsValue`.
#[wasm_bindgen]
pub fn render_response(
    data: &[u8],
    file_name: Option<String>,
    sheet_name: Option<String>,
    options_json: Option<String>,
    font: Option<Vec<u8>>,
) -> std::result::Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();
    let response = respond(render_request(
        data,
        file_name.as_deref(),
        sheet_name.as_deref(),
        options_json.as_deref(),
        font.as_deref(),
    ));

    serde_wasm_bindgen::to_value(&response)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Grow estimated row heights to fit measured wrapped content.
///
/// `measurements` is an array of `{row, contentHeight, wrap}`. `padding` is
/// normally the payload's `wrapPaddingPx`; the built-in default applies when absent.
///
/// # Errors
/// Returns an error if `measurements` has the wrong shape.
#[wasm_bindgen]
pub fn reconcile_row_heights(
    row_heights: Vec<u32>,
    measurements: JsValue,
    padding: Option<u32>,
) -> std::result::Result<JsValue, JsValue> {
    let measurements: Vec<viewer::CellMeasurement> = serde_wasm_bindgen::from_value(measurements)
        .map_err(|e| JsValue::from_str(&format!("Invalid measurements: {e}")))?;
    let reconciler = viewer::RowHeightReconciler::new(
        padding.unwrap_or(viewer::DEFAULT_WRAP_PADDING_PX),
    );
    let result = reconciler.reconcile(&row_heights, &measurements);

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Search rendered cells for `query` and return the matches with highlight markup.
///
/// # Errors
/// Returns an error if `cells` is not an array of render cells.
#[wasm_bindgen]
pub fn search_cells(cells: JsValue, query: &str) -> std::result::Result<JsValue, JsValue> {
    let cells: Vec<RenderCell> = serde_wasm_bindgen::from_value(cells)
        .map_err(|e| JsValue::from_str(&format!("Invalid cells: {e}")))?;
    let matches = viewer::search(&cells, query);

    serde_wasm_bindgen::to_value(&matches)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
