//! Structured error types for xlgrid.
//!
//! Decode failures, unknown sheets and malformed merge ranges are surfaced to
//! the caller. Text measurement never fails; it falls back internally.

/// All errors that can occur while decoding, laying out or rendering a sheet.
#[derive(Debug, thiserror::Error)]
pub enum XlgridError {
    /// XML parsing error from quick-xml.
    #[error("XML parsing: {0}")]
    Xml(#[from] quick_xml::Error),

    /// ZIP archive error.
    #[error("ZIP archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// I/O error while reading an archive member.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input bytes could not be turned into a workbook.
    #[error("Unable to decode file: {0}")]
    FileDecode(String),

    /// A sheet name was requested that the workbook does not contain.
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// A merge range lies outside the sheet or is inverted.
    #[error("Invalid merge range {range} for a {rows}x{cols} sheet")]
    InvalidMergeRange { range: String, rows: u32, cols: u32 },

    /// The sheet's used area exceeds the configured `max_cells`.
    #[error("Sheet is too large to render: {rows}x{cols} exceeds {limit} cells")]
    SheetTooLarge { rows: u32, cols: u32, limit: u64 },

    /// Render options failed validation.
    #[error("Invalid render options: {0}")]
    InvalidOptions(String),

    /// JSON (de)serialization failure.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The render was cancelled through its [`CancelToken`](crate::render::CancelToken).
    #[error("Render cancelled")]
    Cancelled,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, XlgridError>;

impl XlgridError {
    /// HTTP-style status code for the transport boundary.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::SheetNotFound(_) => 404,
            Self::Xml(_)
            | Self::Zip(_)
            | Self::Io(_)
            | Self::FileDecode(_)
            | Self::InvalidMergeRange { .. }
            | Self::SheetTooLarge { .. }
            | Self::InvalidOptions(_) => 422,
            Self::Cancelled => 499,
            Self::Json(_) => 500,
        }
    }
}

impl From<XlgridError> for wasm_bindgen::JsValue {
    fn from(e: XlgridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
