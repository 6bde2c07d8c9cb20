use serde::{Deserialize, Serialize};

use super::{is_false, HAlign, VAlign};

/// Display-ready style of a rendered cell.
///
/// Colors are only present when they differ from the defaults (black text,
/// white or no background).
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RenderStyle {
    #[serde(skip_serializing_if = "is_false", default)]
    pub bold: bool,
    #[serde(skip_serializing_if = "is_false", default)]
    pub italic: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub background: Option<String>,
    #[serde(default)]
    pub align_h: HAlign,
    #[serde(default)]
    pub align_v: VAlign,
    #[serde(skip_serializing_if = "is_false", default)]
    pub wrap: bool,
}

/// One visible grid item: a normal cell or the primary cell of a merge.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RenderCell {
    pub row: u32,
    pub col: u32,
    pub row_span: u32,
    pub col_span: u32,
    /// HTML-escaped cell text.
    pub text: String,
    pub style: RenderStyle,
    pub is_merged_primary: bool,
}

/// Pre-built HTML fragments for the grid and its headers.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SheetMarkup {
    pub grid: String,
    pub col_labels: String,
    pub row_labels: String,
}

/// Everything the client needs to draw one sheet.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RenderPayload {
    pub cells: Vec<RenderCell>,
    pub col_widths: Vec<u32>,
    pub row_heights: Vec<u32>,
    pub col_labels: Vec<String>,
    pub row_labels: Vec<String>,
    pub info: String,
    pub sheets: Vec<String>,
    pub current_sheet: String,
    pub total_width: u64,
    pub total_height: u64,
    /// Padding the client adds to measured wrapped content when growing rows.
    pub wrap_padding_px: u32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub markup: Option<SheetMarkup>,
}
