use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::ops::Deref;
use std::sync::Arc;

/// Per-cell style snapshot as decoded from the source file.
///
/// Colors are `#RRGGBB`. `None` means "not set": default (black) text, no fill.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CellStyle {
    #[serde(skip_serializing_if = "is_false", default)]
    pub bold: bool,
    #[serde(skip_serializing_if = "is_false", default)]
    pub italic: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub font_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub fill_color: Option<String>,
    #[serde(default)]
    pub align_h: HAlign,
    #[serde(default)]
    pub align_v: VAlign,
    #[serde(skip_serializing_if = "is_false", default)]
    pub wrap: bool,
}

/// Style used for positions with no decoded style.
pub static DEFAULT_CELL_STYLE: CellStyle = CellStyle {
    bold: false,
    italic: false,
    font_color: None,
    fill_color: None,
    align_h: HAlign::Left,
    align_v: VAlign::Bottom,
    wrap: false,
};

/// Shared handle to a [`CellStyle`]; cells with the same `xf` share one allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRef(pub Arc<CellStyle>);

impl StyleRef {
    pub fn new(style: CellStyle) -> Self {
        Self(Arc::new(style))
    }
}

impl Deref for StyleRef {
    type Target = CellStyle;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Serialize for StyleRef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for StyleRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let style = CellStyle::deserialize(deserializer)?;
        Ok(Self(Arc::new(style)))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl HAlign {
    /// Map an OOXML `horizontal` attribute. `general`, `fill`, `justify` and
    /// `distributed` render as left.
    pub fn from_ooxml(value: &str) -> Self {
        match value {
            "center" | "centerContinuous" => Self::Center,
            "right" => Self::Right,
            _ => Self::Left,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum VAlign {
    Top,
    Middle,
    #[default]
    Bottom,
}

impl VAlign {
    /// Map an OOXML `vertical` attribute (Excel says "center", we say middle).
    pub fn from_ooxml(value: &str) -> Self {
        match value {
            "top" => Self::Top,
            "bottom" => Self::Bottom,
            _ => Self::Middle,
        }
    }
}

/// Inclusive, 1-indexed rectangular merge region.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct MergeRange {
    pub start_row: u32,
    pub start_col: u32,
    pub end_row: u32,
    pub end_col: u32,
}

impl MergeRange {
    pub fn new(start_row: u32, start_col: u32, end_row: u32, end_col: u32) -> Self {
        Self {
            start_row,
            start_col,
            end_row,
            end_col,
        }
    }

    pub fn row_span(&self) -> u32 {
        self.end_row.saturating_sub(self.start_row) + 1
    }

    pub fn col_span(&self) -> u32 {
        self.end_col.saturating_sub(self.start_col) + 1
    }

    pub fn contains(&self, row: u32, col: u32) -> bool {
        (self.start_row..=self.end_row).contains(&row)
            && (self.start_col..=self.end_col).contains(&col)
    }

    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_row <= other.end_row
            && other.start_row <= self.end_row
            && self.start_col <= other.end_col
            && other.start_col <= self.end_col
    }
}

impl std::fmt::Display for MergeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}",
            crate::cell_ref::format_cell_ref(self.start_row, self.start_col),
            crate::cell_ref::format_cell_ref(self.end_row, self.end_col)
        )
    }
}

/// Declared column width in the sheet's native character units.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct ColWidth {
    pub col: u32,
    pub width: f64,
}

/// Declared row height in points.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct RowHeight {
    pub row: u32,
    pub height: f64,
}

/// Theme colors extracted from theme1.xml
#[derive(Debug, Default)]
pub struct Theme {
    /// 12 theme colors: lt1, dk1, lt2, dk2, accent1-6, hlink, folHlink
    pub colors: Vec<String>,
}

pub(crate) fn is_false(b: &bool) -> bool {
    !b
}

// ============================================================================
// Internal types for parsing styles.xml
// ============================================================================

#[derive(Debug, Default, Clone)]
pub struct RawFont {
    pub color: Option<ColorSpec>,
    pub bold: bool,
    pub italic: bool,
}

#[derive(Debug, Default, Clone)]
pub struct RawFill {
    pub fg_color: Option<ColorSpec>,
    pub bg_color: Option<ColorSpec>,
    pub pattern_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorSpec {
    pub rgb: Option<String>,
    pub theme: Option<u32>,
    pub tint: Option<f64>,
    pub indexed: Option<u32>,
    pub auto: bool,
}

#[derive(Debug, Default, Clone)]
pub struct RawAlignment {
    pub horizontal: Option<String>,
    pub vertical: Option<String>,
    pub wrap_text: bool,
}

/// Cell format (xf) from cellXfs or cellStyleXfs
///
/// Per ECMA-376 Section 18.8.45, the apply* attributes default to TRUE when absent.
#[derive(Debug, Clone)]
pub struct CellXf {
    pub font_id: Option<u32>,
    pub fill_id: Option<u32>,
    pub alignment: Option<RawAlignment>,
    pub apply_font: bool,
    pub apply_fill: bool,
    pub apply_alignment: bool,
    /// Reference to cellStyleXfs entry (for cellXfs only)
    pub xf_id: Option<u32>,
}

impl Default for CellXf {
    fn default() -> Self {
        Self {
            font_id: None,
            fill_id: None,
            alignment: None,
            apply_font: true,
            apply_fill: true,
            apply_alignment: true,
            xf_id: None,
        }
    }
}

/// Parsed style data from styles.xml
#[derive(Debug, Default)]
pub struct StyleSheet {
    pub fonts: Vec<RawFont>,
    pub fills: Vec<RawFill>,
    pub cell_xfs: Vec<CellXf>,
    pub cell_style_xfs: Vec<CellXf>,
    /// Custom indexed colors from `<colors><indexedColors>` (if present)
    pub indexed_colors: Option<Vec<String>>,
}
