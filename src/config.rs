//! Render options.
//!
//! Options arrive as JSON from the host (or are built in Rust) and every
//! field has a default, so `{}` is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, XlgridError};

/// Which column sizing policy to apply to a sheet.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SizingMode {
    /// Content-aware below `auto_char_count_threshold` cells, character count above.
    #[default]
    Auto,
    /// Declared width raised to the widest measured cell text.
    ContentAware,
    /// Longest text length times a fixed character width.
    CharCount,
    /// Declared width only, no content measurement.
    Declared,
}

/// Options controlling grid geometry and payload contents.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    pub sizing: SizingMode,
    /// Lower bound for every column width, in pixels.
    pub min_col_width: u32,
    /// Optional upper bound for content-aware widths, in pixels.
    pub max_col_width: Option<u32>,
    /// Pixels per declared character unit.
    pub width_factor: f64,
    /// Font size used for text measurement.
    pub font_size_pt: f64,
    /// Pixels per character for the character-count policy.
    pub char_width_px: u32,
    /// Cell count above which `Auto` switches to the character-count policy.
    pub auto_char_count_threshold: u64,
    /// Points to pixels factor for row heights.
    pub row_height_scale: f64,
    /// Row height, in points, for rows without a declared height.
    pub default_row_height_pt: f64,
    pub min_row_height: u32,
    /// Padding added to measured content when the client grows a wrapped row.
    pub wrap_padding_px: u32,
    /// Attach pre-built HTML markup to the payload.
    pub include_markup: bool,
    /// Largest `rows × cols` area a render accepts.
    pub max_cells: u64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            sizing: SizingMode::Auto,
            min_col_width: 60,
            max_col_width: None,
            width_factor: 7.0,
            font_size_pt: 11.0,
            char_width_px: 8,
            auto_char_count_threshold: 20_000,
            row_height_scale: 1.3,
            default_row_height_pt: 18.0,
            min_row_height: 0,
            wrap_padding_px: 16,
            include_markup: false,
            max_cells: 2_000_000,
        }
    }
}

impl RenderOptions {
    /// Parse options from JSON and validate them. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Reject values that would produce a degenerate grid.
    pub fn validate(&self) -> Result<()> {
        if !(self.width_factor.is_finite() && self.width_factor > 0.0) {
            return Err(XlgridError::InvalidOptions(format!(
                "widthFactor must be positive, got {}",
                self.width_factor
            )));
        }
        if !(self.font_size_pt.is_finite() && self.font_size_pt > 0.0) {
            return Err(XlgridError::InvalidOptions(format!(
                "fontSizePt must be positive, got {}",
                self.font_size_pt
            )));
        }
        if !(self.row_height_scale.is_finite() && self.row_height_scale > 0.0) {
            return Err(XlgridError::InvalidOptions(format!(
                "rowHeightScale must be positive, got {}",
                self.row_height_scale
            )));
        }
        if !(self.default_row_height_pt.is_finite() && self.default_row_height_pt >= 0.0) {
            return Err(XlgridError::InvalidOptions(format!(
                "defaultRowHeightPt must not be negative, got {}",
                self.default_row_height_pt
            )));
        }
        if self.max_cells == 0 {
            return Err(XlgridError::InvalidOptions(
                "maxCells must be at least 1".to_string(),
            ));
        }
        if self.char_width_px == 0 {
            return Err(XlgridError::InvalidOptions(
                "charWidthPx must be at least 1".to_string(),
            ));
        }
        if let Some(max) = self.max_col_width {
            if max < self.min_col_width {
                return Err(XlgridError::InvalidOptions(format!(
                    "maxColWidth ({max}) is below minColWidth ({})",
                    self.min_col_width
                )));
            }
        }
        Ok(())
    }
}
