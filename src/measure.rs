//! Text width measurement.
//!
//! Two implementations sit behind [`TextMeasurer`]: [`FontMeasurer`] computes
//! the ink bounding box of a glyph run from a TrueType/OpenType font, and
//! [`ApproxMeasurer`] estimates width from the character count. Both add the
//! same fixed padding so the two paths produce comparable column widths.
//!
//! Measurement never fails. A font that cannot be parsed is logged and
//! replaced by the approximation.

use ttf_parser::{Face, GlyphId};

/// Horizontal padding added to every measurement, in pixels.
pub const MEASURE_PADDING_PX: f64 = 12.0;

/// Average glyph width as a fraction of the font size, for the approximation.
pub const APPROX_CHAR_RATIO: f64 = 0.6;

/// Screen resolution used to turn points into pixels.
const PX_PER_PT: f64 = 96.0 / 72.0;

/// Measures the rendered width of a single line of text in pixels.
///
/// Callers trim the text first. Implementations are pure and must be
/// shareable across threads so measurement can be fanned out.
pub trait TextMeasurer: Sync {
    fn measure(&self, text: &str, font_size_pt: f64) -> f64;
}

/// Character-count estimate: `chars * size * 0.6 + 12`.
///
/// Counts Unicode scalar values, so it is monotonic in text length.
#[derive(Debug, Default, Clone, Copy)]
pub struct ApproxMeasurer;

impl TextMeasurer for ApproxMeasurer {
    fn measure(&self, text: &str, font_size_pt: f64) -> f64 {
        let size = if font_size_pt.is_finite() {
            font_size_pt.max(0.0)
        } else {
            0.0
        };
        char_count(text).mul_add(size * APPROX_CHAR_RATIO, MEASURE_PADDING_PX)
    }
}

/// Font-backed measurement using the glyph run's tight horizontal extent.
pub struct FontMeasurer<'a> {
    face: Face<'a>,
}

impl<'a> FontMeasurer<'a> {
    /// Parse the first face of a font file.
    pub fn from_bytes(data: &'a [u8]) -> Result<Self, ttf_parser::FaceParsingError> {
        let face = Face::parse(data, 0)?;
        Ok(Self { face })
    }

    /// Width of the glyph run in font units: from the first inked pixel to
    /// the last. Runs with no ink (spaces) use the advance width.
    fn ink_width_units(&self, text: &str) -> f64 {
        let mut pen = 0.0_f64;
        let mut min_x = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;

        for ch in text.chars() {
            let glyph = self.face.glyph_index(ch).unwrap_or(GlyphId(0));
            if let Some(bbox) = self.face.glyph_bounding_box(glyph) {
                min_x = min_x.min(pen + f64::from(bbox.x_min));
                max_x = max_x.max(pen + f64::from(bbox.x_max));
            }
            pen += f64::from(self.face.glyph_hor_advance(glyph).unwrap_or(0));
        }

        if max_x >= min_x {
            max_x - min_x
        } else {
            pen
        }
    }
}

impl TextMeasurer for FontMeasurer<'_> {
    fn measure(&self, text: &str, font_size_pt: f64) -> f64 {
        let units_per_em = f64::from(self.face.units_per_em());
        if units_per_em <= 0.0 || !font_size_pt.is_finite() || font_size_pt <= 0.0 {
            return ApproxMeasurer.measure(text, font_size_pt);
        }
        if text.is_empty() {
            return MEASURE_PADDING_PX;
        }
        let scale = font_size_pt * PX_PER_PT / units_per_em;
        self.ink_width_units(text).mul_add(scale, MEASURE_PADDING_PX)
    }
}

/// Pick the font measurer when font bytes are supplied and parse, the
/// approximation otherwise.
pub fn select_measurer(font: Option<&[u8]>) -> Box<dyn TextMeasurer + '_> {
    match font.map(FontMeasurer::from_bytes) {
        Some(Ok(measurer)) => Box::new(measurer),
        Some(Err(e)) => {
            log::warn!("font unusable for measurement ({e}), using character-count estimate");
            Box::new(ApproxMeasurer)
        }
        None => Box::new(ApproxMeasurer),
    }
}

fn char_count(text: &str) -> f64 {
    u32::try_from(text.chars().count()).map_or(f64::from(u32::MAX), f64::from)
}
