//! Grid layout: merge placement, column/row sizing and cumulative geometry.
//!
//! This module handles:
//! - Resolving merge ranges into a dense placement grid
//! - Choosing a column sizing policy and computing pixel widths
//! - Converting declared row heights to pixels
//! - Cumulative offsets and totals for the finished grid

mod geometry;
mod merge;
mod sizing;

pub use geometry::{GridGeometry, GridGeometryBuilder};
pub use merge::{resolve, Placement, PlacementGrid};
pub use sizing::{CharCount, ContentAware, Declared, SizingPolicy, CHAR_COUNT_MAX_WIDTH};

/// Convert a non-negative f64 to u32, clamping to the valid range.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn f64_to_u32_clamped(v: f64) -> u32 {
    if v.is_nan() {
        return 0;
    }
    v.clamp(0.0, f64::from(u32::MAX)).floor() as u32
}

/// Round half away from zero, then clamp into u32.
pub(crate) fn f64_round_to_u32(v: f64) -> u32 {
    f64_to_u32_clamped(v.round())
}

/// Round up, then clamp into u32.
pub(crate) fn f64_ceil_to_u32(v: f64) -> u32 {
    f64_to_u32_clamped(v.ceil())
}
