//! Data types shared by the decoder, layout engine and renderer.

mod render;
mod style;
mod workbook;

pub use render::*;
pub use style::*;
pub use workbook::*;
