//! Parsing of xl/styles.xml and resolution of cell formats into [`CellStyle`].
//!
//! Only the parts that affect display here are read: fonts (bold, italic,
//! color), pattern fills, cell formats with their alignment, and the custom
//! indexed palette.

use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::BufRead;

use crate::color::{normalize_hex, resolve_color};
use crate::error::Result;
use crate::types::{
    CellStyle, CellXf, HAlign, RawAlignment, RawFill, RawFont, StyleSheet, Theme, VAlign,
};
use crate::xml_helpers::{attr_bool, attr_string, attr_u32, parse_color_attrs, toggle_val};

fn parse_xf(e: &quick_xml::events::BytesStart) -> CellXf {
    let defaults = CellXf::default();
    CellXf {
        font_id: attr_u32(e, b"fontId"),
        fill_id: attr_u32(e, b"fillId"),
        alignment: None,
        apply_font: attr_bool(e, b"applyFont").unwrap_or(defaults.apply_font),
        apply_fill: attr_bool(e, b"applyFill").unwrap_or(defaults.apply_fill),
        apply_alignment: attr_bool(e, b"applyAlignment").unwrap_or(defaults.apply_alignment),
        xf_id: attr_u32(e, b"xfId"),
    }
}

/// Parse styles.xml content
#[allow(clippy::too_many_lines)]
pub fn parse_styles<R: BufRead>(reader: R) -> Result<StyleSheet> {
    let mut xml = Reader::from_reader(reader);
    xml.trim_text(true);

    let mut stylesheet = StyleSheet::default();
    let mut buf = Vec::new();

    let mut in_fonts = false;
    let mut in_fills = false;
    let mut in_cell_xfs = false;
    let mut in_cell_style_xfs = false;
    let mut in_indexed_colors = false;

    let mut current_font: Option<RawFont> = None;
    let mut current_fill: Option<RawFill> = None;
    let mut current_xf: Option<CellXf> = None;
    let mut indexed_colors: Vec<String> = Vec::new();

    loop {
        match xml.read_event_into(&mut buf) {
            Ok(ref event @ (Event::Start(ref e) | Event::Empty(ref e))) => {
                let is_empty = matches!(event, Event::Empty(_));
                let name = e.local_name();

                match name.as_ref() {
                    b"fonts" => in_fonts = !is_empty,
                    b"fills" => in_fills = !is_empty,
                    b"cellXfs" => in_cell_xfs = !is_empty,
                    b"cellStyleXfs" => in_cell_style_xfs = !is_empty,
                    b"indexedColors" => in_indexed_colors = !is_empty,

                    b"rgbColor" if in_indexed_colors => {
                        if let Some(color) = attr_string(e, b"rgb").and_then(|v| normalize_hex(&v))
                        {
                            indexed_colors.push(color);
                        }
                    }

                    b"font" if in_fonts => {
                        if is_empty {
                            stylesheet.fonts.push(RawFont::default());
                        } else {
                            current_font = Some(RawFont::default());
                        }
                    }
                    b"b" => {
                        if let Some(font) = current_font.as_mut() {
                            font.bold = toggle_val(e);
                        }
                    }
                    b"i" => {
                        if let Some(font) = current_font.as_mut() {
                            font.italic = toggle_val(e);
                        }
                    }
                    b"color" => {
                        if let Some(font) = current_font.as_mut() {
                            font.color = Some(parse_color_attrs(e));
                        }
                    }

                    b"fill" if in_fills => {
                        if is_empty {
                            stylesheet.fills.push(RawFill::default());
                        } else {
                            current_fill = Some(RawFill::default());
                        }
                    }
                    b"patternFill" => {
                        if let Some(fill) = current_fill.as_mut() {
                            fill.pattern_type = attr_string(e, b"patternType");
                        }
                    }
                    b"fgColor" => {
                        if let Some(fill) = current_fill.as_mut() {
                            fill.fg_color = Some(parse_color_attrs(e));
                        }
                    }
                    b"bgColor" => {
                        if let Some(fill) = current_fill.as_mut() {
                            fill.bg_color = Some(parse_color_attrs(e));
                        }
                    }

                    b"xf" if in_cell_xfs || in_cell_style_xfs => {
                        let xf = parse_xf(e);
                        // Self-closing <xf/> has no End event
                        if is_empty {
                            if in_cell_xfs {
                                stylesheet.cell_xfs.push(xf);
                            } else {
                                stylesheet.cell_style_xfs.push(xf);
                            }
                        } else {
                            current_xf = Some(xf);
                        }
                    }
                    b"alignment" => {
                        if let Some(xf) = current_xf.as_mut() {
                            xf.alignment = Some(RawAlignment {
                                horizontal: attr_string(e, b"horizontal"),
                                vertical: attr_string(e, b"vertical"),
                                wrap_text: attr_bool(e, b"wrapText").unwrap_or(false),
                            });
                        }
                    }

                    _ => {}
                }
            }

            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"fonts" => in_fonts = false,
                b"fills" => in_fills = false,
                b"cellXfs" => in_cell_xfs = false,
                b"cellStyleXfs" => in_cell_style_xfs = false,
                b"indexedColors" => in_indexed_colors = false,
                b"font" => {
                    if let Some(font) = current_font.take() {
                        stylesheet.fonts.push(font);
                    }
                }
                b"fill" => {
                    if let Some(fill) = current_fill.take() {
                        stylesheet.fills.push(fill);
                    }
                }
                b"xf" => {
                    if let Some(xf) = current_xf.take() {
                        if in_cell_xfs {
                            stylesheet.cell_xfs.push(xf);
                        } else if in_cell_style_xfs {
                            stylesheet.cell_style_xfs.push(xf);
                        }
                    }
                }
                _ => {}
            },

            Ok(Event::Eof) => break,
            Err(e) => return Err(e.into()),
            _ => {}
        }

        buf.clear();
    }

    if !indexed_colors.is_empty() {
        stylesheet.indexed_colors = Some(indexed_colors);
    }

    Ok(stylesheet)
}

/// Resolve the cellXfs entry `idx` into a display style.
///
/// When an `apply*` flag is off the cell inherits that part from its parent
/// cellStyleXfs entry.
pub fn resolve_style(idx: u32, stylesheet: &StyleSheet, theme: &Theme) -> Option<CellStyle> {
    let xf = stylesheet.cell_xfs.get(idx as usize)?;
    let parent_xf = xf
        .xf_id
        .and_then(|xf_id| stylesheet.cell_style_xfs.get(xf_id as usize));

    let indexed_colors = stylesheet.indexed_colors.as_ref();
    let theme_colors = &theme.colors;
    let mut style = CellStyle::default();

    let font_id = if xf.apply_font {
        xf.font_id
    } else {
        parent_xf.and_then(|p| p.font_id).or(xf.font_id)
    };
    if let Some(font) = font_id.and_then(|id| stylesheet.fonts.get(id as usize)) {
        style.bold = font.bold;
        style.italic = font.italic;
        style.font_color = font
            .color
            .as_ref()
            .and_then(|color| resolve_color(color, theme_colors, indexed_colors));
    }

    let fill_id = if xf.apply_fill {
        xf.fill_id
    } else {
        parent_xf.and_then(|p| p.fill_id).or(xf.fill_id)
    };
    if let Some(fill) = fill_id.and_then(|id| stylesheet.fills.get(id as usize)) {
        let patterned = fill
            .pattern_type
            .as_deref()
            .is_some_and(|pattern| pattern != "none");
        if patterned {
            style.fill_color = fill
                .fg_color
                .as_ref()
                .or(fill.bg_color.as_ref())
                .and_then(|color| resolve_color(color, theme_colors, indexed_colors));
        }
    }

    let alignment = if xf.apply_alignment {
        xf.alignment.as_ref()
    } else {
        parent_xf
            .and_then(|p| p.alignment.as_ref())
            .or(xf.alignment.as_ref())
    };
    if let Some(alignment) = alignment {
        if let Some(horizontal) = alignment.horizontal.as_deref() {
            style.align_h = HAlign::from_ooxml(horizontal);
        }
        if let Some(vertical) = alignment.vertical.as_deref() {
            style.align_v = VAlign::from_ooxml(vertical);
        }
        style.wrap = alignment.wrap_text;
    }

    Some(style)
}
