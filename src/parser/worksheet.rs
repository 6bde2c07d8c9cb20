//! Worksheet parsing - turns one sheet XML part into a [`Sheet`].

use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{BufReader, Read, Seek};
use zip::ZipArchive;

use crate::cell_ref::{parse_cell_ref_bytes, parse_range};
use crate::error::Result;
use crate::types::{Sheet, StyleRef, DEFAULT_CELL_STYLE};
use crate::xml_helpers::{attr_f64, attr_string};

/// Upper bound on cells pre-allocated from a `<dimension>` hint.
const DIMENSION_RESERVE_CAP: u64 = 200_000;

/// Sheet metadata from workbook.xml
#[derive(Debug, Clone)]
pub(super) struct SheetInfo {
    pub name: String,
    pub path: String,
}

/// Cell type tag from the `t` attribute of a `<c>` element.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(super) enum CellTypeTag {
    Shared,
    Inline,
    Str,
    Bool,
    Error,
    Default,
}

pub(super) fn parse_cell_type_tag(value: &[u8]) -> CellTypeTag {
    match value {
        b"s" => CellTypeTag::Shared,
        b"b" => CellTypeTag::Bool,
        b"e" => CellTypeTag::Error,
        b"str" => CellTypeTag::Str,
        b"inlineStr" => CellTypeTag::Inline,
        _ => CellTypeTag::Default,
    }
}

pub(super) fn parse_u32_bytes(value: &[u8]) -> Option<u32> {
    let mut num: u32 = 0;
    let mut seen = false;
    for &b in value {
        if !b.is_ascii_digit() {
            return None;
        }
        seen = true;
        num = num.saturating_mul(10).saturating_add(u32::from(b - b'0'));
    }
    seen.then_some(num)
}

fn parse_f64_bytes(value: &[u8]) -> Option<f64> {
    std::str::from_utf8(value)
        .ok()
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Display text for a raw `<v>`/`<t>` value.
fn resolve_cell_text(raw: Option<String>, tag: CellTypeTag, shared_strings: &[String]) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    match tag {
        CellTypeTag::Shared => parse_u32_bytes(raw.trim().as_bytes())
            .and_then(|idx| shared_strings.get(idx as usize))
            .cloned()
            .unwrap_or_default(),
        CellTypeTag::Bool => match raw.trim() {
            "1" | "true" | "TRUE" => "TRUE".to_string(),
            _ => "FALSE".to_string(),
        },
        CellTypeTag::Inline | CellTypeTag::Str | CellTypeTag::Error | CellTypeTag::Default => raw,
    }
}

fn read_text<B: std::io::BufRead>(xml: &mut Reader<B>, buf: &mut Vec<u8>) -> Option<String> {
    buf.clear();
    match xml.read_event_into(buf) {
        Ok(Event::Text(text)) => text.unescape().ok().map(|s| s.into_owned()),
        _ => None,
    }
}

/// Read the children of a non-empty `<c>` element and return its raw value.
///
/// Inline strings concatenate every `<t>` run under `<is>`.
fn read_cell_value<B: std::io::BufRead>(
    xml: &mut Reader<B>,
    cell_buf: &mut Vec<u8>,
    text_buf: &mut Vec<u8>,
) -> Option<String> {
    let mut value: Option<String> = None;
    let mut in_is = false;
    let mut in_rph = false;

    loop {
        cell_buf.clear();
        match xml.read_event_into(cell_buf) {
            Ok(Event::Start(ref inner)) => match inner.local_name().as_ref() {
                b"v" if !in_is => value = read_text(xml, text_buf),
                b"is" => in_is = true,
                b"rPh" => in_rph = true,
                b"t" if !in_rph => {
                    if let Some(text) = read_text(xml, text_buf) {
                        value.get_or_insert_with(String::new).push_str(&text);
                    }
                }
                _ => {}
            },
            Ok(Event::End(ref inner)) => match inner.local_name().as_ref() {
                b"c" => break,
                b"is" => in_is = false,
                b"rPh" => in_rph = false,
                _ => {}
            },
            Ok(Event::Eof) | Err(_) => break,
            _ => {}
        }
    }

    value
}

/// Parse a single worksheet
///
/// `resolved_styles` is indexed by cellXfs position; cells without an `s`
/// attribute take `default_style`.
#[allow(clippy::too_many_lines)]
pub(super) fn parse_sheet<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    info: &SheetInfo,
    shared_strings: &[String],
    resolved_styles: &[Option<StyleRef>],
    default_style: Option<&StyleRef>,
) -> Result<Sheet> {
    let file = archive.by_name(&info.path)?;

    let mut xml = Reader::from_reader(BufReader::new(file));
    xml.trim_text(false);

    let mut sheet = Sheet::new(info.name.clone());

    let mut buf = Vec::new();
    let mut cell_buf = Vec::new();
    let mut text_buf = Vec::new();
    let mut current_row: u32 = 0;
    let mut last_col: u32 = 0;
    let mut col_ranges: Vec<(u32, u32, f64)> = Vec::new();

    loop {
        match xml.read_event_into(&mut buf) {
            Ok(ref event @ (Event::Start(_) | Event::Empty(_))) => {
                let (Event::Start(ref e) | Event::Empty(ref e)) = event else {
                    continue;
                };
                let is_start_event = matches!(event, Event::Start(_));

                match e.local_name().as_ref() {
                    // Writers pad this to the whole sheet; it only sizes the cell buffer
                    b"dimension" => {
                        if let Some(range) = attr_string(e, b"ref").as_deref().and_then(parse_range) {
                            let area = u64::from(range.row_span()) * u64::from(range.col_span());
                            let hint = area.min(DIMENSION_RESERVE_CAP);
                            sheet.cells.reserve(usize::try_from(hint).unwrap_or(0));
                        }
                    }

                    b"sheetFormatPr" => {
                        if let Some(w) = attr_f64(e, b"defaultColWidth").filter(|w| *w > 0.0) {
                            sheet.default_col_width = w;
                        }
                    }

                    b"col" => {
                        let mut min: u32 = 0;
                        let mut max: u32 = 0;
                        let mut width: Option<f64> = None;

                        for attr in e.attributes().flatten() {
                            match attr.key.as_ref() {
                                b"min" => min = parse_u32_bytes(&attr.value).unwrap_or(0),
                                b"max" => max = parse_u32_bytes(&attr.value).unwrap_or(0),
                                b"width" => width = parse_f64_bytes(&attr.value),
                                _ => {}
                            }
                        }

                        // Ranges often run to column 16384; they are clipped once the width is known
                        if let Some(width) = width.filter(|w| *w >= 0.0) {
                            if min > 0 && max >= min {
                                col_ranges.push((min, max, width));
                            }
                        }
                    }

                    b"row" => {
                        let mut row_height: Option<f64> = None;
                        let mut explicit_row = None;

                        for attr in e.attributes().flatten() {
                            match attr.key.as_ref() {
                                b"r" => explicit_row = parse_u32_bytes(&attr.value),
                                b"ht" => row_height = parse_f64_bytes(&attr.value),
                                _ => {}
                            }
                        }

                        current_row = explicit_row.unwrap_or(current_row.saturating_add(1));
                        last_col = 0;

                        if let Some(ht) = row_height.filter(|h| *h > 0.0) {
                            if current_row > 0 {
                                sheet.set_row_height(current_row, ht);
                            }
                        }
                    }

                    b"c" => {
                        let mut position: Option<(u32, u32)> = None;
                        let mut cell_type = CellTypeTag::Default;
                        let mut style_idx: Option<u32> = None;

                        for attr in e.attributes().flatten() {
                            match attr.key.as_ref() {
                                b"r" => position = parse_cell_ref_bytes(&attr.value),
                                b"t" => cell_type = parse_cell_type_tag(&attr.value),
                                b"s" => style_idx = parse_u32_bytes(&attr.value),
                                _ => {}
                            }
                        }

                        let (row, col) = position.unwrap_or((current_row, last_col.saturating_add(1)));
                        last_col = col;

                        // Self-closing <c r="A1"/> has no children
                        let raw = if is_start_event {
                            read_cell_value(&mut xml, &mut cell_buf, &mut text_buf)
                        } else {
                            None
                        };

                        let style = match style_idx {
                            Some(idx) => resolved_styles.get(idx as usize).cloned().flatten(),
                            None => default_style.cloned(),
                        };

                        // Blank cells in the default style contribute nothing, not even sheet extent
                        let text = resolve_cell_text(raw, cell_type, shared_strings);
                        let styled = style.as_deref().is_some_and(|s| *s != DEFAULT_CELL_STYLE);
                        if !text.is_empty() || styled {
                            sheet.set_cell(row, col, text, style);
                        }
                    }

                    b"mergeCell" => {
                        if let Some(range) = attr_string(e, b"ref").as_deref().and_then(parse_range) {
                            sheet.extend_to(range.end_row, range.end_col);
                            sheet.add_merge(range);
                        }
                    }

                    _ => {}
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(e.into()),
            _ => {}
        }
        buf.clear();
    }

    for (min, max, width) in col_ranges {
        for col in min..=max.min(sheet.col_count) {
            sheet.set_col_width(col, width);
        }
    }

    log::debug!(
        "sheet '{}': {} cells, {} merges, {}x{}",
        sheet.name,
        sheet.cells.len(),
        sheet.merges.len(),
        sheet.row_count,
        sheet.col_count
    );

    Ok(sheet)
}
