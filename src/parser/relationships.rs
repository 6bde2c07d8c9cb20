//! Package-level parts: workbook relationships, sheet list, theme, shared strings, stylesheet.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::HashMap;
use std::io::{BufReader, Read, Seek};
use zip::ZipArchive;

use crate::color::{normalize_hex, DEFAULT_THEME_COLORS};
use crate::error::Result;
use crate::types::{StyleSheet, Theme};
use crate::xml_helpers::{attr_string, attr_u32, attr_val};

use super::styles::parse_styles;
use super::worksheet::SheetInfo;

/// Workbook relationships parsed from xl/_rels/workbook.xml.rels
///
/// Paths are resolved relative to the xl/ directory and stored as full paths.
#[derive(Default, Debug)]
pub(super) struct WorkbookRelationships {
    /// Map of rId -> full path for worksheet relationships
    /// e.g., "rId1" -> "xl/worksheets/sheet1.xml"
    pub worksheets: HashMap<String, String>,
    pub shared_strings: Option<String>,
    pub styles: Option<String>,
    pub theme: Option<String>,
}

/// Sheet list from xl/workbook.xml.
#[derive(Debug, Default)]
pub(super) struct SheetList {
    pub sheets: Vec<SheetInfo>,
    /// `bookViews/workbookView@activeTab`, 0 when absent.
    pub active_tab: usize,
}

/// Relationship types the decoder follows; everything else is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RelKind {
    Worksheet,
    SharedStrings,
    Styles,
    Theme,
}

impl RelKind {
    /// Classify by the last segment of the relationship type URI.
    fn from_type(rel_type: &str) -> Option<Self> {
        match rel_type.rsplit('/').next()? {
            "worksheet" => Some(Self::Worksheet),
            "sharedStrings" => Some(Self::SharedStrings),
            "styles" => Some(Self::Styles),
            "theme" => Some(Self::Theme),
            _ => None,
        }
    }
}

/// Targets are relative to `xl/` unless they are package-absolute.
fn resolve_target(target: &str) -> String {
    match target.strip_prefix('/') {
        Some(absolute) => absolute.to_string(),
        None => format!("xl/{target}"),
    }
}

/// Parse workbook relationships from xl/_rels/workbook.xml.rels
///
/// A missing or malformed part yields empty relationships; callers fall back
/// to the conventional part paths.
pub(super) fn parse_workbook_relationships<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
) -> WorkbookRelationships {
    let mut rels = WorkbookRelationships::default();
    let Ok(file) = archive.by_name("xl/_rels/workbook.xml.rels") else {
        return rels;
    };

    let mut xml = Reader::from_reader(BufReader::new(file));
    xml.trim_text(true);
    let mut buf = Vec::new();

    loop {
        match xml.read_event_into(&mut buf) {
            Ok(Event::Empty(ref e) | Event::Start(ref e))
                if e.local_name().as_ref() == b"Relationship" =>
            {
                let kind = attr_string(e, b"Type").and_then(|t| RelKind::from_type(&t));
                let target = attr_string(e, b"Target").filter(|t| !t.is_empty());
                if let (Some(kind), Some(target)) = (kind, target) {
                    let path = resolve_target(&target);
                    match kind {
                        RelKind::Worksheet => {
                            if let Some(id) = attr_string(e, b"Id") {
                                rels.worksheets.insert(id, path);
                            }
                        }
                        RelKind::SharedStrings => rels.shared_strings = Some(path),
                        RelKind::Styles => rels.styles = Some(path),
                        RelKind::Theme => rels.theme = Some(path),
                    }
                }
            }
            Ok(Event::Eof) | Err(_) => break,
            _ => {}
        }
        buf.clear();
    }

    rels
}

/// The `r:id` of a `<sheet>`, whatever prefix the relationships namespace uses.
fn sheet_rel_id(e: &BytesStart) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.local_name().as_ref() == b"id")
        .and_then(|attr| std::str::from_utf8(&attr.value).ok().map(str::to_string))
}

/// Get sheet names, paths and the active tab from xl/workbook.xml
pub(super) fn parse_sheet_list<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    relationships: &HashMap<String, String>,
) -> Result<SheetList> {
    let file = archive.by_name("xl/workbook.xml")?;

    let mut xml = Reader::from_reader(BufReader::new(file));
    xml.trim_text(true);

    let mut list = SheetList::default();
    let mut buf = Vec::new();

    loop {
        match xml.read_event_into(&mut buf) {
            Ok(Event::Empty(ref e) | Event::Start(ref e)) => match e.local_name().as_ref() {
                b"workbookView" => {
                    list.active_tab = attr_u32(e, b"activeTab").map_or(0, |tab| tab as usize);
                }
                b"sheet" => {
                    let name = e
                        .try_get_attribute("name")
                        .ok()
                        .flatten()
                        .and_then(|attr| attr.unescape_value().ok().map(|v| v.into_owned()))
                        .filter(|name| !name.is_empty());
                    let Some(name) = name else {
                        buf.clear();
                        continue;
                    };
                    // Without a relationship, sheets are assumed to follow the sheetN.xml convention
                    let path = sheet_rel_id(e)
                        .and_then(|id| relationships.get(&id).cloned())
                        .unwrap_or_else(|| {
                            format!("xl/worksheets/sheet{}.xml", list.sheets.len() + 1)
                        });
                    list.sheets.push(SheetInfo { name, path });
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(e.into()),
            _ => {}
        }
        buf.clear();
    }

    Ok(list)
}

/// Scheme slots in theme index order.
const THEME_SLOTS: [&[u8]; 12] = [
    b"lt1", b"dk1", b"lt2", b"dk2", b"accent1", b"accent2", b"accent3", b"accent4", b"accent5",
    b"accent6", b"hlink", b"folHlink",
];

/// Parse the theme color scheme, falling back to the Office defaults.
///
/// Only the color scheme matters for cell styles; fonts and effects are skipped.
pub(super) fn parse_theme<R: Read + Seek>(archive: &mut ZipArchive<R>, path: Option<&str>) -> Theme {
    let mut theme = Theme {
        colors: DEFAULT_THEME_COLORS
            .iter()
            .map(ToString::to_string)
            .collect(),
    };

    let Ok(file) = archive.by_name(path.unwrap_or("xl/theme/theme1.xml")) else {
        return theme;
    };

    let mut xml = Reader::from_reader(BufReader::new(file));
    xml.trim_text(true);

    let mut buf = Vec::new();
    let mut slot: Option<usize> = None;
    let mut in_scheme = false;

    loop {
        match xml.read_event_into(&mut buf) {
            Ok(Event::Start(ref e) | Event::Empty(ref e)) => {
                let local = e.local_name();
                match local.as_ref() {
                    b"clrScheme" => in_scheme = true,
                    name if in_scheme && THEME_SLOTS.contains(&name) => {
                        slot = THEME_SLOTS.iter().position(|&s| s == name);
                    }
                    // sysClr carries the concrete color in lastClr
                    b"srgbClr" if in_scheme => set_theme_color(&mut theme, slot, attr_val(e)),
                    b"sysClr" if in_scheme => {
                        set_theme_color(&mut theme, slot, attr_string(e, b"lastClr"));
                    }
                    _ => {}
                }
            }
            Ok(Event::End(ref e)) if e.local_name().as_ref() == b"clrScheme" => break,
            Ok(Event::Eof) | Err(_) => break,
            _ => {}
        }
        buf.clear();
    }

    theme
}

fn set_theme_color(theme: &mut Theme, slot: Option<usize>, value: Option<String>) {
    let color = value.as_deref().and_then(normalize_hex);
    if let (Some(color), Some(target)) = (color, slot.and_then(|idx| theme.colors.get_mut(idx))) {
        *target = color;
    }
}

/// Parse shared strings, concatenating rich text runs and skipping phonetic runs.
pub(super) fn parse_shared_strings<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    path: Option<&str>,
) -> Vec<String> {
    let sst_path = path.unwrap_or("xl/sharedStrings.xml");
    let Ok(file) = archive.by_name(sst_path) else {
        return Vec::new();
    };

    let mut xml = Reader::from_reader(BufReader::new(file));
    xml.trim_text(false);

    let mut strings = Vec::new();
    let mut buf = Vec::new();
    let mut current_string = String::new();
    let mut in_si = false;
    let mut in_t = false;
    let mut in_rph = false;

    loop {
        match xml.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"si" => {
                    in_si = true;
                    current_string.clear();
                }
                b"rPh" => in_rph = true,
                b"t" if in_si && !in_rph => in_t = true,
                _ => {}
            },
            Ok(Event::Empty(ref e)) => {
                // <si/> still occupies an index
                if e.local_name().as_ref() == b"si" {
                    strings.push(String::new());
                }
            }
            Ok(Event::Text(ref e)) if in_t => {
                if let Ok(text) = e.unescape() {
                    current_string.push_str(&text);
                }
            }
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"si" => {
                    strings.push(std::mem::take(&mut current_string));
                    in_si = false;
                }
                b"rPh" => in_rph = false,
                b"t" => in_t = false,
                _ => {}
            },
            Ok(Event::Eof) | Err(_) => break,
            _ => {}
        }
        buf.clear();
    }

    strings
}

/// Parse stylesheet from styles file
pub(super) fn parse_stylesheet<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    path: Option<&str>,
) -> Result<StyleSheet> {
    let styles_path = path.unwrap_or("xl/styles.xml");
    let Ok(file) = archive.by_name(styles_path) else {
        return Ok(StyleSheet::default());
    };

    parse_styles(BufReader::new(file))
}
