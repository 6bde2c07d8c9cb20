//! Test fixtures for generating valid XLSX files in memory.
//!
//! # Example
//!
//! ```rust,ignore
//! use fixtures::{SheetBuilder, StyleBuilder, XlsxBuilder};
//!
//! let xlsx = XlsxBuilder::new()
//!     .sheet(
//!         SheetBuilder::new("Sheet1")
//!             .cell("A1", "Hello", Some(StyleBuilder::new().bold()))
//!             .merge("A1:B1"),
//!     )
//!     .build();
//!
//! let workbook = xlgrid::decode(&xlsx, Some("test.xlsx")).unwrap();
//! ```
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic,
    clippy::cast_possible_truncation
)]

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::io::{Cursor, Write};
use zip::write::FileOptions;
use zip::ZipWriter;

// ============================================================================
// Style Builder
// ============================================================================

/// Builder for creating cell styles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleBuilder {
    pub font_color: Option<String>,
    pub bold: bool,
    pub italic: bool,
    pub bg_color: Option<String>,
    pub align_horizontal: Option<String>,
    pub align_vertical: Option<String>,
    pub wrap_text: bool,
}

impl StyleBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font color as #RRGGBB or AARRGGBB.
    #[must_use]
    pub fn font_color(mut self, color: &str) -> Self {
        self.font_color = Some(normalize_color(color));
        self
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Set the background fill color (solid fill).
    #[must_use]
    pub fn bg_color(mut self, color: &str) -> Self {
        self.bg_color = Some(normalize_color(color));
        self
    }

    #[must_use]
    pub fn align_horizontal(mut self, align: &str) -> Self {
        self.align_horizontal = Some(align.to_string());
        self
    }

    #[must_use]
    pub fn align_vertical(mut self, align: &str) -> Self {
        self.align_vertical = Some(align.to_string());
        self
    }

    #[must_use]
    pub fn wrap_text(mut self) -> Self {
        self.wrap_text = true;
        self
    }
}

// ============================================================================
// Cell Value
// ============================================================================

/// Represents a cell value that can be added to a sheet.
#[derive(Debug, Clone)]
pub enum CellValue {
    /// A shared string.
    String(String),
    Number(f64),
    Boolean(bool),
    /// An error value (e.g., "#DIV/0!").
    Error(String),
    /// An inline string (not shared).
    InlineString(String),
    /// An empty cell (style only).
    Empty,
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Number(f64::from(n))
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Boolean(b)
    }
}

// ============================================================================
// Sheet Builder
// ============================================================================

#[derive(Debug, Clone)]
pub struct CellEntry {
    pub cell_ref: String,
    pub value: CellValue,
    pub style: Option<StyleBuilder>,
}

/// Builder for a single worksheet.
#[derive(Debug, Clone, Default)]
pub struct SheetBuilder {
    pub name: String,
    pub cells: Vec<CellEntry>,
    pub merges: Vec<String>,
    /// (min, max, width in characters)
    pub col_widths: Vec<(u32, u32, f64)>,
    /// (row, height in points)
    pub row_heights: Vec<(u32, f64)>,
    pub default_col_width: Option<f64>,
    pub dimension: Option<String>,
}

impl SheetBuilder {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Add a cell with a value and optional style.
    #[must_use]
    pub fn cell<V: Into<CellValue>>(
        mut self,
        cell_ref: &str,
        value: V,
        style: Option<StyleBuilder>,
    ) -> Self {
        self.cells.push(CellEntry {
            cell_ref: cell_ref.to_string(),
            value: value.into(),
            style,
        });
        self
    }

    /// Add an empty cell with only a style.
    #[must_use]
    pub fn styled_cell(mut self, cell_ref: &str, style: StyleBuilder) -> Self {
        self.cells.push(CellEntry {
            cell_ref: cell_ref.to_string(),
            value: CellValue::Empty,
            style: Some(style),
        });
        self
    }

    /// Add a merge range (e.g., "A1:B2").
    #[must_use]
    pub fn merge(mut self, range: &str) -> Self {
        self.merges.push(range.to_string());
        self
    }

    /// Set column width (characters) for a range of columns.
    #[must_use]
    pub fn col_width(mut self, min: u32, max: u32, width: f64) -> Self {
        self.col_widths.push((min, max, width));
        self
    }

    /// Set row height in points.
    #[must_use]
    pub fn row_height(mut self, row: u32, height: f64) -> Self {
        self.row_heights.push((row, height));
        self
    }

    #[must_use]
    pub fn default_col_width(mut self, width: f64) -> Self {
        self.default_col_width = Some(width);
        self
    }

    /// Write a `<dimension ref="..."/>` element.
    #[must_use]
    pub fn dimension(mut self, range: &str) -> Self {
        self.dimension = Some(range.to_string());
        self
    }
}

// ============================================================================
// Package Writer
// ============================================================================

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;
const NS_MAIN: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const NS_PKG_RELS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const NS_DOC_RELS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const NS_DRAWING: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const CT_PREFIX: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml";

/// Minimal tag writer. Attribute values are escaped, text is escaped.
struct Xml(String);

impl Xml {
    fn doc() -> Self {
        Self(XML_DECL.to_string())
    }

    fn tag(&mut self, name: &str, attrs: &[(&str, String)], empty: bool) -> &mut Self {
        let _ = write!(self.0, "<{name}");
        for (key, value) in attrs {
            let _ = write!(self.0, r#" {key}="{}""#, escape_xml(value));
        }
        self.0.push_str(if empty { "/>" } else { ">" });
        self
    }

    fn open(&mut self, name: &str, attrs: &[(&str, String)]) -> &mut Self {
        self.tag(name, attrs, false)
    }

    fn empty(&mut self, name: &str, attrs: &[(&str, String)]) -> &mut Self {
        self.tag(name, attrs, true)
    }

    fn close(&mut self, name: &str) -> &mut Self {
        let _ = write!(self.0, "</{name}>");
        self
    }

    fn text(&mut self, text: &str) -> &mut Self {
        self.0.push_str(&escape_xml(text));
        self
    }

    fn finish(&mut self) -> String {
        std::mem::take(&mut self.0)
    }
}

fn a(key: &'static str, value: impl ToString) -> (&'static str, String) {
    (key, value.to_string())
}

/// Builder for creating complete XLSX files.
///
/// Every package carries styles and a theme; shared strings only when some
/// cell uses one.
#[derive(Debug, Default)]
pub struct XlsxBuilder {
    sheets: Vec<SheetBuilder>,
    active_tab: Option<usize>,
}

impl XlsxBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn sheet(mut self, sheet: SheetBuilder) -> Self {
        self.sheets.push(sheet);
        self
    }

    /// Mark a sheet as active via `workbookView@activeTab`.
    #[must_use]
    pub fn active_tab(mut self, idx: usize) -> Self {
        self.active_tab = Some(idx);
        self
    }

    #[must_use]
    pub fn build(self) -> Vec<u8> {
        let mut styles = StyleTable::new();
        let mut strings = StringTable::default();
        for cell in self.sheets.iter().flat_map(|sheet| &sheet.cells) {
            if let Some(style) = &cell.style {
                styles.intern(style);
            }
            if let CellValue::String(text) = &cell.value {
                strings.intern(text);
            }
        }

        let count = self.sheets.len();
        let mut parts = vec![
            ("[Content_Types].xml".to_string(), content_types_xml(count)),
            ("_rels/.rels".to_string(), package_rels_xml()),
            ("xl/_rels/workbook.xml.rels".to_string(), workbook_rels_xml(count)),
            ("xl/workbook.xml".to_string(), workbook_xml(&self.sheets, self.active_tab)),
            ("xl/styles.xml".to_string(), styles.to_xml()),
            ("xl/theme/theme1.xml".to_string(), theme_xml()),
        ];
        if !strings.0.is_empty() {
            parts.push(("xl/sharedStrings.xml".to_string(), strings.to_xml()));
        }
        parts.extend(self.sheets.iter().enumerate().map(|(i, sheet)| {
            (
                format!("xl/worksheets/sheet{}.xml", i + 1),
                worksheet_xml(sheet, &strings, &styles),
            )
        }));

        let borrowed: Vec<(&str, &str)> = parts
            .iter()
            .map(|(name, body)| (name.as_str(), body.as_str()))
            .collect();
        zip_parts(&borrowed)
    }
}

/// Zip raw parts, for tests that need hand-written XML.
#[must_use]
pub fn zip_parts(parts: &[(&str, &str)]) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    for (name, body) in parts {
        zip.start_file(*name, options).expect("start zip entry");
        zip.write_all(body.as_bytes()).expect("write zip entry");
    }
    zip.finish().expect("finish zip").into_inner()
}

// ============================================================================
// Shared Strings and Styles
// ============================================================================

#[derive(Debug, Default)]
struct StringTable(Vec<String>);

impl StringTable {
    fn intern(&mut self, text: &str) -> usize {
        if let Some(idx) = self.index_of(text) {
            return idx;
        }
        self.0.push(text.to_string());
        self.0.len() - 1
    }

    fn index_of(&self, text: &str) -> Option<usize> {
        self.0.iter().position(|existing| existing == text)
    }

    fn to_xml(&self) -> String {
        let n = self.0.len();
        let mut xml = Xml::doc();
        xml.open("sst", &[a("xmlns", NS_MAIN), a("count", n), a("uniqueCount", n)]);
        for text in &self.0 {
            xml.open("si", &[])
                .open("t", &[a("xml:space", "preserve")])
                .text(text)
                .close("t")
                .close("si");
        }
        xml.close("sst").finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Font {
    argb: Option<String>,
    bold: bool,
    italic: bool,
}

#[derive(Debug, Clone)]
struct Xf {
    font: usize,
    fill: usize,
    style: StyleBuilder,
}

/// Deduplicating `cellXfs` table. Index 0 is the unstyled default.
#[derive(Debug)]
struct StyleTable {
    fonts: Vec<Font>,
    /// Solid fill colors; slots 0 and 1 are the mandatory none/gray125.
    fills: Vec<Option<String>>,
    xfs: Vec<Xf>,
}

impl StyleTable {
    fn new() -> Self {
        Self {
            fonts: vec![Font {
                argb: None,
                bold: false,
                italic: false,
            }],
            fills: vec![None, None],
            xfs: vec![Xf {
                font: 0,
                fill: 0,
                style: StyleBuilder::default(),
            }],
        }
    }

    fn intern(&mut self, style: &StyleBuilder) -> usize {
        if let Some(idx) = self.index_of(style) {
            return idx;
        }
        let font = Font {
            argb: style.font_color.clone(),
            bold: style.bold,
            italic: style.italic,
        };
        let font = position_or_push(&mut self.fonts, font);
        let fill = match &style.bg_color {
            Some(color) => position_or_push(&mut self.fills, Some(color.clone())),
            None => 0,
        };
        self.xfs.push(Xf {
            font,
            fill,
            style: style.clone(),
        });
        self.xfs.len() - 1
    }

    fn index_of(&self, style: &StyleBuilder) -> Option<usize> {
        self.xfs.iter().position(|xf| &xf.style == style)
    }

    fn to_xml(&self) -> String {
        let mut xml = Xml::doc();
        xml.open("styleSheet", &[a("xmlns", NS_MAIN)]);

        xml.open("fonts", &[a("count", self.fonts.len())]);
        for font in &self.fonts {
            xml.open("font", &[]);
            if font.bold {
                xml.empty("b", &[]);
            }
            if font.italic {
                xml.empty("i", &[]);
            }
            xml.empty("sz", &[a("val", 11)]);
            match &font.argb {
                Some(argb) => xml.empty("color", &[a("rgb", argb)]),
                None => xml.empty("color", &[a("theme", 1)]),
            };
            xml.empty("name", &[a("val", "Calibri")]).close("font");
        }
        xml.close("fonts");

        xml.open("fills", &[a("count", self.fills.len())]);
        for (idx, fill) in self.fills.iter().enumerate() {
            xml.open("fill", &[]);
            match (idx, fill) {
                (1, _) => xml.empty("patternFill", &[a("patternType", "gray125")]),
                (_, Some(argb)) => xml
                    .open("patternFill", &[a("patternType", "solid")])
                    .empty("fgColor", &[a("rgb", argb)])
                    .empty("bgColor", &[a("indexed", 64)])
                    .close("patternFill"),
                (_, None) => xml.empty("patternFill", &[a("patternType", "none")]),
            };
            xml.close("fill");
        }
        xml.close("fills");

        xml.open("borders", &[a("count", 1)])
            .open("border", &[])
            .empty("left", &[])
            .empty("right", &[])
            .empty("top", &[])
            .empty("bottom", &[])
            .close("border")
            .close("borders");

        xml.open("cellXfs", &[a("count", self.xfs.len())]);
        for xf in &self.xfs {
            let mut attrs = vec![
                a("numFmtId", 0),
                a("fontId", xf.font),
                a("fillId", xf.fill),
                a("borderId", 0),
            ];
            if xf.font > 0 {
                attrs.push(a("applyFont", 1));
            }
            if xf.fill > 0 {
                attrs.push(a("applyFill", 1));
            }
            let mut alignment = Vec::new();
            if let Some(h) = &xf.style.align_horizontal {
                alignment.push(a("horizontal", h));
            }
            if let Some(v) = &xf.style.align_vertical {
                alignment.push(a("vertical", v));
            }
            if xf.style.wrap_text {
                alignment.push(a("wrapText", 1));
            }
            if alignment.is_empty() {
                xml.empty("xf", &attrs);
            } else {
                attrs.push(a("applyAlignment", 1));
                xml.open("xf", &attrs).empty("alignment", &alignment).close("xf");
            }
        }
        xml.close("cellXfs").close("styleSheet").finish()
    }
}

fn position_or_push<T: PartialEq>(items: &mut Vec<T>, item: T) -> usize {
    if let Some(idx) = items.iter().position(|existing| existing == &item) {
        return idx;
    }
    items.push(item);
    items.len() - 1
}

// ============================================================================
// Package Parts
// ============================================================================

/// Uppercase ARGB without `#`, as `rgb` attributes expect.
fn normalize_color(color: &str) -> String {
    let hex = color.trim_start_matches('#').to_uppercase();
    match hex.len() {
        8 => hex,
        _ => format!("FF{hex}"),
    }
}

pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

fn content_types_xml(sheet_count: usize) -> String {
    let mut xml = Xml::doc();
    xml.open(
        "Types",
        &[a("xmlns", "http://schemas.openxmlformats.org/package/2006/content-types")],
    )
    .empty(
        "Default",
        &[
            a("Extension", "rels"),
            a("ContentType", "application/vnd.openxmlformats-package.relationships+xml"),
        ],
    )
    .empty(
        "Default",
        &[a("Extension", "xml"), a("ContentType", "application/xml")],
    )
    .empty(
        "Override",
        &[
            a("PartName", "/xl/workbook.xml"),
            a("ContentType", format!("{CT_PREFIX}.sheet.main+xml")),
        ],
    );
    for i in 1..=sheet_count {
        xml.empty(
            "Override",
            &[
                a("PartName", format!("/xl/worksheets/sheet{i}.xml")),
                a("ContentType", format!("{CT_PREFIX}.worksheet+xml")),
            ],
        );
    }
    xml.close("Types").finish()
}

fn relationships_xml(rels: &[(String, &str, String)]) -> String {
    let mut xml = Xml::doc();
    xml.open("Relationships", &[a("xmlns", NS_PKG_RELS)]);
    for (id, kind, target) in rels {
        xml.empty(
            "Relationship",
            &[
                a("Id", id),
                a("Type", format!("{NS_DOC_RELS}/{kind}")),
                a("Target", target),
            ],
        );
    }
    xml.close("Relationships").finish()
}

fn package_rels_xml() -> String {
    relationships_xml(&[(
        "rId1".to_string(),
        "officeDocument",
        "xl/workbook.xml".to_string(),
    )])
}

/// Worksheets take rId1..rIdN; styles, shared strings and theme follow.
fn workbook_rels_xml(sheet_count: usize) -> String {
    let mut rels: Vec<(String, &str, String)> = (1..=sheet_count)
        .map(|i| (format!("rId{i}"), "worksheet", format!("worksheets/sheet{i}.xml")))
        .collect();
    for (offset, (kind, target)) in [
        ("styles", "styles.xml"),
        ("sharedStrings", "sharedStrings.xml"),
        ("theme", "theme/theme1.xml"),
    ]
    .into_iter()
    .enumerate()
    {
        rels.push((
            format!("rId{}", sheet_count + 1 + offset),
            kind,
            target.to_string(),
        ));
    }
    relationships_xml(&rels)
}

fn workbook_xml(sheets: &[SheetBuilder], active_tab: Option<usize>) -> String {
    let mut xml = Xml::doc();
    xml.open("workbook", &[a("xmlns", NS_MAIN), a("xmlns:r", NS_DOC_RELS)]);
    if let Some(tab) = active_tab {
        xml.open("bookViews", &[])
            .empty("workbookView", &[a("activeTab", tab)])
            .close("bookViews");
    }
    xml.open("sheets", &[]);
    for (i, sheet) in sheets.iter().enumerate() {
        xml.empty(
            "sheet",
            &[
                a("name", &sheet.name),
                a("sheetId", i + 1),
                a("r:id", format!("rId{}", i + 1)),
            ],
        );
    }
    xml.close("sheets").close("workbook").finish()
}

/// Office scheme, written in document order (dk1 before lt1).
fn theme_xml() -> String {
    const SCHEME: [(&str, &str); 12] = [
        ("dk1", "000000"),
        ("lt1", "FFFFFF"),
        ("dk2", "44546A"),
        ("lt2", "E7E6E6"),
        ("accent1", "4472C4"),
        ("accent2", "ED7D31"),
        ("accent3", "A5A5A5"),
        ("accent4", "FFC000"),
        ("accent5", "5B9BD5"),
        ("accent6", "70AD47"),
        ("hlink", "0563C1"),
        ("folHlink", "954F72"),
    ];
    let mut xml = Xml::doc();
    xml.open("a:theme", &[a("xmlns:a", NS_DRAWING), a("name", "Office Theme")])
        .open("a:themeElements", &[])
        .open("a:clrScheme", &[a("name", "Office")]);
    for (slot, rgb) in SCHEME {
        let tag = format!("a:{slot}");
        xml.open(&tag, &[])
            .empty("a:srgbClr", &[a("val", rgb)])
            .close(&tag);
    }
    xml.close("a:clrScheme")
        .close("a:themeElements")
        .close("a:theme")
        .finish()
}

/// Row number of an A1-style reference.
fn row_of(cell_ref: &str) -> u32 {
    cell_ref
        .trim_start_matches(|c: char| c.is_ascii_alphabetic())
        .parse()
        .expect("cell reference row")
}

fn worksheet_xml(sheet: &SheetBuilder, strings: &StringTable, styles: &StyleTable) -> String {
    let mut xml = Xml::doc();
    xml.open("worksheet", &[a("xmlns", NS_MAIN)]);

    if let Some(dimension) = &sheet.dimension {
        xml.empty("dimension", &[a("ref", dimension)]);
    }
    if let Some(width) = sheet.default_col_width {
        xml.empty(
            "sheetFormatPr",
            &[a("defaultColWidth", width), a("defaultRowHeight", 15)],
        );
    }
    if !sheet.col_widths.is_empty() {
        xml.open("cols", &[]);
        for (min, max, width) in &sheet.col_widths {
            xml.empty(
                "col",
                &[a("min", min), a("max", max), a("width", width), a("customWidth", 1)],
            );
        }
        xml.close("cols");
    }

    // Rows with only a declared height still get a <row> element.
    let mut rows: BTreeMap<u32, Vec<&CellEntry>> = sheet
        .row_heights
        .iter()
        .map(|(row, _)| (*row, Vec::new()))
        .collect();
    for cell in &sheet.cells {
        rows.entry(row_of(&cell.cell_ref)).or_default().push(cell);
    }

    xml.open("sheetData", &[]);
    for (row, cells) in rows {
        let mut attrs = vec![a("r", row)];
        if let Some((_, height)) = sheet.row_heights.iter().find(|(r, _)| *r == row) {
            attrs.push(a("ht", height));
            attrs.push(a("customHeight", 1));
        }
        xml.open("row", &attrs);
        for cell in cells {
            write_cell(&mut xml, cell, strings, styles);
        }
        xml.close("row");
    }
    xml.close("sheetData");

    if !sheet.merges.is_empty() {
        xml.open("mergeCells", &[a("count", sheet.merges.len())]);
        for range in &sheet.merges {
            xml.empty("mergeCell", &[a("ref", range)]);
        }
        xml.close("mergeCells");
    }

    xml.close("worksheet").finish()
}

fn write_cell(xml: &mut Xml, cell: &CellEntry, strings: &StringTable, styles: &StyleTable) {
    let mut attrs = vec![a("r", &cell.cell_ref)];
    if let Some(idx) = cell.style.as_ref().and_then(|s| styles.index_of(s)) {
        if idx > 0 {
            attrs.push(a("s", idx));
        }
    }

    let (kind, value) = match &cell.value {
        CellValue::String(text) => (Some("s"), strings.index_of(text).unwrap_or(0).to_string()),
        CellValue::Number(n) => (None, n.to_string()),
        CellValue::Boolean(b) => (Some("b"), u8::from(*b).to_string()),
        CellValue::Error(code) => (Some("e"), code.clone()),
        CellValue::InlineString(text) => {
            attrs.push(a("t", "inlineStr"));
            xml.open("c", &attrs)
                .open("is", &[])
                .open("t", &[])
                .text(text)
                .close("t")
                .close("is")
                .close("c");
            return;
        }
        CellValue::Empty => {
            xml.empty("c", &attrs);
            return;
        }
    };
    if let Some(kind) = kind {
        attrs.push(a("t", kind));
    }
    xml.open("c", &attrs)
        .open("v", &[])
        .text(&value)
        .close("v")
        .close("c");
}

// ============================================================================
// Convenience Functions
// ============================================================================

/// Create a minimal valid XLSX with a single empty sheet.
#[must_use]
pub fn minimal_xlsx() -> Vec<u8> {
    XlsxBuilder::new().sheet(SheetBuilder::new("Sheet1")).build()
}

/// Create an XLSX with a single cell containing text.
#[must_use]
pub fn xlsx_with_text(text: &str) -> Vec<u8> {
    XlsxBuilder::new()
        .sheet(SheetBuilder::new("Sheet1").cell("A1", text, None))
        .build()
}

/// Create an XLSX with a styled cell.
#[must_use]
pub fn xlsx_with_styled_cell<V: Into<CellValue>>(value: V, style: StyleBuilder) -> Vec<u8> {
    XlsxBuilder::new()
        .sheet(SheetBuilder::new("Sheet1").cell("A1", value, Some(style)))
        .build()
}

/// A 2x2 sheet: `A1="a"`, `B1="b"`, `A2="c"`, `B2="d"`.
#[must_use]
pub fn two_by_two() -> SheetBuilder {
    SheetBuilder::new("Sheet1")
        .cell("A1", "a", None)
        .cell("B1", "b", None)
        .cell("A2", "c", None)
        .cell("B2", "d", None)
}
