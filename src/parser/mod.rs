//! Workbook decoding
//!
//! Detects the container format and orchestrates the parsing of every XLSX
//! part from the ZIP archive. Anything that is not a ZIP is read as
//! delimited text.

mod relationships;
pub(crate) mod styles;
mod worksheet;

use std::io::Cursor;
use zip::ZipArchive;

use crate::csv::{parse_delimited, Delimiter};
use crate::error::{Result, XlgridError};
use crate::types::{StyleRef, Workbook};

use relationships::{
    parse_shared_strings, parse_sheet_list, parse_stylesheet, parse_theme,
    parse_workbook_relationships,
};
use styles::resolve_style;
use worksheet::parse_sheet;

const ZIP_MAGIC: &[u8] = b"PK";

/// Decode a workbook from raw file bytes.
///
/// ZIP data is parsed as XLSX. Everything else is parsed as CSV, or TSV when
/// `file_name` ends in `.tsv`.
pub fn decode(data: &[u8], file_name: Option<&str>) -> Result<Workbook> {
    if data.is_empty() {
        return Err(XlgridError::FileDecode("empty input".to_string()));
    }
    if data.starts_with(ZIP_MAGIC) {
        parse_xlsx(data)
    } else {
        parse_delimited(data, Delimiter::for_file_name(file_name))
    }
}

/// Parse an XLSX file from bytes.
pub fn parse_xlsx(data: &[u8]) -> Result<Workbook> {
    let mut archive = ZipArchive::new(Cursor::new(data))?;

    // Relationships first: they give the actual part paths
    let relationships = parse_workbook_relationships(&mut archive);

    let theme = parse_theme(&mut archive, relationships.theme.as_deref());
    let shared_strings =
        parse_shared_strings(&mut archive, relationships.shared_strings.as_deref());
    let stylesheet = parse_stylesheet(&mut archive, relationships.styles.as_deref())?;
    let sheet_list = parse_sheet_list(&mut archive, &relationships.worksheets)?;

    if sheet_list.sheets.is_empty() {
        return Err(XlgridError::FileDecode(
            "workbook contains no sheets".to_string(),
        ));
    }

    let resolved_styles: Vec<Option<StyleRef>> = (0..stylesheet.cell_xfs.len())
        .map(|idx| {
            u32::try_from(idx)
                .ok()
                .and_then(|id| resolve_style(id, &stylesheet, &theme).map(StyleRef::new))
        })
        .collect();
    // Cells without an `s` attribute use cellXfs[0]
    let default_style = resolved_styles.first().cloned().flatten();

    log::debug!(
        "xlsx: {} sheets, {} shared strings, {} cell formats",
        sheet_list.sheets.len(),
        shared_strings.len(),
        resolved_styles.len()
    );

    let mut sheets = Vec::with_capacity(sheet_list.sheets.len());
    for info in &sheet_list.sheets {
        sheets.push(parse_sheet(
            &mut archive,
            info,
            &shared_strings,
            &resolved_styles,
            default_style.as_ref(),
        )?);
    }

    let mut workbook = Workbook::new(sheets);
    if sheet_list.active_tab < workbook.sheets.len() {
        workbook.active_sheet = sheet_list.active_tab;
    }
    Ok(workbook)
}
