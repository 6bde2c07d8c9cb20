//! Minimal CSV/TSV parser that produces a [`Workbook`] with a single sheet.

use crate::error::Result;
use crate::types::{Sheet, Workbook};

/// Delimiter for parsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Tab,
}

impl Delimiter {
    fn as_char(self) -> char {
        match self {
            Self::Comma => ',',
            Self::Tab => '\t',
        }
    }

    fn sheet_name(self) -> &'static str {
        match self {
            Self::Comma => "CSV",
            Self::Tab => "TSV",
        }
    }

    /// `Tab` for `.tsv` file names, `Comma` otherwise.
    pub fn for_file_name(file_name: Option<&str>) -> Self {
        match file_name {
            Some(name) if name.to_ascii_lowercase().ends_with(".tsv") => Self::Tab,
            _ => Self::Comma,
        }
    }
}

/// Parse CSV/TSV bytes into a [`Workbook`] with one sheet.
///
/// Invalid UTF-8 is replaced rather than rejected. Field text is stored as
/// written, surrounding spaces included. Blank lines keep their row so row
/// numbers match the source file.
pub fn parse_delimited(data: &[u8], delim: Delimiter) -> Result<Workbook> {
    let raw = String::from_utf8_lossy(data);
    let text = raw.strip_prefix('\u{feff}').unwrap_or(raw.as_ref());

    let mut sheet = Sheet::new(delim.sheet_name());
    for (row, record) in (1_u32..).zip(split_records(text, delim.as_char())) {
        for (col, field) in (1_u32..).zip(record) {
            if !field.is_empty() {
                sheet.set_cell(row, col, field, None);
            }
        }
    }

    log::debug!(
        "{}: {} cells over {}x{}",
        sheet.name,
        sheet.cells.len(),
        sheet.row_count,
        sheet.col_count
    );
    Ok(Workbook::new(vec![sheet]))
}

/// Split text into records of fields, honoring quotes.
///
/// A quoted field may contain the delimiter, doubled quotes and line breaks.
fn split_records(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(ch);
            }
        } else if ch == '"' {
            in_quotes = true;
        } else if ch == sep {
            fields.push(std::mem::take(&mut current));
        } else if ch == '\n' || ch == '\r' {
            if ch == '\r' && chars.peek() == Some(&'\n') {
                chars.next();
            }
            fields.push(std::mem::take(&mut current));
            records.push(std::mem::take(&mut fields));
        } else {
            current.push(ch);
        }
    }

    if !current.is_empty() || !fields.is_empty() {
        fields.push(current);
        records.push(fields);
    }
    records
}
