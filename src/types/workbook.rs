use serde::{Deserialize, Serialize};

use super::*;

/// Default column width in character units (Excel's 8.43).
pub const DEFAULT_COL_WIDTH_CHARS: f64 = 8.43;

/// A decoded workbook: ordered sheets plus the sheet the file marks as active.
#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
    /// Index into `sheets` of the active sheet (`activeTab`).
    pub active_sheet: usize,
}

impl Workbook {
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Self {
            sheets,
            active_sheet: 0,
        }
    }

    /// Sheet names in workbook order.
    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|s| s.name.clone()).collect()
    }

    /// The active sheet, falling back to the first sheet when the index is stale.
    pub fn active(&self) -> Option<&Sheet> {
        self.sheets
            .get(self.active_sheet)
            .or_else(|| self.sheets.first())
    }

    pub fn sheet_by_name(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }
}

/// Cell with position (1-indexed)
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CellData {
    pub r: u32,
    pub c: u32,
    /// Display text. Numbers keep their stored representation.
    pub v: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s: Option<StyleRef>,
}

/// A single worksheet.
///
/// Cells are stored sparsely; `row_count` and `col_count` describe the used
/// rectangle starting at A1.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Sheet {
    pub name: String,
    pub row_count: u32,
    pub col_count: u32,
    pub cells: Vec<CellData>,
    /// Row index for fast cell lookup (not serialized).
    #[serde(skip)]
    pub(crate) cells_by_row: Vec<Vec<usize>>,
    pub merges: Vec<MergeRange>,
    pub col_widths: Vec<ColWidth>,
    pub row_heights: Vec<RowHeight>,
    /// Width in characters for columns without a `<col>` entry.
    pub default_col_width: f64,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            row_count: 0,
            col_count: 0,
            cells: Vec::new(),
            cells_by_row: Vec::new(),
            merges: Vec::new(),
            col_widths: Vec::new(),
            row_heights: Vec::new(),
            default_col_width: DEFAULT_COL_WIDTH_CHARS,
        }
    }

    /// Create an empty sheet with a fixed used rectangle.
    pub fn with_dimensions(name: impl Into<String>, rows: u32, cols: u32) -> Self {
        let mut sheet = Self::new(name);
        sheet.row_count = rows;
        sheet.col_count = cols;
        sheet
    }

    /// Set a cell value, growing the used rectangle as needed.
    ///
    /// Rows and columns start at 1; a zero coordinate is ignored.
    pub fn set_cell(&mut self, row: u32, col: u32, value: impl Into<String>, style: Option<StyleRef>) {
        if row == 0 || col == 0 {
            return;
        }
        let value = value.into();
        if let Some(idx) = self.cell_index_at(row, col) {
            if let Some(cell) = self.cells.get_mut(idx) {
                cell.v = value;
                cell.s = style;
            }
            return;
        }

        let idx = self.cells.len();
        self.cells.push(CellData {
            r: row,
            c: col,
            v: value,
            s: style,
        });
        self.index_cell(idx);
        self.extend_to(row, col);
    }

    /// Record a declared column width (characters).
    pub fn set_col_width(&mut self, col: u32, width: f64) {
        self.col_widths.retain(|w| w.col != col);
        self.col_widths.push(ColWidth { col, width });
    }

    /// Record a declared row height (points).
    pub fn set_row_height(&mut self, row: u32, height: f64) {
        self.row_heights.retain(|h| h.row != row);
        self.row_heights.push(RowHeight { row, height });
    }

    pub fn add_merge(&mut self, range: MergeRange) {
        self.merges.push(range);
    }

    /// Grow the used rectangle to include `(row, col)`.
    pub fn extend_to(&mut self, row: u32, col: u32) {
        self.row_count = self.row_count.max(row);
        self.col_count = self.col_count.max(col);
    }

    /// Number of grid positions in the used rectangle.
    pub fn area(&self) -> u64 {
        u64::from(self.row_count) * u64::from(self.col_count)
    }

    pub fn cell(&self, row: u32, col: u32) -> Option<&CellData> {
        self.cell_index_at(row, col)
            .and_then(|idx| self.cells.get(idx))
    }

    /// Cell text, empty when the position holds no value.
    pub fn value(&self, row: u32, col: u32) -> &str {
        self.cell(row, col).map_or("", |c| c.v.as_str())
    }

    /// Cell style, [`DEFAULT_CELL_STYLE`] when the position has none.
    pub fn style(&self, row: u32, col: u32) -> &CellStyle {
        self.cell(row, col)
            .and_then(|c| c.s.as_deref())
            .unwrap_or(&DEFAULT_CELL_STYLE)
    }

    /// Cells of one row, sorted by column.
    pub fn row_cells(&self, row: u32) -> impl Iterator<Item = &CellData> {
        self.cells_by_row
            .get(row as usize)
            .into_iter()
            .flatten()
            .filter_map(|&idx| self.cells.get(idx))
    }

    pub fn declared_col_width(&self, col: u32) -> Option<f64> {
        self.col_widths
            .iter()
            .rev()
            .find(|w| w.col == col)
            .map(|w| w.width)
    }

    pub fn declared_row_height(&self, row: u32) -> Option<f64> {
        self.row_heights
            .iter()
            .rev()
            .find(|h| h.row == row)
            .map(|h| h.height)
    }

    /// Rebuild the per-row lookup after `cells` was modified directly.
    pub fn rebuild_cell_index(&mut self) {
        if self.cells.is_empty() {
            self.cells_by_row = Vec::new();
            return;
        }

        let max_row = self.cells.iter().map(|c| c.r).max().unwrap_or(0) as usize;
        let mut rows: Vec<Vec<usize>> = vec![Vec::new(); max_row + 1];

        for (idx, cell) in self.cells.iter().enumerate() {
            if let Some(row_cells) = rows.get_mut(cell.r as usize) {
                row_cells.push(idx);
            }
        }

        for row_cells in &mut rows {
            row_cells.sort_by_key(|&i| self.cells.get(i).map_or(u32::MAX, |cell| cell.c));
            // Later duplicates win, matching set_cell.
            row_cells.dedup_by(|later, earlier| {
                let same_col = self.cells.get(*later).map(|c| c.c)
                    == self.cells.get(*earlier).map(|c| c.c);
                if same_col {
                    *earlier = (*earlier).max(*later);
                }
                same_col
            });
        }

        self.cells_by_row = rows;
    }

    fn index_cell(&mut self, idx: usize) {
        let Some(cell) = self.cells.get(idx) else {
            return;
        };
        let (row, col) = (cell.r as usize, cell.c);
        if self.cells_by_row.len() <= row {
            self.cells_by_row.resize_with(row + 1, Vec::new);
        }
        let cells = &self.cells;
        if let Some(row_cells) = self.cells_by_row.get_mut(row) {
            let pos = row_cells
                .partition_point(|&i| cells.get(i).is_some_and(|existing| existing.c < col));
            row_cells.insert(pos, idx);
        }
    }

    pub(crate) fn cell_index_at(&self, row: u32, col: u32) -> Option<usize> {
        let row_cells = self.cells_by_row.get(row as usize)?;
        let pos = row_cells
            .partition_point(|&i| self.cells.get(i).is_some_and(|cell| cell.c < col));
        let idx = row_cells.get(pos).copied()?;
        self.cells
            .get(idx)
            .is_some_and(|cell| cell.c == col)
            .then_some(idx)
    }
}
