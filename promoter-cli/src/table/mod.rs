//! In-memory representation of the wide input sheet

use std::fmt;

/// A column header from the first row of the sheet
///
/// Spreadsheets allow any cell type in the header row. Only textual
/// headers can name a product code, so the original cell kind is kept
/// alongside the display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Header {
    /// Header cell holding a string
    Text(String),
    /// Header cell holding a number, date, bool, or nothing at all
    Other(String),
}

impl Header {
    /// Display label used for lookups and output
    pub fn label(&self) -> &str {
        match self {
            Header::Text(s) | Header::Other(s) => s,
        }
    }

    /// The header text, if the cell was a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Header::Text(s) => Some(s),
            Header::Other(_) => None,
        }
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single data cell
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Missing value
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Date or duration, already rendered by the workbook reader
    DateTime(String),
    /// Spreadsheet error value such as `#N/A`; treated as missing
    Error(String),
}

impl Cell {
    /// Check if this cell counts as missing
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Empty | Cell::Error(_))
    }

    /// Render the cell as a display string, `None` when missing
    pub fn display(&self) -> Option<String> {
        match self {
            Cell::Empty | Cell::Error(_) => None,
            Cell::Text(s) => Some(s.clone()),
            Cell::Int(i) => Some(i.to_string()),
            Cell::Float(f) => Some(format_float(*f)),
            Cell::Bool(b) => Some(if *b { "TRUE" } else { "FALSE" }.to_string()),
            Cell::DateTime(s) => Some(s.clone()),
        }
    }
}

/// Whole numbers print without a fractional part (`3.0` -> `3`)
fn format_float(f: f64) -> String {
    // Negative zero prints as "0"
    let f = if f == 0.0 { 0.0 } else { f };
    if f.fract() == 0.0 && f.abs() <= 9_007_199_254_740_992.0 {
        format!("{:.0}", f)
    } else {
        f.to_string()
    }
}

/// The first sheet of an uploaded workbook: headers plus data rows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputTable {
    headers: Vec<Header>,
    rows: Vec<Vec<Cell>>,
}

impl InputTable {
    /// Build a table, padding short rows with empty cells
    pub fn new(headers: Vec<Header>, rows: Vec<Vec<Cell>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, Cell::Empty);
                row
            })
            .collect();
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[Header] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Index of the first column whose label equals `name`
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.label() == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }
}
