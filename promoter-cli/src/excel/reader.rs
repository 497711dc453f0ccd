//! Read the first sheet of a workbook into an [`InputTable`]
//!
//! The workbook format (xlsx, xls, xlsb, ods) is detected by calamine.
//! Header handling follows the usual dataframe conventions:
//! - blank header cells become `Unnamed: <index>`
//! - repeated labels get a `.1`, `.2`, ... suffix
//! - rows without a single non-empty cell are dropped

use std::collections::{HashMap, HashSet};
use std::io::{Cursor, Read, Seek};
use std::path::Path;

use calamine::{Data, Range, Reader, Sheets, open_workbook_auto, open_workbook_auto_from_rs};
use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{PipelineError, PipelineResult};
use crate::table::{Cell, Header, InputTable};

/// Read the first sheet of the workbook at `path`
pub fn read_first_sheet<P: AsRef<Path>>(path: P) -> PipelineResult<InputTable> {
    let path = path.as_ref();
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| PipelineError::UnreadableFile(format!("{}: {}", path.display(), e)))?;

    log::debug!("Opened workbook {}", path.display());
    first_sheet(&mut workbook)
}

/// Read the first sheet of a workbook held in memory
pub fn read_first_sheet_from_bytes(bytes: Vec<u8>) -> PipelineResult<InputTable> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| PipelineError::UnreadableFile(e.to_string()))?;

    first_sheet(&mut workbook)
}

fn first_sheet<RS: Read + Seek>(workbook: &mut Sheets<RS>) -> PipelineResult<InputTable> {
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| PipelineError::MalformedSpreadsheet("workbook has no sheets".into()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| PipelineError::MalformedSpreadsheet("workbook has no sheets".into()))??;

    log::debug!(
        "Sheet '{}' spans {} rows x {} columns",
        sheet_name,
        range.get_size().0,
        range.get_size().1
    );

    Ok(range_to_table(&range))
}

/// Convert a calamine range (header row first) into a table
pub(crate) fn range_to_table(range: &Range<Data>) -> InputTable {
    let mut rows = range.rows();

    let headers = match rows.next() {
        Some(header_row) => dedupe_headers(
            header_row
                .iter()
                .enumerate()
                .map(|(idx, cell)| data_to_header(idx, cell))
                .collect(),
        ),
        None => return InputTable::default(),
    };

    let data_rows = rows
        .filter(|row| row.iter().any(|c| !matches!(c, Data::Empty)))
        .map(|row| row.iter().map(data_to_cell).collect())
        .collect();

    InputTable::new(headers, data_rows)
}

fn data_to_header(idx: usize, cell: &Data) -> Header {
    match cell {
        Data::String(s) if !s.is_empty() => Header::Text(s.clone()),
        Data::Empty | Data::String(_) => Header::Other(format!("Unnamed: {}", idx)),
        other => Header::Other(data_to_cell(other).display().unwrap_or_default()),
    }
}

/// Suffix repeated labels so each column can be addressed by name
///
/// A generated label never collides with another header, so a column
/// literally named `UE100.1` in the sheet keeps its name.
fn dedupe_headers(headers: Vec<Header>) -> Vec<Header> {
    let in_sheet: HashSet<String> = headers.iter().map(|h| h.label().to_string()).collect();
    let mut used: HashSet<String> = HashSet::new();
    let mut next_suffix: HashMap<String, usize> = HashMap::new();

    headers
        .into_iter()
        .map(|header| {
            let label = header.label().to_string();
            if used.insert(label.clone()) {
                return header;
            }

            // Bump the suffix until the label is free
            let suffix = next_suffix.entry(label.clone()).or_insert(1);
            let mut renamed = format!("{}.{}", label, suffix);
            while used.contains(&renamed) || in_sheet.contains(&renamed) {
                *suffix += 1;
                renamed = format!("{}.{}", label, suffix);
            }
            *suffix += 1;
            used.insert(renamed.clone());

            match header {
                Header::Text(_) => Header::Text(renamed),
                Header::Other(_) => Header::Other(renamed),
            }
        })
        .collect()
}

fn data_to_cell(cell: &Data) -> Cell {
    match cell {
        Data::Empty => Cell::Empty,
        Data::String(s) if s.is_empty() => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Int(i) => Cell::Int(*i),
        Data::Float(f) => Cell::Float(*f),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) if dt.is_datetime() => match excel_serial_to_datetime(dt.as_f64()) {
            Some(ndt) => Cell::DateTime(format_datetime(ndt)),
            None => Cell::Float(dt.as_f64()),
        },
        Data::DateTime(dt) => Cell::Float(dt.as_f64()),
        Data::DateTimeIso(s) => Cell::DateTime(s.clone()),
        Data::DurationIso(s) => Cell::DateTime(s.clone()),
        Data::Error(e) => Cell::Error(e.to_string()),
    }
}

/// Convert an Excel serial date (1900 system) to a timestamp
///
/// Serial 60 is the non-existent 1900-02-29; serials below it are one day
/// ahead of the 1899-12-30 epoch used for everything after.
fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }

    let days = serial.floor() as u64;
    let secs = ((serial - serial.floor()) * 86_400.0).round() as u32;

    let epoch = if days < 60 {
        NaiveDate::from_ymd_opt(1899, 12, 31)?
    } else {
        NaiveDate::from_ymd_opt(1899, 12, 30)?
    };
    let date = epoch.checked_add_days(Days::new(days))?;

    // Rounding can push a value like 0.999999 up to a full day
    let (date, secs) = if secs >= 86_400 {
        (date.checked_add_days(Days::new(1))?, secs - 86_400)
    } else {
        (date, secs)
    };
    let time = NaiveTime::from_num_seconds_from_midnight_opt(secs, 0)?;

    Some(NaiveDateTime::new(date, time))
}

fn format_datetime(ndt: NaiveDateTime) -> String {
    if ndt.time() == NaiveTime::MIN {
        ndt.format("%Y-%m-%d").to_string()
    } else {
        ndt.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
