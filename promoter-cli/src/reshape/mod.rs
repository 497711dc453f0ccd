//! Wide-to-long reshape of the promoter sheet
//!
//! Every (promoter row, product-code column) pair with a non-blank value
//! becomes one [`OutputRow`]. The result is stably sorted by promoter, then
//! product code.

use crate::error::{PipelineError, PipelineResult};
use crate::table::InputTable;

/// Output column headers, in order
pub const OUTPUT_HEADERS: [&str; 3] = ["PROMOTER", "COD PRODUS", "LITERA"];

/// One promoter / product code / letter triple
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct OutputRow {
    pub promoter: String,
    pub cod_produs: String,
    pub litera: String,
}

impl OutputRow {
    pub fn new(
        promoter: impl Into<String>,
        cod_produs: impl Into<String>,
        litera: impl Into<String>,
    ) -> Self {
        Self {
            promoter: promoter.into(),
            cod_produs: cod_produs.into(),
            litera: litera.into(),
        }
    }

    /// Field values in [`OUTPUT_HEADERS`] order
    pub fn fields(&self) -> [&str; 3] {
        [&self.promoter, &self.cod_produs, &self.litera]
    }
}

/// The sorted long-format table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputTable {
    rows: Vec<OutputRow>,
}

impl OutputTable {
    pub fn rows(&self) -> &[OutputRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct product codes, in first-seen order
    pub fn product_codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = Vec::new();
        for row in &self.rows {
            if !codes.contains(&row.cod_produs.as_str()) {
                codes.push(&row.cod_produs);
            }
        }
        codes
    }
}

/// Melt `code_cols` of `table` into the long format
///
/// `promoter_col` must exist; a missing code column is skipped with a
/// warning since it cannot contribute any rows.
pub fn reshape(
    table: &InputTable,
    promoter_col: &str,
    code_cols: &[String],
) -> PipelineResult<OutputTable> {
    // Resolve column positions once
    let promoter_idx =
        table
            .column_index(promoter_col)
            .ok_or_else(|| PipelineError::MissingRequiredColumn {
                column: promoter_col.to_string(),
            })?;

    let columns: Vec<(usize, &str)> = code_cols
        .iter()
        .filter_map(|name| match table.column_index(name) {
            Some(idx) => Some((idx, name.as_str())),
            None => {
                log::warn!("Column '{}' is not in the sheet, skipping", name);
                None
            }
        })
        .collect();

    let mut rows = Vec::new();
    let mut dropped = 0usize;

    // Melt, skipping missing and blank cells
    for row in table.rows() {
        let promoter = row[promoter_idx].display().unwrap_or_default();

        for &(col_idx, code) in &columns {
            match row[col_idx].display() {
                Some(value) if !value.trim().is_empty() => {
                    rows.push(OutputRow::new(promoter.clone(), code, value));
                }
                _ => dropped += 1,
            }
        }
    }

    // Stable sort keeps input order for equal keys
    rows.sort_by(|a, b| {
        a.promoter
            .cmp(&b.promoter)
            .then_with(|| a.cod_produs.cmp(&b.cod_produs))
    });

    log::info!(
        "Reshaped {} rows x {} columns into {} rows ({} blank cells dropped)",
        table.row_count(),
        columns.len(),
        rows.len(),
        dropped
    );

    Ok(OutputTable { rows })
}
