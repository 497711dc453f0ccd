//! One conversion, end to end
//!
//! load -> check id column -> classify -> select -> reshape -> serialize.
//! Each step either hands its result to the next or stops the run with a
//! [`PipelineError`]; nothing is returned for download unless every step
//! succeeded.

use std::path::Path;

use crate::classify::{ColumnClassifier, Policy};
use crate::config::Config;
use crate::error::{PipelineError, PipelineResult};
use crate::excel::{read_first_sheet, read_first_sheet_from_bytes};
use crate::export::{Download, ExportOptions, build_downloads};
use crate::reshape::{OutputTable, reshape};
use crate::selection::ColumnSelector;
use crate::table::InputTable;

/// Settings for a single run
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub id_column: String,
    pub policy: Policy,
    pub prefixes: Vec<String>,
    pub export: ExportOptions,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for PipelineOptions {
    fn from(config: &Config) -> Self {
        Self {
            id_column: config.id_column.clone(),
            policy: config.policy,
            prefixes: config.prefixes.clone(),
            export: config.export_options(),
        }
    }
}

impl PipelineOptions {
    pub fn classifier(&self) -> Box<dyn ColumnClassifier> {
        self.policy.classifier(&self.prefixes)
    }
}

/// Everything a successful run produces
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Columns the classifier flagged
    pub detected: Vec<String>,
    /// Columns confirmed for the reshape
    pub selected: Vec<String>,
    pub output: OutputTable,
    pub downloads: Vec<Download>,
}

/// Check the id column and classify the remaining headers
///
/// The id column is checked first, then never counted as a product code.
pub fn detect_columns(table: &InputTable, options: &PipelineOptions) -> PipelineResult<Vec<String>> {
    // Required column first
    if !table.has_column(&options.id_column) {
        return Err(PipelineError::MissingRequiredColumn {
            column: options.id_column.clone(),
        });
    }

    // Classify headers
    let detected: Vec<String> = options
        .classifier()
        .classify(table.headers())
        .into_iter()
        .filter(|c| *c != options.id_column)
        .collect();

    if detected.is_empty() {
        return Err(PipelineError::NoCodeColumnsDetected {
            policy: options.policy.to_string(),
            hint: options.policy.hint(&options.prefixes),
        });
    }

    log::info!(
        "Detected {} product-code columns with the {} policy",
        detected.len(),
        options.policy
    );
    Ok(detected)
}

/// Run the whole pipeline on an already loaded table
pub fn convert_table(
    table: &InputTable,
    options: &PipelineOptions,
    selector: &mut dyn ColumnSelector,
) -> PipelineResult<Conversion> {
    let detected = detect_columns(table, options)?;

    // Human confirmation, then the melt
    let selected = selector.select(&detected)?;
    let output = reshape(table, &options.id_column, &selected)?;

    // Build every buffer before handing anything back
    let downloads = build_downloads(&output, &options.export)?;

    Ok(Conversion {
        detected,
        selected,
        output,
        downloads,
    })
}

/// Run the pipeline on a workbook file
pub fn convert_file<P: AsRef<Path>>(
    path: P,
    options: &PipelineOptions,
    selector: &mut dyn ColumnSelector,
) -> PipelineResult<Conversion> {
    let table = read_first_sheet(path)?;
    log::info!("Read {} data rows", table.row_count());
    convert_table(&table, options, selector)
}

/// Run the pipeline on workbook bytes, e.g. from an upload
pub fn convert_bytes(
    bytes: Vec<u8>,
    options: &PipelineOptions,
    selector: &mut dyn ColumnSelector,
) -> PipelineResult<Conversion> {
    let table = read_first_sheet_from_bytes(bytes)?;
    log::info!("Read {} data rows", table.row_count());
    convert_table(&table, options, selector)
}
