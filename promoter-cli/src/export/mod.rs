//! Downloadable outputs for a finished conversion

pub mod csv_exporter;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::error::PipelineResult;
use crate::excel::write_output_xlsx;
use crate::reshape::OutputTable;

pub use csv_exporter::{UTF8_BOM, write_output_csv};

pub const CSV_FILE_NAME: &str = "tabel_promoter_cod_litera.csv";
pub const XLSX_FILE_NAME: &str = "tabel_promoter_cod_litera.xlsx";
pub const CSV_MIME: &str = "text/csv";
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const DEFAULT_SHEET_NAME: &str = "Tabel";

/// Output format of a download
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Xlsx,
}

impl OutputFormat {
    pub fn mime_type(self) -> &'static str {
        match self {
            OutputFormat::Csv => CSV_MIME,
            OutputFormat::Xlsx => XLSX_MIME,
        }
    }
}

/// A serialized output with the name and MIME type it is offered under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub format: OutputFormat,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Download {
    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    /// Write the download into `dir`, returning the full path
    pub fn save_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(&self.file_name);
        fs::write(&path, &self.bytes)
            .with_context(|| format!("Failed to write output file: {}", path.display()))?;
        Ok(path)
    }
}

/// Names and layout of the produced files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub sheet_name: String,
    pub csv_file: String,
    pub xlsx_file: String,
    pub csv: bool,
    pub xlsx: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            csv_file: CSV_FILE_NAME.to_string(),
            xlsx_file: XLSX_FILE_NAME.to_string(),
            csv: true,
            xlsx: true,
        }
    }
}

/// Serialize `table` into every requested format
///
/// All buffers are built before any is returned, so a failure in one
/// format means no download at all.
pub fn build_downloads(table: &OutputTable, options: &ExportOptions) -> PipelineResult<Vec<Download>> {
    let mut downloads = Vec::new();

    if options.csv {
        downloads.push(Download {
            format: OutputFormat::Csv,
            file_name: options.csv_file.clone(),
            bytes: write_output_csv(table)?,
        });
    }

    if options.xlsx {
        downloads.push(Download {
            format: OutputFormat::Xlsx,
            file_name: options.xlsx_file.clone(),
            bytes: write_output_xlsx(table, &options.sheet_name)?,
        });
    }

    Ok(downloads)
}
