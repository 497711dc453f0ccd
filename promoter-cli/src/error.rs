use thiserror::Error;

/// Halting conditions of a single conversion
///
/// Every variant maps to one user-facing message; none of them is fatal
/// to the process beyond ending the current run.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Column '{column}' was not found in the file. Check the sheet structure.")]
    MissingRequiredColumn { column: String },

    #[error("No product-code columns detected ({policy} policy). {hint}")]
    NoCodeColumnsDetected { policy: String, hint: String },

    #[error("No product-code column selected. Select at least one column.")]
    NoCodeColumnsSelected,

    #[error("Could not open the file: {0}")]
    UnreadableFile(String),

    #[error("Could not read the first sheet: {0}")]
    MalformedSpreadsheet(String),

    #[error("Could not build the {format} output: {reason}")]
    Export { format: &'static str, reason: String },
}

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;

impl From<calamine::Error> for PipelineError {
    fn from(err: calamine::Error) -> Self {
        PipelineError::MalformedSpreadsheet(err.to_string())
    }
}

impl From<csv::Error> for PipelineError {
    fn from(err: csv::Error) -> Self {
        PipelineError::Export {
            format: "CSV",
            reason: err.to_string(),
        }
    }
}

impl From<rust_xlsxwriter::XlsxError> for PipelineError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        PipelineError::Export {
            format: "Excel",
            reason: err.to_string(),
        }
    }
}
