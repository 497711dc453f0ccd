//! User-facing text for pipeline failures

use crate::error::PipelineError;

/// Short title and body for a halting condition
pub fn describe_error(err: &PipelineError) -> (&'static str, String) {
    match err {
        PipelineError::MissingRequiredColumn { .. } => ("Missing column", err.to_string()),
        PipelineError::NoCodeColumnsDetected { .. } => ("No product codes", err.to_string()),
        PipelineError::NoCodeColumnsSelected => ("Nothing selected", err.to_string()),
        PipelineError::UnreadableFile(_)
        | PipelineError::MalformedSpreadsheet(_)
        | PipelineError::Export { .. } => (
            "Processing error",
            format!("An error occurred while processing the file: {}", err),
        ),
    }
}

/// Log a pipeline failure and turn it into the error the command returns
pub(crate) fn report_pipeline_error(err: &PipelineError) -> anyhow::Error {
    let (title, body) = describe_error(err);
    log::error!("{}: {:?}", title, err);
    anyhow::anyhow!("{}: {}", title, body)
}
