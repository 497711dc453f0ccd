//! Detect command handler

use anyhow::Result;
use colored::*;

use super::DetectCommands;
use crate::cli::messages::report_pipeline_error;
use crate::config::Config;
use crate::excel::read_first_sheet;
use crate::pipeline::detect_columns;

/// Print the product-code columns the configured policy picks up
pub fn handle_detect_command(args: DetectCommands, config: &Config) -> Result<()> {
    // Validate arguments
    if !args.input.exists() {
        anyhow::bail!("Input file does not exist: {}", args.input.display());
    }

    let options = args.columns.options(config)?;

    let detected = read_first_sheet(&args.input)
        .and_then(|table| detect_columns(&table, &options))
        .map_err(|err| report_pipeline_error(&err))?;

    println!(
        "{} product-code columns ({} policy):",
        detected.len().to_string().bright_green().bold(),
        options.policy
    );
    for column in &detected {
        println!("  {}", column);
    }

    Ok(())
}
