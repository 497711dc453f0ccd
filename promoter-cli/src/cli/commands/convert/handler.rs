//! Convert command handler

use std::fs;

use anyhow::{Context, Result};
use colored::*;

use super::ConvertCommands;
use crate::cli::messages::report_pipeline_error;
use crate::cli::prompt::PromptSelector;
use crate::config::Config;
use crate::pipeline::{Conversion, convert_file};
use crate::preview::render_preview;
use crate::selection::{ColumnSelector, SelectionOverride};

/// Run the full conversion and write the outputs
pub fn handle_convert_command(args: ConvertCommands, config: &Config) -> Result<()> {
    // Validate arguments
    if !args.input.exists() {
        anyhow::bail!("Input file does not exist: {}", args.input.display());
    }

    let mut options = args.columns.options(config)?;
    options.export.csv = !args.xlsx_only;
    options.export.xlsx = !args.csv_only;

    // Pick how the detected columns get confirmed
    let mut prompt;
    let mut selection;
    let selector: &mut dyn ColumnSelector = if args.interactive {
        prompt = PromptSelector::new()?;
        &mut prompt
    } else {
        selection = SelectionOverride {
            only: args.only,
            exclude: args.exclude,
        };
        &mut selection
    };

    log::info!("Converting {}", args.input.display());

    let conversion = match convert_file(&args.input, &options, selector) {
        Ok(conversion) => conversion,
        Err(err) => return Err(report_pipeline_error(&err)),
    };

    if !args.no_preview {
        let limit = args.preview_rows.unwrap_or(config.output.preview_rows);
        print_summary(&conversion);
        println!();
        print!("{}", render_preview(&conversion.output, limit));
        println!();
    }

    // Write outputs
    fs::create_dir_all(&args.output_dir).with_context(|| {
        format!("Failed to create output directory: {}", args.output_dir.display())
    })?;

    for download in &conversion.downloads {
        let path = download.save_to(&args.output_dir)?;
        println!(
            "{} {} ({}, {} bytes)",
            "Saved".bright_green().bold(),
            path.display(),
            download.mime_type().dimmed(),
            download.bytes.len()
        );
    }

    Ok(())
}

fn print_summary(conversion: &Conversion) {
    println!(
        "{} {} of {} detected columns: {}",
        "Using".cyan(),
        conversion.selected.len(),
        conversion.detected.len(),
        conversion.selected.join(", ")
    );
}
