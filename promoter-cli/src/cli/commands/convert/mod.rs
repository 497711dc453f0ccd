mod handler;

use std::path::PathBuf;

use clap::Args;

use super::ColumnArgs;

pub use handler::handle_convert_command;

#[derive(Args, Debug)]
pub struct ConvertCommands {
    /// Spreadsheet to convert (.xlsx / .xls); only the first sheet is read
    pub input: PathBuf,

    /// Directory the output files are written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    #[command(flatten)]
    pub columns: ColumnArgs,

    /// Reshape only these detected columns (repeatable)
    #[arg(long, value_name = "COLUMN")]
    pub only: Vec<String>,

    /// Leave these detected columns out (repeatable)
    #[arg(long, value_name = "COLUMN")]
    pub exclude: Vec<String>,

    /// Pick the columns from a checklist, all checked by default
    #[arg(short, long, conflicts_with_all = ["only", "exclude"])]
    pub interactive: bool,

    /// Do not print the preview table
    #[arg(long)]
    pub no_preview: bool,

    /// Rows to show in the preview (overrides the config file)
    #[arg(long)]
    pub preview_rows: Option<usize>,

    /// Write only the CSV file
    #[arg(long, conflicts_with = "xlsx_only")]
    pub csv_only: bool,

    /// Write only the Excel file
    #[arg(long)]
    pub xlsx_only: bool,
}
