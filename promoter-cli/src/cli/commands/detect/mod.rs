mod handler;

use std::path::PathBuf;

use clap::Args;

use super::ColumnArgs;

pub use handler::handle_detect_command;

#[derive(Args, Debug)]
pub struct DetectCommands {
    /// Spreadsheet to inspect; only the first sheet is read
    pub input: PathBuf,

    #[command(flatten)]
    pub columns: ColumnArgs,
}
