//! Command-line adapter around the conversion pipeline

pub mod commands;
mod messages;
mod prompt;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;
use commands::convert::{ConvertCommands, handle_convert_command};
use commands::detect::{DetectCommands, handle_detect_command};

pub use messages::describe_error;
pub use prompt::PromptSelector;

#[derive(Parser, Debug)]
#[command(name = "promoter-cli")]
#[command(about = "Build the PROMOTER / COD PRODUS / LITERA table from a promoter spreadsheet")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: <config dir>/promoter-cli/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Show debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reshape the first sheet and write the CSV and Excel outputs
    Convert(ConvertCommands),
    /// List the columns that would be treated as product codes
    Detect(DetectCommands),
}

/// Dispatch a parsed command line
pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Convert(args) => handle_convert_command(args, &config),
        Commands::Detect(args) => handle_detect_command(args, &config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Policy;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_convert() {
        let cli = Cli::try_parse_from([
            "promoter-cli",
            "convert",
            "input.xlsx",
            "--policy",
            "prefix",
            "--exclude",
            "UE100",
            "--exclude",
            "QE200",
            "-o",
            "out",
        ])
        .unwrap();

        match cli.command {
            Commands::Convert(args) => {
                assert_eq!(args.input, PathBuf::from("input.xlsx"));
                assert_eq!(args.columns.policy, Some(Policy::Prefix));
                assert_eq!(args.exclude, vec!["UE100", "QE200"]);
                assert_eq!(args.output_dir, PathBuf::from("out"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_csv_only_conflicts_with_xlsx_only() {
        let result = Cli::try_parse_from([
            "promoter-cli",
            "convert",
            "input.xlsx",
            "--csv-only",
            "--xlsx-only",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_detect_with_global_flags() {
        let cli =
            Cli::try_parse_from(["promoter-cli", "detect", "input.xlsx", "--verbose", "--no-color"])
                .unwrap();
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert!(matches!(cli.command, Commands::Detect(_)));
    }
}
