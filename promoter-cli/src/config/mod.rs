//! Optional TOML configuration
//!
//! Looked up at `--config <PATH>` or `<config_dir>/promoter-cli/config.toml`.
//! Every key has a default, so a missing default file is not an error.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::classify::{DEFAULT_PREFIXES, Policy};
use crate::export::{CSV_FILE_NAME, DEFAULT_SHEET_NAME, ExportOptions, XLSX_FILE_NAME};

/// Name of the required promoter column
pub const DEFAULT_ID_COLUMN: &str = "PROMOTER";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Column identifying the promoter on each row
    pub id_column: String,
    /// Product-code detection policy
    pub policy: Policy,
    /// Prefixes used by the prefix policy
    pub prefixes: Vec<String>,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub sheet_name: String,
    pub csv_file: String,
    pub xlsx_file: String,
    /// Rows shown in the terminal preview
    pub preview_rows: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            id_column: DEFAULT_ID_COLUMN.to_string(),
            policy: Policy::default(),
            prefixes: DEFAULT_PREFIXES.iter().map(|p| p.to_string()).collect(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            csv_file: CSV_FILE_NAME.to_string(),
            xlsx_file: XLSX_FILE_NAME.to_string(),
            preview_rows: 20,
        }
    }
}

impl Config {
    /// Default config location (~/.config/promoter-cli/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("promoter-cli").join("config.toml"))
    }

    /// Load from an explicit path, or from the default location if present
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_file(&path),
                _ => {
                    log::debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse TOML")?;
        if config.id_column.trim().is_empty() {
            anyhow::bail!("id_column must not be empty");
        }
        if config.policy == Policy::Prefix && config.prefixes.is_empty() {
            anyhow::bail!("prefix policy needs at least one entry in 'prefixes'");
        }
        Ok(config)
    }

    /// Export settings derived from the output section
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            sheet_name: self.output.sheet_name.clone(),
            csv_file: self.output.csv_file.clone(),
            xlsx_file: self.output.xlsx_file.clone(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.id_column, "PROMOTER");
        assert_eq!(config.policy, Policy::Pattern);
        assert_eq!(config.prefixes, vec!["UE", "QE"]);
        assert_eq!(config.output.sheet_name, "Tabel");
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_toml_str(
            r#"
            policy = "prefix"
            prefixes = ["UE", "QE", "TX"]

            [output]
            preview_rows = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.policy, Policy::Prefix);
        assert_eq!(config.prefixes.len(), 3);
        assert_eq!(config.output.preview_rows, 5);
        assert_eq!(config.output.csv_file, "tabel_promoter_cod_litera.csv");
    }

    #[test]
    fn test_invalid_config() {
        assert!(Config::from_toml_str("policy = \"fuzzy\"").is_err());
        assert!(Config::from_toml_str("id_column = \"  \"").is_err());
        assert!(Config::from_toml_str("policy = \"prefix\"\nprefixes = []").is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "id_column = \"AGENT\"\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.id_column, "AGENT");

        assert!(Config::load(Some(&dir.path().join("missing.toml"))).is_err());
    }

    #[test]
    fn test_export_options_follow_config() {
        let mut config = Config::default();
        config.output.sheet_name = "Long".into();
        let options = config.export_options();
        assert_eq!(options.sheet_name, "Long");
        assert!(options.csv && options.xlsx);
    }
}
