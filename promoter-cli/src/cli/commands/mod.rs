pub mod convert;
pub mod detect;

use anyhow::Result;
use clap::Args;

use crate::classify::Policy;
use crate::config::Config;
use crate::pipeline::PipelineOptions;

/// Column detection flags shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct ColumnArgs {
    /// Product-code detection policy (overrides the config file)
    #[arg(long, value_enum)]
    pub policy: Option<Policy>,

    /// Name of the promoter column (overrides the config file)
    #[arg(long)]
    pub id_column: Option<String>,
}

impl ColumnArgs {
    /// Pipeline options from the config, with flags taking precedence
    pub fn options(&self, config: &Config) -> Result<PipelineOptions> {
        let mut options = PipelineOptions::from(config);
        if let Some(policy) = self.policy {
            options.policy = policy;
        }
        if let Some(ref id_column) = self.id_column {
            options.id_column = id_column.clone();
        }

        // Same rule as the config file, now that flags are applied
        if options.policy == Policy::Prefix && options.prefixes.is_empty() {
            anyhow::bail!("prefix policy needs at least one entry in 'prefixes'");
        }
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let config = Config::default();
        let args = ColumnArgs {
            policy: Some(Policy::Prefix),
            id_column: Some("AGENT".into()),
        };

        let options = args.options(&config).unwrap();

        assert_eq!(options.policy, Policy::Prefix);
        assert_eq!(options.id_column, "AGENT");
        assert_eq!(options.prefixes, config.prefixes);
    }

    #[test]
    fn test_no_flags_keeps_config() {
        let options = ColumnArgs::default().options(&Config::default()).unwrap();
        assert_eq!(options.policy, Policy::Pattern);
        assert_eq!(options.id_column, "PROMOTER");
    }

    #[test]
    fn test_prefix_flag_without_prefixes_is_rejected() {
        let config = Config {
            prefixes: vec![],
            ..Default::default()
        };
        let args = ColumnArgs {
            policy: Some(Policy::Prefix),
            id_column: None,
        };

        let err = args.options(&config).unwrap_err();
        assert!(err.to_string().contains("prefixes"));

        // Pattern policy does not use the list
        assert!(ColumnArgs::default().options(&config).is_ok());
    }
}
