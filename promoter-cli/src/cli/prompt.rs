//! Interactive checklist for the detected product-code columns

use anyhow::Result;
use dialoguer::MultiSelect;
use dialoguer::theme::ColorfulTheme;
use is_terminal::IsTerminal;

use crate::error::{PipelineError, PipelineResult};
use crate::selection::{ColumnSelector, select_by_index};

/// Asks the user which detected columns to keep; everything starts checked
pub struct PromptSelector {
    theme: ColorfulTheme,
}

impl PromptSelector {
    /// Fails when stdin/stdout are not attached to a terminal
    pub fn new() -> Result<Self> {
        if !std::io::stdin().is_terminal() || !std::io::stdout().is_terminal() {
            anyhow::bail!("--interactive needs a terminal; use --only/--exclude instead");
        }
        Ok(Self {
            theme: ColorfulTheme::default(),
        })
    }
}

impl ColumnSelector for PromptSelector {
    fn select(&mut self, detected: &[String]) -> PipelineResult<Vec<String>> {
        let defaults = vec![true; detected.len()];

        let chosen = MultiSelect::with_theme(&self.theme)
            .with_prompt("Product-code columns to include (space toggles, enter confirms)")
            .items(detected)
            .defaults(&defaults)
            .interact()
            .map_err(|e| {
                log::warn!("Column prompt aborted: {}", e);
                PipelineError::NoCodeColumnsSelected
            })?;

        select_by_index(detected, &chosen)
    }
}
