//! Manual override on top of automatic column detection
//!
//! Detected columns start out selected. A user can narrow the set with an
//! explicit allow list, a deny list, or an interactive prompt. Whatever is
//! left is what the reshape step melts.

use std::collections::HashSet;

use crate::error::{PipelineError, PipelineResult};

/// Confirms which detected columns to reshape
pub trait ColumnSelector {
    /// Return the confirmed subset of `detected`, in detection order
    fn select(&mut self, detected: &[String]) -> PipelineResult<Vec<String>>;
}

/// Manual narrowing of the detected product-code columns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionOverride {
    /// Keep only these columns (empty = keep all)
    pub only: Vec<String>,
    /// Drop these columns
    pub exclude: Vec<String>,
}

impl SelectionOverride {
    pub fn is_empty(&self) -> bool {
        self.only.is_empty() && self.exclude.is_empty()
    }

    /// Names in the override that are not among the detected columns
    pub fn unknown_columns<'a>(&'a self, detected: &[String]) -> Vec<&'a str> {
        let detected: HashSet<&str> = detected.iter().map(String::as_str).collect();
        self.only
            .iter()
            .chain(self.exclude.iter())
            .map(String::as_str)
            .filter(|name| !detected.contains(name))
            .collect()
    }
}

impl ColumnSelector for SelectionOverride {
    fn select(&mut self, detected: &[String]) -> PipelineResult<Vec<String>> {
        apply_selection(detected, self)
    }
}

/// Apply an override to the detected columns, keeping detection order
///
/// Fails with [`PipelineError::NoCodeColumnsSelected`] when nothing is
/// left to reshape.
pub fn apply_selection(
    detected: &[String],
    selection: &SelectionOverride,
) -> PipelineResult<Vec<String>> {
    for name in selection.unknown_columns(detected) {
        log::warn!("Ignoring '{}': not a detected product-code column", name);
    }

    let only: HashSet<&str> = selection.only.iter().map(String::as_str).collect();
    let exclude: HashSet<&str> = selection.exclude.iter().map(String::as_str).collect();

    let selected: Vec<String> = detected
        .iter()
        .filter(|c| only.is_empty() || only.contains(c.as_str()))
        .filter(|c| !exclude.contains(c.as_str()))
        .cloned()
        .collect();

    if selected.is_empty() {
        return Err(PipelineError::NoCodeColumnsSelected);
    }

    log::info!("Using {} of {} detected columns", selected.len(), detected.len());
    Ok(selected)
}

/// Keep the detected columns whose positions are in `chosen`
///
/// Used with prompts that report selections by index.
pub fn select_by_index(detected: &[String], chosen: &[usize]) -> PipelineResult<Vec<String>> {
    let chosen: HashSet<usize> = chosen.iter().copied().collect();
    let selected: Vec<String> = detected
        .iter()
        .enumerate()
        .filter(|(idx, _)| chosen.contains(idx))
        .map(|(_, c)| c.clone())
        .collect();

    if selected.is_empty() {
        return Err(PipelineError::NoCodeColumnsSelected);
    }
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detected() -> Vec<String> {
        vec!["UE100".into(), "QE200".into(), "FOO300".into()]
    }

    #[test]
    fn test_default_keeps_everything() {
        let selected = apply_selection(&detected(), &SelectionOverride::default()).unwrap();
        assert_eq!(selected, detected());
    }

    #[test]
    fn test_only_keeps_detection_order() {
        let selection = SelectionOverride {
            only: vec!["FOO300".into(), "UE100".into()],
            exclude: vec![],
        };
        let selected = apply_selection(&detected(), &selection).unwrap();
        assert_eq!(selected, vec!["UE100", "FOO300"]);
    }

    #[test]
    fn test_exclude() {
        let selection = SelectionOverride {
            only: vec![],
            exclude: vec!["FOO300".into()],
        };
        let selected = apply_selection(&detected(), &selection).unwrap();
        assert_eq!(selected, vec!["UE100", "QE200"]);
    }

    #[test]
    fn test_deselecting_everything_halts() {
        let selection = SelectionOverride {
            only: vec![],
            exclude: detected(),
        };
        let err = apply_selection(&detected(), &selection).unwrap_err();
        assert!(matches!(err, PipelineError::NoCodeColumnsSelected));
    }

    #[test]
    fn test_only_with_unknown_names_selects_nothing() {
        let selection = SelectionOverride {
            only: vec!["XX1".into()],
            exclude: vec![],
        };
        assert_eq!(selection.unknown_columns(&detected()), vec!["XX1"]);
        assert!(apply_selection(&detected(), &selection).is_err());
    }

    #[test]
    fn test_override_as_selector() {
        let mut selection = SelectionOverride {
            only: vec![],
            exclude: vec!["QE200".into()],
        };
        let selector: &mut dyn ColumnSelector = &mut selection;
        assert_eq!(selector.select(&detected()).unwrap(), vec!["UE100", "FOO300"]);
    }

    #[test]
    fn test_select_by_index() {
        assert_eq!(select_by_index(&detected(), &[2, 0]).unwrap(), vec!["UE100", "FOO300"]);
        assert!(matches!(
            select_by_index(&detected(), &[]).unwrap_err(),
            PipelineError::NoCodeColumnsSelected
        ));
    }
}
