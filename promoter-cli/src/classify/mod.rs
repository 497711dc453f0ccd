//! Product-code column detection
//!
//! Two policies share the [`ColumnClassifier`] interface:
//! - [`PrefixClassifier`]: textual header starts with one of a fixed set
//!   of prefixes (`UE`, `QE` by default), case-sensitive
//! - [`PatternClassifier`]: trimmed textual header starts with 1-5 letters
//!   followed by at least one digit, case-insensitive

use std::fmt;

use clap::ValueEnum;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::table::Header;

/// Default prefixes for the prefix policy
pub const DEFAULT_PREFIXES: &[&str] = &["UE", "QE"];

static CODE_HEADER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[a-z]{1,5}[0-9]+").expect("valid product code pattern"));

/// Decides which headers name a product-code column
pub trait ColumnClassifier {
    /// Policy this classifier implements
    fn policy(&self) -> Policy;

    /// Check a single header
    fn is_code_column(&self, header: &Header) -> bool;

    /// Labels of all qualifying headers, in sheet order
    fn classify(&self, headers: &[Header]) -> Vec<String> {
        headers
            .iter()
            .filter(|h| {
                let keep = self.is_code_column(h);
                log::debug!("{} '{}': {}", self.policy(), h, if keep { "code" } else { "skip" });
                keep
            })
            .map(|h| h.label().to_string())
            .collect()
    }
}

/// Fixed-prefix detection
#[derive(Debug, Clone)]
pub struct PrefixClassifier {
    prefixes: Vec<String>,
}

impl PrefixClassifier {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for PrefixClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIXES.iter().copied())
    }
}

impl ColumnClassifier for PrefixClassifier {
    fn policy(&self) -> Policy {
        Policy::Prefix
    }

    fn is_code_column(&self, header: &Header) -> bool {
        header
            .as_text()
            .is_some_and(|text| self.prefixes.iter().any(|p| text.starts_with(p.as_str())))
    }
}

/// Letters-then-digits detection
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternClassifier;

impl ColumnClassifier for PatternClassifier {
    fn policy(&self) -> Policy {
        Policy::Pattern
    }

    fn is_code_column(&self, header: &Header) -> bool {
        header
            .as_text()
            .is_some_and(|text| CODE_HEADER_PATTERN.is_match(text.trim()))
    }
}

/// Which detection policy to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Headers starting with a configured prefix
    Prefix,
    /// Headers shaped like letters followed by digits
    #[default]
    Pattern,
}

impl Policy {
    /// Build the classifier for this policy
    pub fn classifier(self, prefixes: &[String]) -> Box<dyn ColumnClassifier> {
        match self {
            Policy::Prefix => Box::new(PrefixClassifier::new(prefixes.iter().cloned())),
            Policy::Pattern => Box::new(PatternClassifier),
        }
    }

    /// Describes the header shapes this policy accepts
    pub fn hint(self, prefixes: &[String]) -> String {
        match self {
            Policy::Prefix => format!(
                "Expected headers starting with {}.",
                prefixes
                    .iter()
                    .map(|p| format!("'{}'", p))
                    .collect::<Vec<_>>()
                    .join(" or ")
            ),
            Policy::Pattern => "Expected headers made of 1-5 letters followed by digits, \
                                e.g. UE98DU9072UXXH or V15SA5003TRJ/A."
                .to_string(),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::Prefix => write!(f, "prefix"),
            Policy::Pattern => write!(f, "pattern"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Header {
        Header::Text(s.to_string())
    }

    fn headers(labels: &[&str]) -> Vec<Header> {
        labels.iter().map(|l| text(l)).collect()
    }

    #[test]
    fn test_scenario_pattern_vs_prefix() {
        let hs = headers(&["PROMOTER", "UE100", "QE200", "FOO300"]);

        assert_eq!(PatternClassifier.classify(&hs), vec!["UE100", "QE200", "FOO300"]);
        assert_eq!(PrefixClassifier::default().classify(&hs), vec!["UE100", "QE200"]);
    }

    #[test]
    fn test_pattern_accepts_model_codes() {
        let c = PatternClassifier;
        assert!(c.is_code_column(&text("UE98DU9072UXXH")));
        assert!(c.is_code_column(&text("V15SA5003TRJ/A")));
        assert!(c.is_code_column(&text("  ue55  ")));
        assert!(c.is_code_column(&text("ABCDE1")));
    }

    #[test]
    fn test_pattern_rejects_other_shapes() {
        let c = PatternClassifier;
        assert!(!c.is_code_column(&text("PROMOTER")));
        assert!(!c.is_code_column(&text("ABCDEF1")));
        assert!(!c.is_code_column(&text("123")));
        assert!(!c.is_code_column(&text("UE-100")));
        assert!(!c.is_code_column(&text("")));
        assert!(!c.is_code_column(&Header::Other("100".into())));
    }

    #[test]
    fn test_prefix_is_case_sensitive_and_shape_free() {
        let c = PrefixClassifier::default();
        assert!(c.is_code_column(&text("UE")));
        assert!(c.is_code_column(&text("QEXYZ")));
        assert!(!c.is_code_column(&text("ue100")));
        assert!(!c.is_code_column(&text(" UE100")));
        assert!(!c.is_code_column(&Header::Other("UE100".into())));
    }

    #[test]
    fn test_policies_agree_on_prefix_then_digit() {
        let prefix = PrefixClassifier::default();
        for label in ["UE1", "QE200", "UE43AU7000", "QE65Q60D/XXH", "UE0"] {
            let h = text(label);
            assert_eq!(prefix.is_code_column(&h), PatternClassifier.is_code_column(&h), "{}", label);
            assert!(prefix.is_code_column(&h));
        }
    }

    #[test]
    fn test_custom_prefixes() {
        let c = PrefixClassifier::new(["TX"]);
        assert_eq!(c.classify(&headers(&["TX1", "UE1"])), vec!["TX1"]);
    }

    #[test]
    fn test_policy_builds_matching_classifier() {
        let prefixes: Vec<String> = DEFAULT_PREFIXES.iter().map(|p| p.to_string()).collect();
        assert_eq!(Policy::Prefix.classifier(&prefixes).policy(), Policy::Prefix);
        assert_eq!(Policy::Pattern.classifier(&prefixes).policy(), Policy::Pattern);
        assert_eq!(Policy::Prefix.hint(&prefixes), "Expected headers starting with 'UE' or 'QE'.");
    }
}
