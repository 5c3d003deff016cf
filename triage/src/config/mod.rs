//! Triage configuration: category vocabulary, keyword lists and escalation thresholds
//!
//! The configuration is built once at process start and shared immutably.
//!
//! # Sources
//!
//! 1. Built-in tables ([`TriageConfig::default`])
//! 2. A TOML file ([`TriageConfig::load`]); any section left out keeps its default
//! 3. Environment overrides for thresholds ([`TriageConfig::apply_env_overrides`])
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |---|---|---|
//! | `TRIAGE_REPEATED_CONTACT_COUNT` | `2` | Contacts before a customer counts as repeated |
//! | `TRIAGE_HIGH_CONFIDENCE` | `0.90` | Confidence needed to escalate High + Negative |
//! | `TRIAGE_MEDIUM_CONFIDENCE` | `0.85` | Confidence needed to escalate repeated High + Negative |
//! | `TRIAGE_LOW_CONFIDENCE` | `0.75` | Below this the classification gets the benefit of the doubt |

mod defaults;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::classify::Category;

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Category {0} is listed more than once")]
    DuplicateCategory(Category),

    #[error("Category {0} declares no sub-categories")]
    NoSubCategories(Category),

    #[error("General Queries is the fallback category and cannot carry keywords")]
    FallbackWithKeywords,

    #[error("Threshold {name} must be within [0, 1], got {value}")]
    ThresholdOutOfRange { name: &'static str, value: f64 },

    #[error("repeated_contact_count must be at least 1")]
    ZeroRepeatedContactCount,

    #[error("Keyword list {list} contains an empty keyword")]
    EmptyKeyword { list: String },
}

/// One sub-category and the keywords that select it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubCategorySpec {
    pub name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// A category, its detection keywords and its ordered sub-categories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySpec {
    pub category: Category,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub sub_categories: Vec<SubCategorySpec>,
}

impl CategorySpec {
    /// Name of the first declared sub-category, if any
    pub fn first_sub_category(&self) -> Option<&str> {
        self.sub_categories.first().map(|s| s.name.as_str())
    }

    pub fn sub_category_names(&self) -> Vec<&str> {
        self.sub_categories.iter().map(|s| s.name.as_str()).collect()
    }
}

/// Keyword lists used for urgency, sentiment and escalation signals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordLists {
    /// Legal language, always escalates
    pub legal: Vec<String>,
    /// Explicit refund demands, always escalates
    pub refund: Vec<String>,
    pub high_urgency: Vec<String>,
    pub medium_urgency: Vec<String>,
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

impl Default for KeywordLists {
    fn default() -> Self {
        Self {
            legal: owned(defaults::LEGAL_KEYWORDS),
            refund: owned(defaults::REFUND_KEYWORDS),
            high_urgency: owned(defaults::HIGH_URGENCY_KEYWORDS),
            medium_urgency: owned(defaults::MEDIUM_URGENCY_KEYWORDS),
            positive: owned(defaults::POSITIVE_KEYWORDS),
            negative: owned(defaults::NEGATIVE_KEYWORDS),
        }
    }
}

/// Thresholds consumed by the escalation rule chain
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EscalationThresholds {
    /// Contact count at which a customer counts as a repeat contact
    pub repeated_contact_count: u32,
    /// High urgency + Negative escalates at or above this confidence
    pub high_confidence: f64,
    /// Repeated contact + High urgency + Negative escalates at or above this confidence
    pub medium_confidence: f64,
    /// Below this confidence the classification gets the benefit of the doubt
    pub low_confidence: f64,
}

impl Default for EscalationThresholds {
    fn default() -> Self {
        Self {
            repeated_contact_count: defaults::REPEATED_CONTACT_COUNT,
            high_confidence: defaults::HIGH_CONFIDENCE_THRESHOLD,
            medium_confidence: defaults::MEDIUM_CONFIDENCE_THRESHOLD,
            low_confidence: defaults::LOW_CONFIDENCE_THRESHOLD,
        }
    }
}

/// Complete triage configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriageConfig {
    /// Categories in matching priority order
    pub categories: Vec<CategorySpec>,
    pub keywords: KeywordLists,
    pub thresholds: EscalationThresholds,
}

impl Default for TriageConfig {
    fn default() -> Self {
        let categories = defaults::CATEGORY_TABLE
            .iter()
            .map(|(category, keywords, subs)| CategorySpec {
                category: *category,
                keywords: owned(keywords),
                sub_categories: subs
                    .iter()
                    .map(|(name, keywords)| SubCategorySpec {
                        name: (*name).to_string(),
                        keywords: owned(keywords),
                    })
                    .collect(),
            })
            .collect();

        Self {
            categories,
            keywords: KeywordLists::default(),
            thresholds: EscalationThresholds::default(),
        }
    }
}

impl TriageConfig {
    /// Parse a TOML document, normalize keywords and validate
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let mut config: TriageConfig = toml::from_str(content)?;
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!(
            path = %path.display(),
            categories = config.categories.len(),
            "Loaded triage config"
        );
        Ok(config)
    }

    /// Apply threshold overrides from `TRIAGE_*` environment variables.
    ///
    /// Unparsable or out-of-range values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Some(count) = u32_from_env("TRIAGE_REPEATED_CONTACT_COUNT") {
            self.thresholds.repeated_contact_count = count;
        }
        if let Some(value) = confidence_from_env("TRIAGE_HIGH_CONFIDENCE") {
            self.thresholds.high_confidence = value;
        }
        if let Some(value) = confidence_from_env("TRIAGE_MEDIUM_CONFIDENCE") {
            self.thresholds.medium_confidence = value;
        }
        if let Some(value) = confidence_from_env("TRIAGE_LOW_CONFIDENCE") {
            self.thresholds.low_confidence = value;
        }
    }

    /// Lowercase every keyword so matching stays case-insensitive
    pub fn normalize(&mut self) {
        for spec in &mut self.categories {
            lowercase_all(&mut spec.keywords);
            for sub in &mut spec.sub_categories {
                lowercase_all(&mut sub.keywords);
            }
        }
        let k = &mut self.keywords;
        for list in [
            &mut k.legal,
            &mut k.refund,
            &mut k.high_urgency,
            &mut k.medium_urgency,
            &mut k.positive,
            &mut k.negative,
        ] {
            lowercase_all(list);
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let mut seen = HashSet::new();
        for spec in &self.categories {
            if !seen.insert(spec.category) {
                return Err(ConfigError::DuplicateCategory(spec.category));
            }
            if spec.sub_categories.is_empty() {
                return Err(ConfigError::NoSubCategories(spec.category));
            }
            if spec.category == Category::GeneralQueries && !spec.keywords.is_empty() {
                return Err(ConfigError::FallbackWithKeywords);
            }
            reject_empty_keywords(&spec.keywords, || format!("{} keywords", spec.category))?;
            for sub in &spec.sub_categories {
                reject_empty_keywords(&sub.keywords, || {
                    format!("{} / {} keywords", spec.category, sub.name)
                })?;
            }
        }

        let k = &self.keywords;
        for (name, words) in [
            ("legal", &k.legal),
            ("refund", &k.refund),
            ("high_urgency", &k.high_urgency),
            ("medium_urgency", &k.medium_urgency),
            ("positive", &k.positive),
            ("negative", &k.negative),
        ] {
            reject_empty_keywords(words, || format!("keywords.{name}"))?;
        }

        let t = &self.thresholds;
        for (name, value) in [
            ("high_confidence", t.high_confidence),
            ("medium_confidence", t.medium_confidence),
            ("low_confidence", t.low_confidence),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ThresholdOutOfRange { name, value });
            }
        }
        if t.repeated_contact_count == 0 {
            return Err(ConfigError::ZeroRepeatedContactCount);
        }
        Ok(())
    }

    /// Look up the configured entry for a category
    pub fn category(&self, category: Category) -> Option<&CategorySpec> {
        self.categories.iter().find(|s| s.category == category)
    }
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Empty or whitespace-only keywords match every text
fn reject_empty_keywords(words: &[String], list: impl FnOnce() -> String) -> ConfigResult<()> {
    if words.iter().any(|w| w.trim().is_empty()) {
        return Err(ConfigError::EmptyKeyword { list: list() });
    }
    Ok(())
}

fn lowercase_all(words: &mut [String]) {
    for word in words {
        *word = word.to_lowercase();
    }
}

fn u32_from_env(var: &str) -> Option<u32> {
    let raw = std::env::var(var).ok()?;
    match raw.trim().parse::<u32>() {
        Ok(v) if v > 0 => Some(v),
        _ => {
            warn!(var, value = %raw, "Ignoring invalid threshold override");
            None
        }
    }
}

fn confidence_from_env(var: &str) -> Option<f64> {
    let raw = std::env::var(var).ok()?;
    match raw.trim().parse::<f64>() {
        Ok(v) if (0.0..=1.0).contains(&v) => Some(v),
        _ => {
            warn!(var, value = %raw, "Ignoring invalid threshold override");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = TriageConfig::default();
        config.validate().unwrap();
        assert_eq!(config.categories.len(), 5);
        assert_eq!(config.categories[0].category, Category::PaymentAndBilling);
        assert_eq!(config.categories[1].category, Category::TechnicalIssues);
        assert_eq!(config.categories[4].category, Category::GeneralQueries);
    }

    #[test]
    fn test_default_thresholds() {
        let t = EscalationThresholds::default();
        assert_eq!(t.repeated_contact_count, 2);
        assert_eq!(t.high_confidence, 0.90);
        assert_eq!(t.medium_confidence, 0.85);
        assert_eq!(t.low_confidence, 0.75);
    }

    #[test]
    fn test_general_queries_first_sub_category() {
        let config = TriageConfig::default();
        let general = config.category(Category::GeneralQueries).unwrap();
        assert_eq!(general.first_sub_category(), Some("Inquiry"));
        assert_eq!(
            general.sub_category_names(),
            vec!["Inquiry", "Suggestion", "Feedback", "Other"]
        );
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = TriageConfig::from_toml_str(
            r#"
[thresholds]
high_confidence = 0.8
"#,
        )
        .unwrap();
        assert_eq!(config.thresholds.high_confidence, 0.8);
        assert_eq!(config.thresholds.medium_confidence, 0.85);
        assert_eq!(config.categories, TriageConfig::default().categories);
    }

    #[test]
    fn test_toml_keywords_are_lowercased() {
        let config = TriageConfig::from_toml_str(
            r#"
[keywords]
legal = ["Subpoena"]

[[categories]]
category = "Payment & Billing"
keywords = ["REFUND"]

[[categories.sub_categories]]
name = "Refund Request"
keywords = ["Money Back"]
"#,
        )
        .unwrap();
        assert_eq!(config.keywords.legal, vec!["subpoena"]);
        assert_eq!(config.categories.len(), 1);
        assert_eq!(config.categories[0].keywords, vec!["refund"]);
        assert_eq!(
            config.categories[0].sub_categories[0].keywords,
            vec!["money back"]
        );
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let err = TriageConfig::from_toml_str(
            r#"
[[categories]]
category = "Course Content"
sub_categories = [{ name = "Certificate" }]

[[categories]]
category = "Course Content"
sub_categories = [{ name = "Curriculum" }]
"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::DuplicateCategory(Category::CourseContent)
        ));
    }

    #[test]
    fn test_fallback_category_cannot_have_keywords() {
        let mut config = TriageConfig::default();
        config
            .categories
            .iter_mut()
            .find(|s| s.category == Category::GeneralQueries)
            .unwrap()
            .keywords
            .push("hello".to_string());
        assert!(matches!(
            config.validate(),
            Err(ConfigError::FallbackWithKeywords)
        ));
    }

    #[test]
    fn test_threshold_range_rejected() {
        let err = TriageConfig::from_toml_str("[thresholds]\nlow_confidence = 1.5\n").unwrap_err();
        assert!(
            err.to_string().contains("low_confidence"),
            "Error: {err}"
        );

        let err =
            TriageConfig::from_toml_str("[thresholds]\nrepeated_contact_count = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::ZeroRepeatedContactCount));
    }

    #[test]
    fn test_empty_keyword_rejected() {
        let err = TriageConfig::from_toml_str("[keywords]\nlegal = [\"\"]\n").unwrap_err();
        assert!(
            matches!(&err, ConfigError::EmptyKeyword { list } if list == "keywords.legal"),
            "Error: {err}"
        );

        let err = TriageConfig::from_toml_str(
            r#"
[[categories]]
category = "Course Content"
keywords = ["course"]

[[categories.sub_categories]]
name = "Certificate"
keywords = ["certificate", "   "]
"#,
        )
        .unwrap_err();
        assert!(
            err.to_string().contains("Course Content / Certificate"),
            "Error: {err}"
        );

        let mut config = TriageConfig::default();
        config.categories[0].keywords.push(String::new());
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyKeyword { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = TriageConfig::load("/nonexistent/triage.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
