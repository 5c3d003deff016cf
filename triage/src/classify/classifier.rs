//! Keyword-driven email classification
//!
//! Maps raw subject and body text to a [`Classification`]. All matching is
//! case-insensitive substring containment over `subject + " " + body`.

use std::sync::Arc;

use tracing::debug;

use crate::classify::types::{Category, Classification, Sentiment, Urgency, UNKNOWN_SUB_CATEGORY};
use crate::config::TriageConfig;

const BASE_CONFIDENCE: f64 = 0.7;
const SPECIFIC_CATEGORY_BONUS: f64 = 0.15;
const LONG_TEXT_BONUS: f64 = 0.1;
const MEDIUM_TEXT_BONUS: f64 = 0.05;
const LONG_TEXT_CHARS: usize = 100;
const MEDIUM_TEXT_CHARS: usize = 50;

/// Whether any keyword occurs in the (already lowercased) text
pub(crate) fn contains_any(text: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|k| text.contains(k.as_str()))
}

/// Number of distinct keywords present in the text (presence, not frequency)
fn count_present(text: &str, keywords: &[String]) -> usize {
    keywords.iter().filter(|k| text.contains(k.as_str())).count()
}

/// Stateless classifier over a shared keyword configuration
#[derive(Debug, Clone)]
pub struct EmailClassifier {
    config: Arc<TriageConfig>,
}

impl EmailClassifier {
    pub fn new(config: Arc<TriageConfig>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TriageConfig {
        &self.config
    }

    /// Classify an email.
    ///
    /// Never fails: text that matches nothing yields General Queries, Low
    /// urgency and Neutral sentiment.
    pub fn classify(&self, subject: &str, body: &str) -> Classification {
        let text = format!("{} {}", subject, body).to_lowercase();

        let category = self.classify_category(&text);
        let sub_category = self.classify_sub_category(category, &text);
        let urgency = self.classify_urgency(&text);
        let sentiment = self.classify_sentiment(&text);
        let confidence = Self::calculate_confidence(&text, category);

        debug!(
            %category,
            sub_category = %sub_category,
            %urgency,
            %sentiment,
            confidence,
            "Classified email"
        );

        Classification::new(category, sub_category, urgency, sentiment, confidence)
    }

    /// First configured category whose keywords match, in priority order
    fn classify_category(&self, text: &str) -> Category {
        self.config
            .categories
            .iter()
            .filter(|spec| spec.category != Category::GeneralQueries)
            .find(|spec| contains_any(text, &spec.keywords))
            .map(|spec| spec.category)
            .unwrap_or(Category::GeneralQueries)
    }

    fn classify_sub_category(&self, category: Category, text: &str) -> String {
        let Some(spec) = self.config.category(category) else {
            return UNKNOWN_SUB_CATEGORY.to_string();
        };

        spec.sub_categories
            .iter()
            .find(|sub| contains_any(text, &sub.keywords))
            .map(|sub| sub.name.as_str())
            .or_else(|| spec.first_sub_category())
            .unwrap_or(UNKNOWN_SUB_CATEGORY)
            .to_string()
    }

    fn classify_urgency(&self, text: &str) -> Urgency {
        let keywords = &self.config.keywords;
        if contains_any(text, &keywords.high_urgency) {
            Urgency::High
        } else if contains_any(text, &keywords.medium_urgency) {
            Urgency::Medium
        } else {
            Urgency::Low
        }
    }

    fn classify_sentiment(&self, text: &str) -> Sentiment {
        let keywords = &self.config.keywords;
        let positive = count_present(text, &keywords.positive);
        let negative = count_present(text, &keywords.negative);

        match positive.cmp(&negative) {
            std::cmp::Ordering::Greater => Sentiment::Positive,
            std::cmp::Ordering::Less => Sentiment::Negative,
            std::cmp::Ordering::Equal => Sentiment::Neutral,
        }
    }

    /// Confidence from category specificity and text length, capped at 1.0
    fn calculate_confidence(text: &str, category: Category) -> f64 {
        let mut confidence = BASE_CONFIDENCE;

        if category != Category::GeneralQueries {
            confidence += SPECIFIC_CATEGORY_BONUS;
        }

        let length = text.chars().count();
        if length > LONG_TEXT_CHARS {
            confidence += LONG_TEXT_BONUS;
        } else if length > MEDIUM_TEXT_CHARS {
            confidence += MEDIUM_TEXT_BONUS;
        }

        confidence.min(1.0)
    }
}

impl Default for EmailClassifier {
    fn default() -> Self {
        Self::new(Arc::new(TriageConfig::default()))
    }
}
