//! Reply drafting for tickets that are not escalated
//!
//! Lookup order: exact `(category, sub_category)` template, then the
//! category's `"default"` template, then a generic reply chosen by sentiment.

mod templates;

use serde::{Deserialize, Serialize};

use crate::classify::{Category, Classification, Sentiment};

pub use templates::DEFAULT_TEMPLATE_KEY;

/// Where a drafted reply came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplySource {
    Template,
    Fallback,
}

/// Produces draft reply text for a classified email
pub trait DraftReply: Send + Sync {
    fn draft(&self, classification: &Classification) -> (String, ReplySource);
}

/// Built-in template catalogue
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateReplies;

impl TemplateReplies {
    pub fn new() -> Self {
        Self
    }

    /// Template for a category / sub-category pair, falling back to the
    /// category's default template
    pub fn lookup(&self, category: Category, sub_category: &str) -> Option<&'static str> {
        let (_, table) = templates::TEMPLATES.iter().find(|(c, _)| *c == category)?;
        let find = |key: &str| {
            table
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, text)| *text)
        };
        find(sub_category).or_else(|| find(DEFAULT_TEMPLATE_KEY))
    }

    /// Generic reply used when no template applies
    pub fn generic(&self, sentiment: Sentiment) -> &'static str {
        templates::generic_reply(sentiment)
    }
}

impl DraftReply for TemplateReplies {
    fn draft(&self, classification: &Classification) -> (String, ReplySource) {
        match self.lookup(classification.category, &classification.sub_category) {
            Some(text) => (text.to_string(), ReplySource::Template),
            None => (
                self.generic(classification.sentiment).to_string(),
                ReplySource::Fallback,
            ),
        }
    }
}
