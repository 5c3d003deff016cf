//! Email classification
//!
//! Turns raw subject and body text into category, sub-category, urgency,
//! sentiment and confidence labels. Pure keyword matching, no inference.

pub mod classifier;
pub mod types;

pub use classifier::EmailClassifier;
pub use types::{
    deserialize_optional_classification, Category, Classification, Sentiment, Urgency,
    UNKNOWN_SUB_CATEGORY,
};
