//! Classification labels produced by the email classifier

use serde::{Deserialize, Deserializer, Serialize};

/// Top-level support category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Technical Issues")]
    TechnicalIssues,
    #[serde(rename = "Payment & Billing")]
    PaymentAndBilling,
    #[serde(rename = "Course Content")]
    CourseContent,
    #[serde(rename = "Account Management")]
    AccountManagement,
    /// Catch-all when no keyword group matches
    #[default]
    #[serde(rename = "General Queries")]
    GeneralQueries,
}

impl Category {
    /// All categories in declaration order
    pub const ALL: [Category; 5] = [
        Self::TechnicalIssues,
        Self::PaymentAndBilling,
        Self::CourseContent,
        Self::AccountManagement,
        Self::GeneralQueries,
    ];

    /// Display name used on the wire and in reply template keys
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TechnicalIssues => "Technical Issues",
            Self::PaymentAndBilling => "Payment & Billing",
            Self::CourseContent => "Course Content",
            Self::AccountManagement => "Account Management",
            Self::GeneralQueries => "General Queries",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Urgency level, ordered by severity (`Low < Medium < High`)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum Urgency {
    #[default]
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive => write!(f, "Positive"),
            Self::Negative => write!(f, "Negative"),
            Self::Neutral => write!(f, "Neutral"),
        }
    }
}

/// Sub-category label used when a category has no configured entry
pub const UNKNOWN_SUB_CATEGORY: &str = "Unknown";

fn unknown_sub_category() -> String {
    UNKNOWN_SUB_CATEGORY.to_string()
}

/// Full label set for one email
///
/// Absent fields deserialize to the lowest-specificity values so that
/// externally supplied classifications fall back the same way the
/// classifier does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    #[serde(default)]
    pub category: Category,
    #[serde(default = "unknown_sub_category")]
    pub sub_category: String,
    #[serde(default)]
    pub urgency: Urgency,
    #[serde(default)]
    pub sentiment: Sentiment,
    /// Always within `[0.0, 1.0]` when produced by the classifier
    #[serde(default)]
    pub confidence: f64,
    /// Provisional flag: `urgency == High || confidence < 0.5`.
    /// The escalation evaluator makes the authoritative call.
    #[serde(default, rename = "escalate_to_human")]
    pub escalate_hint: bool,
}

impl Classification {
    /// Build a classification from explicit labels, deriving the escalate hint
    pub fn new(
        category: Category,
        sub_category: impl Into<String>,
        urgency: Urgency,
        sentiment: Sentiment,
        confidence: f64,
    ) -> Self {
        Self {
            category,
            sub_category: sub_category.into(),
            urgency,
            sentiment,
            confidence,
            escalate_hint: urgency == Urgency::High || confidence < 0.5,
        }
    }
}

/// Wire shape of a caller-supplied classification before fallbacks apply
#[derive(Debug, Default, Deserialize)]
struct ClassificationFields {
    category: Option<Category>,
    sub_category: Option<String>,
    urgency: Option<Urgency>,
    sentiment: Option<Sentiment>,
    confidence: Option<f64>,
    #[serde(rename = "escalate_to_human")]
    escalate_hint: Option<bool>,
}

impl ClassificationFields {
    fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.sub_category.is_none()
            && self.urgency.is_none()
            && self.sentiment.is_none()
            && self.confidence.is_none()
            && self.escalate_hint.is_none()
    }

    fn into_classification(self) -> Classification {
        Classification {
            category: self.category.unwrap_or_default(),
            sub_category: self.sub_category.unwrap_or_else(unknown_sub_category),
            urgency: self.urgency.unwrap_or_default(),
            sentiment: self.sentiment.unwrap_or_default(),
            confidence: self.confidence.unwrap_or_default(),
            escalate_hint: self.escalate_hint.unwrap_or_default(),
        }
    }
}

/// Deserialize an optional classification where `null`, an absent key and
/// an object with no recognised fields all mean "not classified".
///
/// Use with `#[serde(default, deserialize_with = "...")]`.
pub fn deserialize_optional_classification<'de, D>(
    deserializer: D,
) -> Result<Option<Classification>, D::Error>
where
    D: Deserializer<'de>,
{
    let fields = Option::<ClassificationFields>::deserialize(deserializer)?;
    Ok(fields
        .filter(|fields| !fields.is_empty())
        .map(ClassificationFields::into_classification))
}
