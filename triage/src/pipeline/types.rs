//! Ticket input and output records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::classify::{Category, Sentiment, Urgency};
use crate::escalation::{PriorityTier, DEFAULT_CONTACT_COUNT};
use crate::pipeline::error::{TicketError, TicketResult};
use crate::reply::ReplySource;

/// One incoming support email
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailInput {
    pub email_id: String,
    pub subject: String,
    pub body: String,
    /// How many times the customer has written; defaults to 1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_count: Option<i64>,
}

impl EmailInput {
    pub fn new(
        email_id: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            email_id: email_id.into(),
            subject: subject.into(),
            body: body.into(),
            contact_count: None,
        }
    }

    pub fn with_contact_count(mut self, contact_count: i64) -> Self {
        self.contact_count = Some(contact_count);
        self
    }

    /// Resolve the contact count; empty text fields are accepted as-is
    pub fn validate(&self) -> TicketResult<u32> {
        resolve_contact_count(self.contact_count)
    }
}

/// Resolve an optional caller-supplied contact count, defaulting to 1
pub fn resolve_contact_count(contact_count: Option<i64>) -> TicketResult<u32> {
    match contact_count {
        None => Ok(DEFAULT_CONTACT_COUNT),
        Some(n) if n < 0 => Err(TicketError::NegativeContactCount(n)),
        Some(n) => u32::try_from(n).map_err(|_| TicketError::ContactCountOutOfRange(n)),
    }
}

/// Final routing status of a ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketStatus {
    #[serde(rename = "Escalated to Human")]
    EscalatedToHuman,
    #[serde(rename = "Auto-Drafted")]
    AutoDrafted,
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EscalatedToHuman => write!(f, "Escalated to Human"),
            Self::AutoDrafted => write!(f, "Auto-Drafted"),
        }
    }
}

/// A fully processed ticket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketOutcome {
    pub ticket_id: Uuid,
    pub email_id: String,
    pub subject: String,
    pub category: Category,
    pub sub_category: String,
    pub urgency: Urgency,
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub status: TicketStatus,
    pub escalate: bool,
    pub escalation_reason: Option<String>,
    pub escalation_priority: PriorityTier,
    /// Present only for auto-drafted tickets
    pub draft_reply: Option<String>,
    pub reply_source: Option<ReplySource>,
    pub processed_at: DateTime<Utc>,
}
