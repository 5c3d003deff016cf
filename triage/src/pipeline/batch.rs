//! Batch processing results and aggregate statistics

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::pipeline::types::{TicketOutcome, TicketStatus};

/// Status string carried by failed batch entries
pub const FAILED_STATUS: &str = "Error";

/// Status string carried by a completed batch report
pub const BATCH_SUCCESS_STATUS: &str = "success";

/// An email that could not be processed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedTicket {
    pub email_id: String,
    pub error: String,
    pub status: String,
}

impl FailedTicket {
    pub fn new(email_id: impl Into<String>, error: impl std::fmt::Display) -> Self {
        Self {
            email_id: email_id.into(),
            error: error.to_string(),
            status: FAILED_STATUS.to_string(),
        }
    }
}

/// One entry of a batch result, in input order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BatchEntry {
    Processed(Box<TicketOutcome>),
    Failed(FailedTicket),
}

impl BatchEntry {
    pub fn email_id(&self) -> &str {
        match self {
            Self::Processed(outcome) => &outcome.email_id,
            Self::Failed(failed) => &failed.email_id,
        }
    }

    pub fn outcome(&self) -> Option<&TicketOutcome> {
        match self {
            Self::Processed(outcome) => Some(outcome.as_ref()),
            Self::Failed(_) => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Aggregates over the successfully processed tickets of a batch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub total_tickets: usize,
    pub auto_drafted: usize,
    pub escalated: usize,
    /// Entries that failed validation; not part of any other count
    pub failed: usize,
    /// Percentage with one decimal (`"25.0%"`), or `"0%"` for an empty batch
    pub escalation_rate: String,
    pub urgency_breakdown: BTreeMap<String, usize>,
    pub sentiment_breakdown: BTreeMap<String, usize>,
    pub category_breakdown: BTreeMap<String, usize>,
}

impl SummaryReport {
    pub fn from_entries(entries: &[BatchEntry]) -> Self {
        let mut report = Self::default();

        for entry in entries {
            let Some(outcome) = entry.outcome() else {
                report.failed += 1;
                continue;
            };

            report.total_tickets += 1;
            match outcome.status {
                TicketStatus::EscalatedToHuman => report.escalated += 1,
                TicketStatus::AutoDrafted => report.auto_drafted += 1,
            }
            *report
                .urgency_breakdown
                .entry(outcome.urgency.to_string())
                .or_default() += 1;
            *report
                .sentiment_breakdown
                .entry(outcome.sentiment.to_string())
                .or_default() += 1;
            *report
                .category_breakdown
                .entry(outcome.category.to_string())
                .or_default() += 1;
        }

        report.escalation_rate = escalation_rate(report.escalated, report.total_tickets);
        report
    }
}

fn escalation_rate(escalated: usize, total: usize) -> String {
    if total == 0 {
        return "0%".to_string();
    }
    format!("{:.1}%", escalated as f64 / total as f64 * 100.0)
}

/// Result of processing a list of emails
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub status: String,
    pub tickets: Vec<BatchEntry>,
    pub summary: SummaryReport,
}

impl BatchReport {
    pub fn new(tickets: Vec<BatchEntry>) -> Self {
        let summary = SummaryReport::from_entries(&tickets);
        Self {
            status: BATCH_SUCCESS_STATUS.to_string(),
            tickets,
            summary,
        }
    }
}

/// Round to two decimal places for batch presentation
pub(crate) fn round_confidence(confidence: f64) -> f64 {
    (confidence * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escalation_rate_format() {
        assert_eq!(escalation_rate(0, 0), "0%");
        assert_eq!(escalation_rate(0, 3), "0.0%");
        assert_eq!(escalation_rate(1, 3), "33.3%");
        assert_eq!(escalation_rate(2, 2), "100.0%");
    }

    #[test]
    fn test_round_confidence() {
        assert_eq!(round_confidence(0.85), 0.85);
        assert_eq!(round_confidence(0.7 + 0.15 + 0.1), 0.95);
        assert_eq!(round_confidence(0.333), 0.33);
    }

    #[test]
    fn test_failed_entry_shape() {
        let entry = BatchEntry::Failed(FailedTicket::new(
            "e-9",
            "contact_count must not be negative, got -1",
        ));
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["email_id"], "e-9");
        assert_eq!(json["status"], "Error");
        assert_eq!(json["error"], "contact_count must not be negative, got -1");
        assert!(entry.is_failed());
        assert_eq!(entry.email_id(), "e-9");
    }

    #[test]
    fn test_empty_summary() {
        let summary = SummaryReport::from_entries(&[]);
        assert_eq!(summary.total_tickets, 0);
        assert_eq!(summary.failed, 0);
        assert_eq!(summary.escalation_rate, "0%");
        assert!(summary.category_breakdown.is_empty());
    }
}
