//! Escalation Evaluator: deterministic escalate / auto-draft decisions
//!
//! Consumes a [`Classification`] plus the raw body and contact count and
//! produces an [`EscalationDecision`]. All decisions are pure functions of
//! their inputs and the shared configuration.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classify::{Classification, Sentiment, Urgency};
use crate::config::TriageConfig;
use crate::escalation::rules::{self, RuleContext, RuleId, Verdict};
use crate::escalation::signals::{has_legal_threat, has_refund_demand};

/// Contact count assumed when the caller does not supply one
pub const DEFAULT_CONTACT_COUNT: u32 = 1;

/// Reason reported when no classification was supplied
pub const NO_CLASSIFICATION_REASON: &str = "No classification provided";

/// Priority tier for an escalated ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriorityTier {
    Critical,
    High,
    Medium,
    Low,
    /// Not escalated
    None,
}

impl std::fmt::Display for PriorityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Critical => write!(f, "Critical"),
            Self::High => write!(f, "High"),
            Self::Medium => write!(f, "Medium"),
            Self::Low => write!(f, "Low"),
            Self::None => write!(f, "None"),
        }
    }
}

/// Decision produced by the evaluator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EscalationDecision {
    pub should_escalate: bool,
    /// Present only when escalating
    pub reason: Option<String>,
    /// `None` iff `should_escalate` is false
    pub priority: PriorityTier,
}

/// Signals that went into a decision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EscalationDetails {
    pub urgency: Option<Urgency>,
    pub sentiment: Option<Sentiment>,
    pub confidence: Option<f64>,
    pub contact_count: u32,
    pub has_legal_threat: bool,
    pub has_refund_demand: bool,
    /// Rule that terminated the chain; absent when the default applied
    pub matched_rule: Option<RuleId>,
}

/// Decision plus the breakdown of the signals behind it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EscalationSummary {
    pub should_escalate: bool,
    pub reason: Option<String>,
    pub priority: PriorityTier,
    pub details: EscalationDetails,
}

impl EscalationSummary {
    pub fn decision(&self) -> EscalationDecision {
        EscalationDecision {
            should_escalate: self.should_escalate,
            reason: self.reason.clone(),
            priority: self.priority,
        }
    }
}

/// Stateless evaluator over a shared configuration
#[derive(Debug, Clone)]
pub struct EscalationEvaluator {
    config: Arc<TriageConfig>,
}

impl EscalationEvaluator {
    pub fn new(config: Arc<TriageConfig>) -> Self {
        Self { config }
    }

    /// Decide whether to escalate.
    ///
    /// A missing classification always escalates, before any rule runs.
    pub fn evaluate(
        &self,
        classification: Option<&Classification>,
        body: &str,
        contact_count: u32,
    ) -> (bool, Option<String>) {
        self.run_chain(classification, body, contact_count)
            .1
            .into_parts()
    }

    /// Priority tier for the ticket.
    ///
    /// Re-runs [`evaluate`](Self::evaluate) and scans the body for legal and
    /// refund language independently of which rule fired. A missing
    /// classification is ranked with Low urgency and Neutral sentiment.
    pub fn priority(
        &self,
        classification: Option<&Classification>,
        body: &str,
        contact_count: u32,
    ) -> PriorityTier {
        let (escalate, _) = self.evaluate(classification, body, contact_count);
        if !escalate {
            return PriorityTier::None;
        }

        let urgency = classification.map(|c| c.urgency).unwrap_or_default();
        let sentiment = classification.map(|c| c.sentiment).unwrap_or_default();

        if has_legal_threat(body, &self.config) {
            return PriorityTier::Critical;
        }
        if has_refund_demand(body, &self.config) {
            return PriorityTier::Critical;
        }
        if urgency == Urgency::High && sentiment == Sentiment::Negative {
            return PriorityTier::High;
        }
        if contact_count >= self.config.thresholds.repeated_contact_count {
            return PriorityTier::Medium;
        }
        PriorityTier::Low
    }

    /// Escalate flag, reason and priority together
    pub fn decide(
        &self,
        classification: Option<&Classification>,
        body: &str,
        contact_count: u32,
    ) -> EscalationDecision {
        let (should_escalate, reason) = self.evaluate(classification, body, contact_count);
        let priority = self.priority(classification, body, contact_count);
        EscalationDecision {
            should_escalate,
            reason,
            priority,
        }
    }

    /// Full decision with the signal breakdown
    pub fn summarize(
        &self,
        classification: Option<&Classification>,
        body: &str,
        contact_count: u32,
    ) -> EscalationSummary {
        let (matched_rule, verdict) = self.run_chain(classification, body, contact_count);
        let (should_escalate, reason) = verdict.into_parts();
        let priority = self.priority(classification, body, contact_count);

        debug!(
            should_escalate,
            %priority,
            rule = ?matched_rule,
            contact_count,
            "Escalation evaluated"
        );

        EscalationSummary {
            should_escalate,
            reason,
            priority,
            details: EscalationDetails {
                urgency: classification.map(|c| c.urgency),
                sentiment: classification.map(|c| c.sentiment),
                confidence: classification.map(|c| c.confidence),
                contact_count,
                has_legal_threat: has_legal_threat(body, &self.config),
                has_refund_demand: has_refund_demand(body, &self.config),
                matched_rule,
            },
        }
    }

    fn run_chain(
        &self,
        classification: Option<&Classification>,
        body: &str,
        contact_count: u32,
    ) -> (Option<RuleId>, Verdict) {
        let Some(classification) = classification else {
            return (
                None,
                Verdict::Escalate(NO_CLASSIFICATION_REASON.to_string()),
            );
        };

        let ctx = RuleContext {
            urgency: classification.urgency,
            sentiment: classification.sentiment,
            confidence: classification.confidence,
            contact_count,
            has_legal_threat: has_legal_threat(body, &self.config),
            has_refund_demand: has_refund_demand(body, &self.config),
            thresholds: &self.config.thresholds,
        };

        match rules::first_match(&ctx) {
            Some((id, verdict)) => (Some(id), verdict),
            None => (None, Verdict::AutoDraft),
        }
    }
}

impl Default for EscalationEvaluator {
    fn default() -> Self {
        Self::new(Arc::new(TriageConfig::default()))
    }
}
