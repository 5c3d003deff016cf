//! Ordered escalation rule chain
//!
//! Each rule pairs a predicate with an outcome. The chain is evaluated top to
//! bottom and the first rule whose predicate holds terminates evaluation, so
//! the order below is the decision table:
//!
//! ```text
//! 1. legal_threat             body has legal language        → escalate
//! 2. refund_demand            body has refund demand         → escalate
//! 3. high_urgency_negative    High + Negative                → escalate if confidence ≥ high, else auto-draft
//! 4. medium_urgency_negative  Medium + Negative              → auto-draft
//! 5. repeated_contact         contacts ≥ N + Negative        → High: escalate if confidence ≥ medium, else auto-draft
//!                                                              Medium: auto-draft
//! 6. low_confidence           confidence < low               → auto-draft
//!    (no rule)                                               → auto-draft
//! ```
//!
//! Rule 5 is shadowed by rules 3 and 4 for every input it could match; it is
//! kept so the table stays complete.

use serde::{Deserialize, Serialize};

use crate::classify::{Sentiment, Urgency};
use crate::config::EscalationThresholds;

/// Identifier of a rule in the chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    LegalThreat,
    RefundDemand,
    HighUrgencyNegative,
    MediumUrgencyNegative,
    RepeatedContact,
    LowConfidence,
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LegalThreat => write!(f, "legal_threat"),
            Self::RefundDemand => write!(f, "refund_demand"),
            Self::HighUrgencyNegative => write!(f, "high_urgency_negative"),
            Self::MediumUrgencyNegative => write!(f, "medium_urgency_negative"),
            Self::RepeatedContact => write!(f, "repeated_contact"),
            Self::LowConfidence => write!(f, "low_confidence"),
        }
    }
}

/// Outcome of a matching rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Hand the ticket to a human, with the reason shown to the agent
    Escalate(String),
    /// Answer with a drafted reply
    AutoDraft,
}

impl Verdict {
    pub fn should_escalate(&self) -> bool {
        matches!(self, Self::Escalate(_))
    }

    pub fn into_parts(self) -> (bool, Option<String>) {
        match self {
            Self::Escalate(reason) => (true, Some(reason)),
            Self::AutoDraft => (false, None),
        }
    }
}

/// Inputs every rule sees
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub urgency: Urgency,
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub contact_count: u32,
    pub has_legal_threat: bool,
    pub has_refund_demand: bool,
    pub thresholds: &'a EscalationThresholds,
}

impl RuleContext<'_> {
    fn is_high_negative(&self) -> bool {
        self.urgency == Urgency::High && self.sentiment == Sentiment::Negative
    }

    fn is_medium_negative(&self) -> bool {
        self.urgency == Urgency::Medium && self.sentiment == Sentiment::Negative
    }

    fn is_repeated_contact(&self) -> bool {
        self.contact_count >= self.thresholds.repeated_contact_count
    }
}

/// A single `(predicate, outcome)` entry of the chain
#[derive(Clone, Copy)]
pub struct Rule {
    pub id: RuleId,
    applies: fn(&RuleContext<'_>) -> bool,
    outcome: fn(&RuleContext<'_>) -> Verdict,
}

impl Rule {
    /// Evaluate this rule alone; `None` when its predicate does not hold
    pub fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Verdict> {
        (self.applies)(ctx).then(|| (self.outcome)(ctx))
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("id", &self.id).finish()
    }
}

/// The escalation rule chain in evaluation order
pub const RULE_CHAIN: [Rule; 6] = [
    Rule {
        id: RuleId::LegalThreat,
        applies: legal_threat_applies,
        outcome: legal_threat_outcome,
    },
    Rule {
        id: RuleId::RefundDemand,
        applies: refund_demand_applies,
        outcome: refund_demand_outcome,
    },
    Rule {
        id: RuleId::HighUrgencyNegative,
        applies: high_negative_applies,
        outcome: high_negative_outcome,
    },
    Rule {
        id: RuleId::MediumUrgencyNegative,
        applies: medium_negative_applies,
        outcome: auto_draft,
    },
    Rule {
        id: RuleId::RepeatedContact,
        applies: repeated_contact_applies,
        outcome: repeated_contact_outcome,
    },
    Rule {
        id: RuleId::LowConfidence,
        applies: low_confidence_applies,
        outcome: auto_draft,
    },
];

/// Run the chain and return the first matching rule with its verdict.
///
/// `None` means no rule matched and the default (auto-draft) applies.
pub fn first_match(ctx: &RuleContext<'_>) -> Option<(RuleId, Verdict)> {
    RULE_CHAIN
        .iter()
        .find_map(|rule| rule.evaluate(ctx).map(|verdict| (rule.id, verdict)))
}

fn auto_draft(_: &RuleContext<'_>) -> Verdict {
    Verdict::AutoDraft
}

fn legal_threat_applies(ctx: &RuleContext<'_>) -> bool {
    ctx.has_legal_threat
}

fn legal_threat_outcome(_: &RuleContext<'_>) -> Verdict {
    Verdict::Escalate("Legal threat detected".to_string())
}

fn refund_demand_applies(ctx: &RuleContext<'_>) -> bool {
    ctx.has_refund_demand
}

fn refund_demand_outcome(_: &RuleContext<'_>) -> Verdict {
    Verdict::Escalate("Refund demand detected".to_string())
}

fn high_negative_applies(ctx: &RuleContext<'_>) -> bool {
    ctx.is_high_negative()
}

fn high_negative_outcome(ctx: &RuleContext<'_>) -> Verdict {
    if ctx.confidence >= ctx.thresholds.high_confidence {
        Verdict::Escalate(format!(
            "High urgency + Negative sentiment (confidence: {:.2})",
            ctx.confidence
        ))
    } else {
        Verdict::AutoDraft
    }
}

fn medium_negative_applies(ctx: &RuleContext<'_>) -> bool {
    ctx.is_medium_negative()
}

fn repeated_contact_applies(ctx: &RuleContext<'_>) -> bool {
    ctx.is_repeated_contact() && (ctx.is_high_negative() || ctx.is_medium_negative())
}

fn repeated_contact_outcome(ctx: &RuleContext<'_>) -> Verdict {
    if ctx.is_high_negative() && ctx.confidence >= ctx.thresholds.medium_confidence {
        Verdict::Escalate(format!(
            "Repeated contact ({}) + High urgency + Negative (confidence: {:.2})",
            ctx.contact_count, ctx.confidence
        ))
    } else {
        Verdict::AutoDraft
    }
}

fn low_confidence_applies(ctx: &RuleContext<'_>) -> bool {
    ctx.confidence < ctx.thresholds.low_confidence
}
