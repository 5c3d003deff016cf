//! Escalation Evaluator: Deterministic Escalate / Auto-Draft Decisions
//!
//! Turns classifier output plus business signals (legal language, refund
//! demands, repeated contact) into an escalation decision with a priority
//! tier. No inference happens here; every decision is a first-match walk
//! over an ordered rule chain.
//!
//! # Flow
//!
//! ```text
//! Classification + body + contact_count
//!     │
//!     ├─ classification missing → escalate ("No classification provided")
//!     │
//!     ▼
//! Rule chain (first match wins)
//!     │  legal → refund → High+Negative → Medium+Negative
//!     │  → repeated contact → low confidence → default
//!     ▼
//! (should_escalate, reason)
//!     │
//!     ▼
//! Priority: Critical (legal/refund) → High (High+Negative)
//!           → Medium (repeated contact) → Low
//! ```

pub mod engine;
pub mod rules;
pub mod signals;

pub use engine::{
    EscalationDecision, EscalationDetails, EscalationEvaluator, EscalationSummary, PriorityTier,
    DEFAULT_CONTACT_COUNT, NO_CLASSIFICATION_REASON,
};
pub use rules::{first_match, Rule, RuleContext, RuleId, Verdict, RULE_CHAIN};
pub use signals::{has_legal_threat, has_refund_demand};
