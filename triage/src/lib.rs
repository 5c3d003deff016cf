//! Support Triage Library
//!
//! Deterministic triage for customer support email:
//! - Keyword classification into category, sub-category, urgency and sentiment
//! - An ordered escalation rule chain with priority tiers
//! - Template reply drafting for tickets that stay automated
//! - Single-ticket and batch pipelines with summary statistics
//!
//! Everything here is synchronous and side-effect free apart from logging.
//! The HTTP service and CLI live in the `support-agent` crate.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use support_triage::{EmailInput, TicketPipeline, TriageConfig};
//!
//! let pipeline = TicketPipeline::new(Arc::new(TriageConfig::default()));
//! let outcome = pipeline
//!     .process(&EmailInput::new("e-1", "Invoice", "Please send my invoice"))
//!     .unwrap();
//! assert!(!outcome.escalate);
//! ```

#![allow(clippy::uninlined_format_args)]

pub mod classify;
pub mod config;
pub mod escalation;
pub mod pipeline;
pub mod reply;

// Re-export key classification types
pub use classify::{
    Category, Classification, EmailClassifier, Sentiment, Urgency, UNKNOWN_SUB_CATEGORY,
};

// Re-export configuration types
pub use config::{
    CategorySpec, ConfigError, ConfigResult, EscalationThresholds, KeywordLists, SubCategorySpec,
    TriageConfig,
};

// Re-export escalation types
pub use escalation::{
    EscalationDecision, EscalationDetails, EscalationEvaluator, EscalationSummary, PriorityTier,
    RuleId, DEFAULT_CONTACT_COUNT,
};

// Re-export pipeline types
pub use pipeline::{
    resolve_contact_count, BatchEntry, BatchReport, EmailInput, FailedTicket, SummaryReport,
    TicketError, TicketOutcome, TicketPipeline, TicketResult, TicketStatus,
};

pub use reply::{DraftReply, ReplySource, TemplateReplies};
