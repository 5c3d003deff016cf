//! Ticket pipeline: classify → evaluate escalation → draft reply
//!
//! Each email is processed independently. Batch processing turns per-item
//! validation failures into [`BatchEntry::Failed`] entries so one bad email
//! never aborts the rest.

pub mod batch;
pub mod error;
pub mod types;

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::classify::{Classification, EmailClassifier};
use crate::config::TriageConfig;
use crate::escalation::EscalationEvaluator;
use crate::reply::{DraftReply, TemplateReplies};

pub use batch::{BatchEntry, BatchReport, FailedTicket, SummaryReport, FAILED_STATUS};
pub use error::{TicketError, TicketResult};
pub use types::{resolve_contact_count, EmailInput, TicketOutcome, TicketStatus};

/// Composes the classifier, escalation evaluator and reply drafter
#[derive(Clone)]
pub struct TicketPipeline {
    config: Arc<TriageConfig>,
    classifier: EmailClassifier,
    evaluator: EscalationEvaluator,
    replies: Arc<dyn DraftReply>,
}

impl TicketPipeline {
    pub fn new(config: Arc<TriageConfig>) -> Self {
        Self {
            classifier: EmailClassifier::new(Arc::clone(&config)),
            evaluator: EscalationEvaluator::new(Arc::clone(&config)),
            replies: Arc::new(TemplateReplies::new()),
            config,
        }
    }

    /// Replace the reply drafter
    pub fn with_replies(mut self, replies: Arc<dyn DraftReply>) -> Self {
        self.replies = replies;
        self
    }

    pub fn config(&self) -> &TriageConfig {
        &self.config
    }

    pub fn classifier(&self) -> &EmailClassifier {
        &self.classifier
    }

    pub fn evaluator(&self) -> &EscalationEvaluator {
        &self.evaluator
    }

    /// Validate the envelope and classify the text
    pub fn classify(&self, email: &EmailInput) -> TicketResult<Classification> {
        email.validate()?;
        Ok(self.classifier.classify(&email.subject, &email.body))
    }

    /// Run one email through the full pipeline
    pub fn process(&self, email: &EmailInput) -> TicketResult<TicketOutcome> {
        let contact_count = email.validate()?;
        let classification = self.classifier.classify(&email.subject, &email.body);
        let decision = self
            .evaluator
            .decide(Some(&classification), &email.body, contact_count);

        let (status, draft_reply, reply_source) = if decision.should_escalate {
            (TicketStatus::EscalatedToHuman, None, None)
        } else {
            let (text, source) = self.replies.draft(&classification);
            (TicketStatus::AutoDrafted, Some(text), Some(source))
        };

        info!(
            email_id = %email.email_id,
            category = %classification.category,
            urgency = %classification.urgency,
            sentiment = %classification.sentiment,
            %status,
            priority = %decision.priority,
            "Ticket processed"
        );

        Ok(TicketOutcome {
            ticket_id: Uuid::new_v4(),
            email_id: email.email_id.clone(),
            subject: email.subject.clone(),
            category: classification.category,
            sub_category: classification.sub_category,
            urgency: classification.urgency,
            sentiment: classification.sentiment,
            confidence: classification.confidence,
            status,
            escalate: decision.should_escalate,
            escalation_reason: decision.reason,
            escalation_priority: decision.priority,
            draft_reply,
            reply_source,
            processed_at: Utc::now(),
        })
    }

    /// Process every email, keeping input order
    pub fn process_batch(&self, emails: &[EmailInput]) -> BatchReport {
        let tickets: Vec<BatchEntry> = emails
            .iter()
            .map(|email| match self.process(email) {
                Ok(mut outcome) => {
                    outcome.confidence = batch::round_confidence(outcome.confidence);
                    BatchEntry::Processed(Box::new(outcome))
                }
                Err(e) => {
                    warn!(
                        email_id = %email.email_id,
                        code = e.code(),
                        error = %e,
                        "Skipping email in batch"
                    );
                    BatchEntry::Failed(FailedTicket::new(email.email_id.clone(), &e))
                }
            })
            .collect();

        let report = BatchReport::new(tickets);
        info!(
            total = report.summary.total_tickets,
            escalated = report.summary.escalated,
            failed = report.summary.failed,
            "Batch processed"
        );
        report
    }
}

impl Default for TicketPipeline {
    fn default() -> Self {
        Self::new(Arc::new(TriageConfig::default()))
    }
}

impl std::fmt::Debug for TicketPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TicketPipeline")
            .field("classifier", &self.classifier)
            .field("evaluator", &self.evaluator)
            .finish_non_exhaustive()
    }
}
