//! Business signals scanned from the raw email body

use crate::classify::classifier::contains_any;
use crate::config::TriageConfig;

/// Whether the body contains legal language. Only the body is scanned.
pub fn has_legal_threat(body: &str, config: &TriageConfig) -> bool {
    contains_any(&body.to_lowercase(), &config.keywords.legal)
}

/// Whether the body contains an explicit refund demand. Only the body is scanned.
pub fn has_refund_demand(body: &str, config: &TriageConfig) -> bool {
    contains_any(&body.to_lowercase(), &config.keywords.refund)
}
