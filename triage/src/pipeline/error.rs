//! Per-ticket error types

use thiserror::Error;

/// Result type alias for ticket processing
pub type TicketResult<T> = Result<T, TicketError>;

/// Reasons a single email cannot be processed.
///
/// Text content, including an empty `email_id`, is never an error; only a
/// malformed contact count is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TicketError {
    #[error("contact_count must not be negative, got {0}")]
    NegativeContactCount(i64),

    #[error("contact_count {0} is out of range")]
    ContactCountOutOfRange(i64),
}

impl TicketError {
    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            Self::NegativeContactCount(_) => "NEGATIVE_CONTACT_COUNT",
            Self::ContactCountOutOfRange(_) => "CONTACT_COUNT_OUT_OF_RANGE",
        }
    }
}
