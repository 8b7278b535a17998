//! DOM access errors.

use thiserror::Error;

/// Failure reported by a [`DomAdapter`](crate::DomAdapter) call.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Script error: {0}")]
    Script(String),

    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("DOM request timed out: {0}")]
    Timeout(String),

    #[error("Session closed")]
    SessionClosed,
}
