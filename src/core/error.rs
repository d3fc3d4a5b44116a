//! Errors raised by the auth store and its persistence layer

/// Store error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Malformed action: {0}")]
    MalformedAction(String),

    #[error("Session storage error: {0}")]
    Storage(String),
}
