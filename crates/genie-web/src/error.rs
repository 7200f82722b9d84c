//! Web front-end error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WebError {
    /// The listener could not be bound.
    #[error("failed to bind {addr}: {reason}")]
    Bind { addr: String, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("export failed: {0}")]
    Export(#[from] genie_export::ExportError),

    /// The OS random source failed while minting a session id.
    #[error("session id generation failed: {0}")]
    SessionId(String),
}
