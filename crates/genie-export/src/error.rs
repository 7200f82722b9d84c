//! Export error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    /// PDF object encoding or serialization failed.
    #[error("pdf error: {0}")]
    Pdf(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown export format '{0}' (expected pdf, text or txt)")]
    UnknownFormat(String),
}
