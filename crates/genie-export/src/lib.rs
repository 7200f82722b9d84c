//! # genie-export
//!
//! Renders the user stories of an analysis into a downloadable document.
//!
//! Only the `stories` of a record are exported: a fixed title line followed by
//! one `- story` paragraph per story. [`layout`] paginates, [`pdf`] serializes
//! the pages with `lopdf`, and [`text`] produces the plain-text equivalent.

pub mod error;
pub mod layout;
pub mod pdf;
pub mod text;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use genie_core::UserStory;
use serde::{Deserialize, Serialize};

pub use error::ExportError;
pub use layout::{StoryLayout, wrap};
pub use pdf::render_pdf;
pub use text::render_text;

/// Title line at the top of every export.
pub const TITLE: &str = "SpecGenie - User Stories";

/// File name offered for the PDF download.
pub const DEFAULT_FILE_NAME: &str = "specgenie_user_stories.pdf";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    #[default]
    Pdf,
    #[serde(alias = "txt")]
    Text,
}

impl ExportFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Text => "text",
        }
    }

    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Text => "txt",
        }
    }

    #[must_use]
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Text => "text/plain; charset=utf-8",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "text" | "txt" => Ok(Self::Text),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }
}

/// Render `stories` in the requested format.
///
/// # Errors
///
/// Returns [`ExportError::Pdf`] when PDF serialization fails.
pub fn render(stories: &[UserStory], format: ExportFormat) -> Result<Vec<u8>, ExportError> {
    match format {
        ExportFormat::Pdf => render_pdf(stories),
        ExportFormat::Text => Ok(render_text(stories).into_bytes()),
    }
}

/// Render `stories` and write them to `path`, creating parent directories.
///
/// Returns the number of bytes written.
///
/// # Errors
///
/// Returns [`ExportError::Pdf`] when rendering fails and [`ExportError::Io`]
/// when the file cannot be written.
pub fn write_export(
    path: &Path,
    stories: &[UserStory],
    format: ExportFormat,
) -> Result<u64, ExportError> {
    let bytes = render(stories, format)?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, &bytes)?;

    tracing::info!(
        path = %path.display(),
        %format,
        stories = stories.len(),
        bytes = bytes.len(),
        "export written"
    );
    Ok(bytes.len() as u64)
}
