//! Story export configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Export format spellings understood by `genie-export`.
pub const EXPORT_FORMATS: &[&str] = &["pdf", "text", "txt"];

fn default_file_name() -> String {
    "specgenie_user_stories.pdf".to_string()
}

fn default_format() -> String {
    "pdf".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    /// File name used when no explicit output path is given.
    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// Default export format (`pdf` or `text`).
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
            format: default_format(),
        }
    }
}

impl ExportConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.file_name.trim().is_empty() {
            return Err(ConfigError::invalid("export.file_name", "must not be empty"));
        }
        let format = self.format.trim().to_ascii_lowercase();
        if !EXPORT_FORMATS.contains(&format.as_str()) {
            return Err(ConfigError::invalid(
                "export.format",
                format!(
                    "'{}' is not one of {}",
                    self.format,
                    EXPORT_FORMATS.join(", ")
                ),
            ));
        }
        Ok(())
    }
}
