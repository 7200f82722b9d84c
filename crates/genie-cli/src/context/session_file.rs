//! The project's stored analysis at `.specgenie/session.json`.
//!
//! Saves replace the whole file through a temp file and rename, so a reader
//! never sees a partial record. Loads are checked against the
//! `stored_analysis` JSON Schema before deserializing.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use genie_config::PROJECT_DIR;
use genie_core::StoredAnalysis;
use genie_schema::{SchemaError, SchemaRegistry, registry::STORED_ANALYSIS};

pub const SESSION_FILE_NAME: &str = "session.json";

pub struct SessionFile {
    path: PathBuf,
    schemas: SchemaRegistry,
}

impl SessionFile {
    #[must_use]
    pub fn for_project(project_root: &Path) -> Self {
        Self {
            path: project_root.join(PROJECT_DIR).join(SESSION_FILE_NAME),
            schemas: SchemaRegistry::new(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored analysis, if any.
    pub fn load(&self) -> anyhow::Result<Option<StoredAnalysis>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(error) => {
                return Err(error)
                    .with_context(|| format!("failed to read {}", self.path.display()));
            }
        };

        let value: serde_json::Value = serde_json::from_str(&raw)
            .with_context(|| format!("{} is not valid JSON", self.path.display()))?;

        if let Err(error) = self.schemas.validate(STORED_ANALYSIS, &value) {
            let detail = match error {
                SchemaError::ValidationFailed { errors } => errors.join("; "),
                other => other.to_string(),
            };
            anyhow::bail!(
                "{} does not match the stored_analysis schema: {detail}. Run 'specgenie clear' and analyze again.",
                self.path.display()
            );
        }

        let stored = serde_json::from_value(value)
            .with_context(|| format!("failed to decode {}", self.path.display()))?;
        Ok(Some(stored))
    }

    /// Replace the stored analysis.
    pub fn save(&self, stored: &StoredAnalysis) -> anyhow::Result<()> {
        let dir = self
            .path
            .parent()
            .context("session path has no parent directory")?;
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;

        let mut temp = tempfile::NamedTempFile::new_in(dir)
            .with_context(|| format!("failed to create temp file in {}", dir.display()))?;
        serde_json::to_writer_pretty(&mut temp, stored).context("failed to serialize analysis")?;
        temp.write_all(b"\n")?;
        temp.persist(&self.path)
            .map_err(|error| error.error)
            .with_context(|| format!("failed to write {}", self.path.display()))?;

        tracing::debug!(path = %self.path.display(), "analysis stored");
        Ok(())
    }

    /// Delete the stored analysis. Returns whether one existed.
    pub fn clear(&self) -> anyhow::Result<bool> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(error) => {
                Err(error).with_context(|| format!("failed to remove {}", self.path.display()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use genie_core::{AnalysisRecord, StoredAnalysis};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::SessionFile;

    fn sample() -> StoredAnalysis {
        StoredAnalysis::new(
            AnalysisRecord::analyze("Users can upload files. Admins can view reports."),
            Utc.with_ymd_and_hms(2026, 10, 1, 9, 30, 0).unwrap(),
        )
    }

    #[test]
    fn missing_file_loads_as_none() {
        let temp = TempDir::new().unwrap();
        let file = SessionFile::for_project(temp.path());
        assert!(file.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let temp = TempDir::new().unwrap();
        let file = SessionFile::for_project(temp.path());

        file.save(&sample()).unwrap();

        assert!(temp.path().join(".specgenie/session.json").is_file());
        assert_eq!(file.load().unwrap(), Some(sample()));
    }

    #[test]
    fn save_replaces_previous_record() {
        let temp = TempDir::new().unwrap();
        let file = SessionFile::for_project(temp.path());
        file.save(&sample()).unwrap();

        let newer = StoredAnalysis::new(AnalysisRecord::analyze("Hi."), Utc::now());
        file.save(&newer).unwrap();

        let loaded = file.load().unwrap().unwrap();
        assert_eq!(loaded.record.description, "Hi.");
        let leftovers = std::fs::read_dir(temp.path().join(".specgenie"))
            .unwrap()
            .count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn schema_violations_are_reported() {
        let temp = TempDir::new().unwrap();
        let file = SessionFile::for_project(temp.path());
        std::fs::create_dir_all(temp.path().join(".specgenie")).unwrap();
        std::fs::write(
            file.path(),
            r#"{"record":{"description":"x","stories":[],"entities":[]},"analyzed_at":"2026-10-01T09:30:00Z"}"#,
        )
        .unwrap();

        let err = file.load().unwrap_err();
        assert!(err.to_string().contains("stored_analysis schema"));
    }

    #[test]
    fn hand_edited_empty_stories_are_rejected() {
        let temp = TempDir::new().unwrap();
        let file = SessionFile::for_project(temp.path());
        let mut value = serde_json::to_value(sample()).unwrap();
        value["record"]["stories"] = serde_json::json!([]);
        std::fs::create_dir_all(temp.path().join(".specgenie")).unwrap();
        std::fs::write(file.path(), value.to_string()).unwrap();

        let err = file.load().unwrap_err();
        assert!(err.to_string().contains("stored_analysis schema"));
    }

    #[test]
    fn clear_reports_whether_a_record_existed() {
        let temp = TempDir::new().unwrap();
        let file = SessionFile::for_project(temp.path());
        assert!(!file.clear().unwrap());

        file.save(&sample()).unwrap();
        assert!(file.clear().unwrap());
        assert!(file.load().unwrap().is_none());
    }
}
