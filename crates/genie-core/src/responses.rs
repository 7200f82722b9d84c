//! CLI response types returned as JSON by `specgenie` commands.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::record::AnalysisRecord;

/// Response from `specgenie analyze` and `specgenie demo --analyze`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AnalyzeResponse {
    pub analysis: AnalysisRecord,
    pub saved: bool,
    pub analyzed_at: DateTime<Utc>,
}

/// Response from `specgenie export`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ExportResponse {
    pub path: String,
    pub format: String,
    pub stories: u32,
    pub bytes: u64,
}

/// Response from `specgenie clear`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ClearResponse {
    pub cleared: bool,
}
