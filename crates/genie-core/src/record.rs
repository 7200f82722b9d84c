//! The aggregate handed from the generators to the presentation layer.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::{Entity, Risk, UserStory};
use crate::{derive, extract, synthesize};

/// Result of analyzing one project description.
///
/// Built once per submission and replaced wholesale by the next one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisRecord {
    pub description: String,
    #[schemars(length(min = 1))]
    pub stories: Vec<UserStory>,
    #[schemars(length(min = 1))]
    pub entities: Vec<Entity>,
    /// The baseline risks always lead.
    #[schemars(length(min = 3))]
    pub risks: Vec<Risk>,
}

impl AnalysisRecord {
    /// Run all three generators over `description`.
    #[must_use]
    pub fn analyze(description: impl Into<String>) -> Self {
        let description = description.into();
        let stories = synthesize(&description);
        let entities = extract(&description);
        let risks = derive(&description);

        Self {
            description,
            stories,
            entities,
            risks,
        }
    }
}

/// A record as held by a session, stamped when it was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StoredAnalysis {
    pub record: AnalysisRecord,
    pub analyzed_at: DateTime<Utc>,
}

impl StoredAnalysis {
    #[must_use]
    pub const fn new(record: AnalysisRecord, analyzed_at: DateTime<Utc>) -> Self {
        Self {
            record,
            analyzed_at,
        }
    }
}
