//! Artifact types produced by the three generators.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so a record
//! can be stored in a session file and validated when it is read back.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::Level;

/// A single templated user story.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct UserStory(String);

impl UserStory {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for UserStory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserStory {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A candidate domain entity with generic responsibilities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Entity {
    pub name: String,
    pub responsibilities: String,
}

/// A project risk with qualitative impact and likelihood.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Risk {
    pub description: String,
    pub impact: Level,
    pub likelihood: Level,
}
