//! Central schema registry for all SpecGenie types.
//!
//! The `SchemaRegistry` builds JSON Schemas from genie-core types at
//! construction time using [`schemars::schema_for!`] and provides validation
//! via `jsonschema`.

use std::collections::HashMap;

use schemars::schema_for;

use crate::error::SchemaError;

/// Name under which the session envelope schema is registered.
pub const STORED_ANALYSIS: &str = "stored_analysis";

/// Central store of all JSON Schemas in the SpecGenie system.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`. Panics if `serde_json::to_value` fails (should be
/// infallible for valid `schemars` output).
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, serde_json::to_value(schema_for!($ty)).unwrap());
    };
}

impl SchemaRegistry {
    /// Build a new registry containing the model, record, and response
    /// schemas from genie-core.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on any `schemars`-generated
    /// schema. This is not expected in practice because `schemars` always
    /// produces valid JSON-serialisable output.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Model types (4) ---
        register!(schemas, "user_story", genie_core::UserStory);
        register!(schemas, "entity", genie_core::Entity);
        register!(schemas, "risk", genie_core::Risk);
        register!(schemas, "level", genie_core::Level);

        // --- Records (2) ---
        register!(schemas, "analysis_record", genie_core::AnalysisRecord);
        register!(schemas, STORED_ANALYSIS, genie_core::StoredAnalysis);

        // --- CLI response types (3) ---
        register!(
            schemas,
            "analyze_response",
            genie_core::responses::AnalyzeResponse
        );
        register!(
            schemas,
            "export_response",
            genie_core::responses::ExportResponse
        );
        register!(
            schemas,
            "clear_response",
            genie_core::responses::ClearResponse
        );

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
