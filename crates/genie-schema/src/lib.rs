//! # genie-schema
//!
//! JSON Schema generation, validation, and registry for SpecGenie.
//!
//! Model types are defined in `genie-core` with `#[derive(JsonSchema)]`. This
//! crate collects their schemas into a [`SchemaRegistry`] used to validate
//! session files before they are deserialized and to export schemas through
//! `specgenie schema`.

pub mod error;
pub mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
