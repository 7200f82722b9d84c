//! # genie-core
//!
//! Core types and generators for SpecGenie.
//!
//! A project description is turned into three artifacts by three independent,
//! pure functions:
//! - [`synthesize`]: templated user stories, one per statement
//! - [`extract`]: candidate domain entities found by keyword
//! - [`derive`]: a risk register (baseline risks plus keyword-triggered ones)
//!
//! None of them can fail and none of them touch I/O. [`AnalysisRecord`] bundles
//! the three outputs with the original text for the presentation layer.
//!
//! ```
//! use genie_core::AnalysisRecord;
//!
//! let record = AnalysisRecord::analyze("The system should allow login. Users can upload files.");
//! assert_eq!(record.stories.len(), 2);
//! assert_eq!(record.risks.len(), 4); // 3 baseline + "upload"
//! ```

pub mod demo;
pub mod entities;
pub mod enums;
pub mod keywords;
pub mod model;
pub mod record;
pub mod responses;
pub mod risks;
pub mod stories;

pub use entities::extract;
pub use enums::Level;
pub use model::{Entity, Risk, UserStory};
pub use record::{AnalysisRecord, StoredAnalysis};
pub use risks::derive;
pub use stories::synthesize;
