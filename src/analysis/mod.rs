//! # Analysis Facade
//!
//! Ties flow resolution and correlation together per scenario, and hosts
//! the topic registry callers use to detect conflicting transport
//! mappings across a model's flows.

mod scenarios;
mod topics;

pub use scenarios::{ScenarioAnalysis, ScenarioAnalyzer};
pub use topics::{TopicConflict, TopicRegistry};
