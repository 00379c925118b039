//! Foundation types for the modelflow analysis core.
//!
//! This module provides the typed identifiers used to reference elements of
//! a [`ModelGraph`](crate::model::ModelGraph). All identifiers are plain
//! arena indices minted by the graph builder; they are cheap to copy and
//! hash, and are only meaningful against the graph that created them.
//!
//! This module has NO dependencies on other modelflow modules.

mod ids;

pub use ids::{DataFieldRef, DataId, EnumId, FieldDirection, FieldRef, ModelId, ScenarioId};
