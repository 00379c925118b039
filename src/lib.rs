//! # modelflow-base
//!
//! Core library for analyzing behavioral scenarios attached to hierarchical
//! architecture models: messaging flow derivation, field-path correlation,
//! and parallel budget roll-up.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! analysis    → Per-scenario analysis facade, topic conflict registry
//!   ↓
//! budget      → Parallel budget aggregation over the part tree
//! correlation → Field path resolution, correlation/completeness expressions
//!   ↓
//! scenario    → Verb registry, step accessors, flow classification
//!   ↓
//! model       → Immutable model graph (Data, Models, Scenarios, Budgets)
//!   ↓
//! base        → Primitives (typed arena identifiers)
//! ```
//!
//! The model graph is built once by an external front-end via
//! [`model::GraphBuilder`] and is immutable afterwards; every analysis in
//! this crate is a pure function over a `&ModelGraph` and may run
//! concurrently from multiple threads.

// ============================================================================
// MODULES (dependency order: base → model → scenario → correlation/budget → analysis)
// ============================================================================

/// Foundation types: typed arena identifiers
pub mod base;

/// Model graph: data types, models, scenarios, properties, quantities
pub mod model;

/// Scenario analysis: verb registry, step accessors, flow classification
pub mod scenario;

/// Correlation analysis: field paths, correlation/completeness expressions
pub mod correlation;

/// Budget aggregation: recursive, parallel quantity roll-up
pub mod budget;

/// Analysis facade: per-scenario flows with correlation, topic registry
pub mod analysis;

// Re-export foundation types
pub use base::{DataFieldRef, DataId, EnumId, FieldDirection, FieldRef, ModelId, ScenarioId};

// Re-export the graph and its builder
pub use model::{GraphBuilder, ModelGraph};
