//! # Model Graph
//!
//! Immutable-after-construction representation of an architecture model
//! set: named data types with fields and inheritance, enumerations, models
//! with inputs/outputs/parts/scenarios/properties, and quantity-valued
//! budget declarations.
//!
//! The graph is produced by an external front-end through [`GraphBuilder`]
//! and handed to the analyses in this crate as a shared `&ModelGraph`.
//! Nothing in this crate mutates it.

mod data;
mod graph;
mod property;
mod quantity;
mod system;

pub use data::{Cardinality, Data, DataField, Enumeration, FieldKind, PrimitiveType, TerminalType};
pub use graph::{GraphBuilder, ModelGraph};
pub use property::{Budget, PropertyValue};
pub use quantity::{Dimension, Quantity, Unit};
pub use system::{DataReferenceField, Model, PartField, Scenario, Step};
