//! Structured data types, their fields, and enumerations.

use std::sync::Arc;

use crate::base::{DataId, EnumId};

/// Primitive types a terminal field may carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Int,
    Float,
    Boolean,
    String,
}

impl std::fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PrimitiveType::Int => "int",
            PrimitiveType::Float => "float",
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::String => "string",
        };
        write!(f, "{name}")
    }
}

/// Whether a field holds a single value or a sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Cardinality {
    #[default]
    Single,
    Many,
}

/// What a [`DataField`] is typed by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Primitive(PrimitiveType),
    /// Nested structured payload.
    Data(DataId),
    Enum(EnumId),
}

/// The type of a terminal (leaf) field: a primitive, or a reference to an
/// enumeration. Equality is what correlation compatibility checks compare.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TerminalType {
    Primitive(PrimitiveType),
    Enum(EnumId),
}

/// A field declared inside a [`Data`] type.
#[derive(Clone, Debug, PartialEq)]
pub struct DataField {
    pub(crate) name: Arc<str>,
    pub(crate) cardinality: Cardinality,
    pub(crate) kind: FieldKind,
}

impl DataField {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// The terminal type of this field, or `None` for nested data fields.
    pub fn terminal_type(&self) -> Option<TerminalType> {
        match self.kind {
            FieldKind::Primitive(p) => Some(TerminalType::Primitive(p)),
            FieldKind::Enum(e) => Some(TerminalType::Enum(e)),
            FieldKind::Data(_) => None,
        }
    }
}

/// A named structured type with an ordered field list.
///
/// A data type may extend exactly one other data type; its effective field
/// set is the union of its own fields and all ancestor fields. The extends
/// relationship is acyclic by upstream contract, but traversal tolerates a
/// violated contract (see [`ModelGraph::effective_fields`]).
///
/// [`ModelGraph::effective_fields`]: crate::model::ModelGraph::effective_fields
#[derive(Clone, Debug, PartialEq)]
pub struct Data {
    pub(crate) name: Arc<str>,
    pub(crate) extends: Option<DataId>,
    pub(crate) fields: Vec<DataField>,
}

impl Data {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn extends(&self) -> Option<DataId> {
        self.extends
    }

    /// The fields declared directly on this type, in declaration order.
    pub fn fields(&self) -> &[DataField] {
        &self.fields
    }
}

/// A named enumeration with an ordered value list.
#[derive(Clone, Debug, PartialEq)]
pub struct Enumeration {
    pub(crate) name: Arc<str>,
    pub(crate) values: Vec<Arc<str>>,
}

impl Enumeration {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[Arc<str>] {
        &self.values
    }
}
