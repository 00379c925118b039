//! Dotted field-path resolution.
//!
//! A path like `input1.field3.nestedField1` starts at a model boundary
//! field and descends through nested data fields to a terminal primitive
//! or enum field. Lookup at every hop uses the effective field set of the
//! current data type, so fields declared on ancestors are visible.

use thiserror::Error;

use crate::base::{DataFieldRef, FieldRef};
use crate::model::{FieldKind, ModelGraph, TerminalType};

/// A resolved chain from a boundary field to a terminal data field.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldPath {
    pub(crate) root: FieldRef,
    /// Non-empty; the last entry is the terminal field.
    pub(crate) segments: Vec<DataFieldRef>,
}

impl FieldPath {
    /// The boundary field the path is rooted in.
    pub fn root(&self) -> FieldRef {
        self.root
    }

    /// Every resolved data field along the path, terminal last.
    pub fn segments(&self) -> &[DataFieldRef] {
        &self.segments
    }

    /// The terminal field of the path.
    pub fn end(&self) -> DataFieldRef {
        *self
            .segments
            .last()
            .expect("field paths always have a terminal segment")
    }

    /// The terminal field's type.
    pub fn terminal_type(&self, graph: &ModelGraph) -> TerminalType {
        graph
            .data_field(self.end())
            .terminal_type()
            .expect("terminal segments are primitive or enum fields")
    }

    /// Render the path back into dotted form.
    pub fn to_dotted(&self, graph: &ModelGraph) -> String {
        let mut out = graph.boundary_field(self.root).name().to_string();
        for segment in &self.segments {
            out.push('.');
            out.push_str(graph.data_field(*segment).name());
        }
        out
    }
}

/// A dotted path that does not resolve against the model graph.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("path '{path}' has no segments after the root field")]
    MissingSegments { path: String },

    #[error("path must start with the field '{expected}', found '{found}'")]
    RootMismatch { expected: String, found: String },

    #[error("no field named '{segment}' in data type '{data}'")]
    NoSuchField { segment: String, data: String },

    #[error("cannot descend into '{segment}' of data type '{data}': not a structured field")]
    NotStructured { segment: String, data: String },

    #[error("path '{path}' ends on structured field '{segment}'; expected a primitive or enum field")]
    Incomplete { path: String, segment: String },
}

/// Resolve a dotted path against a boundary field's declared data type.
///
/// The first segment must name the root field itself; each subsequent
/// segment is looked up in the effective field set of the current data
/// type. The walk consumes one segment per hop, so it is bounded by the
/// path length.
pub fn resolve_path(graph: &ModelGraph, root: FieldRef, dotted: &str) -> Result<FieldPath, PathError> {
    let root_decl = graph.boundary_field(root);
    let mut parts = dotted.split('.');

    let first = parts.next().unwrap_or_default();
    if first != root_decl.name() {
        return Err(PathError::RootMismatch {
            expected: root_decl.name().to_string(),
            found: first.to_string(),
        });
    }

    let mut current = root_decl.data();
    let mut segments = Vec::new();
    let mut parts = parts.peekable();

    if parts.peek().is_none() {
        return Err(PathError::MissingSegments {
            path: dotted.to_string(),
        });
    }

    while let Some(segment) = parts.next() {
        let data = graph.data(current);
        let field = graph.find_effective_field(current, segment).ok_or_else(|| {
            PathError::NoSuchField {
                segment: segment.to_string(),
                data: data.name().to_string(),
            }
        })?;
        segments.push(field);

        let last = parts.peek().is_none();
        match graph.data_field(field).kind() {
            FieldKind::Data(_) if last => {
                return Err(PathError::Incomplete {
                    path: dotted.to_string(),
                    segment: segment.to_string(),
                });
            }
            FieldKind::Data(next) => current = next,
            FieldKind::Primitive(_) | FieldKind::Enum(_) if last => {}
            FieldKind::Primitive(_) | FieldKind::Enum(_) => {
                return Err(PathError::NotStructured {
                    segment: segment.to_string(),
                    data: data.name().to_string(),
                });
            }
        }
    }

    tracing::trace!(path = dotted, hops = segments.len(), "resolved field path");
    Ok(FieldPath { root, segments })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FieldKind, GraphBuilder, PrimitiveType};

    fn fixture() -> (ModelGraph, FieldRef) {
        let mut builder = GraphBuilder::new();
        let inner = builder.add_data("Inner");
        builder.add_field(inner, "b", FieldKind::Primitive(PrimitiveType::Int));
        let outer = builder.add_data("Outer");
        builder.add_field(outer, "a", FieldKind::Data(inner));
        let model = builder.add_model("M");
        let root = builder.add_input(model, "root", outer);
        (builder.finish(), root)
    }

    #[test]
    fn test_resolves_nested_terminal() {
        let (graph, root) = fixture();
        let path = resolve_path(&graph, root, "root.a.b").unwrap();
        assert_eq!(graph.data_field(path.end()).name(), "b");
        assert_eq!(
            path.terminal_type(&graph),
            TerminalType::Primitive(PrimitiveType::Int)
        );
        assert_eq!(path.to_dotted(&graph), "root.a.b");
    }

    #[test]
    fn test_root_must_match() {
        let (graph, root) = fixture();
        let err = resolve_path(&graph, root, "other.a.b").unwrap_err();
        assert!(matches!(err, PathError::RootMismatch { .. }));
    }

    #[test]
    fn test_missing_segments() {
        let (graph, root) = fixture();
        let err = resolve_path(&graph, root, "root").unwrap_err();
        assert!(matches!(err, PathError::MissingSegments { .. }));
    }

    #[test]
    fn test_unknown_segment() {
        let (graph, root) = fixture();
        let err = resolve_path(&graph, root, "root.a.missing").unwrap_err();
        assert_eq!(
            err,
            PathError::NoSuchField {
                segment: "missing".into(),
                data: "Inner".into(),
            }
        );
    }

    #[test]
    fn test_cannot_descend_through_terminal() {
        let (graph, root) = fixture();
        let err = resolve_path(&graph, root, "root.a.b.c").unwrap_err();
        assert!(matches!(err, PathError::NotStructured { .. }));
    }

    #[test]
    fn test_path_must_end_on_terminal() {
        let (graph, root) = fixture();
        let err = resolve_path(&graph, root, "root.a").unwrap_err();
        assert!(matches!(err, PathError::Incomplete { .. }));
    }
}
