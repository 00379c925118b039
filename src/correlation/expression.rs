//! Correlation and completeness expressions.

use indexmap::IndexMap;

use crate::base::{EnumId, FieldRef};
use crate::correlation::path::FieldPath;
use crate::model::{ModelGraph, TerminalType};

/// An unordered pair of resolved field paths with a shared terminal type.
///
/// A *completeness* expression relates two input-rooted paths: both fields
/// must arrive before the component may act. A *correlation* expression
/// relates an input-rooted path to an output-rooted one: the output field
/// carries the correlated value onward.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CorrelationExpression {
    pub(crate) left: FieldPath,
    pub(crate) right: FieldPath,
    pub(crate) ty: TerminalType,
}

impl CorrelationExpression {
    pub fn left_hand_operand(&self) -> &FieldPath {
        &self.left
    }

    pub fn right_hand_operand(&self) -> &FieldPath {
        &self.right
    }

    /// The shared terminal type both operands resolve to.
    pub fn terminal_type(&self) -> TerminalType {
        self.ty
    }

    /// The referenced enumeration, when the terminal type is an enum.
    pub fn enumeration(&self) -> Option<EnumId> {
        match self.ty {
            TerminalType::Enum(e) => Some(e),
            TerminalType::Primitive(_) => None,
        }
    }

    /// Whether either operand roots in the given boundary field.
    pub fn mentions(&self, field: FieldRef) -> bool {
        self.left.root() == field || self.right.root() == field
    }
}

/// Every correlation relationship of one scenario's flows.
///
/// Completeness expressions are indexed by each contributing input;
/// correlation expressions by their output operand's root.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CorrelationDescription {
    pub(crate) completeness: Vec<CorrelationExpression>,
    pub(crate) correlations: Vec<CorrelationExpression>,
    pub(crate) completeness_by_input: IndexMap<FieldRef, Vec<usize>>,
    pub(crate) correlations_by_output: IndexMap<FieldRef, Vec<usize>>,
}

impl CorrelationDescription {
    pub fn is_empty(&self) -> bool {
        self.completeness.is_empty() && self.correlations.is_empty()
    }

    pub fn completeness_expressions(&self) -> &[CorrelationExpression] {
        &self.completeness
    }

    pub fn correlation_expressions(&self) -> &[CorrelationExpression] {
        &self.correlations
    }

    /// All completeness expressions mentioning the given input field.
    pub fn completeness_for_input(&self, input: FieldRef) -> Vec<&CorrelationExpression> {
        self.completeness_by_input
            .get(&input)
            .into_iter()
            .flatten()
            .map(|&i| &self.completeness[i])
            .collect()
    }

    /// All correlation expressions whose output operand roots in the given
    /// output field.
    pub fn correlation_for_output(&self, output: FieldRef) -> Vec<&CorrelationExpression> {
        self.correlations_by_output
            .get(&output)
            .into_iter()
            .flatten()
            .map(|&i| &self.correlations[i])
            .collect()
    }

    pub(crate) fn push_completeness(&mut self, expression: CorrelationExpression) {
        let index = self.completeness.len();
        let left_root = expression.left.root();
        let right_root = expression.right.root();
        self.completeness_by_input
            .entry(left_root)
            .or_default()
            .push(index);
        if right_root != left_root {
            self.completeness_by_input
                .entry(right_root)
                .or_default()
                .push(index);
        }
        self.completeness.push(expression);
    }

    pub(crate) fn push_correlation(&mut self, expression: CorrelationExpression, output: FieldRef) {
        let index = self.correlations.len();
        self.correlations_by_output
            .entry(output)
            .or_default()
            .push(index);
        self.correlations.push(expression);
    }

    /// Render the expressions for diagnostics.
    pub fn describe(&self, graph: &ModelGraph) -> String {
        let mut out = String::new();
        for expr in &self.completeness {
            out.push_str(&format!(
                "completeness: {} ~ {}\n",
                expr.left.to_dotted(graph),
                expr.right.to_dotted(graph)
            ));
        }
        for expr in &self.correlations {
            out.push_str(&format!(
                "correlation: {} -> {}\n",
                expr.left.to_dotted(graph),
                expr.right.to_dotted(graph)
            ));
        }
        out
    }
}
