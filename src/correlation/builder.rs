//! Building a scenario's correlation description from its correlate steps.

use thiserror::Error;

use crate::base::{FieldDirection, FieldRef, ScenarioId};
use crate::correlation::expression::{CorrelationDescription, CorrelationExpression};
use crate::correlation::path::{self, FieldPath, PathError};
use crate::model::ModelGraph;
use crate::scenario::{StepError, Verb, correlate_operands};

/// A correlate step that cannot be turned into an expression.
///
/// Any variant aborts the correlation description of the scenario being
/// analyzed, and only that scenario's.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CorrelationError {
    #[error(transparent)]
    Step(#[from] StepError),

    #[error(transparent)]
    Path(#[from] PathError),

    #[error("correlation path '{path}' does not start at an input or output of model '{model}'")]
    UnknownRootField { model: String, path: String },

    #[error("correlate step must reference at least one input field")]
    InvalidOperands,

    #[error("correlated fields have incompatible types: '{left}' and '{right}'")]
    IncompatibleTypes { left: String, right: String },
}

/// Build the correlation description for a scenario.
///
/// Walks the scenario's When and Then steps for the `correlate` verb and
/// produces one expression per step. Returns `Ok(None)` when the scenario
/// declares no correlate steps.
pub fn build_correlation(
    graph: &ModelGraph,
    scenario: ScenarioId,
) -> Result<Option<CorrelationDescription>, CorrelationError> {
    let decl = graph.scenario(scenario);
    let mut description = CorrelationDescription::default();
    let mut any = false;

    let correlate_steps = decl
        .whens()
        .iter()
        .chain(decl.thens().iter())
        .filter(|s| Verb::Correlate.matches(s.keyword()));

    for step in correlate_steps {
        any = true;
        let (left, right) = correlate_operands(step)?;
        let left = resolve_operand(graph, scenario, left)?;
        let right = resolve_operand(graph, scenario, right)?;

        let left_ty = left.terminal_type(graph);
        let right_ty = right.terminal_type(graph);
        if left_ty != right_ty {
            return Err(CorrelationError::IncompatibleTypes {
                left: graph.type_display(left_ty),
                right: graph.type_display(right_ty),
            });
        }

        let expression = CorrelationExpression {
            left,
            right,
            ty: left_ty,
        };

        match (
            expression.left.root().direction,
            expression.right.root().direction,
        ) {
            (FieldDirection::Input, FieldDirection::Input) => {
                description.push_completeness(expression);
            }
            (FieldDirection::Input, FieldDirection::Output) => {
                let output = expression.right.root();
                description.push_correlation(expression, output);
            }
            (FieldDirection::Output, FieldDirection::Input) => {
                let output = expression.left.root();
                description.push_correlation(expression, output);
            }
            (FieldDirection::Output, FieldDirection::Output) => {
                return Err(CorrelationError::InvalidOperands);
            }
        }
    }

    if any {
        tracing::debug!(
            scenario = decl.name(),
            completeness = description.completeness_expressions().len(),
            correlations = description.correlation_expressions().len(),
            "built correlation description"
        );
        Ok(Some(description))
    } else {
        Ok(None)
    }
}

/// Resolve one correlate operand: the first path segment names an input or
/// output field of the scenario's model.
fn resolve_operand(
    graph: &ModelGraph,
    scenario: ScenarioId,
    dotted: &str,
) -> Result<FieldPath, CorrelationError> {
    let model = graph.model(scenario.model);
    let root_name = dotted.split('.').next().unwrap_or_default();

    let root = if let Some((index, _)) = model.input_named(root_name) {
        FieldRef::new(scenario.model, FieldDirection::Input, index)
    } else if let Some((index, _)) = model.output_named(root_name) {
        FieldRef::new(scenario.model, FieldDirection::Output, index)
    } else {
        return Err(CorrelationError::UnknownRootField {
            model: model.name().to_string(),
            path: dotted.to_string(),
        });
    };

    Ok(path::resolve_path(graph, root, dotted)?)
}
