//! Typed parameter extraction for recognized steps.
//!
//! Each accessor checks the step's shape and resolves the referenced
//! boundary field on the owning model. Callers pass steps they have
//! already matched against the corresponding verb.

use thiserror::Error;

use crate::base::{FieldRef, ModelId};
use crate::model::{ModelGraph, Step};

/// A recognized step whose parameters do not fit the verb's contract.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StepError {
    #[error("step '{keyword}' requires at least {expected} parameter(s), found {found}")]
    MissingParameter {
        keyword: String,
        expected: usize,
        found: usize,
    },

    #[error("model '{model}' has no input named '{name}'")]
    UnknownInputField { model: String, name: String },

    #[error("model '{model}' has no output named '{name}'")]
    UnknownOutputField { model: String, name: String },

    #[error("the 'respond' verb requires parameters of the form: with <outputField>")]
    MissingWith,
}

/// The input field a `receive` step consumes (parameter 0).
pub fn receive_input(graph: &ModelGraph, model: ModelId, step: &Step) -> Result<FieldRef, StepError> {
    input_at(graph, model, step, 0)
}

/// The input field a `receiveRequest` step accepts (parameter 0).
pub fn request_input(graph: &ModelGraph, model: ModelId, step: &Step) -> Result<FieldRef, StepError> {
    input_at(graph, model, step, 0)
}

/// The output field a `publish` step produces (parameter 0).
pub fn publish_output(graph: &ModelGraph, model: ModelId, step: &Step) -> Result<FieldRef, StepError> {
    let name = require_parameter(step, 1, 0)?;
    let decl = graph.model(model);
    decl.output_named(name)
        .map(|(index, _)| FieldRef::new(model, crate::base::FieldDirection::Output, index))
        .ok_or_else(|| StepError::UnknownOutputField {
            model: decl.name().to_string(),
            name: name.to_string(),
        })
}

/// The output field a `respond` step answers with.
///
/// Respond steps have the shape `with <outputField>`: parameter 0 must be
/// the word `with` and parameter 1 names the output.
pub fn respond_output(graph: &ModelGraph, model: ModelId, step: &Step) -> Result<FieldRef, StepError> {
    let with = require_parameter(step, 2, 0)?;
    if with != "with" {
        return Err(StepError::MissingWith);
    }
    let name = require_parameter(step, 2, 1)?;
    let decl = graph.model(model);
    decl.output_named(name)
        .map(|(index, _)| FieldRef::new(model, crate::base::FieldDirection::Output, index))
        .ok_or_else(|| StepError::UnknownOutputField {
            model: decl.name().to_string(),
            name: name.to_string(),
        })
}

/// The two dotted path operands of a `correlate` step.
///
/// Correlate steps have the shape `<leftPath> to <rightPath>`.
pub fn correlate_operands(step: &Step) -> Result<(&str, &str), StepError> {
    let left = require_parameter(step, 3, 0)?;
    let right = require_parameter(step, 3, 2)?;
    Ok((left, right))
}

fn input_at(
    graph: &ModelGraph,
    model: ModelId,
    step: &Step,
    position: usize,
) -> Result<FieldRef, StepError> {
    let name = require_parameter(step, position + 1, position)?;
    let decl = graph.model(model);
    decl.input_named(name)
        .map(|(index, _)| FieldRef::new(model, crate::base::FieldDirection::Input, index))
        .ok_or_else(|| StepError::UnknownInputField {
            model: decl.name().to_string(),
            name: name.to_string(),
        })
}

fn require_parameter(step: &Step, expected: usize, position: usize) -> Result<&str, StepError> {
    step.parameter(position)
        .ok_or_else(|| StepError::MissingParameter {
            keyword: step.keyword().to_string(),
            expected,
            found: step.parameters().len(),
        })
}
