//! Models, their boundary fields, parts, and scenarios.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::base::{DataId, ModelId};
use crate::model::data::Cardinality;
use crate::model::property::PropertyValue;

/// A named reference to a data type on a model boundary (an input or an
/// output field).
#[derive(Clone, Debug, PartialEq)]
pub struct DataReferenceField {
    pub(crate) name: Arc<str>,
    pub(crate) data: DataId,
    pub(crate) cardinality: Cardinality,
}

impl DataReferenceField {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> DataId {
        self.data
    }

    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }
}

/// A named reference to a sub-model, forming the decomposition tree.
#[derive(Clone, Debug, PartialEq)]
pub struct PartField {
    pub(crate) name: Arc<str>,
    pub(crate) model: ModelId,
}

impl PartField {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn model(&self) -> ModelId {
        self.model
    }
}

/// One step of a scenario: a keyword plus ordered string parameters.
///
/// Keywords that match no registered verb tense are ignored by the flow
/// and correlation analyses; they are not errors.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub(crate) keyword: Arc<str>,
    pub(crate) parameters: Vec<Arc<str>>,
}

impl Step {
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn parameters(&self) -> &[Arc<str>] {
        &self.parameters
    }

    pub fn parameter(&self, index: usize) -> Option<&str> {
        self.parameters.get(index).map(|p| p.as_ref())
    }
}

/// A behavior description attached to a model: three ordered step lists.
///
/// Constructed once by the front-end, read-only thereafter.
#[derive(Clone, Debug, PartialEq)]
pub struct Scenario {
    pub(crate) name: Arc<str>,
    pub(crate) givens: Vec<Step>,
    pub(crate) whens: Vec<Step>,
    pub(crate) thens: Vec<Step>,
}

impl Scenario {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn givens(&self) -> &[Step] {
        &self.givens
    }

    pub fn whens(&self) -> &[Step] {
        &self.whens
    }

    pub fn thens(&self) -> &[Step] {
        &self.thens
    }
}

/// A named architectural unit: inputs, outputs, parts, scenarios, and
/// properties (some of which declare budgets).
#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    pub(crate) name: Arc<str>,
    pub(crate) inputs: Vec<DataReferenceField>,
    pub(crate) outputs: Vec<DataReferenceField>,
    pub(crate) parts: Vec<PartField>,
    pub(crate) scenarios: Vec<Scenario>,
    /// Properties preserve declaration order (IndexMap).
    pub(crate) properties: IndexMap<Arc<str>, PropertyValue>,
}

impl Model {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inputs(&self) -> &[DataReferenceField] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[DataReferenceField] {
        &self.outputs
    }

    pub fn parts(&self) -> &[PartField] {
        &self.parts
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn properties(&self) -> &IndexMap<Arc<str>, PropertyValue> {
        &self.properties
    }

    /// Find an input field by name, with its position.
    pub fn input_named(&self, name: &str) -> Option<(usize, &DataReferenceField)> {
        self.inputs
            .iter()
            .enumerate()
            .find(|(_, f)| f.name.as_ref() == name)
    }

    /// Find an output field by name, with its position.
    pub fn output_named(&self, name: &str) -> Option<(usize, &DataReferenceField)> {
        self.outputs
            .iter()
            .enumerate()
            .find(|(_, f)| f.name.as_ref() == name)
    }
}
