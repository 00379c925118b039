//! Model properties and budget declarations.

use std::sync::Arc;

use crate::model::quantity::{Quantity, Unit};

/// A named value attached to a model.
///
/// The analysis core interprets `Quantity` values (budget contributions)
/// and `Budget` values (budget declarations); the remaining variants are
/// carried for downstream consumers but not interpreted here.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    Quantity(Quantity),
    Budget(Budget),
    Text(Arc<str>),
    Number(f64),
    Flag(bool),
}

/// A declared quantity budget.
///
/// A budget names the property (`given_by`) that each model in the
/// decomposition tree uses to declare its contribution, the unit the
/// roll-up is reported in, and optional minimum/maximum bounds used for
/// status classification.
#[derive(Clone, Debug, PartialEq)]
pub struct Budget {
    pub(crate) name: Arc<str>,
    pub(crate) unit: Unit,
    pub(crate) given_by: Arc<str>,
    pub(crate) minimum: Option<Quantity>,
    pub(crate) maximum: Option<Quantity>,
}

impl Budget {
    pub fn new(name: impl Into<Arc<str>>, unit: Unit, given_by: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            unit,
            given_by: given_by.into(),
            minimum: None,
            maximum: None,
        }
    }

    /// Set the minimum bound. The quantity should share the budget's
    /// dimension; a mismatched bound simply never matches an actual.
    pub fn with_minimum(mut self, minimum: Quantity) -> Self {
        self.minimum = Some(minimum);
        self
    }

    /// Set the maximum bound.
    pub fn with_maximum(mut self, maximum: Quantity) -> Self {
        self.maximum = Some(maximum);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Name of the property each model uses for its contribution.
    pub fn given_by(&self) -> &str {
        &self.given_by
    }

    pub fn minimum(&self) -> Option<Quantity> {
        self.minimum
    }

    pub fn maximum(&self) -> Option<Quantity> {
        self.maximum
    }
}
