//! Derived messaging flow objects.
//!
//! Flows are computed on demand per scenario and are purely derived: they
//! reference the model graph through field references and never own model
//! state. A flow optionally carries the scenario's
//! [`CorrelationDescription`] once the correlation builder has run.

use std::sync::Arc;

use thiserror::Error;

use crate::base::{FieldRef, ScenarioId};
use crate::correlation::CorrelationDescription;
use crate::scenario::steps::StepError;

/// Role of a pub/sub flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowKind {
    /// Publishes only; nothing is received.
    Source,
    /// Receives only; nothing is published.
    Sink,
    /// Receives and publishes.
    Path,
}

/// A publish/subscribe messaging flow.
#[derive(Clone, Debug, PartialEq)]
pub struct PubSubFlow {
    pub(crate) kind: FlowKind,
    pub(crate) scenario: ScenarioId,
    pub(crate) inputs: Vec<FieldRef>,
    pub(crate) outputs: Vec<FieldRef>,
    pub(crate) correlation: Option<Arc<CorrelationDescription>>,
}

impl PubSubFlow {
    pub fn kind(&self) -> FlowKind {
        self.kind
    }

    pub fn scenario(&self) -> ScenarioId {
        self.scenario
    }

    pub fn inputs(&self) -> &[FieldRef] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[FieldRef] {
        &self.outputs
    }
}

/// A request/response messaging flow: the unique receiving step supplies
/// the request field, the respond step's field supplies the response.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestResponseFlow {
    pub(crate) scenario: ScenarioId,
    pub(crate) request: FieldRef,
    pub(crate) response: FieldRef,
    pub(crate) correlation: Option<Arc<CorrelationDescription>>,
}

impl RequestResponseFlow {
    pub fn scenario(&self) -> ScenarioId {
        self.scenario
    }

    pub fn request(&self) -> FieldRef {
        self.request
    }

    pub fn response(&self) -> FieldRef {
        self.response
    }
}

/// A derived messaging flow of either paradigm.
#[derive(Clone, Debug, PartialEq)]
pub enum MessagingFlow {
    PubSub(PubSubFlow),
    RequestResponse(RequestResponseFlow),
}

impl MessagingFlow {
    pub fn scenario(&self) -> ScenarioId {
        match self {
            MessagingFlow::PubSub(flow) => flow.scenario,
            MessagingFlow::RequestResponse(flow) => flow.scenario,
        }
    }

    /// Fields flowing into the component for this flow.
    pub fn inputs(&self) -> &[FieldRef] {
        match self {
            MessagingFlow::PubSub(flow) => &flow.inputs,
            MessagingFlow::RequestResponse(flow) => std::slice::from_ref(&flow.request),
        }
    }

    /// Fields flowing out of the component for this flow.
    pub fn outputs(&self) -> &[FieldRef] {
        match self {
            MessagingFlow::PubSub(flow) => &flow.outputs,
            MessagingFlow::RequestResponse(flow) => std::slice::from_ref(&flow.response),
        }
    }

    pub fn correlation_description(&self) -> Option<&CorrelationDescription> {
        match self {
            MessagingFlow::PubSub(flow) => flow.correlation.as_deref(),
            MessagingFlow::RequestResponse(flow) => flow.correlation.as_deref(),
        }
    }

    pub(crate) fn set_correlation(&mut self, description: Arc<CorrelationDescription>) {
        match self {
            MessagingFlow::PubSub(flow) => flow.correlation = Some(description),
            MessagingFlow::RequestResponse(flow) => flow.correlation = Some(description),
        }
    }
}

/// The messaging paradigms a scenario participates in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessagingParadigm {
    PublishSubscribe,
    RequestResponse,
}

/// A tolerated configuration problem surfaced during flow resolution.
///
/// Warnings never abort the scenario's analysis; the resolver honors a
/// best-effort reading of the steps and reports what it tolerated.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum FlowWarning {
    /// A scenario can only respond once; later respond steps are ignored.
    #[error("scenario '{scenario}' declares {count} respond steps; only the first is honored")]
    MultipleRespondSteps { scenario: String, count: usize },

    /// A recognized step could not be resolved against the model.
    #[error("ignoring step '{keyword}' in scenario '{scenario}': {error}")]
    InvalidStep {
        scenario: String,
        keyword: String,
        error: StepError,
    },
}

/// The result of resolving one scenario's flows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlowAnalysis {
    pub flows: Vec<MessagingFlow>,
    pub warnings: Vec<FlowWarning>,
}

impl FlowAnalysis {
    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    /// The paradigms present in this analysis, pub/sub first.
    pub fn paradigms(&self) -> Vec<MessagingParadigm> {
        let mut paradigms = Vec::new();
        if self
            .flows
            .iter()
            .any(|f| matches!(f, MessagingFlow::PubSub(_)))
        {
            paradigms.push(MessagingParadigm::PublishSubscribe);
        }
        if self
            .flows
            .iter()
            .any(|f| matches!(f, MessagingFlow::RequestResponse(_)))
        {
            paradigms.push(MessagingParadigm::RequestResponse);
        }
        paradigms
    }

    /// The scenario's path flow, if one was produced.
    pub fn path_flow(&self) -> Option<&PubSubFlow> {
        self.flows.iter().find_map(|f| match f {
            MessagingFlow::PubSub(flow) if flow.kind == FlowKind::Path => Some(flow),
            _ => None,
        })
    }

    pub fn pub_sub_flows(&self) -> impl Iterator<Item = &PubSubFlow> {
        self.flows.iter().filter_map(|f| match f {
            MessagingFlow::PubSub(flow) => Some(flow),
            _ => None,
        })
    }

    pub fn request_response_flow(&self) -> Option<&RequestResponseFlow> {
        self.flows.iter().find_map(|f| match f {
            MessagingFlow::RequestResponse(flow) => Some(flow),
            _ => None,
        })
    }
}
