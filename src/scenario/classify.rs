//! Flow resolution: classifying a scenario's steps into messaging flows.
//!
//! ## Rules
//!
//! Evaluated per scenario over the When/Then step lists:
//!
//! - **Path**: every receive field and every publish field, produced only
//!   when both sets are non-empty; at most one per scenario.
//! - **Sink**: no Then-step publishes and at least one When-step receives;
//!   one sink per receiving step.
//! - **Source**: no When-step receives and at least one Then-step
//!   publishes; one source per publishing step.
//! - **Request/Response**: the unique `receiveRequest` When-step supplies
//!   the request field, the `respond ... with <field>` Then-step the
//!   response field.
//!
//! A scenario may yield sinks and sources simultaneously, or exactly one
//! path, or a request/response pair, or nothing. Resolution is a pure
//! function of the step lists.

use crate::base::ScenarioId;
use crate::model::{ModelGraph, Step};
use crate::scenario::flows::{
    FlowAnalysis, FlowKind, FlowWarning, MessagingFlow, MessagingParadigm, PubSubFlow,
    RequestResponseFlow,
};
use crate::scenario::steps::{self, StepError};
use crate::scenario::verbs::Verb;

/// Resolve every messaging flow of a scenario.
pub fn resolve_flows(graph: &ModelGraph, scenario: ScenarioId) -> FlowAnalysis {
    let decl = graph.scenario(scenario);
    let model = scenario.model;
    let mut warnings = Vec::new();

    let does_receive = decl.whens().iter().any(|s| Verb::Receive.matches(s.keyword()));
    let does_publish = decl.thens().iter().any(|s| Verb::Publish.matches(s.keyword()));

    let record = |step: &Step, error: StepError, warnings: &mut Vec<FlowWarning>| {
        warnings.push(FlowWarning::InvalidStep {
            scenario: decl.name().to_string(),
            keyword: step.keyword().to_string(),
            error,
        });
    };

    let mut receive_fields = Vec::new();
    for step in decl.whens().iter().filter(|s| Verb::Receive.matches(s.keyword())) {
        match steps::receive_input(graph, model, step) {
            Ok(field) => receive_fields.push(field),
            Err(error) => record(step, error, &mut warnings),
        }
    }

    let mut publish_fields = Vec::new();
    for step in decl.thens().iter().filter(|s| Verb::Publish.matches(s.keyword())) {
        match steps::publish_output(graph, model, step) {
            Ok(field) => publish_fields.push(field),
            Err(error) => record(step, error, &mut warnings),
        }
    }

    let mut flows = Vec::new();

    // A scenario has at most one flow path, referencing any number of
    // inputs and outputs; without both sides it is not a path.
    if !receive_fields.is_empty() && !publish_fields.is_empty() {
        flows.push(MessagingFlow::PubSub(PubSubFlow {
            kind: FlowKind::Path,
            scenario,
            inputs: receive_fields.clone(),
            outputs: publish_fields.clone(),
            correlation: None,
        }));
    }

    // A scenario that publishes anything has no sinks.
    if !does_publish {
        for field in &receive_fields {
            flows.push(MessagingFlow::PubSub(PubSubFlow {
                kind: FlowKind::Sink,
                scenario,
                inputs: vec![*field],
                outputs: Vec::new(),
                correlation: None,
            }));
        }
    }

    // A scenario that receives anything has no sources.
    if !does_receive {
        for field in &publish_fields {
            flows.push(MessagingFlow::PubSub(PubSubFlow {
                kind: FlowKind::Source,
                scenario,
                inputs: Vec::new(),
                outputs: vec![*field],
                correlation: None,
            }));
        }
    }

    resolve_request_response(graph, scenario, &mut flows, &mut warnings);

    tracing::debug!(
        scenario = decl.name(),
        flows = flows.len(),
        warnings = warnings.len(),
        "resolved messaging flows"
    );

    FlowAnalysis { flows, warnings }
}

/// The messaging paradigms a scenario participates in.
pub fn paradigms(graph: &ModelGraph, scenario: ScenarioId) -> Vec<MessagingParadigm> {
    resolve_flows(graph, scenario).paradigms()
}

fn resolve_request_response(
    graph: &ModelGraph,
    scenario: ScenarioId,
    flows: &mut Vec<MessagingFlow>,
    warnings: &mut Vec<FlowWarning>,
) {
    let decl = graph.scenario(scenario);
    let model = scenario.model;

    let request_step = decl
        .whens()
        .iter()
        .find(|s| Verb::ReceiveRequest.matches(s.keyword()));
    let respond_steps: Vec<&Step> = decl
        .thens()
        .iter()
        .filter(|s| Verb::Respond.matches(s.keyword()))
        .collect();

    let (Some(request_step), Some(respond_step)) = (request_step, respond_steps.first()) else {
        return;
    };

    // A scenario can only respond once; honor the first step and report
    // the rest as a configuration problem.
    if respond_steps.len() > 1 {
        warnings.push(FlowWarning::MultipleRespondSteps {
            scenario: decl.name().to_string(),
            count: respond_steps.len(),
        });
    }

    let request = match steps::request_input(graph, model, request_step) {
        Ok(field) => field,
        Err(error) => {
            warnings.push(FlowWarning::InvalidStep {
                scenario: decl.name().to_string(),
                keyword: request_step.keyword().to_string(),
                error,
            });
            return;
        }
    };
    let response = match steps::respond_output(graph, model, respond_step) {
        Ok(field) => field,
        Err(error) => {
            warnings.push(FlowWarning::InvalidStep {
                scenario: decl.name().to_string(),
                keyword: respond_step.keyword().to_string(),
                error,
            });
            return;
        }
    };

    flows.push(MessagingFlow::RequestResponse(RequestResponseFlow {
        scenario,
        request,
        response,
        correlation: None,
    }));
}
