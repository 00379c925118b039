//! Flow Resolver Tests
//!
//! Classification of scenarios into sink, source, path, and
//! request/response flows.

#[path = "helpers/mod.rs"]
mod helpers;

use helpers::{PubSubFixture, correlation_types};
use modelflow::scenario::{
    FlowKind, FlowWarning, MessagingFlow, MessagingParadigm, resolve_flows,
};

#[test]
fn test_receive_only_scenario_yields_sinks() {
    let mut fixture = PubSubFixture::new("Tracker");
    let types = correlation_types(&mut fixture.builder);
    let input1 = fixture.input("input1", types.data1);
    let input2 = fixture.input("input2", types.data2);
    let scenario = fixture.pub_sub_scenario("consume", &["input1", "input2"], &[]);
    let graph = fixture.finish();

    let analysis = resolve_flows(&graph, scenario);
    assert_eq!(analysis.flows.len(), 2);
    for flow in &analysis.flows {
        let MessagingFlow::PubSub(flow) = flow else {
            panic!("expected pub/sub flows, got {flow:?}");
        };
        assert_eq!(flow.kind(), FlowKind::Sink);
        assert!(flow.outputs().is_empty());
    }
    assert_eq!(analysis.flows[0].inputs(), &[input1]);
    assert_eq!(analysis.flows[1].inputs(), &[input2]);
    assert_eq!(analysis.paradigms(), vec![MessagingParadigm::PublishSubscribe]);
}

#[test]
fn test_publish_only_scenario_yields_sources() {
    let mut fixture = PubSubFixture::new("Reporter");
    let types = correlation_types(&mut fixture.builder);
    let output1 = fixture.output("output1", types.data1);
    let scenario = fixture.pub_sub_scenario("report", &[], &["output1"]);
    let graph = fixture.finish();

    let analysis = resolve_flows(&graph, scenario);
    assert_eq!(analysis.flows.len(), 1);
    let MessagingFlow::PubSub(flow) = &analysis.flows[0] else {
        panic!("expected a pub/sub flow");
    };
    assert_eq!(flow.kind(), FlowKind::Source);
    assert_eq!(flow.outputs(), &[output1]);
    assert!(flow.inputs().is_empty());
}

#[test]
fn test_receive_and_publish_yields_exactly_one_path() {
    let mut fixture = PubSubFixture::new("Transformer");
    let types = correlation_types(&mut fixture.builder);
    let input1 = fixture.input("input1", types.data1);
    let output1 = fixture.output("output1", types.data2);
    let scenario = fixture.pub_sub_scenario("transform", &["input1"], &["output1"]);
    let graph = fixture.finish();

    let analysis = resolve_flows(&graph, scenario);
    // The scenario both receives and publishes, so no sinks and no sources.
    assert_eq!(analysis.flows.len(), 1);
    let path = analysis.path_flow().expect("expected a path flow");
    assert_eq!(path.inputs(), &[input1]);
    assert_eq!(path.outputs(), &[output1]);
}

#[test]
fn test_sink_classification_never_produces_a_path() {
    let mut fixture = PubSubFixture::new("Consumer");
    let types = correlation_types(&mut fixture.builder);
    fixture.input("input1", types.data1);
    let scenario = fixture.pub_sub_scenario("consume", &["input1"], &[]);
    let graph = fixture.finish();

    let analysis = resolve_flows(&graph, scenario);
    assert!(analysis.path_flow().is_none());
    assert!(
        analysis
            .pub_sub_flows()
            .all(|f| f.kind() == FlowKind::Sink)
    );
}

#[test]
fn test_unrecognized_keywords_are_ignored() {
    let mut fixture = PubSubFixture::new("Idle");
    let scenario = fixture.builder.add_scenario(fixture.model, "idle");
    fixture.builder.add_when(scenario, "calibrating", &["gyro"]);
    fixture.builder.add_then(scenario, "willBlink", &["led"]);
    let graph = fixture.finish();

    let analysis = resolve_flows(&graph, scenario);
    assert!(analysis.is_empty());
    assert!(analysis.warnings.is_empty());
    assert!(analysis.paradigms().is_empty());
}

#[test]
fn test_request_response_pairing() {
    let mut fixture = PubSubFixture::new("Lookup");
    let types = correlation_types(&mut fixture.builder);
    let request = fixture.input("request1", types.data1);
    let response = fixture.output("response1", types.data2);
    let scenario = fixture.builder.add_scenario(fixture.model, "lookup");
    fixture
        .builder
        .add_when(scenario, "receivingRequest", &["request1"]);
    fixture
        .builder
        .add_then(scenario, "willRespond", &["with", "response1"]);
    let graph = fixture.finish();

    let analysis = resolve_flows(&graph, scenario);
    assert_eq!(analysis.flows.len(), 1);
    let flow = analysis
        .request_response_flow()
        .expect("expected a request/response flow");
    assert_eq!(flow.request(), request);
    assert_eq!(flow.response(), response);
    assert_eq!(analysis.paradigms(), vec![MessagingParadigm::RequestResponse]);
}

#[test]
fn test_multiple_respond_steps_honor_first_and_warn() {
    let mut fixture = PubSubFixture::new("Lookup");
    let types = correlation_types(&mut fixture.builder);
    fixture.input("request1", types.data1);
    let first = fixture.output("response1", types.data2);
    fixture.output("response2", types.data2);
    let scenario = fixture.builder.add_scenario(fixture.model, "lookup");
    fixture
        .builder
        .add_when(scenario, "receivingRequest", &["request1"]);
    fixture
        .builder
        .add_then(scenario, "willRespond", &["with", "response1"]);
    fixture
        .builder
        .add_then(scenario, "willRespond", &["with", "response2"]);
    let graph = fixture.finish();

    let analysis = resolve_flows(&graph, scenario);
    let flow = analysis
        .request_response_flow()
        .expect("the first respond step is still honored");
    assert_eq!(flow.response(), first);
    assert_eq!(
        analysis.warnings,
        vec![FlowWarning::MultipleRespondSteps {
            scenario: "lookup".to_string(),
            count: 2,
        }]
    );
}

#[test]
fn test_unknown_field_name_is_reported_and_skipped() {
    let mut fixture = PubSubFixture::new("Broken");
    let types = correlation_types(&mut fixture.builder);
    fixture.input("input1", types.data1);
    let scenario = fixture.pub_sub_scenario("broken", &["inputX"], &[]);
    let graph = fixture.finish();

    let analysis = resolve_flows(&graph, scenario);
    assert!(analysis.is_empty());
    assert_eq!(analysis.warnings.len(), 1);
    assert!(matches!(
        &analysis.warnings[0],
        FlowWarning::InvalidStep { keyword, .. } if keyword == "receiving"
    ));
}

#[test]
fn test_flow_resolution_is_deterministic() {
    let mut fixture = PubSubFixture::new("Transformer");
    let types = correlation_types(&mut fixture.builder);
    fixture.input("input1", types.data1);
    fixture.input("input2", types.data2);
    fixture.output("output1", types.data1);
    let scenario = fixture.pub_sub_scenario("transform", &["input1", "input2"], &["output1"]);
    let graph = fixture.finish();

    let first = resolve_flows(&graph, scenario);
    let second = resolve_flows(&graph, scenario);
    assert_eq!(first, second);
}
