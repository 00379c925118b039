//! # Scenario Analysis
//!
//! Verb registry, typed step accessors, and the flow resolver that
//! classifies a scenario's Given/When/Then steps into messaging flows.

mod classify;
mod flows;
mod steps;
mod verbs;

pub use classify::{paradigms, resolve_flows};
pub use flows::{
    FlowAnalysis, FlowKind, FlowWarning, MessagingFlow, MessagingParadigm, PubSubFlow,
    RequestResponseFlow,
};
pub use steps::{
    StepError, correlate_operands, publish_output, receive_input, request_input, respond_output,
};
pub use verbs::{Verb, VerbTense};
