//! Per-scenario analysis combining flows and correlation.

use std::sync::Arc;

use crate::base::{ModelId, ScenarioId};
use crate::correlation::{CorrelationError, build_correlation};
use crate::model::ModelGraph;
use crate::scenario::{FlowAnalysis, MessagingParadigm, resolve_flows};

/// The complete analysis of one scenario.
///
/// A failed correlation build aborts only the description: the flows are
/// still reported, without correlation, alongside the error.
#[derive(Clone, Debug, PartialEq)]
pub struct ScenarioAnalysis {
    pub scenario: ScenarioId,
    pub flows: FlowAnalysis,
    pub correlation_error: Option<CorrelationError>,
}

impl ScenarioAnalysis {
    pub fn paradigms(&self) -> Vec<MessagingParadigm> {
        self.flows.paradigms()
    }
}

/// Stateless analyzer over a shared model graph.
///
/// Results are computed on demand and never cached; callers that need
/// memoization layer it on top.
#[derive(Clone, Copy, Debug)]
pub struct ScenarioAnalyzer<'g> {
    graph: &'g ModelGraph,
}

impl<'g> ScenarioAnalyzer<'g> {
    pub fn new(graph: &'g ModelGraph) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &'g ModelGraph {
        self.graph
    }

    /// Resolve a scenario's flows and attach its correlation description.
    pub fn analyze_scenario(&self, scenario: ScenarioId) -> ScenarioAnalysis {
        let mut flows = resolve_flows(self.graph, scenario);
        let mut correlation_error = None;

        match build_correlation(self.graph, scenario) {
            Ok(Some(description)) => {
                let description = Arc::new(description);
                for flow in &mut flows.flows {
                    flow.set_correlation(description.clone());
                }
            }
            Ok(None) => {}
            Err(error) => {
                tracing::debug!(
                    scenario = self.graph.scenario(scenario).name(),
                    %error,
                    "correlation description aborted"
                );
                correlation_error = Some(error);
            }
        }

        ScenarioAnalysis {
            scenario,
            flows,
            correlation_error,
        }
    }

    /// Analyze every scenario of a model. Failures stay local to their
    /// scenario; the batch always completes.
    pub fn analyze_model(&self, model: ModelId) -> Vec<ScenarioAnalysis> {
        self.graph
            .scenarios_of(model)
            .map(|scenario| self.analyze_scenario(scenario))
            .collect()
    }

    /// The messaging paradigms a scenario participates in.
    pub fn paradigms(&self, scenario: ScenarioId) -> Vec<MessagingParadigm> {
        self.analyze_scenario(scenario).paradigms()
    }
}
