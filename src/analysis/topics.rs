//! Transport topic bookkeeping.
//!
//! Callers naming transport topics after flows register each topic with
//! its payload type here. Two flows claiming one topic with different
//! payloads is an unrepairable architectural inconsistency: the conflict
//! aborts the whole multi-scenario pass for the model, unlike the
//! per-scenario failures elsewhere in this crate.

use thiserror::Error;

use rustc_hash::FxHashMap;

use crate::base::DataId;
use crate::model::ModelGraph;

/// One topic mapped to two different payload types.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("topic '{topic}' is already mapped to payload type '{existing}', cannot remap to '{incoming}'")]
pub struct TopicConflict {
    pub topic: String,
    pub existing: String,
    pub incoming: String,
}

/// Registry of topic-to-payload mappings for one generation pass.
#[derive(Clone, Debug, Default)]
pub struct TopicRegistry {
    topics: FxHashMap<String, DataId>,
}

impl TopicRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a topic with its payload type.
    ///
    /// Re-registering the same payload is idempotent; a different payload
    /// is a conflict.
    pub fn register(
        &mut self,
        graph: &ModelGraph,
        topic: &str,
        payload: DataId,
    ) -> Result<(), TopicConflict> {
        match self.topics.get(topic) {
            Some(&existing) if existing != payload => Err(TopicConflict {
                topic: topic.to_string(),
                existing: graph.data(existing).name().to_string(),
                incoming: graph.data(payload).name().to_string(),
            }),
            Some(_) => Ok(()),
            None => {
                self.topics.insert(topic.to_string(), payload);
                Ok(())
            }
        }
    }

    pub fn payload(&self, topic: &str) -> Option<DataId> {
        self.topics.get(topic).copied()
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GraphBuilder;

    #[test]
    fn test_reregistering_same_payload_is_idempotent() {
        let mut builder = GraphBuilder::new();
        let data = builder.add_data("Telemetry");
        let graph = builder.finish();

        let mut registry = TopicRegistry::new();
        registry.register(&graph, "telemetry", data).unwrap();
        registry.register(&graph, "telemetry", data).unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_conflicting_payload_is_an_error() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_data("Alpha");
        let b = builder.add_data("Beta");
        let graph = builder.finish();

        let mut registry = TopicRegistry::new();
        registry.register(&graph, "topic", a).unwrap();
        let err = registry.register(&graph, "topic", b).unwrap_err();
        assert_eq!(err.existing, "Alpha");
        assert_eq!(err.incoming, "Beta");
        // The registry keeps the original mapping.
        assert_eq!(registry.payload("topic"), Some(a));
    }
}
