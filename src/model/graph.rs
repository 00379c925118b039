//! The model graph arena and its builder.
//!
//! ## Design
//!
//! All elements live in typed arenas owned by [`ModelGraph`]; identifiers
//! from [`crate::base`] are indices into them. Name indices exist for the
//! lookups the front-end and the analyses need.
//!
//! ```text
//! ModelGraph
//! ├── datas:  Vec<Data>          (DataId)
//! ├── enums:  Vec<Enumeration>   (EnumId)
//! ├── models: Vec<Model>         (ModelId)
//! └── name indices (FxHashMap)
//! ```
//!
//! The graph is assembled once through [`GraphBuilder`] and never mutated
//! afterwards, so `&ModelGraph` can be shared freely across threads.

use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::base::{DataFieldRef, DataId, EnumId, FieldDirection, FieldRef, ModelId, ScenarioId};
use crate::model::data::{Cardinality, Data, DataField, Enumeration, FieldKind, TerminalType};
use crate::model::property::{Budget, PropertyValue};
use crate::model::system::{DataReferenceField, Model, PartField, Scenario, Step};

/// Immutable arena of data types, enumerations, and models.
#[derive(Clone, Debug, Default)]
pub struct ModelGraph {
    datas: Vec<Data>,
    enums: Vec<Enumeration>,
    models: Vec<Model>,
    data_by_name: FxHashMap<Arc<str>, DataId>,
    model_by_name: FxHashMap<Arc<str>, ModelId>,
}

impl ModelGraph {
    // ============================================================
    // Arena access
    // ============================================================

    pub fn data(&self, id: DataId) -> &Data {
        &self.datas[id.index()]
    }

    pub fn enumeration(&self, id: EnumId) -> &Enumeration {
        &self.enums[id.index()]
    }

    pub fn model(&self, id: ModelId) -> &Model {
        &self.models[id.index()]
    }

    pub fn scenario(&self, id: ScenarioId) -> &Scenario {
        &self.model(id.model).scenarios[id.index as usize]
    }

    /// Resolve a boundary field reference to its declaration.
    pub fn boundary_field(&self, field: FieldRef) -> &DataReferenceField {
        let model = self.model(field.model);
        match field.direction {
            FieldDirection::Input => &model.inputs[field.index as usize],
            FieldDirection::Output => &model.outputs[field.index as usize],
        }
    }

    /// Resolve a data field reference to its declaration.
    pub fn data_field(&self, field: DataFieldRef) -> &DataField {
        &self.data(field.data).fields[field.index as usize]
    }

    pub fn data_named(&self, name: &str) -> Option<DataId> {
        self.data_by_name.get(name).copied()
    }

    pub fn model_named(&self, name: &str) -> Option<ModelId> {
        self.model_by_name.get(name).copied()
    }

    pub fn models(&self) -> impl Iterator<Item = ModelId> + '_ {
        (0..self.models.len()).map(ModelId::new)
    }

    pub fn scenarios_of(&self, model: ModelId) -> impl Iterator<Item = ScenarioId> + '_ {
        (0..self.model(model).scenarios.len()).map(move |i| ScenarioId::new(model, i))
    }

    // ============================================================
    // Effective fields (inheritance)
    // ============================================================

    /// All fields visible on a data type: its own fields followed by all
    /// ancestor fields, in extends-chain order.
    ///
    /// De-duplication is by field identity ([`DataFieldRef`] equality), not
    /// by name — shadowing is not modeled. The walk keeps a visited set so
    /// a (upstream-forbidden) cyclic extends chain terminates instead of
    /// looping.
    pub fn effective_fields(&self, data: DataId) -> Vec<DataFieldRef> {
        let mut fields = Vec::new();
        let mut visited = FxHashSet::default();
        let mut current = Some(data);
        while let Some(id) = current {
            if !visited.insert(id) {
                tracing::warn!(
                    data = self.data(id).name(),
                    "cyclic extends chain detected, truncating field traversal"
                );
                break;
            }
            let decl = self.data(id);
            fields.extend((0..decl.fields.len()).map(|i| DataFieldRef::new(id, i)));
            current = decl.extends;
        }
        fields
    }

    /// Look up a field by name in the effective field set of a data type.
    pub fn find_effective_field(&self, data: DataId, name: &str) -> Option<DataFieldRef> {
        let mut visited = FxHashSet::default();
        let mut current = Some(data);
        while let Some(id) = current {
            if !visited.insert(id) {
                break;
            }
            let decl = self.data(id);
            if let Some(index) = decl.fields.iter().position(|f| f.name() == name) {
                tracing::trace!(
                    data = decl.name(),
                    field = name,
                    "resolved field in effective field set"
                );
                return Some(DataFieldRef::new(id, index));
            }
            current = decl.extends;
        }
        None
    }

    /// Render a terminal type for diagnostics (`"int"`, `"enum Status"`).
    pub fn type_display(&self, ty: TerminalType) -> String {
        match ty {
            TerminalType::Primitive(p) => p.to_string(),
            TerminalType::Enum(e) => format!("enum {}", self.enumeration(e).name()),
        }
    }
}

/// Builder driven by the external front-end to assemble a [`ModelGraph`].
///
/// Identifiers returned from `add_*` methods are valid against the graph
/// returned by [`GraphBuilder::finish`].
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: ModelGraph,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_enumeration(&mut self, name: &str, values: &[&str]) -> EnumId {
        let id = EnumId::new(self.graph.enums.len());
        let name: Arc<str> = name.into();
        self.graph.enums.push(Enumeration {
            name,
            values: values.iter().map(|v| Arc::from(*v)).collect(),
        });
        id
    }

    pub fn add_data(&mut self, name: &str) -> DataId {
        self.add_data_extending(name, None)
    }

    pub fn add_data_extending(&mut self, name: &str, extends: Option<DataId>) -> DataId {
        let id = DataId::new(self.graph.datas.len());
        let name: Arc<str> = name.into();
        self.graph.data_by_name.insert(name.clone(), id);
        self.graph.datas.push(Data {
            name,
            extends,
            fields: Vec::new(),
        });
        id
    }

    pub fn add_field(&mut self, data: DataId, name: &str, kind: FieldKind) -> DataFieldRef {
        self.add_field_with(data, name, kind, Cardinality::Single)
    }

    pub fn add_field_with(
        &mut self,
        data: DataId,
        name: &str,
        kind: FieldKind,
        cardinality: Cardinality,
    ) -> DataFieldRef {
        let decl = &mut self.graph.datas[data.index()];
        let field = DataFieldRef::new(data, decl.fields.len());
        decl.fields.push(DataField {
            name: name.into(),
            cardinality,
            kind,
        });
        field
    }

    pub fn add_model(&mut self, name: &str) -> ModelId {
        let id = ModelId::new(self.graph.models.len());
        let name: Arc<str> = name.into();
        self.graph.model_by_name.insert(name.clone(), id);
        self.graph.models.push(Model {
            name,
            inputs: Vec::new(),
            outputs: Vec::new(),
            parts: Vec::new(),
            scenarios: Vec::new(),
            properties: IndexMap::new(),
        });
        id
    }

    pub fn add_input(&mut self, model: ModelId, name: &str, data: DataId) -> FieldRef {
        let decl = &mut self.graph.models[model.index()];
        let field = FieldRef::new(model, FieldDirection::Input, decl.inputs.len());
        decl.inputs.push(DataReferenceField {
            name: name.into(),
            data,
            cardinality: Cardinality::Single,
        });
        field
    }

    pub fn add_output(&mut self, model: ModelId, name: &str, data: DataId) -> FieldRef {
        let decl = &mut self.graph.models[model.index()];
        let field = FieldRef::new(model, FieldDirection::Output, decl.outputs.len());
        decl.outputs.push(DataReferenceField {
            name: name.into(),
            data,
            cardinality: Cardinality::Single,
        });
        field
    }

    pub fn add_part(&mut self, model: ModelId, name: &str, part: ModelId) {
        self.graph.models[model.index()].parts.push(PartField {
            name: name.into(),
            model: part,
        });
    }

    pub fn set_property(&mut self, model: ModelId, name: &str, value: PropertyValue) {
        self.graph.models[model.index()]
            .properties
            .insert(name.into(), value);
    }

    /// Declare a budget on a model; the declaration is stored under the
    /// budget's own name.
    pub fn declare_budget(&mut self, model: ModelId, budget: Budget) {
        let name = budget.name.clone();
        self.graph.models[model.index()]
            .properties
            .insert(name, PropertyValue::Budget(budget));
    }

    pub fn add_scenario(&mut self, model: ModelId, name: &str) -> ScenarioId {
        let decl = &mut self.graph.models[model.index()];
        let id = ScenarioId::new(model, decl.scenarios.len());
        decl.scenarios.push(Scenario {
            name: name.into(),
            givens: Vec::new(),
            whens: Vec::new(),
            thens: Vec::new(),
        });
        id
    }

    pub fn add_given(&mut self, scenario: ScenarioId, keyword: &str, parameters: &[&str]) {
        self.scenario_mut(scenario)
            .givens
            .push(step(keyword, parameters));
    }

    pub fn add_when(&mut self, scenario: ScenarioId, keyword: &str, parameters: &[&str]) {
        self.scenario_mut(scenario)
            .whens
            .push(step(keyword, parameters));
    }

    pub fn add_then(&mut self, scenario: ScenarioId, keyword: &str, parameters: &[&str]) {
        self.scenario_mut(scenario)
            .thens
            .push(step(keyword, parameters));
    }

    pub fn finish(self) -> ModelGraph {
        self.graph
    }

    fn scenario_mut(&mut self, id: ScenarioId) -> &mut Scenario {
        &mut self.graph.models[id.model.index()].scenarios[id.index as usize]
    }
}

fn step(keyword: &str, parameters: &[&str]) -> Step {
    Step {
        keyword: keyword.into(),
        parameters: parameters.iter().map(|p| Arc::from(*p)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::data::PrimitiveType;

    fn int() -> FieldKind {
        FieldKind::Primitive(PrimitiveType::Int)
    }

    #[test]
    fn test_effective_fields_include_ancestors_once() {
        let mut builder = GraphBuilder::new();
        let base = builder.add_data("Base");
        builder.add_field(base, "a", int());
        let derived = builder.add_data_extending("Derived", Some(base));
        builder.add_field(derived, "b", int());
        let graph = builder.finish();

        let fields = graph.effective_fields(derived);
        let names: Vec<&str> = fields
            .iter()
            .map(|f| graph.data_field(*f).name())
            .collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_effective_fields_terminate_on_cycle() {
        // Cycles are forbidden upstream; the walk must still terminate.
        let mut builder = GraphBuilder::new();
        let a = builder.add_data("A");
        let b = builder.add_data_extending("B", Some(a));
        builder.graph.datas[a.index()].extends = Some(b);
        builder.add_field(a, "x", int());
        let graph = builder.finish();

        let fields = graph.effective_fields(b);
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn test_find_effective_field_walks_ancestors() {
        let mut builder = GraphBuilder::new();
        let base = builder.add_data("Base");
        builder.add_field(base, "c", int());
        let derived = builder.add_data_extending("Derived", Some(base));
        let graph = builder.finish();

        let found = graph.find_effective_field(derived, "c").unwrap();
        assert_eq!(found.data, base);
        assert!(graph.find_effective_field(derived, "missing").is_none());
    }
}
