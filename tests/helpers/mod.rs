//! Shared model fixtures for integration tests.
#![allow(dead_code)]

use modelflow::model::{
    FieldKind, GraphBuilder, ModelGraph, PrimitiveType, PropertyValue, Quantity, Unit,
};
use modelflow::{DataId, EnumId, FieldRef, ModelId, ScenarioId};

pub fn int() -> FieldKind {
    FieldKind::Primitive(PrimitiveType::Int)
}

pub fn boolean() -> FieldKind {
    FieldKind::Primitive(PrimitiveType::Boolean)
}

pub fn quantity(magnitude: f64, unit: Unit) -> PropertyValue {
    PropertyValue::Quantity(Quantity::new(magnitude, unit))
}

/// A model under construction with pub/sub scenario shorthands.
pub struct PubSubFixture {
    pub builder: GraphBuilder,
    pub model: ModelId,
}

impl PubSubFixture {
    pub fn new(name: &str) -> Self {
        let mut builder = GraphBuilder::new();
        let model = builder.add_model(name);
        Self { builder, model }
    }

    pub fn input(&mut self, name: &str, data: DataId) -> FieldRef {
        self.builder.add_input(self.model, name, data)
    }

    pub fn output(&mut self, name: &str, data: DataId) -> FieldRef {
        self.builder.add_output(self.model, name, data)
    }

    /// Add a scenario receiving each named input and publishing each named
    /// output.
    pub fn pub_sub_scenario(
        &mut self,
        name: &str,
        receives: &[&str],
        publishes: &[&str],
    ) -> ScenarioId {
        let scenario = self.builder.add_scenario(self.model, name);
        for input in receives.iter().copied() {
            self.builder.add_when(scenario, "receiving", &[input]);
        }
        for output in publishes.iter().copied() {
            self.builder.add_then(scenario, "willPublish", &[output]);
        }
        scenario
    }

    /// Correlate two input-rooted paths (a When step).
    pub fn correlate_inputs(&mut self, scenario: ScenarioId, left: &str, right: &str) {
        self.builder
            .add_when(scenario, "correlating", &[left, "to", right]);
    }

    /// Correlate an input-rooted path to an output-rooted one (a Then step).
    pub fn correlate_output(&mut self, scenario: ScenarioId, left: &str, right: &str) {
        self.builder
            .add_then(scenario, "willCorrelate", &[left, "to", right]);
    }

    pub fn finish(self) -> ModelGraph {
        self.builder.finish()
    }
}

/// The nested data types used throughout the correlation tests.
///
/// ```text
/// NestedData1 { nestedField1: int, nestedField2: boolean }
/// Data1       { field1: int, field2: Enum1, field3: NestedData1 }
/// NestedData2 { nestedField1: Enum1, nestedField2: int }
/// Data2       { field1: boolean, field2: NestedData2 }
/// ```
pub struct CorrelationTypes {
    pub enum1: EnumId,
    pub nested_data1: DataId,
    pub data1: DataId,
    pub nested_data2: DataId,
    pub data2: DataId,
}

pub fn correlation_types(builder: &mut GraphBuilder) -> CorrelationTypes {
    let enum1 = builder.add_enumeration("Enum1", &["ALPHA", "BRAVO"]);

    let nested_data1 = builder.add_data("NestedData1");
    builder.add_field(nested_data1, "nestedField1", int());
    builder.add_field(nested_data1, "nestedField2", boolean());

    let data1 = builder.add_data("Data1");
    builder.add_field(data1, "field1", int());
    builder.add_field(data1, "field2", FieldKind::Enum(enum1));
    builder.add_field(data1, "field3", FieldKind::Data(nested_data1));

    let nested_data2 = builder.add_data("NestedData2");
    builder.add_field(nested_data2, "nestedField1", FieldKind::Enum(enum1));
    builder.add_field(nested_data2, "nestedField2", int());

    let data2 = builder.add_data("Data2");
    builder.add_field(data2, "field1", boolean());
    builder.add_field(data2, "field2", FieldKind::Data(nested_data2));

    CorrelationTypes {
        enum1,
        nested_data1,
        data1,
        nested_data2,
        data2,
    }
}
