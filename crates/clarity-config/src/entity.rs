//! ---
//! clarity_section: "01-configuration"
//! clarity_subsection: "module"
//! clarity_type: "source"
//! clarity_scope: "code"
//! clarity_description: "Per-entity message definitions authored alongside client code."
//! clarity_version: "v0.0.0-prealpha"
//! clarity_owner: "tbd"
//! ---
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// One logical unit of client code (typically one type) and its print points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityLog {
    pub entity_code: String,
    #[serde(default)]
    pub functions: Vec<FunctionEntry>,
}

impl EntityLog {
    pub fn new(entity_code: impl Into<String>) -> Self {
        Self {
            entity_code: entity_code.into(),
            functions: Vec::new(),
        }
    }

    pub fn with_function(mut self, function: FunctionEntry) -> Self {
        self.functions.push(function);
        self
    }

    /// Decode an entity log document.
    pub fn from_json_str(content: &str) -> Result<Self> {
        crate::errors::decode_document(content, None)
    }

    /// Read and decode an entity log document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        crate::errors::read_json(path.as_ref())
    }

    /// Total number of declared nodes across every function.
    pub fn node_count(&self) -> usize {
        self.functions.iter().map(|f| f.nodes.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionEntry {
    pub function_number: u32,
    /// Display the declared number even when relative function numbering is on.
    #[serde(default)]
    pub function_number_always_custom: bool,
    pub function_type: FunctionType,
    #[serde(default)]
    pub nodes: Vec<NodeDefinition>,
}

impl FunctionEntry {
    pub fn new(function_number: u32, function_type: FunctionType) -> Self {
        Self {
            function_number,
            function_number_always_custom: false,
            function_type,
            nodes: Vec::new(),
        }
    }

    pub fn always_custom(mut self) -> Self {
        self.function_number_always_custom = true;
        self
    }

    pub fn with_node(mut self, node: NodeDefinition) -> Self {
        self.nodes.push(node);
        self
    }
}

/// A single print point as authored in an entity document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDefinition {
    pub print_number: u32,
    pub node_kind: NodeKind,
    #[serde(default)]
    pub control_flow: Option<ControlFlow>,
    #[serde(default)]
    pub outcome: Option<Outcome>,
    #[serde(default)]
    pub event_description: String,
    #[serde(default)]
    pub effect_description: String,
}

impl NodeDefinition {
    pub fn new(print_number: u32, node_kind: NodeKind) -> Self {
        Self {
            print_number,
            node_kind,
            control_flow: None,
            outcome: None,
            event_description: String::new(),
            effect_description: String::new(),
        }
    }

    pub fn event(print_number: u32, description: impl Into<String>) -> Self {
        Self::new(print_number, NodeKind::Event).describe(description)
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.event_description = description.into();
        self
    }

    pub fn effect(mut self, effect: impl Into<String>) -> Self {
        self.effect_description = effect.into();
        self
    }

    pub fn branch(mut self, control_flow: ControlFlow, outcome: Outcome) -> Self {
        self.control_flow = Some(control_flow);
        self.outcome = Some(outcome);
        self
    }
}

/// Declared kind of a print point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    FunctionCallPoint,
    Event,
    NodeOnly,
    ValueReport,
    ErrorReport,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::FunctionCallPoint => "functionCallPoint",
            NodeKind::Event => "event",
            NodeKind::NodeOnly => "nodeOnly",
            NodeKind::ValueReport => "valueReport",
            NodeKind::ErrorReport => "errorReport",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of function a print point lives in, authored as a one-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FunctionType {
    #[serde(rename = "I")]
    Initializer,
    #[serde(rename = "C")]
    CustomFunction,
    #[serde(rename = "O")]
    Override,
    #[serde(rename = "A")]
    Action,
    #[serde(rename = "D")]
    Delegate,
    #[serde(rename = "S")]
    Datasource,
    #[serde(rename = "P")]
    ComputedProperty,
    #[serde(rename = "E")]
    ExtensionMethod,
}

impl FunctionType {
    pub const ALL: [FunctionType; 8] = [
        FunctionType::Initializer,
        FunctionType::CustomFunction,
        FunctionType::Override,
        FunctionType::Action,
        FunctionType::Delegate,
        FunctionType::Datasource,
        FunctionType::ComputedProperty,
        FunctionType::ExtensionMethod,
    ];

    /// The one-letter code printed next to the function-type symbol.
    pub fn code(&self) -> &'static str {
        match self {
            FunctionType::Initializer => "I",
            FunctionType::CustomFunction => "C",
            FunctionType::Override => "O",
            FunctionType::Action => "A",
            FunctionType::Delegate => "D",
            FunctionType::Datasource => "S",
            FunctionType::ComputedProperty => "P",
            FunctionType::ExtensionMethod => "E",
        }
    }
}

/// Control-flow construct a print point sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ControlFlow {
    IfElse,
    SwitchCase,
    Guard,
    DoCatch,
    ValueReporter,
    ErrorReporter,
}

/// Which branch of a control-flow construct was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    True,
    False,
    Negative,
    Positive,
    SwitchCase,
    GuardPass,
    GuardFail,
    TryPass,
    TryFail,
    ValueReporter,
    ErrorReporter,
}

impl Outcome {
    /// Whether this outcome marks an `else` or failure branch.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Outcome::False | Outcome::Negative | Outcome::GuardFail | Outcome::TryFail
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_document_decodes() {
        let log = EntityLog::from_json_str(
            r#"{
                "entityCode": "ENTCC",
                "functions": [{
                    "functionNumber": 15,
                    "functionType": "C",
                    "nodes": [
                        {"printNumber": 34, "nodeKind": "functionCallPoint"},
                        {
                            "printNumber": 35,
                            "nodeKind": "event",
                            "controlFlow": "ifElse",
                            "outcome": "true",
                            "eventDescription": "An expected event occurred",
                            "effectDescription": "this should happen next"
                        }
                    ]
                }]
            }"#,
        )
        .unwrap();
        assert_eq!(log.entity_code, "ENTCC");
        assert_eq!(log.node_count(), 2);
        let function = &log.functions[0];
        assert_eq!(function.function_type, FunctionType::CustomFunction);
        assert!(!function.function_number_always_custom);
        let event = &function.nodes[1];
        assert_eq!(event.outcome, Some(Outcome::True));
        assert_eq!(event.control_flow, Some(ControlFlow::IfElse));
        assert_eq!(event.effect_description, "this should happen next");
    }

    #[test]
    fn unknown_function_type_code_is_rejected() {
        let err = EntityLog::from_json_str(
            r#"{"entityCode": "X", "functions": [{"functionNumber": 1, "functionType": "Z"}]}"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn failure_outcomes() {
        let failures: Vec<_> = [
            Outcome::True,
            Outcome::False,
            Outcome::Negative,
            Outcome::Positive,
            Outcome::GuardFail,
            Outcome::TryFail,
            Outcome::TryPass,
        ]
        .into_iter()
        .filter(Outcome::is_failure)
        .collect();
        assert_eq!(
            failures,
            [Outcome::False, Outcome::Negative, Outcome::GuardFail, Outcome::TryFail]
        );
    }
}
