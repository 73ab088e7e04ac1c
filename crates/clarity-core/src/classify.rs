//! ---
//! clarity_section: "02-print-pipeline"
//! clarity_subsection: "module"
//! clarity_type: "source"
//! clarity_scope: "code"
//! clarity_description: "Resolves the concrete node type of one emission."
//! clarity_version: "v0.0.0-prealpha"
//! clarity_owner: "tbd"
//! ---
use std::fmt;

use clarity_config::NodeKind;

use crate::registry::Message;
use crate::value::Value;

/// Concrete node type of one emission; selects which slots are populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    FunctionName,
    Event,
    ValueReport,
    ErrorReport,
    NodeOnly,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::FunctionName => "function-name",
            NodeType::Event => "event",
            NodeType::ValueReport => "value-report",
            NodeType::ErrorReport => "error-report",
            NodeType::NodeOnly => "node-only",
        }
    }

    /// Value and error reports are followed by readout lines.
    pub fn reports_value(&self) -> bool {
        matches!(self, NodeType::ValueReport | NodeType::ErrorReport)
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A caller-supplied function name takes precedence, then a caller-supplied
/// value (a failure makes it an error report), then the declared kind.
///
/// Without caller arguments a declared function call point still renders as a
/// function-name node, and a declared value or error report degrades to an
/// event line.
pub fn classify(message: &Message, function_name: Option<&str>, value: Option<&Value>) -> NodeType {
    if function_name.is_some() {
        return NodeType::FunctionName;
    }
    if let Some(value) = value {
        return if value.is_failure() {
            NodeType::ErrorReport
        } else {
            NodeType::ValueReport
        };
    }
    match message.node_kind {
        NodeKind::FunctionCallPoint => NodeType::FunctionName,
        NodeKind::NodeOnly => NodeType::NodeOnly,
        NodeKind::Event | NodeKind::ValueReport | NodeKind::ErrorReport => NodeType::Event,
    }
}

#[cfg(test)]
mod tests {
    use clarity_config::{EntityLog, FunctionEntry, FunctionType, NodeDefinition};

    use super::*;
    use crate::registry::MessageRegistry;

    fn message(kind: NodeKind) -> Message {
        let registry = MessageRegistry::build(&[EntityLog::new("CLS").with_function(
            FunctionEntry::new(1, FunctionType::Action).with_node(NodeDefinition::new(9, kind)),
        )]);
        registry.get(9).cloned().unwrap()
    }

    #[test]
    fn function_name_wins() {
        let value = Value::from(1);
        let event = message(NodeKind::Event);
        assert_eq!(
            classify(&event, Some("viewDidLoad"), Some(&value)),
            NodeType::FunctionName
        );
    }

    #[test]
    fn value_shape_picks_report_kind() {
        let event = message(NodeKind::ValueReport);
        assert_eq!(
            classify(&event, None, Some(&Value::from(vec![1, 2]))),
            NodeType::ValueReport
        );
        assert_eq!(
            classify(&event, None, Some(&Value::failure("boom"))),
            NodeType::ErrorReport
        );
    }

    #[test]
    fn declared_kind_is_the_fallback() {
        assert_eq!(classify(&message(NodeKind::Event), None, None), NodeType::Event);
        assert_eq!(classify(&message(NodeKind::NodeOnly), None, None), NodeType::NodeOnly);
        assert_eq!(
            classify(&message(NodeKind::FunctionCallPoint), None, None),
            NodeType::FunctionName
        );
        assert_eq!(classify(&message(NodeKind::ErrorReport), None, None), NodeType::Event);
    }
}
