//! ---
//! clarity_section: "02-print-pipeline"
//! clarity_subsection: "module"
//! clarity_type: "source"
//! clarity_scope: "code"
//! clarity_description: "Startup listings of entity codes and print numbers."
//! clarity_version: "v0.0.0-prealpha"
//! clarity_owner: "tbd"
//! ---
use crate::registry::MessageRegistry;
use crate::width::pad_to;

/// One line per entity log, in supply order, after a heading.
pub fn entity_code_report(registry: &MessageRegistry) -> Vec<String> {
    let entities = registry.entities();
    let code_width = registry.max_entity_code_width();
    let mut lines = Vec::with_capacity(entities.len() + 1);
    lines.push(format!("Entity codes ({}):", entities.len()));
    for entity in entities {
        lines.push(format!(
            "  {}  functions: {}  nodes: {}",
            pad_to(&entity.entity_code, code_width),
            entity.functions,
            entity.nodes
        ));
    }
    lines
}

/// One line per resolved print number, ascending, after a heading.
pub fn print_number_report(registry: &MessageRegistry) -> Vec<String> {
    let messages = registry.messages();
    let number_width = registry.column_widths().print_number;
    let code_width = registry.max_entity_code_width();
    let mut lines = Vec::with_capacity(messages.len() + 1);
    lines.push(format!("Print numbers ({}):", messages.len()));
    for message in messages.values() {
        let mut line = format!(
            "  {:>number_width$}  {}  {} {}  {}",
            message.print_number,
            pad_to(&message.entity_code, code_width),
            message.function_type.code(),
            message.function_number,
            message.node_kind
        );
        if !message.event_description.is_empty() {
            line.push_str("  ");
            line.push_str(&message.event_description);
        }
        lines.push(line);
    }
    lines
}
