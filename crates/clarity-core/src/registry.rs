//! ---
//! clarity_section: "02-print-pipeline"
//! clarity_subsection: "module"
//! clarity_type: "source"
//! clarity_scope: "code"
//! clarity_description: "Flattens entity logs into one print-number lookup table."
//! clarity_version: "v0.0.0-prealpha"
//! clarity_owner: "tbd"
//! ---
//! Entity logs are authored independently, so nothing stops two of them from
//! claiming the same print number. The registry keeps exactly one message per
//! print number and records every collision for alerting:
//!
//! * inside one entity log the last declaration (in function then node
//!   order) wins;
//! * across entity logs the first log supplied wins.

use std::collections::{BTreeMap, BTreeSet};

use clarity_config::{
    ControlFlow, EntityLog, FunctionType, NodeKind, Outcome, Settings,
};
use clarity_logging::{clarity_debug, LogContext};
use indexmap::IndexMap;

use crate::width::{digit_width, symbol_width};

/// A resolved print point with its owning entity and function denormalised
/// onto it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub print_number: u32,
    pub node_kind: NodeKind,
    pub control_flow: Option<ControlFlow>,
    pub outcome: Option<Outcome>,
    pub event_description: String,
    pub effect_description: String,
    pub entity_code: String,
    pub function_number: u32,
    pub function_number_always_custom: bool,
    pub function_type: FunctionType,
    /// 1-based position of the owning function within its entity log.
    pub function_position: u32,
    /// 1-based position of this node within its function.
    pub node_position: u32,
}

impl Message {
    /// Function number as displayed under the active numbering mode.
    pub fn displayed_function_number(&self, settings: &Settings) -> u32 {
        if settings.use_relative_function_numbering && !self.function_number_always_custom {
            self.function_position
        } else {
            self.function_number
        }
    }

    /// Node number as displayed under the active numbering mode.
    pub fn displayed_node_number(&self, settings: &Settings) -> u32 {
        if settings.use_relative_node_numbering {
            self.node_position
        } else {
            self.print_number
        }
    }

    /// Whether the print-number column is shown next to the node number.
    pub fn shows_print_number(settings: &Settings) -> bool {
        settings.use_relative_node_numbering && settings.show_absolute_print_number
    }
}

/// Widest value of each numeric or text column across the registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnWidths {
    pub entity_code: usize,
    pub declared_function_number: usize,
    pub relative_function_number: usize,
    pub print_number: usize,
    pub relative_node_number: usize,
}

impl ColumnWidths {
    pub fn function_number(&self, settings: &Settings) -> usize {
        if settings.use_relative_function_numbering {
            self.relative_function_number
        } else {
            self.declared_function_number
        }
    }

    pub fn node_number(&self, settings: &Settings) -> usize {
        if settings.use_relative_node_numbering {
            self.relative_node_number
        } else {
            self.print_number
        }
    }
}

/// The messages of one entity log, before merging.
#[derive(Debug, Clone, Default)]
pub struct EntityMessages {
    pub messages: BTreeMap<u32, Message>,
    /// Print numbers declared more than once inside the entity log.
    pub duplicates: BTreeSet<u32>,
}

/// Flatten every function's nodes of `log` into one map. A repeated print
/// number keeps the last declaration.
pub fn flatten_entity(log: &EntityLog) -> EntityMessages {
    let mut flattened = EntityMessages::default();
    for (function_index, function) in log.functions.iter().enumerate() {
        for (node_index, node) in function.nodes.iter().enumerate() {
            let message = Message {
                print_number: node.print_number,
                node_kind: node.node_kind,
                control_flow: node.control_flow,
                outcome: node.outcome,
                event_description: node.event_description.clone(),
                effect_description: node.effect_description.clone(),
                entity_code: log.entity_code.clone(),
                function_number: function.function_number,
                function_number_always_custom: function.function_number_always_custom,
                function_type: function.function_type,
                function_position: function_index as u32 + 1,
                node_position: node_index as u32 + 1,
            };
            if flattened.messages.insert(node.print_number, message).is_some() {
                flattened.duplicates.insert(node.print_number);
            }
        }
    }
    flattened
}

/// Inventory line for one entity log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySummary {
    pub entity_code: String,
    pub functions: usize,
    pub nodes: usize,
}

/// Immutable lookup table from print number to message.
#[derive(Debug, Clone, Default)]
pub struct MessageRegistry {
    messages: BTreeMap<u32, Message>,
    within_entity_duplicates: IndexMap<String, BTreeSet<u32>>,
    cross_entity_duplicates: BTreeMap<u32, BTreeSet<String>>,
    duplicate_entity_codes: BTreeSet<String>,
    entities: Vec<EntitySummary>,
    widths: ColumnWidths,
}

impl MessageRegistry {
    /// Build the registry. Never fails; an empty input gives an empty registry.
    pub fn build(entity_logs: &[EntityLog]) -> Self {
        let mut registry = Self::default();
        let mut seen_codes = BTreeSet::new();
        let mut declarations: BTreeMap<u32, (usize, BTreeSet<String>)> = BTreeMap::new();

        for log in entity_logs {
            let code = &log.entity_code;
            if !seen_codes.insert(code.clone()) {
                registry.duplicate_entity_codes.insert(code.clone());
            }
            registry.widths.entity_code = registry.widths.entity_code.max(symbol_width(code));
            registry.entities.push(EntitySummary {
                entity_code: code.clone(),
                functions: log.functions.len(),
                nodes: log.node_count(),
            });

            let flattened = flatten_entity(log);
            if !flattened.duplicates.is_empty() {
                registry
                    .within_entity_duplicates
                    .entry(code.clone())
                    .or_default()
                    .extend(flattened.duplicates);
            }
            for (print_number, message) in flattened.messages {
                let (count, owners) = declarations.entry(print_number).or_default();
                *count += 1;
                owners.insert(code.clone());
                registry.messages.entry(print_number).or_insert(message);
            }
        }

        registry.cross_entity_duplicates = declarations
            .into_iter()
            .filter(|(_, (count, _))| *count > 1)
            .map(|(print_number, (_, owners))| (print_number, owners))
            .collect();

        for message in registry.messages.values() {
            let widths = &mut registry.widths;
            widths.declared_function_number = widths
                .declared_function_number
                .max(digit_width(message.function_number));
            let relative = if message.function_number_always_custom {
                message.function_number
            } else {
                message.function_position
            };
            widths.relative_function_number =
                widths.relative_function_number.max(digit_width(relative));
            widths.print_number = widths.print_number.max(digit_width(message.print_number));
            widths.relative_node_number = widths
                .relative_node_number
                .max(digit_width(message.node_position));
        }

        clarity_debug!(
            context = LogContext::new(),
            "registry built: {} entity logs, {} messages, {} within-entity and {} cross-entity duplicates",
            registry.entities.len(),
            registry.messages.len(),
            registry.within_entity_duplicates.len(),
            registry.cross_entity_duplicates.len()
        );
        registry
    }

    pub fn get(&self, print_number: u32) -> Option<&Message> {
        self.messages.get(&print_number)
    }

    pub fn messages(&self) -> &BTreeMap<u32, Message> {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Symbol-aware width of the widest entity code.
    pub fn max_entity_code_width(&self) -> usize {
        self.widths.entity_code
    }

    pub fn column_widths(&self) -> &ColumnWidths {
        &self.widths
    }

    /// Entity code to the print numbers it declares more than once.
    pub fn within_entity_duplicates(&self) -> &IndexMap<String, BTreeSet<u32>> {
        &self.within_entity_duplicates
    }

    /// Print number to every entity code declaring it, for numbers declared by
    /// more than one entity log.
    pub fn cross_entity_duplicates(&self) -> &BTreeMap<u32, BTreeSet<String>> {
        &self.cross_entity_duplicates
    }

    /// Entity codes used by more than one entity log.
    pub fn duplicate_entity_codes(&self) -> &BTreeSet<String> {
        &self.duplicate_entity_codes
    }

    pub fn entities(&self) -> &[EntitySummary] {
        &self.entities
    }

    pub fn has_duplicates(&self) -> bool {
        !self.within_entity_duplicates.is_empty()
            || !self.cross_entity_duplicates.is_empty()
            || !self.duplicate_entity_codes.is_empty()
    }
}
