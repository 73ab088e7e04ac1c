//! ---
//! clarity_section: "02-print-pipeline"
//! clarity_subsection: "module"
//! clarity_type: "source"
//! clarity_scope: "code"
//! clarity_description: "Assembles the positional slot array into aligned print lines."
//! clarity_version: "v0.0.0-prealpha"
//! clarity_owner: "tbd"
//! ---
//! A print line is the concatenation of a fixed, ordered array of slots.
//! Each node type populates its own subset; unpopulated slots stay empty.
//! Every slot left of the description column has a width that depends only
//! on the registry and the formatting tables, never on the message being
//! printed, so columns line up across lines and across node types.

use clarity_config::{ControlFlow, Formatting, Outcome, Settings};

use crate::classify::NodeType;
use crate::registry::{ColumnWidths, Message};
use crate::width::{blank, digit_width, max_symbol_width, pad_to, symbol_width};

/// Positions of the slot array, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    LeadingSpacer,
    EntityCode,
    /// Pads every entity code to the widest one in the registry.
    EntityCodeDifferential,
    /// Right-justifies narrower function-type symbols.
    FunctionSymbolAdjuster,
    FunctionNameSectionSpacer,
    FunctionTypeSymbol,
    FunctionTypeCode,
    /// Right-justifies function numbers with fewer digits.
    FunctionNumberAdjuster,
    FunctionNumberSpacer,
    FunctionNumber,
    GeneralSpacer,
    SecondFunctionNameSpacer,
    FailSpacer,
    FailSymbol,
    ControlFlowSymbol,
    NodeLinker,
    FunctionName,
    NodeNumber,
    /// Left-justifies node numbers with fewer digits.
    NodeNumberAdjuster,
    PrintNumberAdjuster,
    PrintNumber,
    PostPrintNumberSpacer,
    OutcomeSpacer,
    OutcomeSymbol,
    DescriptionLinker,
    ValueReporterLabel,
    Description,
    ValueReporterAuxLabel,
    EffectLabel,
    EffectDescription,
}

pub const SLOT_COUNT: usize = 30;

impl Slot {
    pub const ALL: [Slot; SLOT_COUNT] = [
        Slot::LeadingSpacer,
        Slot::EntityCode,
        Slot::EntityCodeDifferential,
        Slot::FunctionSymbolAdjuster,
        Slot::FunctionNameSectionSpacer,
        Slot::FunctionTypeSymbol,
        Slot::FunctionTypeCode,
        Slot::FunctionNumberAdjuster,
        Slot::FunctionNumberSpacer,
        Slot::FunctionNumber,
        Slot::GeneralSpacer,
        Slot::SecondFunctionNameSpacer,
        Slot::FailSpacer,
        Slot::FailSymbol,
        Slot::ControlFlowSymbol,
        Slot::NodeLinker,
        Slot::FunctionName,
        Slot::NodeNumber,
        Slot::NodeNumberAdjuster,
        Slot::PrintNumberAdjuster,
        Slot::PrintNumber,
        Slot::PostPrintNumberSpacer,
        Slot::OutcomeSpacer,
        Slot::OutcomeSymbol,
        Slot::DescriptionLinker,
        Slot::ValueReporterLabel,
        Slot::Description,
        Slot::ValueReporterAuxLabel,
        Slot::EffectLabel,
        Slot::EffectDescription,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

const FUNCTION_NAME_SLOTS: &[Slot] = &[
    Slot::LeadingSpacer,
    Slot::EntityCode,
    Slot::EntityCodeDifferential,
    Slot::FunctionSymbolAdjuster,
    Slot::FunctionNameSectionSpacer,
    Slot::FunctionTypeSymbol,
    Slot::FunctionTypeCode,
    Slot::FunctionNumberAdjuster,
    Slot::FunctionNumberSpacer,
    Slot::FunctionNumber,
    Slot::GeneralSpacer,
    Slot::SecondFunctionNameSpacer,
    Slot::NodeLinker,
    Slot::FunctionName,
];

const NODE_ONLY_SLOTS: &[Slot] = &[
    Slot::LeadingSpacer,
    Slot::EntityCode,
    Slot::EntityCodeDifferential,
    Slot::FunctionSymbolAdjuster,
    Slot::FunctionNameSectionSpacer,
    Slot::FunctionTypeSymbol,
    Slot::FunctionTypeCode,
    Slot::FunctionNumberAdjuster,
    Slot::FunctionNumberSpacer,
    Slot::FunctionNumber,
    Slot::GeneralSpacer,
    Slot::FailSpacer,
    Slot::FailSymbol,
    Slot::ControlFlowSymbol,
    Slot::NodeLinker,
    Slot::NodeNumber,
    Slot::NodeNumberAdjuster,
    Slot::PrintNumberAdjuster,
    Slot::PrintNumber,
    Slot::PostPrintNumberSpacer,
    Slot::OutcomeSpacer,
    Slot::OutcomeSymbol,
];

const EVENT_SLOTS: &[Slot] = &[
    Slot::LeadingSpacer,
    Slot::EntityCode,
    Slot::EntityCodeDifferential,
    Slot::FunctionSymbolAdjuster,
    Slot::FunctionNameSectionSpacer,
    Slot::FunctionTypeSymbol,
    Slot::FunctionTypeCode,
    Slot::FunctionNumberAdjuster,
    Slot::FunctionNumberSpacer,
    Slot::FunctionNumber,
    Slot::GeneralSpacer,
    Slot::FailSpacer,
    Slot::FailSymbol,
    Slot::ControlFlowSymbol,
    Slot::NodeLinker,
    Slot::NodeNumber,
    Slot::NodeNumberAdjuster,
    Slot::PrintNumberAdjuster,
    Slot::PrintNumber,
    Slot::PostPrintNumberSpacer,
    Slot::OutcomeSpacer,
    Slot::OutcomeSymbol,
    Slot::DescriptionLinker,
    Slot::Description,
    Slot::EffectLabel,
    Slot::EffectDescription,
];

const REPORT_SLOTS: &[Slot] = &[
    Slot::LeadingSpacer,
    Slot::EntityCode,
    Slot::EntityCodeDifferential,
    Slot::FunctionSymbolAdjuster,
    Slot::FunctionNameSectionSpacer,
    Slot::FunctionTypeSymbol,
    Slot::FunctionTypeCode,
    Slot::FunctionNumberAdjuster,
    Slot::FunctionNumberSpacer,
    Slot::FunctionNumber,
    Slot::GeneralSpacer,
    Slot::FailSpacer,
    Slot::FailSymbol,
    Slot::ControlFlowSymbol,
    Slot::NodeLinker,
    Slot::NodeNumber,
    Slot::NodeNumberAdjuster,
    Slot::PrintNumberAdjuster,
    Slot::PrintNumber,
    Slot::PostPrintNumberSpacer,
    Slot::OutcomeSpacer,
    Slot::OutcomeSymbol,
    Slot::DescriptionLinker,
    Slot::ValueReporterLabel,
    Slot::Description,
    Slot::ValueReporterAuxLabel,
];

/// Slots populated for `node_type`.
pub fn populated_slots(node_type: NodeType) -> &'static [Slot] {
    match node_type {
        NodeType::FunctionName => FUNCTION_NAME_SLOTS,
        NodeType::Event => EVENT_SLOTS,
        NodeType::ValueReport | NodeType::ErrorReport => REPORT_SLOTS,
        NodeType::NodeOnly => NODE_ONLY_SLOTS,
    }
}

/// The filled slot array for one emission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composite {
    slots: [String; SLOT_COUNT],
}

impl Composite {
    pub fn get(&self, slot: Slot) -> &str {
        &self.slots[slot.index()]
    }

    fn set(&mut self, slot: Slot, text: String) {
        self.slots[slot.index()] = text;
    }

    /// Display column at which `slot` starts.
    pub fn column_of(&self, slot: Slot) -> usize {
        self.slots[..slot.index()]
            .iter()
            .map(|text| symbol_width(text))
            .sum()
    }

    fn concat(&self, from: Slot, to: Slot) -> String {
        self.slots[from.index()..to.index()].concat()
    }
}

/// Output of the compositor for one emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedLines {
    pub node_type: NodeType,
    pub primary: String,
    pub effect: Option<String>,
    /// Left margin aligning effect and value lines under the description column.
    pub readout_spacer: String,
    pub composite: Composite,
}

impl ComposedLines {
    /// Primary line followed by the effect line, if any.
    pub fn lines(&self) -> Vec<String> {
        std::iter::once(self.primary.clone())
            .chain(self.effect.clone())
            .collect()
    }
}

/// Everything a slot's text depends on, resolved once per emission.
struct SlotInputs<'a> {
    message: &'a Message,
    node_type: NodeType,
    settings: &'a Settings,
    formatting: &'a Formatting,
    widths: &'a ColumnWidths,
    function_name: Option<&'a str>,
}

impl SlotInputs<'_> {
    fn control_flow(&self) -> Option<ControlFlow> {
        match self.node_type {
            NodeType::ValueReport => Some(ControlFlow::ValueReporter),
            NodeType::ErrorReport => Some(ControlFlow::ErrorReporter),
            _ => self.message.control_flow,
        }
    }

    fn outcome(&self) -> Option<Outcome> {
        match self.node_type {
            NodeType::ValueReport => Some(Outcome::ValueReporter),
            NodeType::ErrorReport => Some(Outcome::ErrorReporter),
            _ => self.message.outcome,
        }
    }

    fn is_failure_branch(&self) -> bool {
        self.outcome().is_some_and(|outcome| outcome.is_failure())
    }

    fn text(&self, slot: Slot) -> String {
        let spacers = &self.formatting.spacers;
        let labels = &self.formatting.labels;
        let message = self.message;
        match slot {
            Slot::LeadingSpacer
            | Slot::FunctionNumberSpacer
            | Slot::FailSpacer
            | Slot::OutcomeSpacer => blank(spacers.custom),
            Slot::EntityCode => message.entity_code.clone(),
            Slot::EntityCodeDifferential => blank(
                self.widths
                    .entity_code
                    .saturating_sub(symbol_width(&message.entity_code)),
            ),
            Slot::FunctionSymbolAdjuster => {
                let table = max_symbol_width(self.formatting.function_type_symbols.all());
                let symbol = self.formatting.function_type_symbol(message.function_type);
                blank(table.saturating_sub(symbol_width(symbol)))
            }
            Slot::FunctionNameSectionSpacer | Slot::SecondFunctionNameSpacer => {
                blank(spacers.function_name)
            }
            Slot::FunctionTypeSymbol => self
                .formatting
                .function_type_symbol(message.function_type)
                .to_owned(),
            Slot::FunctionTypeCode => message.function_type.code().to_owned(),
            Slot::FunctionNumberAdjuster => {
                let number = message.displayed_function_number(self.settings);
                blank(
                    self.widths
                        .function_number(self.settings)
                        .saturating_sub(digit_width(number)),
                )
            }
            Slot::FunctionNumber => message.displayed_function_number(self.settings).to_string(),
            Slot::GeneralSpacer => blank(spacers.general),
            Slot::FailSymbol => {
                let width = symbol_width(&labels.fail_symbol);
                if self.is_failure_branch() {
                    pad_to(&labels.fail_symbol, width)
                } else {
                    blank(width)
                }
            }
            Slot::ControlFlowSymbol => {
                let symbol = self
                    .control_flow()
                    .map_or("", |flow| self.formatting.control_flow_symbol(flow));
                let table = self.formatting.control_flow_node_type_symbols.all();
                pad_to(symbol, max_symbol_width(table))
            }
            Slot::NodeLinker => labels.node_linker.clone(),
            Slot::FunctionName => self.function_name.unwrap_or_default().to_owned(),
            Slot::NodeNumber => message.displayed_node_number(self.settings).to_string(),
            Slot::NodeNumberAdjuster => {
                let number = message.displayed_node_number(self.settings);
                blank(
                    self.widths
                        .node_number(self.settings)
                        .saturating_sub(digit_width(number)),
                )
            }
            Slot::PrintNumberAdjuster => {
                if Message::shows_print_number(self.settings) {
                    blank(
                        self.widths
                            .print_number
                            .saturating_sub(digit_width(message.print_number)),
                    )
                } else {
                    String::new()
                }
            }
            Slot::PrintNumber => {
                if Message::shows_print_number(self.settings) {
                    format!("{}{}", labels.print_number_prefix, message.print_number)
                } else {
                    String::new()
                }
            }
            Slot::PostPrintNumberSpacer => blank(spacers.post_print_number),
            Slot::OutcomeSymbol => {
                let symbol = self
                    .outcome()
                    .map_or("", |outcome| self.formatting.outcome_symbol(outcome));
                pad_to(symbol, max_symbol_width(self.formatting.outcome_symbols.all()))
            }
            Slot::DescriptionLinker => labels.description_linker.clone(),
            Slot::ValueReporterLabel => match self.node_type {
                NodeType::ErrorReport => labels.error_reporter_label.clone(),
                _ => labels.value_reporter_label.clone(),
            },
            Slot::Description => message.event_description.clone(),
            Slot::ValueReporterAuxLabel => match self.node_type {
                NodeType::ErrorReport => labels.error_reporter_aux_label.clone(),
                _ => labels.value_reporter_aux_label.clone(),
            },
            Slot::EffectLabel => {
                if message.effect_description.is_empty() {
                    String::new()
                } else {
                    labels.effect_label.clone()
                }
            }
            Slot::EffectDescription => message.effect_description.clone(),
        }
    }
}

/// Fill the slot array for `node_type` without serialising it.
pub fn compose_slots(
    message: &Message,
    node_type: NodeType,
    settings: &Settings,
    formatting: &Formatting,
    widths: &ColumnWidths,
    function_name: Option<&str>,
) -> Composite {
    let inputs = SlotInputs {
        message,
        node_type,
        settings,
        formatting,
        widths,
        function_name,
    };
    let mut composite = Composite::default();
    for &slot in populated_slots(node_type) {
        composite.set(slot, inputs.text(slot));
    }
    composite
}

/// Compose the primary line and, for events with an effect, the effect line.
pub fn compose(
    message: &Message,
    node_type: NodeType,
    settings: &Settings,
    formatting: &Formatting,
    widths: &ColumnWidths,
    function_name: Option<&str>,
) -> ComposedLines {
    let composite = compose_slots(message, node_type, settings, formatting, widths, function_name);

    let primary = composite
        .concat(Slot::LeadingSpacer, Slot::EffectLabel)
        .trim_end()
        .to_owned();
    // Starts at the description text; the value/error label is excluded.
    let readout_spacer = blank(composite.column_of(Slot::ValueReporterLabel));
    let effect = (node_type == NodeType::Event && !message.effect_description.is_empty()).then(|| {
        format!(
            "{readout_spacer}{}{}",
            composite.get(Slot::EffectLabel),
            composite.get(Slot::EffectDescription)
        )
    });

    ComposedLines {
        node_type,
        primary,
        effect,
        readout_spacer,
        composite,
    }
}
