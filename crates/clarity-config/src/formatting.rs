//! ---
//! clarity_section: "01-configuration"
//! clarity_subsection: "module"
//! clarity_type: "source"
//! clarity_scope: "code"
//! clarity_description: "Symbol, spacer and label tables used to lay out print lines."
//! clarity_version: "v0.0.0-prealpha"
//! clarity_owner: "tbd"
//! ---
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::entity::{ControlFlow, FunctionType, Outcome};
use crate::errors::Result;

/// Every table has one field per enum variant, so lookups are total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Formatting {
    #[serde(default)]
    pub outcome_symbols: OutcomeSymbols,
    #[serde(default)]
    pub control_flow_node_type_symbols: ControlFlowSymbols,
    #[serde(default)]
    pub function_type_symbols: FunctionTypeSymbols,
    #[serde(default)]
    pub spacers: Spacers,
    #[serde(default)]
    pub labels: Labels,
}

impl Formatting {
    /// Decode a formatting document.
    pub fn from_json_str(content: &str) -> Result<Self> {
        crate::errors::decode_document(content, None)
    }

    /// Read and decode a formatting document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        crate::errors::read_json(path.as_ref())
    }

    pub fn outcome_symbol(&self, outcome: Outcome) -> &str {
        self.outcome_symbols.symbol(outcome)
    }

    pub fn control_flow_symbol(&self, control_flow: ControlFlow) -> &str {
        self.control_flow_node_type_symbols.symbol(control_flow)
    }

    pub fn function_type_symbol(&self, function_type: FunctionType) -> &str {
        self.function_type_symbols.symbol(function_type)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeSymbols {
    #[serde(rename = "true")]
    pub true_branch: String,
    #[serde(rename = "false")]
    pub false_branch: String,
    pub negative: String,
    pub positive: String,
    pub switch_case: String,
    pub guard_pass: String,
    pub guard_fail: String,
    pub try_pass: String,
    pub try_fail: String,
    pub value_reporter: String,
    pub error_reporter: String,
}

impl OutcomeSymbols {
    pub fn symbol(&self, outcome: Outcome) -> &str {
        match outcome {
            Outcome::True => &self.true_branch,
            Outcome::False => &self.false_branch,
            Outcome::Negative => &self.negative,
            Outcome::Positive => &self.positive,
            Outcome::SwitchCase => &self.switch_case,
            Outcome::GuardPass => &self.guard_pass,
            Outcome::GuardFail => &self.guard_fail,
            Outcome::TryPass => &self.try_pass,
            Outcome::TryFail => &self.try_fail,
            Outcome::ValueReporter => &self.value_reporter,
            Outcome::ErrorReporter => &self.error_reporter,
        }
    }

    pub fn all(&self) -> [&str; 11] {
        [
            self.true_branch.as_str(),
            self.false_branch.as_str(),
            self.negative.as_str(),
            self.positive.as_str(),
            self.switch_case.as_str(),
            self.guard_pass.as_str(),
            self.guard_fail.as_str(),
            self.try_pass.as_str(),
            self.try_fail.as_str(),
            self.value_reporter.as_str(),
            self.error_reporter.as_str(),
        ]
    }
}

impl Default for OutcomeSymbols {
    fn default() -> Self {
        Self {
            true_branch: "✅".to_owned(),
            false_branch: "❌".to_owned(),
            negative: "➖".to_owned(),
            positive: "➕".to_owned(),
            switch_case: "👉".to_owned(),
            guard_pass: "🟢".to_owned(),
            guard_fail: "🔴".to_owned(),
            try_pass: "👍".to_owned(),
            try_fail: "👎".to_owned(),
            value_reporter: "💬".to_owned(),
            error_reporter: "💥".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlFlowSymbols {
    pub if_else: String,
    pub switch_case: String,
    pub guard: String,
    pub do_catch: String,
    pub value_reporter: String,
    pub error_reporter: String,
}

impl ControlFlowSymbols {
    pub fn symbol(&self, control_flow: ControlFlow) -> &str {
        match control_flow {
            ControlFlow::IfElse => &self.if_else,
            ControlFlow::SwitchCase => &self.switch_case,
            ControlFlow::Guard => &self.guard,
            ControlFlow::DoCatch => &self.do_catch,
            ControlFlow::ValueReporter => &self.value_reporter,
            ControlFlow::ErrorReporter => &self.error_reporter,
        }
    }

    pub fn all(&self) -> [&str; 6] {
        [
            self.if_else.as_str(),
            self.switch_case.as_str(),
            self.guard.as_str(),
            self.do_catch.as_str(),
            self.value_reporter.as_str(),
            self.error_reporter.as_str(),
        ]
    }
}

impl Default for ControlFlowSymbols {
    fn default() -> Self {
        Self {
            if_else: "🔀".to_owned(),
            switch_case: "🔢".to_owned(),
            guard: "🚧".to_owned(),
            do_catch: "🎣".to_owned(),
            value_reporter: "🔍".to_owned(),
            error_reporter: "🚨".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionTypeSymbols {
    pub initializer: String,
    pub custom_function: String,
    #[serde(rename = "override")]
    pub override_function: String,
    pub action: String,
    pub delegate: String,
    pub datasource: String,
    pub computed_property: String,
    pub extension_method: String,
}

impl FunctionTypeSymbols {
    pub fn symbol(&self, function_type: FunctionType) -> &str {
        match function_type {
            FunctionType::Initializer => &self.initializer,
            FunctionType::CustomFunction => &self.custom_function,
            FunctionType::Override => &self.override_function,
            FunctionType::Action => &self.action,
            FunctionType::Delegate => &self.delegate,
            FunctionType::Datasource => &self.datasource,
            FunctionType::ComputedProperty => &self.computed_property,
            FunctionType::ExtensionMethod => &self.extension_method,
        }
    }

    pub fn all(&self) -> [&str; 8] {
        FunctionType::ALL.map(|function_type| self.symbol(function_type))
    }
}

impl Default for FunctionTypeSymbols {
    fn default() -> Self {
        Self {
            initializer: "🟩".to_owned(),
            custom_function: "🟪".to_owned(),
            override_function: "🟧".to_owned(),
            action: "🟥".to_owned(),
            delegate: "🟦".to_owned(),
            datasource: "🟫".to_owned(),
            computed_property: "⬜".to_owned(),
            extension_method: "🟨".to_owned(),
        }
    }
}

/// Tunable widths, in columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Spacers {
    pub custom: usize,
    pub general: usize,
    pub function_name: usize,
    pub post_print_number: usize,
}

impl Default for Spacers {
    fn default() -> Self {
        Self {
            custom: 1,
            general: 2,
            function_name: 1,
            post_print_number: 1,
        }
    }
}

/// Fixed text fragments joined between the columns of a print line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Labels {
    pub node_linker: String,
    pub description_linker: String,
    pub effect_label: String,
    pub value_reporter_label: String,
    pub value_reporter_aux_label: String,
    pub error_reporter_label: String,
    pub error_reporter_aux_label: String,
    pub fail_symbol: String,
    pub print_number_prefix: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            node_linker: ".".to_owned(),
            description_linker: " - ".to_owned(),
            effect_label: "Effect:".to_owned(),
            value_reporter_label: "Value ".to_owned(),
            value_reporter_aux_label: ":".to_owned(),
            error_reporter_label: "Error ".to_owned(),
            error_reporter_aux_label: ":".to_owned(),
            fail_symbol: "⛔".to_owned(),
            print_number_prefix: " #".to_owned(),
        }
    }
}
