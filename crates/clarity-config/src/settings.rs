//! ---
//! clarity_section: "01-configuration"
//! clarity_subsection: "module"
//! clarity_type: "source"
//! clarity_scope: "code"
//! clarity_description: "User preferences controlling which print points fire."
//! clarity_version: "v0.0.0-prealpha"
//! clarity_owner: "tbd"
//! ---
use std::collections::BTreeSet;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::errors::Result;

fn default_alert_duplicates() -> bool {
    true
}

/// Suppression, isolation, numbering and listing preferences.
///
/// Decoded once and treated as read-only afterwards. Tests inject their own
/// instance per call instead of mutating a shared one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub suppress_all_clarity_logs: bool,
    #[serde(default)]
    pub print_all_clarity_logs: bool,
    #[serde(default)]
    pub log_function_names_only: bool,
    #[serde(default)]
    pub suppress_log_function_names: bool,
    #[serde(default)]
    pub log_isolated_print_numbers_only: bool,
    #[serde(default)]
    pub isolated_print_numbers: BTreeSet<u32>,
    /// Entity code to isolate flag.
    #[serde(default)]
    pub isolated_entities: IndexMap<String, bool>,
    /// Entity code to function isolation rule.
    #[serde(default)]
    pub isolated_functions: IndexMap<String, FunctionIsolation>,
    #[serde(default)]
    pub use_relative_function_numbering: bool,
    #[serde(default)]
    pub use_relative_node_numbering: bool,
    /// Keep the absolute print number visible while relative node numbering is on.
    #[serde(default)]
    pub show_absolute_print_number: bool,
    #[serde(default)]
    pub list_entity_codes_at_startup: bool,
    #[serde(default)]
    pub list_print_numbers_at_startup: bool,
    #[serde(default)]
    pub alert_orphaned_print_numbers_detected: bool,
    #[serde(default = "default_alert_duplicates")]
    pub alert_duplicate_print_numbers_detected: bool,
}

/// Restricts emission to one entity, optionally narrowed to specific functions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionIsolation {
    #[serde(default)]
    pub isolate: bool,
    /// Empty means every function of the entity.
    #[serde(default)]
    pub isolated_function_numbers: BTreeSet<u32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            suppress_all_clarity_logs: false,
            print_all_clarity_logs: false,
            log_function_names_only: false,
            suppress_log_function_names: false,
            log_isolated_print_numbers_only: false,
            isolated_print_numbers: BTreeSet::new(),
            isolated_entities: IndexMap::new(),
            isolated_functions: IndexMap::new(),
            use_relative_function_numbering: false,
            use_relative_node_numbering: false,
            show_absolute_print_number: false,
            list_entity_codes_at_startup: false,
            list_print_numbers_at_startup: false,
            alert_orphaned_print_numbers_detected: false,
            alert_duplicate_print_numbers_detected: default_alert_duplicates(),
        }
    }
}

impl Settings {
    /// Decode a settings document.
    pub fn from_json_str(content: &str) -> Result<Self> {
        crate::errors::decode_document(content, None)
    }

    /// Read and decode a settings document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        crate::errors::read_json(path.as_ref())
    }

    /// Entity codes whose isolation flag is set.
    pub fn isolated_entity_codes(&self) -> impl Iterator<Item = &str> {
        self.isolated_entities
            .iter()
            .filter(|(_, isolate)| **isolate)
            .map(|(code, _)| code.as_str())
    }

    /// Function isolation rules whose isolation flag is set.
    pub fn active_function_isolations(&self) -> impl Iterator<Item = (&str, &FunctionIsolation)> {
        self.isolated_functions
            .iter()
            .filter(|(_, rule)| rule.isolate)
            .map(|(code, rule)| (code.as_str(), rule))
    }
}
