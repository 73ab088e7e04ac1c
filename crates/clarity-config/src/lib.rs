//! ---
//! clarity_section: "01-configuration"
//! clarity_subsection: "module"
//! clarity_type: "source"
//! clarity_scope: "code"
//! clarity_description: "Configuration models shared by the Clarity workspace."
//! clarity_version: "v0.0.0-prealpha"
//! clarity_owner: "tbd"
//! ---
//! Typed shapes for the three kinds of Clarity documents: user settings,
//! formatting tables, and per-entity message definitions, plus a loader for
//! a directory holding all of them.

pub mod entity;
pub mod errors;
pub mod formatting;
pub mod settings;
pub mod source;

pub use entity::{
    ControlFlow, EntityLog, FunctionEntry, FunctionType, NodeDefinition, NodeKind, Outcome,
};
pub use errors::{ConfigError, Result};
pub use formatting::{
    ControlFlowSymbols, Formatting, FunctionTypeSymbols, Labels, OutcomeSymbols, Spacers,
};
pub use settings::{FunctionIsolation, Settings};
pub use source::{ConfigFile, ConfigIssue, ConfigSnapshot};
