//! ---
//! clarity_section: "02-print-pipeline"
//! clarity_subsection: "module"
//! clarity_type: "source"
//! clarity_scope: "code"
//! clarity_description: "Print-number registry, emission gate, and aligned line compositor."
//! clarity_version: "v0.0.0-prealpha"
//! clarity_owner: "tbd"
//! ---
//! Code carries only a print number; everything a reader sees (entity,
//! function, control-flow and outcome symbols, descriptions) comes from the
//! authored entity logs and is rendered into column-aligned lines.

pub mod alert;
pub mod classify;
pub mod compose;
pub mod gate;
pub mod inventory;
pub mod printer;
pub mod registry;
pub mod sink;
pub mod value;
pub mod width;

pub use alert::{registry_alerts, Alert, AlertSink, RecordingAlertSink, TracingAlertSink};
pub use classify::{classify, NodeType};
pub use compose::{compose, compose_slots, populated_slots, ComposedLines, Composite, Slot};
pub use gate::should_emit;
pub use inventory::{entity_code_report, print_number_report};
pub use printer::{Clarity, ClaritySources, PrintCall};
pub use registry::{ColumnWidths, EntitySummary, Message, MessageRegistry};
pub use sink::{LineSink, MemorySink, StdoutSink};
pub use value::Value;
