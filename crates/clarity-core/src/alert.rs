//! ---
//! clarity_section: "02-print-pipeline"
//! clarity_subsection: "module"
//! clarity_type: "source"
//! clarity_scope: "code"
//! clarity_description: "Non-fatal anomalies reported to the host."
//! clarity_version: "v0.0.0-prealpha"
//! clarity_owner: "tbd"
//! ---
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use clarity_config::ConfigIssue;
use clarity_logging::{clarity_warn, LogContext};
use parking_lot::Mutex;

use crate::registry::MessageRegistry;

/// Something worth telling the developer about. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    OrphanedPrintNumber {
        print_number: u32,
    },
    DuplicateWithinEntity {
        entity_code: String,
        print_numbers: BTreeSet<u32>,
    },
    DuplicateAcrossEntities {
        print_number: u32,
        entity_codes: BTreeSet<String>,
    },
    DuplicateEntityCode {
        entity_code: String,
    },
    Configuration(ConfigIssue),
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alert::OrphanedPrintNumber { print_number } => {
                write!(f, "print number {print_number} is not declared by any entity log")
            }
            Alert::DuplicateWithinEntity {
                entity_code,
                print_numbers,
            } => write!(
                f,
                "entity {entity_code} declares print numbers {} more than once",
                join(print_numbers)
            ),
            Alert::DuplicateAcrossEntities {
                print_number,
                entity_codes,
            } => write!(
                f,
                "print number {print_number} is declared by entities {}",
                join(entity_codes)
            ),
            Alert::DuplicateEntityCode { entity_code } => {
                write!(f, "entity code {entity_code} is used by more than one entity log")
            }
            Alert::Configuration(issue) => write!(f, "{issue}"),
        }
    }
}

fn join<T: fmt::Display>(items: &BTreeSet<T>) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Every duplicate the registry detected, as alerts.
pub fn registry_alerts(registry: &MessageRegistry) -> Vec<Alert> {
    let mut alerts = Vec::new();
    for entity_code in registry.duplicate_entity_codes() {
        alerts.push(Alert::DuplicateEntityCode {
            entity_code: entity_code.clone(),
        });
    }
    for (entity_code, print_numbers) in registry.within_entity_duplicates() {
        alerts.push(Alert::DuplicateWithinEntity {
            entity_code: entity_code.clone(),
            print_numbers: print_numbers.clone(),
        });
    }
    for (print_number, entity_codes) in registry.cross_entity_duplicates() {
        alerts.push(Alert::DuplicateAcrossEntities {
            print_number: *print_number,
            entity_codes: entity_codes.clone(),
        });
    }
    alerts
}

/// Receives alerts raised while building the registry or resolving calls.
pub trait AlertSink: Send + Sync {
    fn alert(&self, alert: &Alert);
}

/// Forwards alerts to `tracing` at warn level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAlertSink;

impl AlertSink for TracingAlertSink {
    fn alert(&self, alert: &Alert) {
        let ctx = match alert {
            Alert::OrphanedPrintNumber { print_number }
            | Alert::DuplicateAcrossEntities { print_number, .. } => {
                LogContext::new().with_print_number(*print_number)
            }
            Alert::DuplicateWithinEntity { entity_code, .. }
            | Alert::DuplicateEntityCode { entity_code } => {
                LogContext::new().with_entity(entity_code)
            }
            Alert::Configuration(_) => LogContext::new(),
        };
        clarity_warn!(context = ctx, "{alert}");
    }
}

/// Keeps every alert in memory; clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct RecordingAlertSink {
    alerts: Arc<Mutex<Vec<Alert>>>,
}

impl RecordingAlertSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts.lock().clone()
    }

    pub fn clear(&self) {
        self.alerts.lock().clear();
    }
}

impl AlertSink for RecordingAlertSink {
    fn alert(&self, alert: &Alert) {
        self.alerts.lock().push(alert.clone());
    }
}

#[cfg(test)]
mod tests {
    use clarity_config::{EntityLog, FunctionEntry, FunctionType, NodeDefinition};

    use super::*;

    fn log(code: &str, prints: &[u32]) -> EntityLog {
        let mut function = FunctionEntry::new(1, FunctionType::Action);
        for print_number in prints {
            function = function.with_node(NodeDefinition::event(*print_number, "x"));
        }
        EntityLog::new(code).with_function(function)
    }

    #[test]
    fn duplicates_become_alerts() {
        let registry = MessageRegistry::build(&[log("AAA", &[1, 1, 2]), log("BBB", &[2])]);
        let alerts = registry_alerts(&registry);
        assert_eq!(
            alerts,
            vec![
                Alert::DuplicateWithinEntity {
                    entity_code: "AAA".to_owned(),
                    print_numbers: BTreeSet::from([1]),
                },
                Alert::DuplicateAcrossEntities {
                    print_number: 2,
                    entity_codes: BTreeSet::from(["AAA".to_owned(), "BBB".to_owned()]),
                },
            ]
        );
        assert_eq!(
            alerts[1].to_string(),
            "print number 2 is declared by entities AAA, BBB"
        );
    }

    #[test]
    fn recording_sink_shares_buffer() {
        let sink = RecordingAlertSink::new();
        let handle = sink.clone();
        sink.alert(&Alert::OrphanedPrintNumber { print_number: 999 });
        assert_eq!(
            handle.alerts(),
            vec![Alert::OrphanedPrintNumber { print_number: 999 }]
        );
        handle.clear();
        assert!(sink.alerts().is_empty());
    }

    #[test]
    fn tracing_sink_does_not_panic() {
        clarity_logging::init();
        TracingAlertSink.alert(&Alert::DuplicateEntityCode {
            entity_code: "AAA".to_owned(),
        });
    }
}
