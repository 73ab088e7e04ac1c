//! ---
//! clarity_section: "02-print-pipeline"
//! clarity_subsection: "module"
//! clarity_type: "source"
//! clarity_scope: "code"
//! clarity_description: "Host-facing print entry point tying registry, gate, and compositor together."
//! clarity_version: "v0.0.0-prealpha"
//! clarity_owner: "tbd"
//! ---
//! A [`Clarity`] owns the decoded configuration and builds its registry on
//! the first print call. Building the registry is also when duplicate
//! declarations are alerted and the startup listings are written, so both
//! happen exactly once per instance.

use clarity_config::{ConfigIssue, ConfigSnapshot, EntityLog, Formatting, Settings};
use clarity_logging::{clarity_debug, log_lifecycle_event, LifecycleOutcome, LogContext};
use once_cell::sync::OnceCell;

use crate::alert::{registry_alerts, Alert, AlertSink, TracingAlertSink};
use crate::classify::classify;
use crate::compose::compose;
use crate::gate::should_emit;
use crate::inventory::{entity_code_report, print_number_report};
use crate::registry::MessageRegistry;
use crate::sink::{LineSink, StdoutSink};
use crate::value::Value;

/// Decoded configuration handed to [`Clarity::new`].
#[derive(Debug, Clone, Default)]
pub struct ClaritySources {
    pub settings: Option<Settings>,
    pub formatting: Option<Formatting>,
    pub entity_logs: Vec<EntityLog>,
    /// Problems met while loading; alerted when the registry is built.
    pub issues: Vec<ConfigIssue>,
}

impl ClaritySources {
    pub fn new(settings: Settings, formatting: Formatting, entity_logs: Vec<EntityLog>) -> Self {
        Self {
            settings: Some(settings),
            formatting: Some(formatting),
            entity_logs,
            issues: Vec::new(),
        }
    }

    pub fn is_usable(&self) -> bool {
        self.settings.is_some() && self.formatting.is_some()
    }
}

impl From<ConfigSnapshot> for ClaritySources {
    fn from(snapshot: ConfigSnapshot) -> Self {
        Self {
            settings: snapshot.settings,
            formatting: snapshot.formatting,
            entity_logs: snapshot.entity_logs,
            issues: snapshot.issues,
        }
    }
}

/// Arguments of one print call.
#[derive(Debug, Clone, Copy)]
pub struct PrintCall<'a> {
    pub print_number: u32,
    pub function_name: Option<&'a str>,
    pub value: Option<&'a Value>,
    /// Replaces the configured settings for this call only.
    pub settings: Option<&'a Settings>,
}

impl<'a> PrintCall<'a> {
    pub fn new(print_number: u32) -> Self {
        Self {
            print_number,
            function_name: None,
            value: None,
            settings: None,
        }
    }

    pub fn with_function_name(mut self, function_name: &'a str) -> Self {
        self.function_name = Some(function_name);
        self
    }

    pub fn with_value(mut self, value: &'a Value) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_settings(mut self, settings: &'a Settings) -> Self {
        self.settings = Some(settings);
        self
    }
}

/// The print-point formatter.
pub struct Clarity {
    sources: ClaritySources,
    registry: OnceCell<MessageRegistry>,
    lines: Box<dyn LineSink>,
    alerts: Box<dyn AlertSink>,
}

impl std::fmt::Debug for Clarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Clarity")
            .field("sources", &self.sources)
            .field("registry_built", &self.registry.get().is_some())
            .finish_non_exhaustive()
    }
}

impl Clarity {
    pub fn new(
        sources: impl Into<ClaritySources>,
        lines: impl LineSink + 'static,
        alerts: impl AlertSink + 'static,
    ) -> Self {
        Self {
            sources: sources.into(),
            registry: OnceCell::new(),
            lines: Box::new(lines),
            alerts: Box::new(alerts),
        }
    }

    /// Lines to stdout, alerts to `tracing`.
    pub fn stdout(sources: impl Into<ClaritySources>) -> Self {
        Self::new(sources, StdoutSink, TracingAlertSink)
    }

    pub fn sources(&self) -> &ClaritySources {
        &self.sources
    }

    /// The registry, built on first access.
    pub fn registry(&self) -> &MessageRegistry {
        self.registry.get_or_init(|| self.initialise())
    }

    fn initialise(&self) -> MessageRegistry {
        let registry = MessageRegistry::build(&self.sources.entity_logs);

        for issue in &self.sources.issues {
            self.alerts.alert(&Alert::Configuration(issue.clone()));
        }

        match &self.sources.settings {
            Some(settings) if self.sources.is_usable() => {
                if settings.alert_duplicate_print_numbers_detected {
                    for alert in registry_alerts(&registry) {
                        self.alerts.alert(&alert);
                    }
                }
                if settings.list_entity_codes_at_startup {
                    self.write_all(&entity_code_report(&registry));
                }
                if settings.list_print_numbers_at_startup {
                    self.write_all(&print_number_report(&registry));
                }
                log_lifecycle_event(
                    None,
                    "clarity.registry",
                    &format!("{} print numbers registered", registry.len()),
                    LifecycleOutcome::Ready,
                );
            }
            _ => log_lifecycle_event(
                None,
                "clarity.registry",
                "settings or formatting unavailable; print points disabled",
                LifecycleOutcome::Disabled,
            ),
        }
        registry
    }

    fn write_all(&self, lines: &[String]) {
        for line in lines {
            self.lines.write_line(line);
        }
    }

    /// Resolve, filter, and render one print call without writing it.
    ///
    /// Returns no lines when configuration is unusable, the print number is
    /// unknown, or the gate suppresses the call.
    pub fn render(&self, call: &PrintCall<'_>) -> Vec<String> {
        let registry = self.registry();
        let (Some(configured), Some(formatting)) =
            (self.sources.settings.as_ref(), self.sources.formatting.as_ref())
        else {
            return Vec::new();
        };
        let settings = call.settings.unwrap_or(configured);

        let Some(message) = registry.get(call.print_number) else {
            if settings.alert_orphaned_print_numbers_detected {
                self.alerts.alert(&Alert::OrphanedPrintNumber {
                    print_number: call.print_number,
                });
            }
            return Vec::new();
        };

        if !should_emit(
            message.print_number,
            &message.entity_code,
            message.function_number,
            message.node_kind,
            settings,
        ) {
            clarity_debug!(
                context = LogContext::new()
                    .with_entity(&message.entity_code)
                    .with_function(message.function_number)
                    .with_print_number(message.print_number),
                "print point suppressed"
            );
            return Vec::new();
        }

        let node_type = classify(message, call.function_name, call.value);
        let composed = compose(
            message,
            node_type,
            settings,
            formatting,
            registry.column_widths(),
            call.function_name,
        );
        let mut lines = composed.lines();
        if node_type.reports_value() {
            if let Some(value) = call.value {
                lines.extend(value.render(&composed.readout_spacer));
            }
        }
        lines
    }

    /// Render one print call and write its lines to the line sink.
    pub fn emit(&self, call: &PrintCall<'_>) -> Vec<String> {
        let lines = self.render(call);
        self.write_all(&lines);
        lines
    }

    pub fn print(&self, print_number: u32) -> Vec<String> {
        self.emit(&PrintCall::new(print_number))
    }

    pub fn print_function(&self, print_number: u32, function_name: &str) -> Vec<String> {
        self.emit(&PrintCall::new(print_number).with_function_name(function_name))
    }

    pub fn print_value(&self, print_number: u32, value: impl Into<Value>) -> Vec<String> {
        let value = value.into();
        self.emit(&PrintCall::new(print_number).with_value(&value))
    }

    pub fn print_error(
        &self,
        print_number: u32,
        error: &(dyn std::error::Error + 'static),
    ) -> Vec<String> {
        let value = Value::from_error(error);
        self.emit(&PrintCall::new(print_number).with_value(&value))
    }
}
