//! ---
//! clarity_section: "03-diagnostics"
//! clarity_subsection: "module"
//! clarity_type: "source"
//! clarity_scope: "code"
//! clarity_description: "Structured diagnostics for the print-point pipeline."
//! clarity_version: "v0.0.0-prealpha"
//! clarity_owner: "tbd"
//! ---
#![warn(missing_docs)]

//! Internal diagnostics (registry statistics, alerts) go through `tracing`
//! on stderr so they never interleave with rendered print lines on stdout.

use tracing::Level;
use tracing_subscriber::{fmt as subscriber_fmt, prelude::*, EnvFilter, Registry};

pub mod macros;

#[doc(hidden)]
pub use tracing;

/// Environment variable holding the diagnostics filter directive.
pub const LOG_ENV: &str = "CLARITY_LOG";

/// Initialize a stderr tracing subscriber. Safe to call more than once.
///
/// `CLARITY_LOG` is consulted first, then `RUST_LOG`, defaulting to `info`.
pub fn init() {
    let filter = std::env::var(LOG_ENV)
        .ok()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::default().add_directive(Level::INFO.into()));

    let _ = Registry::default()
        .with(filter)
        .with(subscriber_fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Print-point context attached to diagnostics by the convenience macros.
#[derive(Debug, Default, Clone)]
pub struct LogContext<'a> {
    /// Entity code owning the print point.
    pub entity_code: Option<&'a str>,
    /// Function number within the entity.
    pub function_number: Option<u32>,
    /// Print number being resolved.
    pub print_number: Option<u32>,
}

impl<'a> LogContext<'a> {
    /// Create an empty logging context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an entity code.
    pub fn with_entity(mut self, entity_code: &'a str) -> Self {
        self.entity_code = Some(entity_code);
        self
    }

    /// Attach a function number.
    pub fn with_function(mut self, function_number: u32) -> Self {
        self.function_number = Some(function_number);
        self
    }

    /// Attach a print number.
    pub fn with_print_number(mut self, print_number: u32) -> Self {
        self.print_number = Some(print_number);
        self
    }
}

/// Outcome used when emitting lifecycle events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleOutcome {
    /// The step completed and print points may fire.
    Ready,
    /// The step failed and print points are disabled.
    Disabled,
}

impl LifecycleOutcome {
    fn as_str(&self) -> &'static str {
        match self {
            LifecycleOutcome::Ready => "ready",
            LifecycleOutcome::Disabled => "disabled",
        }
    }
}

/// Emit a lifecycle event (registry built, configuration unusable, ...).
pub fn log_lifecycle_event(
    context: Option<&LogContext>,
    event: &str,
    message: &str,
    outcome: LifecycleOutcome,
) {
    let ctx = context.cloned().unwrap_or_default();
    let entity = ctx.entity_code.unwrap_or("");
    let function = ctx.function_number.unwrap_or_default();
    let print = ctx.print_number.unwrap_or_default();
    match outcome {
        LifecycleOutcome::Disabled => tracing::warn!(
            event,
            outcome = outcome.as_str(),
            entity,
            function,
            print,
            message = %message
        ),
        LifecycleOutcome::Ready => tracing::debug!(
            event,
            outcome = outcome.as_str(),
            entity,
            function,
            print,
            message = %message
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macros_emit_without_panic() {
        init();
        let ctx = LogContext::new().with_entity("ENTCC").with_function(15);
        clarity_debug!(context = ctx.clone(), "resolving print point");
        clarity_info!("registry ready");
        clarity_warn!(context = ctx.with_print_number(999), "orphaned print number {}", 999);
    }

    #[test]
    fn init_is_idempotent() {
        init();
        init();
    }

    #[test]
    fn lifecycle_helper_emits() {
        init();
        let ctx = LogContext::new().with_entity("ENTCC");
        log_lifecycle_event(
            Some(&ctx),
            "registry.build",
            "registry built",
            LifecycleOutcome::Ready,
        );
        log_lifecycle_event(
            None,
            "config.load",
            "formatting missing",
            LifecycleOutcome::Disabled,
        );
    }
}
