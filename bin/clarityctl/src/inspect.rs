//! ---
//! clarity_section: "04-operator-cli"
//! clarity_subsection: "binary"
//! clarity_type: "source"
//! clarity_scope: "code"
//! clarity_description: "Configuration health report."
//! clarity_version: "v0.0.0-prealpha"
//! clarity_owner: "tbd"
//! ---
use anyhow::{bail, Result};
use clap::Args;
use clarity_core::{registry_alerts, MessageRegistry};
use clarity_logging::{log_lifecycle_event, LifecycleOutcome};

use crate::{source_label, ConfigDirArgs};

#[derive(Debug, Args)]
pub struct InspectCommand {
    #[command(flatten)]
    config: ConfigDirArgs,
}

/// Print a health report. Fails when the directory cannot drive emission.
pub fn run(command: InspectCommand) -> Result<()> {
    let snapshot = command.config.load();
    let registry = MessageRegistry::build(&snapshot.entity_logs);

    println!("Configuration: {}", source_label(&snapshot));
    println!("Settings: {}", presence(snapshot.settings.is_some()));
    println!("Formatting: {}", presence(snapshot.formatting.is_some()));
    println!("Entity logs: {}", snapshot.entity_logs.len());
    println!("Print numbers: {}", registry.len());

    for issue in &snapshot.issues {
        println!("issue: {issue}");
    }
    for alert in registry_alerts(&registry) {
        println!("duplicate: {alert}");
    }

    if !snapshot.is_usable() {
        log_lifecycle_event(
            None,
            "clarityctl.inspect",
            "configuration cannot drive emission",
            LifecycleOutcome::Disabled,
        );
        bail!(
            "configuration in {} is unusable: settings or formatting missing",
            source_label(&snapshot)
        );
    }
    Ok(())
}

fn presence(loaded: bool) -> &'static str {
    if loaded {
        "loaded"
    } else {
        "missing"
    }
}
