//! ---
//! clarity_section: "04-operator-cli"
//! clarity_subsection: "binary"
//! clarity_type: "source"
//! clarity_scope: "code"
//! clarity_description: "Entity code and print number listings."
//! clarity_version: "v0.0.0-prealpha"
//! clarity_owner: "tbd"
//! ---
use anyhow::Result;
use clap::Args;
use clarity_core::{entity_code_report, print_number_report, MessageRegistry};

use crate::ConfigDirArgs;

#[derive(Debug, Args)]
pub struct ListCommand {
    #[command(flatten)]
    config: ConfigDirArgs,

    /// Also list every registered print number.
    #[arg(long = "print-numbers", action = clap::ArgAction::SetTrue)]
    print_numbers: bool,
}

pub fn run(command: ListCommand) -> Result<()> {
    let snapshot = command.config.load();
    let registry = MessageRegistry::build(&snapshot.entity_logs);

    let mut lines = entity_code_report(&registry);
    if command.print_numbers {
        lines.extend(print_number_report(&registry));
    }
    for line in lines {
        println!("{line}");
    }
    Ok(())
}
