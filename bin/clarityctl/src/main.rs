//! ---
//! clarity_section: "04-operator-cli"
//! clarity_subsection: "binary"
//! clarity_type: "source"
//! clarity_scope: "code"
//! clarity_description: "Operator CLI for Clarity configuration directories."
//! clarity_version: "v0.0.0-prealpha"
//! clarity_owner: "tbd"
//! ---
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clarity_config::ConfigSnapshot;
use clarity_logging as logging;

mod emit;
mod inspect;
mod list;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Clarity print-point configuration utility",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Report configuration issues, duplicate print numbers, and counts.
    Inspect(inspect::InspectCommand),
    /// List entity codes and, optionally, every print number.
    List(list::ListCommand),
    /// Render one print point to stdout.
    Emit(emit::EmitCommand),
}

/// Searched in order when neither `--dir` nor `CLARITY_CONFIG_DIR` is given.
const DEFAULT_CONFIG_DIRS: [&str; 2] = ["clarity", "templates"];

/// Location of the configuration directory, shared by every subcommand.
#[derive(Debug, Args)]
pub struct ConfigDirArgs {
    /// Directory holding settings.json, formatting.json, and entities/.
    /// Falls back to CLARITY_CONFIG_DIR, then ./clarity, then ./templates.
    #[arg(long = "dir", value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

impl ConfigDirArgs {
    pub fn load(&self) -> ConfigSnapshot {
        match &self.dir {
            Some(dir) => ConfigSnapshot::load_dir(dir),
            None => ConfigSnapshot::locate(&DEFAULT_CONFIG_DIRS),
        }
    }
}

/// Display form of the directory a snapshot was read from.
pub fn source_label(snapshot: &ConfigSnapshot) -> String {
    match &snapshot.source {
        Some(path) => path.display().to_string(),
        None => "<none found>".to_owned(),
    }
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Inspect(cmd) => inspect::run(cmd)?,
        Commands::List(cmd) => list::run(cmd)?,
        Commands::Emit(cmd) => emit::run(cmd)?,
    }
    Ok(())
}
