//! ---
//! clarity_section: "04-operator-cli"
//! clarity_subsection: "binary"
//! clarity_type: "source"
//! clarity_scope: "code"
//! clarity_description: "Renders a single print point from the command line."
//! clarity_version: "v0.0.0-prealpha"
//! clarity_owner: "tbd"
//! ---
use anyhow::{Context, Result};
use clap::Args;
use clarity_core::{Clarity, ClaritySources, PrintCall, Value};

use crate::ConfigDirArgs;

#[derive(Debug, Args)]
pub struct EmitCommand {
    #[command(flatten)]
    config: ConfigDirArgs,

    /// Print number to resolve.
    #[arg(value_name = "PRINT_NUMBER")]
    print_number: u32,

    /// Render as a function-name line with this name.
    #[arg(long = "function-name", value_name = "NAME")]
    function_name: Option<String>,

    /// Report a value; repeat for a sequence.
    #[arg(long = "value", value_name = "VALUE", num_args = 1, conflicts_with = "error")]
    values: Vec<String>,

    /// Parse each --value as JSON instead of plain text.
    #[arg(long = "json", action = clap::ArgAction::SetTrue, requires = "values")]
    json: bool,

    /// Report an error with this description.
    #[arg(long = "error", value_name = "MESSAGE")]
    error: Option<String>,
}

impl EmitCommand {
    fn value(&self) -> Result<Option<Value>> {
        if let Some(message) = &self.error {
            return Ok(Some(Value::failure(message.clone())));
        }
        let mut values = self
            .values
            .iter()
            .map(|raw| self.parse(raw))
            .collect::<Result<Vec<_>>>()?;
        Ok(match values.len() {
            0 => None,
            1 => values.pop(),
            _ => Some(Value::Sequence(values)),
        })
    }

    fn parse(&self, raw: &str) -> Result<Value> {
        if self.json {
            let json: serde_json::Value = serde_json::from_str(raw)
                .with_context(|| format!("--value {raw:?} is not valid JSON"))?;
            Ok(Value::from(json))
        } else {
            Ok(Value::from(raw))
        }
    }
}

/// Lines go to stdout; alerts go to the diagnostics stream on stderr.
pub fn run(command: EmitCommand) -> Result<()> {
    let value = command.value()?;
    let clarity = Clarity::stdout(ClaritySources::from(command.config.load()));

    let mut call = PrintCall::new(command.print_number);
    if let Some(name) = command.function_name.as_deref() {
        call = call.with_function_name(name);
    }
    if let Some(value) = value.as_ref() {
        call = call.with_value(value);
    }
    clarity.emit(&call);
    Ok(())
}
