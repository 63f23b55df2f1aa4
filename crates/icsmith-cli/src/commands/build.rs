//! Build command: JSON attribute document to .ics file.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use icsmith_core::{EventAttributes, create_event_with};

use crate::cli::OutputOptions;
use crate::config::CliConfig;
use crate::error::CliResult;

/// Reads an attribute document, builds the event, and writes the result.
pub fn run(input: Option<&Path>, output: &OutputOptions, config: &CliConfig) -> CliResult<()> {
    let attrs = read_attributes(input)?;
    debug!(?input, "loaded attribute document");

    let defaults = config.build_defaults();
    let document = create_event_with(Some(&attrs), &defaults)?;

    super::write_document(&document, output, config, &defaults)
}

/// Reads the JSON attribute document from a file, or stdin for `-`/nothing.
fn read_attributes(input: Option<&Path>) -> CliResult<EventAttributes> {
    let content = match input {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)?,
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    Ok(serde_json::from_str(&content)?)
}
