//! New command: build an event from command-line flags.

use tracing::debug;

use icsmith_core::{EventAttributes, create_event_with};

use crate::cli::{EventOptions, OutputOptions, StartType};
use crate::config::CliConfig;
use crate::error::CliResult;

/// Assembles attributes from the given flags and writes the result.
pub fn run(event: &EventOptions, output: &OutputOptions, config: &CliConfig) -> CliResult<()> {
    let attrs = to_attributes(event);
    debug!(title = ?attrs.title, start = ?attrs.start, "assembled attributes from flags");

    let defaults = config.build_defaults();
    let document = create_event_with(Some(&attrs), &defaults)?;

    super::write_document(&document, output, config, &defaults)
}

/// Maps command-line flags onto the attribute record.
fn to_attributes(event: &EventOptions) -> EventAttributes {
    EventAttributes {
        title: event.title.clone(),
        product_id: event.product_id.clone(),
        uid: event.uid.clone(),
        start: event.start.clone(),
        start_type: event.start_type.map(StartType::to_time_kind),
        end: event.end.clone(),
        description: event.description.clone(),
        url: event.url.clone(),
        location: event.location.clone(),
        status: event.status.clone(),
        categories: if event.categories.is_empty() {
            None
        } else {
            Some(event.categories.clone())
        },
        ..Default::default()
    }
}
