//! Raw attribute to canonical event conversion pipeline.
//!
//! [`normalize_event`] consumes an optional [`EventAttributes`] record plus a
//! [`Defaults`] table and produces an [`IcsEvent`] with every recognized
//! field filled in. Explicit fields are computed first; the defaults table
//! only contributes the fields the input can never set (the `DTSTAMP` value
//! and the event tag) and the fallbacks for absent required fields. A field
//! the input left out on purpose stays `None` and is never resurrected by a
//! default.

use tracing::{debug, warn};

use crate::attributes::EventAttributes;
use crate::defaults::Defaults;
use crate::encode::{encode_categories, encode_contact, encode_geolocation, or_default};
use crate::error::BuildResult;
use crate::event::{EventStatus, IcsEvent};
use crate::time::encode_timestamp;

/// Converts raw attributes into a canonical event.
///
/// A `None` input produces the all-defaults event. An unparseable `start` or
/// `end` fails with [`BuildError::InvalidDate`]; malformed optional fields
/// (an unknown status keyword, for instance) are dropped silently.
///
/// [`BuildError::InvalidDate`]: crate::error::BuildError::InvalidDate
pub fn normalize_event(
    raw: Option<&EventAttributes>,
    defaults: &Defaults,
) -> BuildResult<IcsEvent> {
    let empty = EventAttributes::default();
    let raw = raw.unwrap_or(&empty);

    let start = match &raw.start {
        Some(value) => encode_timestamp(value, raw.start_type)?,
        None => defaults.start.clone(),
    };

    // The end reuses the start's type hint; there is no separate end type
    let end = match &raw.end {
        Some(value) => Some(encode_timestamp(value, raw.start_type)?),
        None => None,
    };

    let event = IcsEvent {
        title: or_default(raw.title.clone(), &defaults.title),
        product_id: or_default(raw.product_id.clone(), &defaults.product_id),
        uid: or_default(raw.uid.clone(), &defaults.uid),
        timestamp: defaults.timestamp.clone(),
        start,
        end,
        description: raw.description.clone(),
        url: raw.url.clone(),
        geolocation: raw.geolocation.as_ref().map(encode_geolocation),
        location: raw.location.clone(),
        status: validate_status(raw.status.as_deref()),
        categories: raw.categories.as_deref().and_then(encode_categories),
        organizer: raw.organizer.as_ref().map(encode_contact),
        attendees: raw
            .attendees
            .as_ref()
            .map(|list| list.iter().map(encode_contact).collect()),
        is_calendar_event: true,
    };

    debug!(uid = %event.uid, title = %event.title, "normalized event");

    Ok(event)
}

/// Validates a status keyword, dropping anything outside the fixed set.
fn validate_status(status: Option<&str>) -> Option<EventStatus> {
    let value = status?;
    let parsed = EventStatus::parse(value);
    if parsed.is_none() {
        warn!(status = %value, "dropping unrecognized event status");
    }
    parsed
}
