//! Event normalization and iCalendar serialization.
//!
//! This crate builds iCalendar (`.ics`) documents from loosely-typed event
//! descriptions in two stages:
//!
//! 1. **Normalization** ([`normalize_event`]): raw [`EventAttributes`] plus a
//!    [`Defaults`] table become a canonical [`IcsEvent`] with every field
//!    resolved.
//! 2. **Serialization** ([`serialize_event`]): the canonical event becomes
//!    CRLF-terminated iCalendar text with a fixed property order.
//!
//! [`create_event`] composes the two.
//!
//! # Example
//!
//! ```
//! use icsmith_core::{EventAttributes, create_event};
//!
//! let attrs = EventAttributes::default()
//!     .with_title("Standup")
//!     .with_start("2024-01-02T09:00:00");
//!
//! let document = create_event(Some(&attrs)).unwrap();
//! assert!(document.starts_with("BEGIN:VCALENDAR\r\n"));
//! assert!(document.contains("SUMMARY:Standup\r\n"));
//! assert!(document.contains("DTSTART:20240102T090000\r\n"));
//! ```

pub mod attributes;
pub mod defaults;
pub mod encode;
pub mod error;
pub mod event;
pub mod normalize;
pub mod serialize;
pub mod time;

pub use attributes::{Contact, EventAttributes, GeoPoint};
pub use defaults::{Defaults, defaults};
pub use encode::{encode_categories, encode_contact, encode_geolocation, or_default};
pub use error::{BuildError, BuildResult};
pub use event::{EventStatus, IcsEvent};
pub use normalize::normalize_event;
pub use serialize::serialize_event;
pub use time::{DateValue, TimeKind, encode_timestamp};

/// Builds an iCalendar document from the given attributes, using the
/// process-wide defaults table.
pub fn create_event(raw: Option<&EventAttributes>) -> BuildResult<String> {
    create_event_with(raw, defaults())
}

/// Builds an iCalendar document with an explicit defaults table.
pub fn create_event_with(
    raw: Option<&EventAttributes>,
    defaults: &Defaults,
) -> BuildResult<String> {
    let event = normalize_event(raw, defaults)?;
    // Normalization always tags the event, so the serializer cannot decline it
    Ok(serialize_event(&event).unwrap_or_default())
}
