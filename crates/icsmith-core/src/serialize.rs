//! iCalendar text generation.
//!
//! [`serialize_event`] turns an [`IcsEvent`] into the final CRLF-terminated
//! document. Properties appear in a fixed order; optional properties whose
//! value is `None` are omitted entirely rather than emitted empty.

use crate::event::IcsEvent;

const CRLF: &str = "\r\n";

/// Serializes a normalized event into iCalendar text.
///
/// Returns `None` when the value is not tagged as a calendar event (nothing
/// to serialize); a normalized event always is.
pub fn serialize_event(event: &IcsEvent) -> Option<String> {
    if !event.is_calendar_event {
        return None;
    }

    let mut lines: Vec<String> = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        "CALSCALE:GREGORIAN".to_string(),
        format!("PRODID:{}", event.product_id),
        "BEGIN:VEVENT".to_string(),
        format!("UID:{}", event.uid),
        format!("SUMMARY:{}", event.title),
        format!("DTSTAMP:{}", event.timestamp),
        format!("DTSTART:{}", event.start),
    ];

    let optional: [(&str, Option<&str>); 7] = [
        ("DTEND", event.end.as_deref()),
        ("DESCRIPTION", event.description.as_deref()),
        ("URL", event.url.as_deref()),
        ("GEO", event.geolocation.as_deref()),
        ("LOCATION", event.location.as_deref()),
        ("STATUS", event.status.map(|s| s.as_ics_str())),
        ("CATEGORIES", event.categories.as_deref()),
    ];
    for (name, value) in optional {
        if let Some(value) = value {
            lines.push(format!("{}:{}", name, value));
        }
    }

    // Contact properties carry inline parameters, so a semicolon follows the
    // property name instead of a colon
    if let Some(ref organizer) = event.organizer {
        lines.push(format!("ORGANIZER;{}", organizer));
    }
    if let Some(ref attendees) = event.attendees {
        for attendee in attendees {
            lines.push(format!("ATTENDEE;{}", attendee));
        }
    }

    lines.push("END:VEVENT".to_string());
    lines.push("END:VCALENDAR".to_string());

    let mut output = lines.join(CRLF);
    output.push_str(CRLF);
    Some(output)
}
