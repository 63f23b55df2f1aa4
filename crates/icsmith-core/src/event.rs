//! The canonical event representation.
//!
//! [`IcsEvent`] is the fully-normalized record produced from raw attributes:
//! every recognized field is present, either with an encoded value or as an
//! explicit `None` that the serializer omits.

use serde::{Deserialize, Serialize};

/// The status of a calendar event.
///
/// Only the fixed keyword set is representable; anything else is dropped
/// during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    Confirmed,
    Cancelled,
    Tentative,
}

impl EventStatus {
    /// Parses an exact status keyword.
    ///
    /// Matching is case-sensitive: `confirmed` is not a valid status.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "CONFIRMED" => Some(Self::Confirmed),
            "CANCELLED" => Some(Self::Cancelled),
            "TENTATIVE" => Some(Self::Tentative),
            _ => None,
        }
    }

    /// Returns the keyword written after `STATUS:`.
    pub fn as_ics_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "CONFIRMED",
            Self::Cancelled => "CANCELLED",
            Self::Tentative => "TENTATIVE",
        }
    }
}

/// A normalized calendar event, ready for serialization.
///
/// Required fields are always filled (from the input or the defaults table);
/// optional fields hold already-encoded values or `None`. The
/// `is_calendar_event` tag marks a value as produced by normalization; the
/// serializer declines anything untagged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IcsEvent {
    /// The `SUMMARY` value.
    pub title: String,

    /// The `PRODID` value.
    pub product_id: String,

    /// The `UID` value.
    pub uid: String,

    /// The `DTSTAMP` value, encoded at defaults-table construction.
    pub timestamp: String,

    /// The encoded `DTSTART` value.
    pub start: String,

    /// The encoded `DTEND` value.
    pub end: Option<String>,

    /// The `DESCRIPTION` value.
    pub description: Option<String>,

    /// The `URL` value.
    pub url: Option<String>,

    /// The encoded `GEO` value (`lat;lon`).
    pub geolocation: Option<String>,

    /// The `LOCATION` value.
    pub location: Option<String>,

    /// The event status.
    pub status: Option<EventStatus>,

    /// Comma-joined category names.
    pub categories: Option<String>,

    /// The encoded organizer contact.
    pub organizer: Option<String>,

    /// Encoded attendee contacts, in input order.
    pub attendees: Option<Vec<String>>,

    /// Marks this value as produced by normalization.
    pub is_calendar_event: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    mod status {
        use super::*;

        #[test]
        fn parses_exact_keywords() {
            assert_eq!(EventStatus::parse("CONFIRMED"), Some(EventStatus::Confirmed));
            assert_eq!(EventStatus::parse("CANCELLED"), Some(EventStatus::Cancelled));
            assert_eq!(EventStatus::parse("TENTATIVE"), Some(EventStatus::Tentative));
        }

        #[test]
        fn rejects_other_spellings() {
            assert_eq!(EventStatus::parse("confirmed"), None);
            assert_eq!(EventStatus::parse("Confirmed"), None);
            assert_eq!(EventStatus::parse("BOGUS"), None);
            assert_eq!(EventStatus::parse(""), None);
        }

        #[test]
        fn keyword_roundtrip() {
            for status in [
                EventStatus::Confirmed,
                EventStatus::Cancelled,
                EventStatus::Tentative,
            ] {
                assert_eq!(EventStatus::parse(status.as_ics_str()), Some(status));
            }
        }

        #[test]
        fn serde_uses_keywords() {
            assert_eq!(
                serde_json::to_string(&EventStatus::Tentative).unwrap(),
                "\"TENTATIVE\""
            );
        }
    }

    #[test]
    fn default_event_is_untagged() {
        let event = IcsEvent::default();
        assert!(!event.is_calendar_event);
        assert_eq!(event.end, None);
    }
}
