//! Raw event attributes as supplied by callers.
//!
//! This module defines [`EventAttributes`], the loosely-typed input record
//! for event building. Every field is optional; missing fields are filled
//! from the defaults table or left out of the output entirely during
//! normalization.
//!
//! The JSON shape uses camelCase keys (`productId`, `startType`). Two fields
//! are deserialized leniently: a `status` or `categories` value of the wrong
//! JSON type is coerced to absent instead of failing the whole document.

use serde::{Deserialize, Deserializer, Serialize};

use crate::time::TimeKind;

/// A contact reference for the organizer or an attendee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    /// Display name, shown as the `CN` parameter.
    pub name: Option<String>,
    /// Email address, rendered as a `mailto:` value.
    pub email: Option<String>,
}

impl Contact {
    /// Creates a contact with both a name and an email address.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }
}

/// A geographic position for the `GEO` property.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    /// Longitude; the JSON key may be `long` or `lon`.
    #[serde(alias = "long")]
    pub lon: f64,
}

impl GeoPoint {
    /// Creates a new geographic position.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// The input record for building an event.
///
/// Any field may be absent. `start` and `end` are raw date strings that get
/// encoded during normalization; `startType` applies to both of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EventAttributes {
    /// The event title, used for `SUMMARY`.
    pub title: Option<String>,

    /// The `PRODID` value identifying the generating product.
    pub product_id: Option<String>,

    /// The event `UID`.
    pub uid: Option<String>,

    /// When the event starts, as a raw date string.
    pub start: Option<String>,

    /// How to encode `start` and `end` (bare date or datetime).
    pub start_type: Option<TimeKind>,

    /// When the event ends, as a raw date string.
    pub end: Option<String>,

    /// The event description.
    pub description: Option<String>,

    /// A URL associated with the event.
    pub url: Option<String>,

    /// The geographic position of the event.
    pub geolocation: Option<GeoPoint>,

    /// The event location as free text.
    pub location: Option<String>,

    /// The event status keyword (`CONFIRMED`, `CANCELLED`, `TENTATIVE`).
    #[serde(deserialize_with = "lenient_string")]
    pub status: Option<String>,

    /// Category names, joined into a single `CATEGORIES` value.
    #[serde(deserialize_with = "lenient_string_seq")]
    pub categories: Option<Vec<String>>,

    /// The event organizer.
    pub organizer: Option<Contact>,

    /// The event attendees, serialized in input order.
    pub attendees: Option<Vec<Contact>>,
}

impl EventAttributes {
    /// Builder method to set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Builder method to set the product id.
    pub fn with_product_id(mut self, product_id: impl Into<String>) -> Self {
        self.product_id = Some(product_id.into());
        self
    }

    /// Builder method to set the uid.
    pub fn with_uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = Some(uid.into());
        self
    }

    /// Builder method to set the start value.
    pub fn with_start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }

    /// Builder method to set the start type.
    pub fn with_start_type(mut self, kind: TimeKind) -> Self {
        self.start_type = Some(kind);
        self
    }

    /// Builder method to set the end value.
    pub fn with_end(mut self, end: impl Into<String>) -> Self {
        self.end = Some(end.into());
        self
    }

    /// Builder method to set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder method to set the URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Builder method to set the geolocation.
    pub fn with_geolocation(mut self, geolocation: GeoPoint) -> Self {
        self.geolocation = Some(geolocation);
        self
    }

    /// Builder method to set the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Builder method to set the status keyword.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Builder method to set the categories.
    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = Some(categories);
        self
    }

    /// Builder method to set the organizer.
    pub fn with_organizer(mut self, organizer: Contact) -> Self {
        self.organizer = Some(organizer);
        self
    }

    /// Builder method to add an attendee.
    pub fn with_attendee(mut self, attendee: Contact) -> Self {
        self.attendees.get_or_insert_with(Vec::new).push(attendee);
        self
    }
}

/// Deserializes a string, coercing any other JSON type to `None`.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient {
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Option::<Lenient>::deserialize(deserializer)? {
        Some(Lenient::Text(s)) => Some(s),
        _ => None,
    })
}

/// Deserializes a string sequence, coercing any other JSON type to `None`.
fn lenient_string_seq<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient {
        Seq(Vec<String>),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Option::<Lenient>::deserialize(deserializer)? {
        Some(Lenient::Seq(v)) => Some(v),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_keys() {
        let json = r#"{
            "title": "Standup",
            "productId": "-//Example//EN",
            "uid": "evt-1",
            "start": "2024-01-02T09:00:00",
            "startType": "date-time"
        }"#;

        let attrs: EventAttributes = serde_json::from_str(json).unwrap();
        assert_eq!(attrs.title, Some("Standup".to_string()));
        assert_eq!(attrs.product_id, Some("-//Example//EN".to_string()));
        assert_eq!(attrs.uid, Some("evt-1".to_string()));
        assert_eq!(attrs.start_type, Some(TimeKind::DateTime));
    }

    #[test]
    fn missing_fields_default_to_none() {
        let attrs: EventAttributes = serde_json::from_str("{}").unwrap();
        assert_eq!(attrs, EventAttributes::default());
    }

    #[test]
    fn deserializes_contacts() {
        let json = r#"{
            "organizer": {"name": "Ada", "email": "ada@example.com"},
            "attendees": [
                {"email": "grace@example.com"},
                {"name": "Alan"}
            ]
        }"#;

        let attrs: EventAttributes = serde_json::from_str(json).unwrap();
        assert_eq!(attrs.organizer, Some(Contact::new("Ada", "ada@example.com")));

        let attendees = attrs.attendees.unwrap();
        assert_eq!(attendees.len(), 2);
        assert_eq!(attendees[0].email, Some("grace@example.com".to_string()));
        assert_eq!(attendees[0].name, None);
        assert_eq!(attendees[1].name, Some("Alan".to_string()));
    }

    #[test]
    fn deserializes_geolocation() {
        let json = r#"{"geolocation": {"lat": 37.386013, "lon": -122.082932}}"#;
        let attrs: EventAttributes = serde_json::from_str(json).unwrap();
        let geo = attrs.geolocation.unwrap();
        assert_eq!(geo.lat, 37.386013);
        assert_eq!(geo.lon, -122.082932);
    }

    #[test]
    fn geolocation_accepts_the_long_key() {
        let json =
            r#"{"start": "2024-01-02", "geolocation": {"lat": 37.386013, "long": -122.082932}}"#;
        let attrs: EventAttributes = serde_json::from_str(json).unwrap();
        let geo = attrs.geolocation.unwrap();
        assert_eq!(geo.lat, 37.386013);
        assert_eq!(geo.lon, -122.082932);
    }

    mod leniency {
        use super::*;

        #[test]
        fn wrong_typed_status_becomes_absent() {
            let attrs: EventAttributes = serde_json::from_str(r#"{"status": 42}"#).unwrap();
            assert_eq!(attrs.status, None);

            let attrs: EventAttributes =
                serde_json::from_str(r#"{"status": ["CONFIRMED"]}"#).unwrap();
            assert_eq!(attrs.status, None);

            let attrs: EventAttributes = serde_json::from_str(r#"{"status": null}"#).unwrap();
            assert_eq!(attrs.status, None);
        }

        #[test]
        fn string_status_is_kept_verbatim() {
            // Validation against the fixed keyword set happens later
            let attrs: EventAttributes = serde_json::from_str(r#"{"status": "MAYBE"}"#).unwrap();
            assert_eq!(attrs.status, Some("MAYBE".to_string()));
        }

        #[test]
        fn non_sequence_categories_become_absent() {
            let attrs: EventAttributes =
                serde_json::from_str(r#"{"categories": "HACKATHON"}"#).unwrap();
            assert_eq!(attrs.categories, None);

            let attrs: EventAttributes = serde_json::from_str(r#"{"categories": 7}"#).unwrap();
            assert_eq!(attrs.categories, None);
        }

        #[test]
        fn sequence_categories_are_kept() {
            let attrs: EventAttributes =
                serde_json::from_str(r#"{"categories": ["HACKATHON", "ENGINEERING"]}"#).unwrap();
            assert_eq!(
                attrs.categories,
                Some(vec!["HACKATHON".to_string(), "ENGINEERING".to_string()])
            );
        }

        #[test]
        fn mixed_typed_categories_become_absent() {
            let attrs: EventAttributes =
                serde_json::from_str(r#"{"categories": ["HACKATHON", 7]}"#).unwrap();
            assert_eq!(attrs.categories, None);
        }
    }

    #[test]
    fn builder_methods() {
        let attrs = EventAttributes::default()
            .with_title("Standup")
            .with_start("2024-01-02T09:00:00")
            .with_start_type(TimeKind::DateTime)
            .with_end("2024-01-02T09:15:00")
            .with_location("Room 101")
            .with_status("CONFIRMED")
            .with_categories(vec!["TEAM".to_string()])
            .with_organizer(Contact::new("Ada", "ada@example.com"))
            .with_attendee(Contact::new("Grace", "grace@example.com"))
            .with_attendee(Contact::new("Alan", "alan@example.com"));

        assert_eq!(attrs.title, Some("Standup".to_string()));
        assert_eq!(attrs.start_type, Some(TimeKind::DateTime));
        assert_eq!(attrs.status, Some("CONFIRMED".to_string()));
        assert_eq!(attrs.attendees.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn serde_roundtrip() {
        let attrs = EventAttributes::default()
            .with_title("Standup")
            .with_start("2024-01-02")
            .with_start_type(TimeKind::Date)
            .with_geolocation(GeoPoint::new(48.8584, 2.2945));

        let json = serde_json::to_string(&attrs).unwrap();
        assert!(json.contains("\"startType\":\"date\""));

        let parsed: EventAttributes = serde_json::from_str(&json).unwrap();
        assert_eq!(attrs, parsed);
    }
}
