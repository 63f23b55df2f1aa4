//! Field encoders for single attribute values.
//!
//! Each function here is pure and handles exactly one field: default
//! substitution, contact encoding, geolocation encoding, and category list
//! encoding. Timestamp encoding lives in [`crate::time`].

use crate::attributes::{Contact, GeoPoint};

/// Returns the value if present, the default otherwise.
///
/// Only absence triggers the fallback; an empty string is a value.
pub fn or_default(value: Option<String>, default: &str) -> String {
    value.unwrap_or_else(|| default.to_string())
}

/// Encodes a contact as an inline `CN=` parameter value.
///
/// The result is placed after `ORGANIZER;` or `ATTENDEE;`:
/// `CN=Ada:mailto:ada@example.com`. The email doubles as the display name
/// when no name is given; without an email the `mailto:` part is dropped.
pub fn encode_contact(contact: &Contact) -> String {
    match (&contact.name, &contact.email) {
        (Some(name), Some(email)) => format!("CN={}:mailto:{}", name, email),
        (None, Some(email)) => format!("CN={}:mailto:{}", email, email),
        (Some(name), None) => format!("CN={}", name),
        (None, None) => "CN=".to_string(),
    }
}

/// Encodes a geographic position as a `GEO` value (`lat;lon`).
pub fn encode_geolocation(geo: &GeoPoint) -> String {
    format!("{};{}", geo.lat, geo.lon)
}

/// Trims each category name and joins them with commas.
///
/// When the joined result is empty (an empty list, or a lone name trimming
/// to nothing) this encodes to nothing, so no `CATEGORIES` property is
/// emitted for either.
pub fn encode_categories(categories: &[String]) -> Option<String> {
    let joined = categories
        .iter()
        .map(|c| c.trim())
        .collect::<Vec<_>>()
        .join(",");
    if joined.is_empty() {
        return None;
    }
    Some(joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    mod default_substitution {
        use super::*;

        #[test]
        fn absent_value_takes_default() {
            assert_eq!(or_default(None, "fallback"), "fallback");
        }

        #[test]
        fn present_value_wins() {
            assert_eq!(or_default(Some("given".to_string()), "fallback"), "given");
        }

        #[test]
        fn empty_string_is_a_value() {
            assert_eq!(or_default(Some(String::new()), "fallback"), "");
        }
    }

    mod contacts {
        use super::*;

        #[test]
        fn name_and_email() {
            let contact = Contact::new("Ada", "ada@example.com");
            assert_eq!(encode_contact(&contact), "CN=Ada:mailto:ada@example.com");
        }

        #[test]
        fn email_doubles_as_name() {
            let contact = Contact {
                name: None,
                email: Some("ada@example.com".to_string()),
            };
            assert_eq!(
                encode_contact(&contact),
                "CN=ada@example.com:mailto:ada@example.com"
            );
        }

        #[test]
        fn name_without_email() {
            let contact = Contact {
                name: Some("Ada".to_string()),
                email: None,
            };
            assert_eq!(encode_contact(&contact), "CN=Ada");
        }

        #[test]
        fn empty_contact() {
            assert_eq!(encode_contact(&Contact::default()), "CN=");
        }
    }

    mod geolocation {
        use super::*;

        #[test]
        fn lat_semicolon_lon() {
            let geo = GeoPoint::new(37.386013, -122.082932);
            assert_eq!(encode_geolocation(&geo), "37.386013;-122.082932");
        }

        #[test]
        fn whole_numbers_stay_short() {
            let geo = GeoPoint::new(48.0, 2.0);
            assert_eq!(encode_geolocation(&geo), "48;2");
        }
    }

    mod categories {
        use super::*;

        #[test]
        fn joins_with_commas() {
            let joined = encode_categories(&["TEAM".to_string(), "WEEKLY".to_string()]);
            assert_eq!(joined, Some("TEAM,WEEKLY".to_string()));
        }

        #[test]
        fn trims_each_name() {
            let joined = encode_categories(&[" a".to_string(), "b ".to_string()]);
            assert_eq!(joined, Some("a,b".to_string()));
        }

        #[test]
        fn trimming_is_idempotent() {
            let once = encode_categories(&[" a".to_string(), "b ".to_string()]).unwrap();
            let twice = encode_categories(&[once.clone()]).unwrap();
            assert_eq!(once, twice);
        }

        #[test]
        fn empty_list_encodes_to_nothing() {
            assert_eq!(encode_categories(&[]), None);
        }

        #[test]
        fn blank_entry_encodes_to_nothing() {
            assert_eq!(encode_categories(&[" ".to_string()]), None);
            assert_eq!(encode_categories(&[String::new()]), None);
        }

        #[test]
        fn single_category() {
            let joined = encode_categories(&["HACKATHON".to_string()]);
            assert_eq!(joined, Some("HACKATHON".to_string()));
        }
    }
}
