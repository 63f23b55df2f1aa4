//! Default values for required event fields.
//!
//! The [`Defaults`] table supplies fallbacks for fields the caller left out
//! (`title`, `productId`, `uid`), the `DTSTAMP` generation timestamp, a
//! fallback start value, and the default output file stem.
//!
//! A process-wide table is built once on first use via [`defaults`]; callers
//! needing determinism (tests, config-driven overrides) construct their own
//! with [`Defaults::at`].

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::time::DateValue;

/// Fallback title for events without one.
pub const DEFAULT_TITLE: &str = "Untitled event";

/// Product identifier written as `PRODID` when the caller supplies none.
pub const DEFAULT_PRODUCT_ID: &str = "-//icsmith//icsmith//EN";

/// Default output file stem; an `.ics` extension is appended on write.
pub const DEFAULT_FILENAME: &str = "event";

static DEFAULTS: LazyLock<Defaults> = LazyLock::new(Defaults::generate);

/// Returns the process-wide defaults table, built once on first use.
pub fn defaults() -> &'static Defaults {
    &DEFAULTS
}

/// Fallback values applied during normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    /// Fallback `SUMMARY` value.
    pub title: String,
    /// Fallback `PRODID` value.
    pub product_id: String,
    /// Fallback `UID` value, a fresh v4 UUID per table.
    pub uid: String,
    /// The `DTSTAMP` value, encoding the generation instant.
    pub timestamp: String,
    /// Fallback `DTSTART` value, encoding the generation instant.
    pub start: String,
    /// Output file stem used when no destination is given.
    pub filename: String,
}

impl Defaults {
    /// Builds a defaults table for the given generation instant.
    ///
    /// The timestamp fields are deterministic; the uid is a fresh v4 UUID.
    pub fn at(now: DateTime<Utc>) -> Self {
        let stamp = DateValue::from_utc(now).format_date_time();
        Self {
            title: DEFAULT_TITLE.to_string(),
            product_id: DEFAULT_PRODUCT_ID.to_string(),
            uid: Uuid::new_v4().to_string(),
            timestamp: stamp.clone(),
            start: stamp,
            filename: DEFAULT_FILENAME.to_string(),
        }
    }

    /// Builds a defaults table for the current instant.
    pub fn generate() -> Self {
        Self::at(Utc::now())
    }
}
