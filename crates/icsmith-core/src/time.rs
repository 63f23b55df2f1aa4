//! Date parsing and timestamp encoding for calendar events.
//!
//! This module provides [`DateValue`] for representing a parsed start/end
//! value (which may be a UTC datetime, a floating local datetime, or a bare
//! date), and [`encode_timestamp`] for turning a raw date string into one of
//! the fixed calendar timestamp forms:
//!
//! - `20240102T090000Z` (UTC)
//! - `20240102T090000` (floating local time)
//! - `20240102` (date only)

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{BuildError, BuildResult};

/// The kind of timestamp a raw date value should encode to.
///
/// Carried as the `startType` attribute of the input record. When absent,
/// the kind is inferred from the shape of the value itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeKind {
    /// A calendar date without a time-of-day.
    Date,
    /// A date with a time-of-day.
    DateTime,
}

/// A parsed date value.
///
/// Input values can carry three levels of precision:
/// - **Utc**: a datetime with an explicit offset, stored as UTC
/// - **Floating**: a datetime without an offset (local wall-clock time)
/// - **Date**: a bare calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateValue {
    /// A datetime with an explicit offset, converted to UTC.
    Utc(DateTime<Utc>),
    /// A datetime without timezone information.
    Floating(NaiveDateTime),
    /// A bare date.
    Date(NaiveDate),
}

impl DateValue {
    /// Creates a `DateValue::Utc` from a UTC datetime.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self::Utc(dt)
    }

    /// Creates a `DateValue::Floating` from a naive datetime.
    pub fn from_floating(dt: NaiveDateTime) -> Self {
        Self::Floating(dt)
    }

    /// Creates a `DateValue::Date` from a date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self::Date(date)
    }

    /// Parses a raw date string.
    ///
    /// Accepts RFC 3339 datetimes (`2024-01-02T09:00:00Z`, offsets allowed),
    /// local datetimes with a `T` or space separator (seconds optional),
    /// bare dates (`2024-01-02`), and the already-encoded calendar forms
    /// (`20240102T090000Z`, `20240102T090000`, `20240102`).
    pub fn parse(value: &str) -> Option<Self> {
        let s = value.trim();

        // Datetime with an explicit offset
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(Self::Utc(dt.with_timezone(&Utc)));
        }

        // Local datetime, `T` or space separated, seconds optional
        for format in [
            "%Y-%m-%dT%H:%M:%S",
            "%Y-%m-%d %H:%M:%S",
            "%Y-%m-%dT%H:%M",
            "%Y-%m-%d %H:%M",
        ] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
                return Some(Self::Floating(dt));
            }
        }

        // Bare date
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Some(Self::Date(date));
        }

        // Calendar basic form, date only (YYYYMMDD)
        if s.len() == 8 && s.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(date) = NaiveDate::parse_from_str(s, "%Y%m%d") {
                return Some(Self::Date(date));
            }
        }

        // Calendar basic form with Z suffix (UTC)
        if let Some(stripped) = s.strip_suffix('Z') {
            if let Ok(dt) = NaiveDateTime::parse_from_str(stripped, "%Y%m%dT%H%M%S") {
                return Some(Self::Utc(Utc.from_utc_datetime(&dt)));
            }
        }

        // Calendar basic form without suffix (floating)
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y%m%dT%H%M%S") {
            return Some(Self::Floating(dt));
        }

        None
    }

    /// Returns the date portion of this value.
    pub fn date(&self) -> NaiveDate {
        match self {
            Self::Utc(dt) => dt.date_naive(),
            Self::Floating(dt) => dt.date(),
            Self::Date(date) => *date,
        }
    }

    /// Formats as a bare calendar date (`YYYYMMDD`).
    pub fn format_date(&self) -> String {
        self.date().format("%Y%m%d").to_string()
    }

    /// Formats as a calendar datetime.
    ///
    /// UTC values carry a `Z` suffix; floating values do not. A bare date
    /// encodes as midnight (`YYYYMMDDT000000`).
    pub fn format_date_time(&self) -> String {
        match self {
            Self::Utc(dt) => dt.format("%Y%m%dT%H%M%SZ").to_string(),
            Self::Floating(dt) => dt.format("%Y%m%dT%H%M%S").to_string(),
            Self::Date(date) => format!("{}T000000", date.format("%Y%m%d")),
        }
    }

    /// Formats according to the requested kind.
    pub fn format_as(&self, kind: TimeKind) -> String {
        match kind {
            TimeKind::Date => self.format_date(),
            TimeKind::DateTime => self.format_date_time(),
        }
    }
}

/// Encodes a raw date string into a calendar timestamp.
///
/// The `hint` selects between the date and datetime forms; when absent, a
/// value containing a `T` or a space is treated as a datetime and anything
/// else as a bare date.
///
/// Fails with [`BuildError::InvalidDate`] when the value cannot be parsed.
pub fn encode_timestamp(value: &str, hint: Option<TimeKind>) -> BuildResult<String> {
    let trimmed = value.trim();
    let parsed = DateValue::parse(trimmed).ok_or_else(|| BuildError::InvalidDate {
        value: value.to_string(),
    })?;
    let kind = hint.unwrap_or_else(|| infer_kind(trimmed));
    Ok(parsed.format_as(kind))
}

/// Infers the timestamp kind from the shape of a raw date value.
fn infer_kind(value: &str) -> TimeKind {
    if value.contains('T') || value.contains(' ') {
        TimeKind::DateTime
    } else {
        TimeKind::Date
    }
}
