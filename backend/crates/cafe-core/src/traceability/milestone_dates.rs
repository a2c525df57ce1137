//! Milestone dates of a batch, and the parsing used at its boundaries.
//!
//! Two parsers exist on purpose:
//! - [`parse_milestone_date`] is lenient and used when *reading* batch JSON
//!   from elsewhere; anything unparseable becomes `None`, which the
//!   classifier treats like a missing milestone.
//! - [`parse_date_field`] is strict and used on *write* paths so bad input is
//!   rejected instead of silently dropped.

use crate::{CoreError, DateSource, Result as CoreErrorResult};

use std::panic::Location;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use error_location::ErrorLocation;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneDates {
    #[serde(default, deserialize_with = "lenient_date")]
    pub harvest_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub roast_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub pack_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub distribution_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub retail_date: Option<NaiveDate>,
}

impl MilestoneDates {
    pub fn date_for(&self, source: DateSource) -> Option<NaiveDate> {
        match source {
            DateSource::Harvest => self.harvest_date,
            DateSource::Roast => self.roast_date,
            DateSource::Pack => self.pack_date,
            DateSource::Distribution => self.distribution_date,
            DateSource::Retail => self.retail_date,
        }
    }
}

/// Parse a calendar date, returning `None` for empty or unrecognized input.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (UTC date kept) and naive
/// `YYYY-MM-DDTHH:MM:SS` timestamps.
pub fn parse_milestone_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Utc).date_naive());
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}

/// Strict variant for request input: blank means "no date", garbage is an error.
#[track_caller]
pub fn parse_date_field(field: &str, raw: Option<&str>) -> CoreErrorResult<Option<NaiveDate>> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    parse_milestone_date(raw)
        .map(Some)
        .ok_or_else(|| CoreError::InvalidDate {
            field: field.to_string(),
            value: raw.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}

/// Whatever a date field holds on the wire; only text can become a date.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDate {
    Text(String),
    Other(IgnoredAny),
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<RawDate> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawDate::Text(text)) => parse_milestone_date(&text),
        Some(RawDate::Other(_)) | None => None,
    })
}
