//! Local timeline derivation from a raw batch record.
//!
//! The server hands back stored milestone dates; the stages are classified
//! here, so a malformed date from the server simply shows up as pending.

use crate::{CliClientResult, ClientError};

use cafe_core::{BatchRecord, Language, Timeline};

use chrono::{DateTime, Utc};
use serde_json::Value;

/// Derive a timeline from a `{ "batch": { ... } }` response body
pub fn derive_timeline(
    response: &Value,
    now: DateTime<Utc>,
    language: Language,
) -> CliClientResult<Timeline> {
    let batch = response
        .get("batch")
        .ok_or_else(|| ClientError::api_error("INVALID_RESPONSE", "Response has no batch"))?;

    let record: BatchRecord = serde::Deserialize::deserialize(batch)?;

    Ok(Timeline::derive(&record, now, language))
}
