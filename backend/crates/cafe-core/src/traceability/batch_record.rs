use crate::MilestoneDates;

use serde::{Deserialize, Serialize};

/// The fields of a batch that the timeline needs.
///
/// Deserializes from the batch JSON served by the API; unknown fields are
/// ignored and malformed dates read as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRecord {
    pub batch_code: String,
    /// Free-text commercial status, passed through untouched
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub milestones: MilestoneDates,
    #[serde(default)]
    pub processing_method: Option<String>,
    #[serde(default)]
    pub drying_method: Option<String>,
    #[serde(default)]
    pub transport_mode: Option<String>,
}
