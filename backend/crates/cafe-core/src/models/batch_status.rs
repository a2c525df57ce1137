use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Commercial lifecycle label of a batch.
///
/// This is entered by hand in the CMS and is never derived from, or
/// reconciled with, the traceability stage statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BatchStatus {
    /// Batch is on offer
    #[default]
    Active,
    /// Batch has sold out
    Sold,
    /// Batch is past its shelf life
    Expired,
}

impl BatchStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Sold => "sold",
            Self::Expired => "expired",
        }
    }
}

impl FromStr for BatchStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "active" => Ok(Self::Active),
            "sold" => Ok(Self::Sold),
            "expired" => Ok(Self::Expired),
            _ => Err(CoreError::InvalidBatchStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
