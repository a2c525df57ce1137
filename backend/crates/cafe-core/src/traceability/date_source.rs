use serde::{Deserialize, Serialize};

/// A milestone date field on the batch record that a stage can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateSource {
    Harvest,
    Roast,
    Pack,
    Distribution,
    Retail,
}

impl DateSource {
    /// Name of the batch field this source reads
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Harvest => "harvest_date",
            Self::Roast => "roast_date",
            Self::Pack => "pack_date",
            Self::Distribution => "distribution_date",
            Self::Retail => "retail_date",
        }
    }
}
