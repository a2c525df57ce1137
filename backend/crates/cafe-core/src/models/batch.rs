//! Batch entity - a traceable lot of coffee.
//!
//! A batch carries optional milestone dates for its journey from the farm to
//! the shelf. Those dates feed the traceability timeline; the `status` field
//! is a separate commercial label and is not derived from them.

use crate::{BatchRecord, BatchStatus, Farmer, MilestoneDates};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    pub id: Uuid,
    /// Human-assigned unique code (e.g., "JUAN-001")
    pub batch_code: String,

    // Origin
    pub farmer_id: Uuid,
    pub farm_id: Option<Uuid>,
    pub product_id: Option<Uuid>,
    pub variety: Option<String>,
    pub altitude_masl: Option<i32>,
    pub quantity_kg: Option<f64>,

    // Milestones
    pub harvest_date: Option<NaiveDate>,
    pub roast_date: Option<NaiveDate>,
    pub pack_date: Option<NaiveDate>,
    pub distribution_date: Option<NaiveDate>,
    pub retail_date: Option<NaiveDate>,

    // Display-only process details
    pub processing_method: Option<String>,
    pub drying_method: Option<String>,
    pub transport_mode: Option<String>,

    pub status: BatchStatus,
    pub notes: Option<String>,

    // Audit
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Batch {
    pub fn new(batch_code: String, farmer_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            batch_code,
            farmer_id,
            farm_id: None,
            product_id: None,
            variety: None,
            altitude_masl: None,
            quantity_kg: None,
            harvest_date: None,
            roast_date: None,
            pack_date: None,
            distribution_date: None,
            retail_date: None,
            processing_method: None,
            drying_method: None,
            transport_mode: None,
            status: BatchStatus::default(),
            notes: None,
            version: 1,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub fn milestones(&self) -> MilestoneDates {
        MilestoneDates {
            harvest_date: self.harvest_date,
            roast_date: self.roast_date,
            pack_date: self.pack_date,
            distribution_date: self.distribution_date,
            retail_date: self.retail_date,
        }
    }

    /// The subset of the batch the traceability timeline reads.
    pub fn record(&self) -> BatchRecord {
        BatchRecord {
            batch_code: self.batch_code.clone(),
            status: Some(self.status.as_str().to_string()),
            milestones: self.milestones(),
            processing_method: self.processing_method.clone(),
            drying_method: self.drying_method.clone(),
            transport_mode: self.transport_mode.clone(),
        }
    }

    /// Batch codes travel in URL paths, so they share the farmer code alphabet.
    pub fn is_valid_code(code: &str) -> bool {
        Farmer::is_valid_code(code)
    }

    /// Batch codes are the farmer code followed by a zero-padded sequence.
    pub fn suggest_code(farmer_code: &str, sequence: u32) -> String {
        format!("{}-{:03}", farmer_code.trim().to_ascii_uppercase(), sequence)
    }
}
