//! Farmer entity - a coffee grower featured on the site.

use crate::Language;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Farmer {
    pub id: Uuid,
    /// Unique short code used as the batch code prefix (e.g., "JUAN")
    pub code: String,
    pub name: String,
    pub region: Option<String>,
    pub bio_es: Option<String>,
    pub bio_en: Option<String>,
    pub photo_url: Option<String>,
    /// Optimistic locking version
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Farmer {
    pub fn new(code: String, name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            code,
            name,
            region: None,
            bio_es: None,
            bio_en: None,
            photo_url: None,
            version: 1,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Check if farmer is deleted (soft delete)
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub fn bio(&self, language: Language) -> Option<&str> {
        language.pick(self.bio_es.as_deref(), self.bio_en.as_deref())
    }

    /// Farmer codes are uppercase ASCII letters, digits and dashes.
    pub fn is_valid_code(code: &str) -> bool {
        !code.is_empty()
            && code
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-')
    }
}
