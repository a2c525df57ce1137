//! Product entity - a coffee offered in the shop.

use crate::{Language, RoastLevel};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    /// Unique URL slug (e.g., "finca-la-esperanza-250g")
    pub slug: String,
    pub name_es: String,
    pub name_en: String,
    pub description_es: Option<String>,
    pub description_en: Option<String>,
    pub roast_level: RoastLevel,
    /// Price in minor currency units
    pub price_cents: i64,
    pub weight_grams: Option<i32>,
    pub image_url: Option<String>,
    /// Inactive products are hidden from the shop but kept for batch history
    pub active: bool,
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Product {
    pub fn new(slug: String, name_es: String, name_en: String, price_cents: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            slug,
            name_es,
            name_en,
            description_es: None,
            description_en: None,
            roast_level: RoastLevel::default(),
            price_cents,
            weight_grams: None,
            image_url: None,
            active: true,
            version: 1,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub fn name(&self, language: Language) -> &str {
        match language {
            Language::Es => &self.name_es,
            Language::En => &self.name_en,
        }
    }

    pub fn description(&self, language: Language) -> Option<&str> {
        language.pick(self.description_es.as_deref(), self.description_en.as_deref())
    }

    /// Slugs are lowercase ASCII letters, digits and dashes.
    pub fn is_valid_slug(slug: &str) -> bool {
        !slug.is_empty()
            && slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }
}
