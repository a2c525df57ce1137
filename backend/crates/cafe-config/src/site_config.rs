use crate::{ConfigError, ConfigErrorResult};

use cafe_core::Language;

use std::str::FromStr;

use serde::Deserialize;

/// Public site settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Language used when a request does not ask for one
    pub default_language: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_language: Language::default().as_str().to_string(),
        }
    }
}

impl SiteConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.language().map(|_| ())
    }

    pub fn language(&self) -> ConfigErrorResult<Language> {
        Language::from_str(&self.default_language).map_err(|_| {
            ConfigError::site(format!(
                "site.default_language must be 'es' or 'en', got '{}'",
                self.default_language
            ))
        })
    }
}
