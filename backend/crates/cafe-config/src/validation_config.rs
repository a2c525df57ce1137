use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Validation constraints
pub const MIN_NAME_LENGTH: usize = 1;
pub const MAX_NAME_LENGTH: usize = 500;
pub const DEFAULT_MAX_NAME_LENGTH: usize = 200;

pub const MIN_DESCRIPTION_LENGTH: usize = 0;
pub const MAX_DESCRIPTION_LENGTH: usize = 100000;
pub const DEFAULT_MAX_DESCRIPTION_LENGTH: usize = 10000;

/// Field limits applied to CMS input.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Names, codes, slugs and short free-text fields
    pub max_name_length: usize,
    /// Bios, product descriptions and batch notes
    pub max_description_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            max_description_length: DEFAULT_MAX_DESCRIPTION_LENGTH,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_name_length < MIN_NAME_LENGTH || self.max_name_length > MAX_NAME_LENGTH {
            return Err(ConfigError::config(format!(
                "validation.max_name_length must be {}-{}, got {}",
                MIN_NAME_LENGTH, MAX_NAME_LENGTH, self.max_name_length
            )));
        }

        if self.max_description_length < MIN_DESCRIPTION_LENGTH
            || self.max_description_length > MAX_DESCRIPTION_LENGTH
        {
            return Err(ConfigError::config(format!(
                "validation.max_description_length must be {}-{}, got {}",
                MIN_DESCRIPTION_LENGTH, MAX_DESCRIPTION_LENGTH, self.max_description_length
            )));
        }

        Ok(())
    }
}
