use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Content language. The public site is Spanish-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
        }
    }

    /// Pick the text for this language, falling back to the other one when missing.
    pub fn pick<'a>(&self, es: Option<&'a str>, en: Option<&'a str>) -> Option<&'a str> {
        match self {
            Self::Es => es.or(en),
            Self::En => en.or(es),
        }
    }
}

impl FromStr for Language {
    type Err = CoreError;

    /// Accepts bare codes and region-qualified tags ("en-US", "es_CO").
    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        let primary = s
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match primary.as_str() {
            "es" => Ok(Self::Es),
            "en" => Ok(Self::En),
            _ => Err(CoreError::InvalidLanguage {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
