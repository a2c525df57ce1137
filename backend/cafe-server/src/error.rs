use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] cafe_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] cafe_db::DbError),

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Metrics error: {message} {location}")]
    Metrics {
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error: {message}: {source}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl ServerError {
    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn metrics(message: impl Into<String>) -> Self {
        Self::Metrics {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServerError>;
