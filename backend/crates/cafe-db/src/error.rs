use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Unique constraint violated: {message} {location}")]
    UniqueViolation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid row data: {message} {location}")]
    InvalidRow {
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    #[track_caller]
    pub(crate) fn invalid_row(message: impl Into<String>) -> Self {
        Self::InvalidRow {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());

        if let sqlx::Error::Database(ref db_error) = source
            && db_error.is_unique_violation()
        {
            return Self::UniqueViolation {
                message: db_error.message().to_string(),
                location,
            };
        }

        Self::Sqlx { source, location }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
