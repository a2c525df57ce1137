use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid batch status: {value} {location}")]
    InvalidBatchStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid roast level: {value} {location}")]
    InvalidRoastLevel {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid language: {value} {location}")]
    InvalidLanguage {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid date in {field}: '{value}' {location}")]
    InvalidDate {
        field: String,
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
