//! Column decoding shared by the repositories.
//!
//! Ids are stored as UUID text and audit timestamps as unix seconds.

use crate::{DbError, Result as DbErrorResult};

use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

pub(crate) fn uuid(row: &SqliteRow, column: &str) -> DbErrorResult<Uuid> {
    let raw: String = row.try_get(column)?;
    Uuid::parse_str(&raw)
        .map_err(|e| DbError::invalid_row(format!("Invalid UUID in {}: {}", column, e)))
}

pub(crate) fn optional_uuid(row: &SqliteRow, column: &str) -> DbErrorResult<Option<Uuid>> {
    let raw: Option<String> = row.try_get(column)?;
    raw.map(|s| {
        Uuid::parse_str(&s)
            .map_err(|e| DbError::invalid_row(format!("Invalid UUID in {}: {}", column, e)))
    })
    .transpose()
}

pub(crate) fn timestamp(row: &SqliteRow, column: &str) -> DbErrorResult<DateTime<Utc>> {
    let raw: i64 = row.try_get(column)?;
    DateTime::from_timestamp(raw, 0)
        .ok_or_else(|| DbError::invalid_row(format!("Invalid timestamp in {}: {}", column, raw)))
}

pub(crate) fn optional_timestamp(
    row: &SqliteRow,
    column: &str,
) -> DbErrorResult<Option<DateTime<Utc>>> {
    let raw: Option<i64> = row.try_get(column)?;
    Ok(raw.and_then(|ts| DateTime::from_timestamp(ts, 0)))
}

/// Decode a text column through the domain type's `FromStr`.
pub(crate) fn parsed<T>(row: &SqliteRow, column: &str) -> DbErrorResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw: String = row.try_get(column)?;
    T::from_str(&raw)
        .map_err(|e| DbError::invalid_row(format!("Invalid value in {}: {}", column, e)))
}
