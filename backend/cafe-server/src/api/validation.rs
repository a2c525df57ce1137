//! Input checks shared by the CMS handlers.

use crate::{ApiError, ApiResult};

use cafe_config::ValidationConfig;
use cafe_core::parse_date_field;

use chrono::NaiveDate;

pub fn sanitize_string(s: &str) -> String {
    s.trim().to_string()
}

/// Trimmed, with blank strings collapsed to `None`.
pub fn sanitize_optional(s: Option<&str>) -> Option<String> {
    s.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}

/// Required short text: non-empty after trimming and within the name limit.
#[track_caller]
pub fn validate_name(value: &str, field: &str, limits: &ValidationConfig) -> ApiResult<String> {
    let value = sanitize_string(value);

    if value.is_empty() {
        return Err(ApiError::validation(field, format!("{} cannot be empty", field)));
    }

    if value.chars().count() > limits.max_name_length {
        return Err(ApiError::validation(
            field,
            format!(
                "{} must not exceed {} characters",
                field, limits.max_name_length
            ),
        ));
    }

    Ok(value)
}

/// Optional short text within the name limit.
#[track_caller]
pub fn validate_optional_name(
    value: Option<&str>,
    field: &str,
    limits: &ValidationConfig,
) -> ApiResult<Option<String>> {
    let value = sanitize_optional(value);

    if let Some(ref v) = value
        && v.chars().count() > limits.max_name_length
    {
        return Err(ApiError::validation(
            field,
            format!(
                "{} must not exceed {} characters",
                field, limits.max_name_length
            ),
        ));
    }

    Ok(value)
}

/// Optional long text within the description limit.
#[track_caller]
pub fn validate_description(
    value: Option<&str>,
    field: &str,
    limits: &ValidationConfig,
) -> ApiResult<Option<String>> {
    let value = sanitize_optional(value);

    if let Some(ref v) = value
        && v.chars().count() > limits.max_description_length
    {
        return Err(ApiError::validation(
            field,
            format!(
                "{} must not exceed {} characters",
                field, limits.max_description_length
            ),
        ));
    }

    Ok(value)
}

/// Farmer codes become batch code prefixes: `[A-Z0-9-]+`.
#[track_caller]
pub fn validate_farmer_code(value: &str, limits: &ValidationConfig) -> ApiResult<String> {
    let code = validate_name(value, "code", limits)?.to_ascii_uppercase();

    if !cafe_core::Farmer::is_valid_code(&code) {
        return Err(ApiError::validation(
            "code",
            "code may only contain letters, digits and '-'",
        ));
    }

    Ok(code)
}

/// Batch codes appear in trace URLs: `[A-Z0-9-]+`.
#[track_caller]
pub fn validate_batch_code(value: &str, limits: &ValidationConfig) -> ApiResult<String> {
    let code = validate_name(value, "batch_code", limits)?.to_ascii_uppercase();

    if !cafe_core::Batch::is_valid_code(&code) {
        return Err(ApiError::validation(
            "batch_code",
            "batch_code may only contain letters, digits and '-'",
        ));
    }

    Ok(code)
}

/// Product slugs appear in shop URLs: `[a-z0-9-]+`.
#[track_caller]
pub fn validate_slug(value: &str, limits: &ValidationConfig) -> ApiResult<String> {
    let slug = validate_name(value, "slug", limits)?;

    if !cafe_core::Product::is_valid_slug(&slug) {
        return Err(ApiError::validation(
            "slug",
            "slug may only contain lowercase letters, digits and '-'",
        ));
    }

    Ok(slug)
}

#[track_caller]
pub fn validate_non_negative<T>(value: Option<T>, field: &str) -> ApiResult<Option<T>>
where
    T: PartialOrd + Default + Copy,
{
    match value {
        Some(v) if v < T::default() => Err(ApiError::validation(
            field,
            format!("{} cannot be negative", field),
        )),
        other => Ok(other),
    }
}

/// Strict milestone date parsing for writes; blank means "no date".
#[track_caller]
pub fn parse_date(value: Option<&str>, field: &str) -> ApiResult<Option<NaiveDate>> {
    Ok(parse_date_field(field, value)?)
}
