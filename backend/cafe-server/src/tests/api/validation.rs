use crate::ApiError;
use crate::api::validation::{
    parse_date, sanitize_optional, validate_batch_code, validate_description, validate_farmer_code,
    validate_name, validate_non_negative, validate_optional_name, validate_slug,
};

use cafe_config::ValidationConfig;

use chrono::NaiveDate;
use googletest::prelude::*;

fn limits() -> ValidationConfig {
    ValidationConfig {
        max_name_length: 10,
        max_description_length: 20,
    }
}

fn field_of(error: ApiError) -> Option<String> {
    match error {
        ApiError::Validation { field, .. } => field,
        _ => None,
    }
}

#[test]
fn given_padded_name_when_validated_then_trimmed() {
    assert_that!(validate_name("  Juan  ", "name", &limits()).unwrap(), eq("Juan"));
}

#[test]
fn given_blank_or_long_name_when_validated_then_error_names_field() {
    let blank = validate_name("   ", "name", &limits()).unwrap_err();
    let long = validate_name("Finca La Esperanza", "name", &limits()).unwrap_err();

    assert_that!(field_of(blank), some(eq("name")));
    assert_that!(field_of(long), some(eq("name")));
}

#[test]
fn given_multibyte_name_when_validated_then_counts_characters() {
    // 10 characters, 11 bytes
    assert_that!(validate_name("Tostión123", "name", &limits()), ok(anything()));
}

#[test]
fn given_blank_optional_text_then_none() {
    assert_that!(sanitize_optional(Some("  ")), none());
    assert_that!(validate_optional_name(Some(""), "variety", &limits()).unwrap(), none());
    assert_that!(validate_description(None, "notes", &limits()).unwrap(), none());
}

#[test]
fn given_long_description_when_validated_then_error() {
    let result = validate_description(Some("a much longer description"), "notes", &limits());

    assert_that!(field_of(result.unwrap_err()), some(eq("notes")));
}

#[test]
fn given_lowercase_farmer_code_when_validated_then_uppercased() {
    assert_that!(validate_farmer_code("juan-2", &limits()).unwrap(), eq("JUAN-2"));
    assert!(validate_farmer_code("JUAN 2", &limits()).is_err());
}

#[test]
fn given_batch_code_with_url_reserved_characters_when_validated_then_rejected() {
    assert_that!(validate_batch_code(" juan-001 ", &limits()).unwrap(), eq("JUAN-001"));
    for code in ["LOT#2", "LOT/2", "LOT?2", "LOT 2"] {
        let error = validate_batch_code(code, &limits()).unwrap_err();
        assert_that!(field_of(error), some(eq("batch_code")));
    }
}

#[test]
fn given_slug_with_uppercase_when_validated_then_rejected() {
    assert_that!(validate_slug("café", &limits()), err(anything()));
    assert_that!(validate_slug("tostado", &limits()).unwrap(), eq("tostado"));
    assert!(validate_slug("Tostado", &limits()).is_err());
}

#[test]
fn given_negative_number_when_validated_then_error() {
    assert_that!(validate_non_negative(Some(0i64), "price_cents").unwrap(), some(eq(0)));
    assert_that!(validate_non_negative::<f64>(None, "quantity_kg").unwrap(), none());
    assert!(validate_non_negative(Some(-1.5f64), "quantity_kg").is_err());
}

#[test]
fn given_dates_when_parsed_then_strict_iso_with_blank_as_none() {
    assert_that!(
        parse_date(Some("2025-03-02"), "roast_date").unwrap(),
        some(eq(NaiveDate::from_ymd_opt(2025, 3, 2).unwrap()))
    );
    assert_that!(parse_date(Some(" "), "roast_date").unwrap(), none());

    let error = parse_date(Some("02/03/2025"), "roast_date").unwrap_err();
    assert_that!(field_of(error), some(eq("roast_date")));
}
