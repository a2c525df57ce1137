use crate::ApiError;

use cafe_core::{BatchStatus, Language, parse_date_field};
use cafe_db::DbError;

use std::panic::Location;
use std::str::FromStr;

use axum::{http::StatusCode, response::IntoResponse};
use error_location::ErrorLocation;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let (status, json) = body_json(ApiError::not_found("Batch JUAN-001 not found")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Batch JUAN-001 not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let (status, json) = body_json(ApiError::validation("name", "name cannot be empty")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "name");
}

#[tokio::test]
async fn test_version_conflict_returns_409_with_current_version() {
    let (status, json) = body_json(ApiError::version_conflict(5)).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "CONFLICT");
    assert!(json["error"]["message"].as_str().unwrap().contains("5"));
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Database operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn test_bad_request_returns_400_without_field() {
    let (status, json) = body_json(ApiError::bad_request("Invalid now")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
}

#[test]
fn test_uuid_error_converts_to_validation() {
    let uuid_err = uuid::Uuid::parse_str("not-a-uuid").unwrap_err();
    let api_err: ApiError = uuid_err.into();

    assert!(matches!(api_err, ApiError::Validation { .. }));
}

#[test]
fn test_core_errors_convert_to_field_validation() {
    let status: ApiError = BatchStatus::from_str("roasting").unwrap_err().into();
    let lang: ApiError = Language::from_str("fr").unwrap_err().into();
    let date: ApiError = parse_date_field("pack_date", Some("tomorrow"))
        .unwrap_err()
        .into();

    assert!(matches!(status, ApiError::Validation { field: Some(ref f), .. } if f == "status"));
    assert!(matches!(lang, ApiError::Validation { field: Some(ref f), .. } if f == "lang"));
    assert!(matches!(date, ApiError::Validation { field: Some(ref f), .. } if f == "pack_date"));
}

#[test]
fn test_unique_violation_converts_to_conflict_without_version() {
    let db_err = DbError::UniqueViolation {
        message: "UNIQUE constraint failed: batches.batch_code".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let api_err: ApiError = db_err.into();

    assert!(matches!(
        api_err,
        ApiError::Conflict {
            current_version: None,
            ..
        }
    ));
}

#[tokio::test]
async fn test_other_db_errors_hide_details() {
    let db_err = DbError::InvalidRow {
        message: "bad uuid in farmers.id".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(db_err.into()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["message"], "Database operation failed");
}
