use crate::{BatchRecord, CoreError, DateSource, MilestoneDates, parse_date_field, parse_milestone_date};

use chrono::NaiveDate;
use googletest::assert_that;
use googletest::prelude::{anything, eq, ok};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn given_iso_date_when_parsed_then_returns_date() {
    assert_that!(parse_milestone_date("2025-03-14"), eq(Some(date(2025, 3, 14))));
    assert_that!(parse_milestone_date("  2025-03-14 "), eq(Some(date(2025, 3, 14))));
}

#[test]
fn given_timestamps_when_parsed_then_keeps_utc_date() {
    assert_that!(
        parse_milestone_date("2025-03-14T00:00:00.000Z"),
        eq(Some(date(2025, 3, 14)))
    );
    assert_that!(
        parse_milestone_date("2025-03-14T22:30:00-05:00"),
        eq(Some(date(2025, 3, 15)))
    );
    assert_that!(
        parse_milestone_date("2025-03-14T08:15:00"),
        eq(Some(date(2025, 3, 14)))
    );
}

#[test]
fn given_garbage_when_parsed_then_none() {
    assert_eq!(parse_milestone_date(""), None);
    assert_eq!(parse_milestone_date("not a date"), None);
    assert_eq!(parse_milestone_date("2025-13-40"), None);
    assert_eq!(parse_milestone_date("14/03/2025"), None);
}

#[test]
fn given_blank_field_when_strictly_parsed_then_ok_none() {
    assert_that!(parse_date_field("roast_date", None), ok(anything()));
    assert_eq!(parse_date_field("roast_date", None).unwrap(), None);
    assert_eq!(parse_date_field("roast_date", Some("   ")).unwrap(), None);
}

#[test]
fn given_garbage_field_when_strictly_parsed_then_invalid_date_error() {
    let result = parse_date_field("roast_date", Some("yesterday"));

    match result {
        Err(CoreError::InvalidDate { field, value, .. }) => {
            assert_eq!(field, "roast_date");
            assert_eq!(value, "yesterday");
        }
        other => panic!("expected InvalidDate, got {:?}", other),
    }
}

#[test]
fn given_batch_json_with_bad_dates_when_deserialized_then_bad_dates_are_missing() {
    let json = r#"{
        "batch_code": "JUAN-001",
        "status": "active",
        "harvest_date": "2025-01-10",
        "roast_date": "soon",
        "pack_date": null,
        "processing_method": "Lavado",
        "farmer_name": "Juan"
    }"#;

    let record: BatchRecord = serde_json::from_str(json).unwrap();

    assert_eq!(record.batch_code, "JUAN-001");
    assert_eq!(record.status.as_deref(), Some("active"));
    assert_eq!(record.milestones.harvest_date, Some(date(2025, 1, 10)));
    assert_eq!(record.milestones.roast_date, None);
    assert_eq!(record.milestones.pack_date, None);
    assert_eq!(record.milestones.retail_date, None);
    assert_eq!(record.processing_method.as_deref(), Some("Lavado"));
    assert_eq!(record.drying_method, None);
}

#[test]
fn given_batch_json_with_non_text_dates_when_deserialized_then_they_are_missing() {
    let json = r#"{
        "batch_code": "X-001",
        "harvest_date": 20250101,
        "roast_date": "2025-02-01",
        "pack_date": true,
        "distribution_date": { "day": 3 },
        "retail_date": ["2025-05-01"]
    }"#;

    let record: BatchRecord = serde_json::from_str(json).unwrap();

    assert_eq!(record.batch_code, "X-001");
    assert_eq!(record.milestones.harvest_date, None);
    assert_eq!(record.milestones.roast_date, Some(date(2025, 2, 1)));
    assert_eq!(record.milestones.pack_date, None);
    assert_eq!(record.milestones.distribution_date, None);
    assert_eq!(record.milestones.retail_date, None);
}

#[test]
fn given_all_dates_set_when_read_by_source_then_each_source_maps_to_its_field() {
    let milestones = MilestoneDates {
        harvest_date: Some(date(2025, 1, 1)),
        roast_date: Some(date(2025, 2, 1)),
        pack_date: Some(date(2025, 3, 1)),
        distribution_date: Some(date(2025, 4, 1)),
        retail_date: Some(date(2025, 5, 1)),
    };

    assert_eq!(milestones.date_for(DateSource::Harvest), Some(date(2025, 1, 1)));
    assert_eq!(milestones.date_for(DateSource::Roast), Some(date(2025, 2, 1)));
    assert_eq!(milestones.date_for(DateSource::Pack), Some(date(2025, 3, 1)));
    assert_eq!(milestones.date_for(DateSource::Distribution), Some(date(2025, 4, 1)));
    assert_eq!(milestones.date_for(DateSource::Retail), Some(date(2025, 5, 1)));
    assert_eq!(DateSource::Pack.field_name(), "pack_date");
}
