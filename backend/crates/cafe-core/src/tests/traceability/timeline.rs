use super::day;

use crate::{
    Batch, BatchRecord, BatchStatus, DateSource, Language, MilestoneDates, StageDefinition,
    StageId, StageStatus, Timeline,
};

use chrono::NaiveDate;
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn harvested_batch() -> Batch {
    let mut batch = Batch::new("JUAN-001".to_string(), Uuid::new_v4());
    batch.harvest_date = Some(date(2025, 1, 1));
    batch.processing_method = Some("Lavado".to_string());
    batch.drying_method = Some("  ".to_string());
    batch
}

#[test]
fn given_only_harvest_date_when_derived_then_borrowing_stages_complete_and_roasting_is_current() {
    let batch = harvested_batch();

    let timeline = Timeline::derive(&batch.record(), day(2025, 6, 1), Language::En);

    let statuses: Vec<StageStatus> = timeline.stages.iter().map(|s| s.status).collect();
    assert_eq!(
        statuses,
        vec![
            StageStatus::Completed,
            StageStatus::Completed,
            StageStatus::Completed,
            StageStatus::Completed,
            StageStatus::Current,
            StageStatus::Pending,
            StageStatus::Pending,
            StageStatus::Pending,
        ]
    );
    assert_eq!(timeline.current_stage, Some(StageId::Roasting));
    assert_eq!(timeline.progress.completed_count, 4);
    assert_eq!(timeline.progress.percentage, 50.0);
}

#[test]
fn given_language_when_derived_then_labels_localized_with_process_details() {
    let batch = harvested_batch();

    let es = Timeline::derive(&batch.record(), day(2025, 6, 1), Language::Es);
    let en = Timeline::derive(&batch.record(), day(2025, 6, 1), Language::En);

    assert_eq!(es.stages[0].name, "Cosecha");
    assert_eq!(en.stages[0].name, "Harvest");
    assert!(en.stages[1].description.ends_with("(Lavado)"));
    // Blank methods add nothing
    assert_eq!(
        en.stages[2].description,
        StageId::Drying.description(Language::En)
    );
    assert_eq!(es.language, Language::Es);
}

#[test]
fn given_batch_status_when_derived_then_passed_through_unchanged() {
    let mut batch = harvested_batch();
    batch.status = BatchStatus::Expired;
    batch.retail_date = Some(date(2024, 1, 1));

    let timeline = Timeline::derive(&batch.record(), day(2025, 6, 1), Language::Es);

    assert_eq!(timeline.batch_code, "JUAN-001");
    assert_eq!(timeline.batch_status.as_deref(), Some("expired"));
    // Stage statuses are derived from dates only
    assert_eq!(timeline.stages[7].status, StageStatus::Completed);
    assert_eq!(timeline.stages[5].status, StageStatus::Pending);
}

#[test]
fn given_custom_table_when_derived_then_its_date_sources_are_used() {
    let record = BatchRecord {
        batch_code: "ANA-002".to_string(),
        milestones: MilestoneDates {
            harvest_date: Some(date(2025, 1, 1)),
            ..MilestoneDates::default()
        },
        ..BatchRecord::default()
    };
    let table = [
        StageDefinition::new(StageId::Harvest, DateSource::Harvest),
        StageDefinition::new(StageId::Processing, DateSource::Roast),
    ];

    let timeline = Timeline::derive_with_table(&record, &table, day(2025, 6, 1), Language::En);

    assert_eq!(timeline.stages.len(), 2);
    assert_eq!(timeline.current_stage, Some(StageId::Processing));
    assert_eq!(timeline.progress.total_stages, 2);
}

#[test]
fn given_timeline_when_serialized_then_snake_case_ids_and_plain_dates() {
    let batch = harvested_batch();
    let timeline = Timeline::derive(&batch.record(), day(2025, 6, 1), Language::En);

    let json = serde_json::to_value(&timeline).unwrap();

    assert_eq!(json["current_stage"], "roasting");
    assert_eq!(json["language"], "en");
    assert_eq!(json["stages"][0]["id"], "harvest");
    assert_eq!(json["stages"][0]["date"], "2025-01-01");
    assert_eq!(json["stages"][0]["status"], "completed");
    assert_eq!(json["stages"][5]["date"], serde_json::Value::Null);
    assert_eq!(json["progress"]["total_stages"], 8);
}
