use super::{day, stage_defs};

use crate::{Progress, Stage, StageId, StageStatus, classify};

#[test]
fn given_three_past_stages_when_measured_then_counts_three_of_eight() {
    let now = day(2025, 6, 1);
    let past = Some(day(2025, 1, 1));
    let stages = classify(
        stage_defs([past, past, past, None, None, None, None, None]),
        now,
    );

    let progress = Progress::from_stages(&stages);

    assert_eq!(progress.completed_count, 3);
    assert_eq!(progress.total_stages, 8);
    assert_eq!(progress.percentage, 37.5);
    assert_eq!(progress.rounded_percentage(), 38);
}

#[test]
fn given_current_stage_when_measured_then_not_counted_as_completed() {
    let stages = vec![
        Stage {
            id: StageId::Harvest,
            date: None,
            status: StageStatus::Current,
        },
        Stage {
            id: StageId::Processing,
            date: None,
            status: StageStatus::Pending,
        },
    ];

    let progress = Progress::from_stages(&stages);

    assert_eq!(progress.completed_count, 0);
    assert_eq!(progress.percentage, 0.0);
}

#[test]
fn given_no_stages_when_measured_then_zero_percent() {
    let progress = Progress::from_stages(&[]);

    assert_eq!(progress.total_stages, 0);
    assert_eq!(progress.percentage, 0.0);
    assert_eq!(progress.rounded_percentage(), 0);
}

#[test]
fn given_all_stages_past_when_measured_then_one_hundred_percent() {
    let now = day(2025, 6, 1);
    let stages = classify(stage_defs([Some(day(2024, 12, 24)); 8]), now);

    let progress = Progress::from_stages(&stages);

    assert_eq!(progress.completed_count, progress.total_stages);
    assert_eq!(progress.rounded_percentage(), 100);
}
