use super::{day, stage_defs, statuses};

use crate::{Progress, StageId, StageStatus, classify};

use chrono::{Duration, Utc};
use googletest::assert_that;
use googletest::prelude::{eq, none};
use proptest::prelude::*;

use StageStatus::{Completed, Current, Pending};

#[test]
fn given_only_past_harvest_when_classified_then_next_stage_is_current() {
    // Given
    let now = day(2025, 6, 1);
    let defs = stage_defs([Some(day(2025, 1, 1)), None, None, None, None, None, None, None]);

    // When
    let stages = classify(defs, now);

    // Then
    assert_eq!(
        statuses(&stages),
        vec![Completed, Current, Pending, Pending, Pending, Pending, Pending, Pending]
    );
    assert_that!(Progress::from_stages(&stages).percentage, eq(12.5));
}

#[test]
fn given_future_drying_date_when_classified_then_drying_is_current() {
    // Given
    let now = day(2025, 6, 1);
    let defs = stage_defs([
        Some(day(2025, 1, 1)),
        Some(day(2025, 2, 1)),
        Some(day(2030, 1, 1)),
        None,
        None,
        None,
        None,
        None,
    ]);

    // When
    let stages = classify(defs, now);

    // Then
    assert_eq!(
        statuses(&stages),
        vec![Completed, Completed, Current, Pending, Pending, Pending, Pending, Pending]
    );
    assert_that!(Progress::from_stages(&stages).percentage, eq(25.0));
}

#[test]
fn given_no_dates_when_classified_then_everything_is_pending() {
    let stages = classify(stage_defs([None; 8]), Utc::now());

    assert_eq!(statuses(&stages), vec![Pending; 8]);
    assert_that!(stages.iter().any(|s| s.is_current()), eq(false));
    assert_that!(Progress::from_stages(&stages).percentage, eq(0.0));
}

#[test]
fn given_all_dates_in_past_when_classified_then_all_completed_and_none_current() {
    let now = day(2025, 6, 1);
    let defs = stage_defs([Some(day(2025, 1, 1)); 8]);

    let stages = classify(defs, now);

    assert_eq!(statuses(&stages), vec![Completed; 8]);
    assert_that!(Progress::from_stages(&stages).percentage, eq(100.0));
}

#[test]
fn given_date_equal_to_now_when_classified_then_completed_not_current() {
    let now = day(2025, 6, 1);
    let defs = stage_defs([Some(now), None, None, None, None, None, None, None]);

    let stages = classify(defs, now);

    assert_that!(stages[0].status, eq(Completed));
    assert_that!(stages[1].status, eq(Current));
}

#[test]
fn given_undated_first_stage_when_classified_then_it_stays_pending() {
    // Given: no predecessor for index 0, so only its own date could make it current
    let now = day(2025, 6, 1);
    let defs = stage_defs([None, Some(day(2025, 1, 1)), None, None, None, None, None, None]);

    // When
    let stages = classify(defs, now);

    // Then
    assert_eq!(
        statuses(&stages),
        vec![Pending, Completed, Current, Pending, Pending, Pending, Pending, Pending]
    );
}

#[test]
fn given_future_first_stage_when_classified_then_it_is_current() {
    let now = day(2025, 6, 1);
    let defs = stage_defs([Some(day(2025, 9, 1)), None, None, None, None, None, None, None]);

    let stages = classify(defs, now);

    assert_that!(stages[0].status, eq(Current));
    assert_eq!(&statuses(&stages)[1..], &[Pending; 7]);
}

#[test]
fn given_current_found_when_later_stage_is_undated_after_completed_then_it_stays_pending() {
    // Given: retail was entered in the past while the middle of the chain is empty
    let now = day(2025, 6, 1);
    let defs = stage_defs([
        Some(day(2025, 1, 1)),
        None,
        None,
        None,
        None,
        None,
        None,
        Some(day(2025, 5, 1)),
    ]);

    // When
    let stages = classify(defs, now);

    // Then: processing is current, retail completes on its own date, nothing backtracks
    assert_eq!(
        statuses(&stages),
        vec![Completed, Current, Pending, Pending, Pending, Pending, Pending, Completed]
    );
}

#[test]
fn given_two_future_dates_when_classified_then_only_first_is_current() {
    let now = day(2025, 6, 1);
    let defs = stage_defs([
        Some(day(2025, 1, 1)),
        Some(day(2025, 7, 1)),
        Some(day(2025, 8, 1)),
        None,
        None,
        None,
        None,
        None,
    ]);

    let stages = classify(defs, now);

    assert_eq!(
        statuses(&stages),
        vec![Completed, Current, Pending, Pending, Pending, Pending, Pending, Pending]
    );
}

#[test]
fn given_classified_stages_then_order_and_dates_are_preserved() {
    let now = day(2025, 6, 1);
    let harvest = Some(day(2025, 1, 1));
    let stages = classify(
        stage_defs([harvest, None, None, None, None, None, None, None]),
        now,
    );

    let ids: Vec<StageId> = stages.iter().map(|s| s.id).collect();
    assert_eq!(ids, StageId::ALL.to_vec());
    assert_that!(stages[0].date, eq(harvest));
    assert_that!(stages[1].date, none());
}

#[test]
fn given_empty_stage_list_when_classified_then_empty_result() {
    let stages = classify(Vec::new(), Utc::now());
    assert!(stages.is_empty());
}

// =========================================================================
// Properties
// =========================================================================

fn offsets_to_defs(offsets: &[Option<i64>]) -> (chrono::DateTime<Utc>, Vec<crate::StageDef>) {
    let now = day(2025, 6, 1);
    let mut dates = [None; 8];
    for (slot, offset) in dates.iter_mut().zip(offsets) {
        *slot = offset.map(|days| now + Duration::days(days));
    }
    (now, stage_defs(dates))
}

proptest! {
    #[test]
    fn prop_past_dates_always_complete(offsets in proptest::collection::vec(-3650i64..=0, 8)) {
        let offsets: Vec<Option<i64>> = offsets.into_iter().map(Some).collect();
        let (now, defs) = offsets_to_defs(&offsets);

        let stages = classify(defs, now);

        prop_assert!(stages.iter().all(|s| s.status == Completed));
        prop_assert_eq!(Progress::from_stages(&stages).percentage, 100.0);
    }

    #[test]
    fn prop_current_appears_at_most_once(
        offsets in proptest::collection::vec(proptest::option::of(-1000i64..1000), 8)
    ) {
        let (now, defs) = offsets_to_defs(&offsets);

        let stages = classify(defs, now);

        prop_assert!(stages.iter().filter(|s| s.is_current()).count() <= 1);
    }

    #[test]
    fn prop_completed_exactly_when_dated_at_or_before_now(
        offsets in proptest::collection::vec(proptest::option::of(-1000i64..1000), 8)
    ) {
        let (now, defs) = offsets_to_defs(&offsets);

        let stages = classify(defs, now);

        for stage in &stages {
            let dated_in_past = stage.date.is_some_and(|d| d <= now);
            prop_assert_eq!(stage.is_completed(), dated_in_past);
        }
    }

    #[test]
    fn prop_current_has_future_date_or_completed_predecessor(
        offsets in proptest::collection::vec(proptest::option::of(-1000i64..1000), 8)
    ) {
        let (now, defs) = offsets_to_defs(&offsets);

        let stages = classify(defs, now);

        for (index, stage) in stages.iter().enumerate().filter(|(_, s)| s.is_current()) {
            let future = stage.date.is_some_and(|d| d > now);
            let after_completed = index > 0 && stages[index - 1].is_completed();
            prop_assert!(future || (stage.date.is_none() && after_completed));
        }
    }

    #[test]
    fn prop_single_future_after_completed_prefix_is_the_current_stage(
        prefix in 0usize..8,
        past in 1i64..1000,
        future in 1i64..1000,
    ) {
        let offsets: Vec<Option<i64>> = (0..8)
            .map(|i| match i.cmp(&prefix) {
                std::cmp::Ordering::Less => Some(-past),
                std::cmp::Ordering::Equal => Some(future),
                std::cmp::Ordering::Greater => None,
            })
            .collect();
        let (now, defs) = offsets_to_defs(&offsets);

        let stages = classify(defs, now);

        let current: Vec<usize> = stages
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_current())
            .map(|(i, _)| i)
            .collect();
        prop_assert_eq!(current, vec![prefix]);
        let first_not_completed = stages.iter().position(|s| !s.is_completed());
        prop_assert_eq!(first_not_completed, Some(prefix));
    }
}
