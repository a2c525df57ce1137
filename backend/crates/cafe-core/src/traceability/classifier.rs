use crate::{Stage, StageDef, StageStatus};

use chrono::{DateTime, Utc};

/// Assign a status to every stage relative to `now`.
///
/// Rules, applied in stage order:
/// 1. A stage dated at or before `now` is completed.
/// 2. Until a current stage has been found, a stage dated after `now` is
///    current, and so is an undated stage whose immediate predecessor is
///    completed.
/// 3. Everything else is pending.
///
/// There is no backtracking: once a current stage exists, later undated or
/// future stages stay pending. An undated first stage is always pending.
pub fn classify(stages: Vec<StageDef>, now: DateTime<Utc>) -> Vec<Stage> {
    let mut classified: Vec<Stage> = Vec::with_capacity(stages.len());
    let mut current_found = false;

    for def in stages {
        let previous_completed = classified.last().is_some_and(Stage::is_completed);

        let status = match def.date {
            Some(date) if date <= now => StageStatus::Completed,
            Some(_) if !current_found => {
                current_found = true;
                StageStatus::Current
            }
            None if !current_found && previous_completed => {
                current_found = true;
                StageStatus::Current
            }
            _ => StageStatus::Pending,
        };

        classified.push(Stage {
            id: def.id,
            date: def.date,
            status,
        });
    }

    classified
}
