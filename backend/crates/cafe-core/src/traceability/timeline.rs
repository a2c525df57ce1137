use crate::{
    BatchRecord, Language, Progress, STAGE_TABLE, Stage, StageDefinition, StageId, StageStatus,
    build_stages, classify,
};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A classified stage with display labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineStage {
    pub id: StageId,
    pub name: String,
    pub description: String,
    pub date: Option<NaiveDate>,
    pub status: StageStatus,
}

/// Everything a client needs to draw a batch's provenance timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    pub batch_code: String,
    /// Commercial status as stored on the batch; unrelated to stage statuses
    pub batch_status: Option<String>,
    pub language: Language,
    pub stages: Vec<TimelineStage>,
    pub current_stage: Option<StageId>,
    pub progress: Progress,
}

impl Timeline {
    pub fn derive(record: &BatchRecord, now: DateTime<Utc>, language: Language) -> Self {
        Self::derive_with_table(record, &STAGE_TABLE, now, language)
    }

    pub fn derive_with_table(
        record: &BatchRecord,
        table: &[StageDefinition],
        now: DateTime<Utc>,
        language: Language,
    ) -> Self {
        let stages = classify(build_stages(&record.milestones, table), now);
        let progress = Progress::from_stages(&stages);
        let current_stage = stages.iter().find(|s| s.is_current()).map(|s| s.id);

        Self {
            batch_code: record.batch_code.clone(),
            batch_status: record.status.clone(),
            language,
            stages: stages
                .iter()
                .map(|stage| label(stage, record, language))
                .collect(),
            current_stage,
            progress,
        }
    }
}

fn label(stage: &Stage, record: &BatchRecord, language: Language) -> TimelineStage {
    let base = stage.id.description(language);
    let detail = match stage.id {
        StageId::Processing => record.processing_method.as_deref(),
        StageId::Drying => record.drying_method.as_deref(),
        StageId::Transport => record.transport_mode.as_deref(),
        _ => None,
    }
    .map(str::trim)
    .filter(|d| !d.is_empty());

    let description = match detail {
        Some(detail) => format!("{base} ({detail})"),
        None => base.to_string(),
    };

    TimelineStage {
        id: stage.id,
        name: stage.id.name(language).to_string(),
        description,
        date: stage.date.map(|d| d.date_naive()),
        status: stage.status,
    }
}
