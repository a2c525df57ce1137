use crate::{StageId, StageStatus};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stage before classification: its id and the milestone instant bound to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageDef {
    pub id: StageId,
    pub date: Option<DateTime<Utc>>,
}

impl StageDef {
    pub fn new(id: StageId, date: Option<DateTime<Utc>>) -> Self {
        Self { id, date }
    }
}

/// A classified stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    pub id: StageId,
    pub date: Option<DateTime<Utc>>,
    pub status: StageStatus,
}

impl Stage {
    pub fn is_completed(&self) -> bool {
        self.status == StageStatus::Completed
    }

    pub fn is_current(&self) -> bool {
        self.status == StageStatus::Current
    }
}
