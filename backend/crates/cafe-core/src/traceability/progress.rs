use crate::Stage;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    pub completed_count: usize,
    pub total_stages: usize,
    /// Unrounded, 0.0..=100.0
    pub percentage: f64,
}

impl Progress {
    pub fn from_stages(stages: &[Stage]) -> Self {
        let completed_count = stages.iter().filter(|s| s.is_completed()).count();
        let total_stages = stages.len();

        let percentage = if total_stages == 0 {
            0.0
        } else {
            completed_count as f64 / total_stages as f64 * 100.0
        };

        Self {
            completed_count,
            total_stages,
            percentage,
        }
    }

    /// Whole-number percentage for display
    pub fn rounded_percentage(&self) -> u32 {
        self.percentage.round() as u32
    }
}
