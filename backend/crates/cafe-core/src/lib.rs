pub mod error;
pub mod models;
pub mod traceability;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::batch::Batch;
pub use models::batch_status::BatchStatus;
pub use models::farm::Farm;
pub use models::farmer::Farmer;
pub use models::language::Language;
pub use models::product::Product;
pub use models::roast_level::RoastLevel;
pub use traceability::{
    batch_record::BatchRecord,
    classifier::classify,
    date_source::DateSource,
    milestone_dates::{MilestoneDates, parse_date_field, parse_milestone_date},
    progress::Progress,
    stage::{Stage, StageDef},
    stage_id::StageId,
    stage_status::StageStatus,
    stage_table::{STAGE_TABLE, StageDefinition, build_stages},
    timeline::{Timeline, TimelineStage},
};
