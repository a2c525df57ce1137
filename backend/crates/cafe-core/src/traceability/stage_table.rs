use crate::{DateSource, MilestoneDates, StageDef, StageId};

use chrono::{NaiveTime, TimeZone, Utc};

/// Binds a stage to the batch field supplying its date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageDefinition {
    pub id: StageId,
    pub date_source: DateSource,
}

impl StageDefinition {
    pub const fn new(id: StageId, date_source: DateSource) -> Self {
        Self { id, date_source }
    }
}

/// Default stage table, in lifecycle order.
///
/// Processing, drying and transport have no date fields of their own on a
/// batch and read the harvest date.
pub const STAGE_TABLE: [StageDefinition; 8] = [
    StageDefinition::new(StageId::Harvest, DateSource::Harvest),
    StageDefinition::new(StageId::Processing, DateSource::Harvest),
    StageDefinition::new(StageId::Drying, DateSource::Harvest),
    StageDefinition::new(StageId::Transport, DateSource::Harvest),
    StageDefinition::new(StageId::Roasting, DateSource::Roast),
    StageDefinition::new(StageId::Packaging, DateSource::Pack),
    StageDefinition::new(StageId::Distribution, DateSource::Distribution),
    StageDefinition::new(StageId::Retail, DateSource::Retail),
];

/// Produce the unclassified stage list for a batch, in table order.
///
/// Milestone dates become instants at 00:00 UTC.
pub fn build_stages(milestones: &MilestoneDates, table: &[StageDefinition]) -> Vec<StageDef> {
    table
        .iter()
        .map(|definition| {
            let date = milestones
                .date_for(definition.date_source)
                .map(|d| Utc.from_utc_datetime(&d.and_time(NaiveTime::MIN)));
            StageDef::new(definition.id, date)
        })
        .collect()
}
