use metrics::counter;

/// Counters for CMS writes and timeline derivations
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self { prefix: "cafe_api" }
    }

    /// Record a timeline derived for a batch page or API call
    pub fn timeline_derived(&self, endpoint: &'static str) {
        counter!(format!("{}.timelines.derived", self.prefix), "endpoint" => endpoint)
            .increment(1);
    }

    pub fn entity_created(&self, entity: &'static str) {
        counter!(format!("{}.entities.created", self.prefix), "entity" => entity).increment(1);
    }

    pub fn entity_updated(&self, entity: &'static str) {
        counter!(format!("{}.entities.updated", self.prefix), "entity" => entity).increment(1);
    }

    pub fn entity_deleted(&self, entity: &'static str) {
        counter!(format!("{}.entities.deleted", self.prefix), "entity" => entity).increment(1);
    }

    /// Record a version conflict on update
    pub fn conflict(&self, entity: &'static str) {
        counter!(format!("{}.conflicts", self.prefix), "entity" => entity).increment(1);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
