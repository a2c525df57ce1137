pub mod batch;
pub mod batch_status;
pub mod farm;
pub mod farmer;
pub mod language;
pub mod product;
pub mod roast_level;
