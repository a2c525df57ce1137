//! Batch provenance timeline.
//!
//! A batch's milestone dates are mapped onto a fixed sequence of lifecycle
//! stages (`stage_table`), each stage is classified as completed, current or
//! pending relative to an explicit `now` (`classifier`), and the result is
//! summarized (`progress`) and labelled for display (`timeline`).
//!
//! Everything here is pure and recomputed per request; nothing is persisted.

pub mod batch_record;
pub mod classifier;
pub mod date_source;
pub mod milestone_dates;
pub mod progress;
pub mod stage;
pub mod stage_id;
pub mod stage_status;
pub mod stage_table;
pub mod timeline;
