pub mod batches;
pub mod delete_response;
pub mod error;
pub mod farmers;
pub mod farms;
pub mod nullable;
pub mod products;
pub mod references;
pub mod traceability;
pub mod validation;
