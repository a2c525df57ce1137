pub mod connection;
pub mod error;
pub mod repositories;

#[cfg(test)]
mod tests;

pub use connection::sqlite::{connect, connect_in_memory, run_migrations};
pub use error::{DbError, Result};
pub use repositories::batch_repository::{BatchFilter, BatchRepository};
pub use repositories::farm_repository::FarmRepository;
pub use repositories::farmer_repository::FarmerRepository;
pub use repositories::product_repository::ProductRepository;
