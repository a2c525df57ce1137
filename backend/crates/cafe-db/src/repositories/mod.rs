pub mod batch_repository;
pub mod farm_repository;
pub mod farmer_repository;
pub mod product_repository;

mod row;
