//! cafe-cli library
//!
//! Exports the HTTP client and local timeline derivation for use in tests.

pub mod batch_commands;
pub mod cli;
pub mod client;
pub mod commands;
pub mod farm_commands;
pub mod farmer_commands;
pub mod product_commands;
pub mod trace;


pub use client::{CliClientResult, Client, ClientError};
pub use trace::derive_timeline;
