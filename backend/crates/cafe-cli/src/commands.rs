use crate::{
    batch_commands::BatchCommands, farm_commands::FarmCommands, farmer_commands::FarmerCommands,
    product_commands::ProductCommands,
};

use cafe_core::Language;

use chrono::{DateTime, Utc};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Farmer operations
    Farmer {
        #[command(subcommand)]
        action: FarmerCommands,
    },

    /// Farm operations
    Farm {
        #[command(subcommand)]
        action: FarmCommands,
    },

    /// Product operations
    Product {
        #[command(subcommand)]
        action: ProductCommands,
    },

    /// Batch operations
    Batch {
        #[command(subcommand)]
        action: BatchCommands,
    },

    /// Derive the traceability timeline of a batch
    Trace {
        /// Public batch code, e.g. JUAN-001
        batch_code: String,

        /// Label language (es, en)
        #[arg(long)]
        lang: Option<Language>,

        /// Classify against this RFC 3339 instant instead of now
        #[arg(long)]
        now: Option<DateTime<Utc>>,
    },
}
