use clap::Subcommand;

#[derive(Subcommand)]
pub enum BatchCommands {
    /// List batches
    List {
        /// Only batches of this farmer (UUID)
        #[arg(long)]
        farmer_id: Option<String>,
        /// Filter by status (active, sold, expired)
        #[arg(long)]
        status: Option<String>,
    },
    /// Get a batch by ID
    Get {
        /// Batch ID (UUID)
        id: String,
    },
}
