use clap::Subcommand;

#[derive(Subcommand)]
pub enum FarmerCommands {
    /// List all farmers
    List,
    /// Get a farmer by ID
    Get {
        /// Farmer ID (UUID)
        id: String,
    },
}
