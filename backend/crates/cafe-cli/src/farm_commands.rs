use clap::Subcommand;

#[derive(Subcommand)]
pub enum FarmCommands {
    /// List all farms
    List,
    /// Get a farm by ID
    Get {
        /// Farm ID (UUID)
        id: String,
    },
}
