use clap::Subcommand;

#[derive(Subcommand)]
pub enum ProductCommands {
    /// List products
    List {
        /// Only products currently offered in the shop
        #[arg(long)]
        active_only: bool,
    },
    /// Get a product by ID
    Get {
        /// Product ID (UUID)
        id: String,
    },
}
