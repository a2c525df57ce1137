use crate::commands::Commands;

use clap::Parser;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

#[derive(Parser)]
#[command(name = "cafe")]
#[command(about = "Coffee batch traceability CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL
    #[arg(long, global = true, env = "CAFE_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    pub server: String,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
