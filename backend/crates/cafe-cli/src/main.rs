//! cafe - coffee batch traceability CLI
//!
//! # Examples
//!
//! ```bash
//! # List farmers
//! cafe farmer list --pretty
//!
//! # Batches of one farmer that are still on sale
//! cafe batch list --farmer-id <uuid> --status active
//!
//! # Timeline of a batch as of a given day, in English
//! cafe trace JUAN-001 --lang en --now 2025-06-01T00:00:00Z
//! ```

use cafe_cli::{
    CliClientResult, Client, batch_commands::BatchCommands, cli::Cli, commands::Commands,
    derive_timeline, farm_commands::FarmCommands, farmer_commands::FarmerCommands,
    product_commands::ProductCommands,
};

use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let client = Client::new(&cli.server);

    let result = run(&client, cli.command).await;

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &Client, command: Commands) -> CliClientResult<Value> {
    match command {
        Commands::Farmer { action } => match action {
            FarmerCommands::List => client.list_farmers().await,
            FarmerCommands::Get { id } => client.get_farmer(&id).await,
        },

        Commands::Farm { action } => match action {
            FarmCommands::List => client.list_farms().await,
            FarmCommands::Get { id } => client.get_farm(&id).await,
        },

        Commands::Product { action } => match action {
            ProductCommands::List { active_only } => client.list_products(active_only).await,
            ProductCommands::Get { id } => client.get_product(&id).await,
        },

        Commands::Batch { action } => match action {
            BatchCommands::List { farmer_id, status } => {
                client
                    .list_batches(farmer_id.as_deref(), status.as_deref())
                    .await
            }
            BatchCommands::Get { id } => client.get_batch(&id).await,
        },

        Commands::Trace {
            batch_code,
            lang,
            now,
        } => {
            let response = client.get_batch_by_code(&batch_code).await?;
            // One clock read per invocation
            let now = now.unwrap_or_else(Utc::now);
            let timeline = derive_timeline(&response, now, lang.unwrap_or_default())?;
            Ok(serde_json::to_value(timeline)?)
        }
    }
}
