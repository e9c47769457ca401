use anyhow::Result;
use clap::Parser;

use novachat::{run_command, setup_from_cli, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Parse CLI arguments
    let cli = Cli::parse();

    let app_config = setup_from_cli(&cli)?;

    run_command(cli.command.unwrap_or(Commands::Chat), app_config).await
}
