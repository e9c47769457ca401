use anyhow::{Context, Result};
use colored::Colorize;

use novachat_chat::{Conversation, SendOutcome};

use crate::app::repl::run_repl_mode;
use crate::app::render::{render_profile, render_transcript, render_turn, BOT_NAME};
use crate::app::setup::AppConfig;
use crate::cli::Commands;

/// Execute a one-shot subcommand
pub async fn run_command(command: Commands, app_config: AppConfig) -> Result<()> {
    let client = app_config.build_client()?;

    match command {
        Commands::Chat => return run_repl_mode(client, app_config).await,
        Commands::Send { message } => {
            let text = message.join(" ");
            let mut conversation = Conversation::new(client, app_config.user_id);

            match conversation.send_message(&text).await {
                SendOutcome::Skipped => anyhow::bail!("Nothing to send: message is empty"),
                SendOutcome::Replied(turn) => println!("{}", render_turn(&turn)),
                SendOutcome::Failed(error) => anyhow::bail!(error),
            }
        }
        Commands::Status => {
            let health = client.health().await.context("Backend is not reachable")?;
            let bot = if health.bot.is_empty() { BOT_NAME } else { health.bot.as_str() };
            println!(
                "{} {} is {} at {}",
                "✓".green(),
                bot.bold(),
                health.status.green(),
                client.config().base_url
            );
        }
        Commands::History => {
            let history = client
                .history(&app_config.user_id)
                .await
                .context("Failed to fetch history")?;
            let turns = history.turns();

            if turns.is_empty() {
                println!("{}", format!("No conversation stored for {}", history.user_id).bright_black());
            } else {
                for line in render_transcript(&turns) {
                    println!("{}", line);
                }
            }
        }
        Commands::Profile => {
            let profile = client
                .profile(&app_config.user_id)
                .await
                .context("Failed to fetch profile")?;

            for line in render_profile(&profile.profile) {
                println!("{}", line);
            }
        }
        Commands::Memories { limit } => {
            let memories = client
                .memories(&app_config.user_id, Some(limit))
                .await
                .context("Failed to fetch memories")?;

            if memories.memories.is_empty() {
                println!("{}", format!("No memories stored for {}", memories.user_id).bright_black());
            }
            for memory in &memories.memories {
                println!("{} {}", memory.timestamp.bright_black(), memory.text);
            }
        }
        Commands::Clear => {
            let status = client
                .clear_session(&app_config.user_id)
                .await
                .context("Failed to clear session")?;
            println!("{} Session {} for {}", "🧹".bright_cyan(), status.status, app_config.user_id);
        }
    }

    Ok(())
}
