use anyhow::{Context, Result};
use std::sync::Arc;

use novachat_api::{resolve_base_url, ClientConfig, HttpChatClient};
use novachat_logging::{ConsoleLogger, RequestLogger};

use crate::cli::Cli;

/// Application configuration derived from CLI arguments and environment
pub struct AppConfig {
    pub client_config: ClientConfig,
    pub user_id: String,
    pub verbose: bool,
}

impl AppConfig {
    /// Build the HTTP transport this configuration describes
    pub fn build_client(&self) -> Result<HttpChatClient> {
        let logger: Arc<dyn RequestLogger> = ConsoleLogger::shared(self.verbose);
        let client = HttpChatClient::new(self.client_config.clone())
            .context("Failed to create HTTP client")?
            .with_logger(logger);
        Ok(client)
    }
}

/// Set up application configuration from CLI arguments
pub fn setup_from_cli(cli: &Cli) -> Result<AppConfig> {
    // Precedence: --base-url > NOVA_API_URL (both handled by clap) > default
    let base_url = resolve_base_url(cli.base_url.as_deref());

    let user_id = cli.user_id.trim().to_string();
    if user_id.is_empty() {
        anyhow::bail!("User id must not be empty");
    }

    log::debug!("using backend {} as user {}", base_url, user_id);

    Ok(AppConfig {
        client_config: ClientConfig::new(base_url),
        user_id,
        verbose: cli.verbose,
    })
}
