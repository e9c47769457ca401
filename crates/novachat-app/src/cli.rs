use clap::{Parser, Subcommand};

/// CLI arguments for novachat
#[derive(Parser, Debug)]
#[command(name = "novachat")]
#[command(about = "Nova Chat - terminal client for the Nova conversational backend")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Base URL of the Nova backend (default: http://127.0.0.1:8000)
    #[arg(long, value_name = "URL", env = "NOVA_API_URL", global = true)]
    pub base_url: Option<String>,

    /// Identifier the backend uses to keep your conversation memory
    #[arg(long, value_name = "ID", env = "NOVA_USER_ID", default_value = "abhi", global = true)]
    pub user_id: String,

    /// Print every HTTP request and response
    #[arg(short, long, action = clap::ArgAction::SetTrue, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Interactive chat session (default)
    Chat,
    /// Send a single message and print the reply
    Send {
        /// Message text
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        message: Vec<String>,
    },
    /// Check that the backend is reachable
    Status,
    /// Show the conversation the backend remembers for this user
    History,
    /// Show what the backend has learned about you
    Profile,
    /// Show the newest long-term memories the backend keeps for you
    Memories {
        /// Maximum number of memories to show
        #[arg(short, long, default_value = "5")]
        limit: usize,
    },
    /// Make the backend forget the current conversation
    Clear,
}
