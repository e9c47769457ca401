//! Nova Chat terminal client
//!
//! Command line parsing, configuration and the interactive REPL sitting on
//! top of the conversation controller.

// Re-export workspace crates
pub use novachat_models::{self as models, ChatTurn, Sender};
pub use novachat_api::{self as api, ClientConfig, HttpChatClient};
pub use novachat_chat::{self as chat, Conversation, ConversationState};

// Local modules
pub mod cli;
pub mod app;

// Re-exports from local modules
pub use cli::{Cli, Commands};
pub use app::{setup_from_cli, run_command, run_repl_mode, AppConfig};
