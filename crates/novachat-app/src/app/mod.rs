pub mod setup;
pub mod commands;
pub mod render;
pub mod repl;

pub use setup::{setup_from_cli, AppConfig};
pub use commands::run_command;
pub use repl::run_repl_mode;
