use colored::Colorize;

use novachat_chat::ConversationState;
use novachat_models::{ChatTurn, Sender, UserProfile};

/// Name shown in front of bot turns
pub const BOT_NAME: &str = "Nova";

pub fn render_turn(turn: &ChatTurn) -> String {
    match turn.sender() {
        Sender::User => format!("{} {}", "You:".bright_green().bold(), turn.text()),
        Sender::Bot => format!("{} {}", format!("{}:", BOT_NAME).bright_cyan().bold(), turn.text()),
    }
}

pub fn render_error(message: &str) -> String {
    format!("{} {}", "⚠️".yellow(), message.bright_red())
}

pub fn render_pending() -> String {
    format!("{} is typing...", BOT_NAME).bright_black().italic().to_string()
}

/// Everything that changed since the user pressed enter: the bot turn and,
/// after a failure, the error banner under it
pub fn render_resolution(state: &ConversationState) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(turn) = state.last_turn().filter(|t| !t.is_user()) {
        lines.push(render_turn(turn));
    }
    if let Some(error) = state.last_error() {
        lines.push(render_error(error));
    }

    lines
}

pub fn render_transcript(turns: &[ChatTurn]) -> Vec<String> {
    turns.iter().map(render_turn).collect()
}

pub fn render_profile(profile: &UserProfile) -> Vec<String> {
    if profile.is_empty() {
        return vec![format!("{} doesn't know anything about you yet.", BOT_NAME).bright_black().to_string()];
    }

    profile
        .entries()
        .into_iter()
        .map(|(label, value)| format!("{} {}", format!("{}:", label).bright_yellow(), value))
        .collect()
}
