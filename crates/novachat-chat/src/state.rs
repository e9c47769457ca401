use serde::Serialize;

use novachat_models::ChatTurn;

/// Everything a presentation layer needs to render a chat session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversationState {
    pub(crate) turns: Vec<ChatTurn>,
    pub(crate) pending: bool,
    pub(crate) last_error: Option<String>,
}

impl ConversationState {
    /// Transcript in send order
    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    /// True while a message is on its way and its reply has not been applied
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Message of the most recent failed send, cleared by the next send
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last_turn(&self) -> Option<&ChatTurn> {
        self.turns.last()
    }
}
