use tokio::sync::watch;

use novachat_api::ChatTransport;
use novachat_models::{ChatRequest, ChatTurn};

use crate::state::ConversationState;

/// Bot turn appended when a send fails
pub const APOLOGY_TEXT: &str = "Sorry, something went wrong. Please try again.";

/// What a single `send_message` call ended with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Input was blank; nothing was sent and the state is untouched
    Skipped,
    /// The backend answered; carries the appended bot turn
    Replied(ChatTurn),
    /// The request failed; carries the message stored in `last_error`
    Failed(String),
}

/// Owns the conversation state and sequences sends against a transport.
///
/// State lives in a `watch` channel so a UI can `subscribe` and see
/// `pending` flip while a request is in flight. Every update is applied in a
/// single `send_modify`, so observers never see half of a transition.
pub struct Conversation<T: ChatTransport> {
    transport: T,
    user_id: String,
    state: watch::Sender<ConversationState>,
}

impl<T: ChatTransport> Conversation<T> {
    pub fn new(transport: T, user_id: impl Into<String>) -> Self {
        let (state, _) = watch::channel(ConversationState::default());
        Self {
            transport,
            user_id: user_id.into(),
            state,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Snapshot of the current state
    pub fn state(&self) -> ConversationState {
        self.state.borrow().clone()
    }

    /// Receiver that is notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<ConversationState> {
        self.state.subscribe()
    }

    /// Send one message and record the outcome.
    ///
    /// Blank input is ignored. Otherwise the user turn is appended before the
    /// request goes out, and exactly one bot turn is appended once it
    /// resolves, either the reply text or `APOLOGY_TEXT`.
    pub async fn send_message(&mut self, text: &str) -> SendOutcome {
        let message = text.trim();
        if message.is_empty() {
            return SendOutcome::Skipped;
        }

        self.state.send_modify(|state| {
            state.turns.push(ChatTurn::user(message));
            state.pending = true;
            state.last_error = None;
        });

        let guard = PendingGuard::new(&self.state);
        let request = ChatRequest::new(self.user_id.as_str(), message);
        let result = self.transport.send(&request).await;
        guard.disarm();

        match result {
            Ok(reply) => {
                let turn = ChatTurn::bot(reply.response);
                self.state.send_modify(|state| {
                    state.turns.push(turn.clone());
                    state.pending = false;
                });
                SendOutcome::Replied(turn)
            }
            Err(err) => {
                log::warn!("chat request for {} failed: {}", self.user_id, err);
                let message = err.into_message();
                self.state.send_modify(|state| {
                    state.turns.push(ChatTurn::bot(APOLOGY_TEXT));
                    state.pending = false;
                    state.last_error = Some(message.clone());
                });
                SendOutcome::Failed(message)
            }
        }
    }

    /// Start over with an empty transcript
    pub fn reset(&mut self) {
        self.state.send_replace(ConversationState::default());
    }
}

/// Clears `pending` if a send future is dropped before it resolves
struct PendingGuard<'a> {
    state: &'a watch::Sender<ConversationState>,
    armed: bool,
}

impl<'a> PendingGuard<'a> {
    fn new(state: &'a watch::Sender<ConversationState>) -> Self {
        Self { state, armed: true }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            log::debug!("send cancelled before it resolved");
            self.state.send_modify(|state| state.pending = false);
        }
    }
}
