//! Conversation management for novachat
//!
//! This crate owns the transcript of a chat session and drives the
//! send/receive cycle against a `ChatTransport`.

pub mod conversation;
pub mod state;


// Re-export commonly used types
pub use conversation::{Conversation, SendOutcome, APOLOGY_TEXT};
pub use state::ConversationState;
