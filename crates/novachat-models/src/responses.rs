use serde::{Deserialize, Deserializer, Serialize};

use crate::types::{ChatTurn, Sender};

/// Reply from `POST /chat`.
///
/// Only `response` is required. The backend also echoes the user id and a
/// timestamp, but early-return paths (profile confirmation, blank input)
/// send `response` alone, so everything else is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub profile_updated: bool,
}

impl ChatResponse {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            user_id: None,
            timestamp: None,
            profile_updated: false,
        }
    }
}

/// Reply from `GET /`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub bot: String,
}

/// Single message of the server-side short-term memory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub role: String,
    #[serde(default)]
    pub content: String,
}

impl HistoryEntry {
    /// Convert into a transcript turn; system messages have no turn.
    pub fn to_turn(&self) -> Option<ChatTurn> {
        Sender::from_role(&self.role).map(|sender| ChatTurn::new(sender, self.content.clone()))
    }
}

/// Reply from `GET /history/{user_id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub user_id: String,
    #[serde(default)]
    pub messages: Vec<HistoryEntry>,
}

impl HistoryResponse {
    pub fn turns(&self) -> Vec<ChatTurn> {
        self.messages.iter().filter_map(HistoryEntry::to_turn).collect()
    }
}

/// Generic `{"status": ...}` acknowledgement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Helper function to deserialize null as the type's default value
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Long-term facts the backend keeps about a user.
///
/// An unknown user comes back as `{}`, so every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub preferences: Vec<String>,
    #[serde(default)]
    pub tone: Option<String>,
}

impl UserProfile {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.location.is_none() && self.preferences.is_empty() && self.tone.is_none()
    }

    /// Known fields as `(label, value)` pairs, in display order
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = Vec::new();
        if let Some(name) = &self.name {
            entries.push(("name", name.clone()));
        }
        if let Some(location) = &self.location {
            entries.push(("location", location.clone()));
        }
        if !self.preferences.is_empty() {
            entries.push(("preferences", self.preferences.join(", ")));
        }
        if let Some(tone) = &self.tone {
            entries.push(("tone", tone.clone()));
        }
        entries
    }
}

/// Reply from `GET /profile/{user_id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub user_id: String,
    #[serde(default)]
    pub profile: UserProfile,
}

/// One stored memory summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryEntry {
    pub text: String,
    #[serde(default)]
    pub timestamp: String,
}

/// Reply from `GET /memories/{user_id}`, newest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoriesResponse {
    pub user_id: String,
    #[serde(default)]
    pub memories: Vec<MemoryEntry>,
}
