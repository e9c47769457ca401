// Models module - conversation turns and the data structures exchanged with the Nova backend
pub mod types;
pub mod requests;
pub mod responses;


// Re-export commonly used types
pub use types::{Sender, ChatTurn};
pub use requests::ChatRequest;
pub use responses::{
    ChatResponse,
    HealthStatus,
    HistoryEntry, HistoryResponse,
    MemoryEntry, MemoriesResponse,
    ProfileResponse, UserProfile,
    StatusResponse,
};
