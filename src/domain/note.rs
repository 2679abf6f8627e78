// src/domain/note.rs
use serde::{Deserialize, Serialize};

/// A note as stored by the remote notes API.
///
/// `id` and `created_at` are assigned by the service and only ever read back
/// from its responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Payload for creating a note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateNoteData {
    pub title: String,
    pub content: String,
}

/// Full replacement payload for updating a note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateNoteData {
    pub title: String,
    pub content: String,
}

impl Note {
    /// Case-insensitive substring match against title or content.
    /// An empty (or whitespace-only) query matches every note.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.content.to_lowercase().contains(&needle)
    }
}
