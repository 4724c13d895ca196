//! Application state domain model.
//!
//! Contains the root aggregate that persists across application restarts.

use crate::conversation::Conversation;
use serde::{Deserialize, Serialize};

/// Application state that persists across restarts.
///
/// This is the root aggregate: it owns the API key, the conversation list,
/// and the pointer to the currently displayed conversation.
///
/// Every field carries a serde default so that a partial or
/// forward-compatible persisted blob overlays cleanly onto the default
/// state at load time; unknown extra fields are ignored.
///
/// # Fields
///
/// * `api_key` - Optional credential string. Stored, never used by this core.
/// * `conversations` - Ordered conversation list; `id`s are unique and
///   insertion order defines the default display order.
/// * `current_conversation_id` - Reference to the conversation the UI is
///   displaying, or `None`. When set, it matches the `id` of some element
///   of `conversations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// API key for the chat backend, if configured.
    #[serde(default)]
    pub api_key: Option<String>,

    /// All conversations, in insertion order.
    #[serde(default)]
    pub conversations: Vec<Conversation>,

    /// ID of the currently active conversation.
    #[serde(default)]
    pub current_conversation_id: Option<String>,
}

impl AppState {
    /// Creates a new AppState with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a conversation by id.
    pub fn conversation(&self, id: &str) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == id)
    }

    /// Looks up a conversation by id, mutably.
    pub fn conversation_mut(&mut self, id: &str) -> Option<&mut Conversation> {
        self.conversations.iter_mut().find(|c| c.id == id)
    }

    /// Returns true if a conversation with the given id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.conversations.iter().any(|c| c.id == id)
    }
}
