//! Conversation domain model.

use super::message::Message;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named, ordered message history.
///
/// A conversation contains:
/// - A unique identifier, immutable after creation
/// - A mutable display name
/// - An append-only message history (insertion order = chronological order)
/// - A creation timestamp, immutable
///
/// This is the "pure" domain model that the store operates on, independent
/// of any specific storage format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    /// Unique conversation identifier (UUID format)
    pub id: String,
    /// Human-readable conversation name
    pub name: String,
    /// Ordered message history
    #[serde(default)]
    pub history: Vec<Message>,
    /// Timestamp when the conversation was created (epoch milliseconds)
    pub created_at: i64,
}

impl Conversation {
    /// Creates a new empty conversation with a freshly generated id and the
    /// current timestamp.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            history: Vec::new(),
            created_at: Utc::now().timestamp_millis(),
        }
    }

    /// Appends a message to the history. Existing messages are never
    /// reordered or removed.
    pub fn push_message(&mut self, message: Message) {
        self.history.push(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::message::MessageRole;

    #[test]
    fn test_new_conversation_is_empty() {
        let conversation = Conversation::new("Test");
        assert_eq!(conversation.name, "Test");
        assert!(conversation.history.is_empty());
        assert!(!conversation.id.is_empty());
    }

    #[test]
    fn test_new_generates_unique_ids() {
        let a = Conversation::new("A");
        let b = Conversation::new("B");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_push_message_appends_in_order() {
        let mut conversation = Conversation::new("Test");
        let first = Message::new(MessageRole::User, "first");
        let second = Message::new(MessageRole::Model, "second");
        conversation.push_message(first.clone());
        conversation.push_message(second.clone());

        assert_eq!(conversation.history.len(), 2);
        assert_eq!(conversation.history[0], first);
        assert_eq!(conversation.history[1], second);
    }

    #[test]
    fn test_created_at_serializes_camel_case() {
        let conversation = Conversation::new("Test");
        let json = serde_json::to_value(&conversation).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("created_at").is_none());
    }
}
