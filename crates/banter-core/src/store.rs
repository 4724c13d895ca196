//! Conversation store.
//!
//! `ConversationStore` owns the application state and is the only component
//! allowed to mutate it. Every mutating operation applies its change
//! in-memory and then writes the full state through the injected
//! [`StateRepository`], so the persisted blob never lags behind an
//! operation that completed.

use crate::conversation::{Conversation, Message, MessageRole};
use crate::state::{AppState, StateRepository};
use std::sync::Arc;

/// Name given to the conversation synthesized at startup when no
/// conversations were loaded.
pub const DEFAULT_CONVERSATION_NAME: &str = "Default Conversation";

/// Holds the application state and exposes its read accessors and
/// mutating operations.
///
/// The store is constructed once per application run with an explicitly
/// injected repository; there is no ambient global state. Mutations take
/// `&mut self`, so exclusive ownership serializes operations at compile
/// time.
///
/// Storage faults never escape: a failed load falls back to the default
/// state and a failed save is dropped, both logged as warnings. The UI
/// layer re-reads the accessors after each mutation; it never sees an
/// error channel.
pub struct ConversationStore {
    /// The live in-memory state. Mutated only through store operations.
    state: AppState,
    /// Persistent storage backend for the full state blob.
    repository: Arc<dyn StateRepository>,
}

impl ConversationStore {
    /// Creates a store by rehydrating state from the repository.
    ///
    /// Loads the persisted snapshot, falling back to the default state if
    /// the load fails. If no conversations exist after loading, one
    /// default conversation is synthesized and selected, so the store is
    /// never presented to the UI with nothing to display.
    ///
    /// No save occurs here; the synthesized default is first persisted by
    /// the next mutating operation.
    pub fn new(repository: Arc<dyn StateRepository>) -> Self {
        let mut state = match repository.load() {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!("Failed to load persisted state, starting from defaults: {}", e);
                AppState::default()
            }
        };

        if state.conversations.is_empty() {
            let conversation = Conversation::new(DEFAULT_CONVERSATION_NAME);
            state.current_conversation_id = Some(conversation.id.clone());
            state.conversations.push(conversation);
        }

        Self { state, repository }
    }

    // ============================================================================
    // Accessors
    // ============================================================================

    /// Returns the currently displayed conversation, if the current
    /// pointer resolves to one.
    pub fn current_conversation(&self) -> Option<&Conversation> {
        self.state
            .current_conversation_id
            .as_deref()
            .and_then(|id| self.state.conversation(id))
    }

    /// Returns the configured API key, if any.
    pub fn api_key(&self) -> Option<&str> {
        self.state.api_key.as_deref()
    }

    /// Returns all conversations in insertion order.
    pub fn conversations(&self) -> &[Conversation] {
        &self.state.conversations
    }

    /// Returns the id of the currently displayed conversation, if any.
    pub fn current_conversation_id(&self) -> Option<&str> {
        self.state.current_conversation_id.as_deref()
    }

    /// Returns the full application state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    // ============================================================================
    // Mutating operations
    // ============================================================================

    /// Replaces the stored API key.
    pub fn set_api_key(&mut self, key: impl Into<String>) {
        self.state.api_key = Some(key.into());
        self.persist();
    }

    /// Appends a message to the current conversation's history.
    ///
    /// If no current conversation resolves, this is a silent no-op: no
    /// message is created and no save occurs.
    pub fn add_message_to_current_conversation(
        &mut self,
        text: impl Into<String>,
        role: MessageRole,
    ) {
        let Some(id) = self.state.current_conversation_id.clone() else {
            return;
        };
        let Some(conversation) = self.state.conversation_mut(&id) else {
            return;
        };

        conversation.push_message(Message::new(role, text));
        self.persist();
    }

    /// Creates a new empty conversation, appends it, and makes it current.
    ///
    /// The conversation is named `"New Chat N"` where N is the resulting
    /// conversation count. Returns the new conversation's id.
    pub fn create_new_conversation(&mut self) -> String {
        let name = format!("New Chat {}", self.state.conversations.len() + 1);
        let conversation = Conversation::new(name);
        let id = conversation.id.clone();

        self.state.conversations.push(conversation);
        self.state.current_conversation_id = Some(id.clone());
        self.persist();

        id
    }

    /// Renames the conversation with the given id.
    ///
    /// If the id does not match any conversation, this is a silent no-op
    /// and no save occurs.
    pub fn update_conversation_name(&mut self, id: &str, name: impl Into<String>) {
        if let Some(conversation) = self.state.conversation_mut(id) {
            conversation.name = name.into();
            self.persist();
        }
    }

    /// Makes the conversation with the given id current.
    ///
    /// If the id does not match any conversation, this is a silent no-op
    /// and no save occurs.
    pub fn switch_conversation(&mut self, id: &str) {
        if self.state.contains(id) {
            self.state.current_conversation_id = Some(id.to_string());
            self.persist();
        }
    }

    /// Removes the conversation with the given id, if present.
    ///
    /// If the deleted conversation was current, the current pointer moves
    /// to the first remaining conversation, or is cleared when none
    /// remain. A save occurs regardless of whether anything matched.
    pub fn delete_conversation(&mut self, id: &str) {
        self.state.conversations.retain(|c| c.id != id);

        if self.state.current_conversation_id.as_deref() == Some(id) {
            self.state.current_conversation_id =
                self.state.conversations.first().map(|c| c.id.clone());
        }

        self.persist();
    }

    /// Writes the full state through the repository, logging and dropping
    /// any failure.
    fn persist(&self) {
        if let Err(e) = self.repository.save(&self.state) {
            tracing::warn!("Failed to persist state: {}", e);
        }
    }
}
