//! Banter core: domain models and the conversation store.
//!
//! This crate holds everything the chat application's UI layer talks to:
//! the [`conversation`] and [`state`] domain models, the
//! [`StateRepository`](state::StateRepository) persistence seam, and the
//! [`ConversationStore`](store::ConversationStore) that ties them
//! together. Concrete storage backends live in `banter-infrastructure`.

pub mod conversation;
pub mod error;
pub mod state;
pub mod store;

// Re-export common error type
pub use error::BanterError;
