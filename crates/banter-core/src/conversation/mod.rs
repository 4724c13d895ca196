//! Conversation domain module.
//!
//! # Module Structure
//!
//! - `message`: Message types (`MessageRole`, `Message`)
//! - `model`: Core conversation domain model (`Conversation`)

mod message;
mod model;

// Re-export public API
pub use message::{Message, MessageRole};
pub use model::Conversation;
