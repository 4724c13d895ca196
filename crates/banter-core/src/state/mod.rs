//! Application state module.
//!
//! # Module Structure
//!
//! - `model`: Root state aggregate (`AppState`)
//! - `repository`: Persistence gateway trait (`StateRepository`)

mod model;
mod repository;

// Re-export public API
pub use model::AppState;
pub use repository::StateRepository;
