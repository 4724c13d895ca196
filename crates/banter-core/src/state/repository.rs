//! State repository trait.
//!
//! Defines the interface for persisting the application state as a single
//! opaque blob.

use crate::error::Result;
use crate::state::model::AppState;

/// An abstract repository for persisting the full application state.
///
/// This trait is the persistence gateway between the store and durable
/// storage, decoupling the core logic from the specific storage mechanism
/// (e.g., a JSON file, an in-memory mock).
///
/// The whole state travels as one unit: `save` overwrites the previous
/// blob, and `load` returns whatever was last saved, so round-tripping
/// through a repository preserves the state field for field.
pub trait StateRepository: Send + Sync {
    /// Loads the persisted application state.
    ///
    /// # Returns
    ///
    /// - `Ok(AppState)`: The persisted state; a missing blob is not an
    ///   error and yields the default (empty) state.
    /// - `Err(_)`: The blob exists but could not be read or parsed. The
    ///   caller is expected to log the error and fall back to defaults.
    fn load(&self) -> Result<AppState>;

    /// Saves the full application state, replacing any previous blob.
    ///
    /// Implementations must never leave a partially-written blob visible
    /// to a subsequent `load`.
    fn save(&self, state: &AppState) -> Result<()>;
}
