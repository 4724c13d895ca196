//! JSON file-backed state repository implementation.
//!
//! Stores the full application state as a single pretty-printed JSON file
//! and overwrites it atomically on every save.

use banter_core::error::{BanterError, Result};
use banter_core::state::{AppState, StateRepository};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::paths::BanterPaths;

/// JSON file-backed state repository.
///
/// Stores the state blob at `~/.config/banter/state.json` by default, or
/// at an explicit path for tests and embedders.
///
/// # Features
///
/// - **Atomic writes**: Uses tmp file + fsync + atomic rename pattern, so
///   a crashed save never leaves a half-written blob behind
/// - **Missing-file tolerance**: A state file that does not exist yet
///   loads as the default (empty) state, not an error
/// - **Forward compatibility**: Unknown fields in the blob are ignored at
///   deserialization time
pub struct JsonStateRepository {
    /// Path to the state file.
    path: PathBuf,
}

impl JsonStateRepository {
    /// Creates a repository over the default platform state file.
    ///
    /// # Errors
    ///
    /// Returns `BanterError::Config` if the platform config directory
    /// cannot be resolved.
    pub fn new() -> Result<Self> {
        Ok(Self {
            path: BanterPaths::state_file()?,
        })
    }

    /// Creates a repository over an explicit state file path.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Returns the path of the backing state file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateRepository for JsonStateRepository {
    fn load(&self) -> Result<AppState> {
        if !self.path.exists() {
            tracing::debug!("State file does not exist yet: {}", self.path.display());
            return Ok(AppState::default());
        }

        let blob = fs::read_to_string(&self.path).map_err(|e| {
            BanterError::io(format!(
                "Failed to read state file '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        // An empty file is treated like a missing one.
        if blob.trim().is_empty() {
            return Ok(AppState::default());
        }

        serde_json::from_str(&blob).map_err(|e| {
            BanterError::serialization(
                "JSON",
                format!("Failed to parse state file '{}': {}", self.path.display(), e),
            )
        })
    }

    fn save(&self, state: &AppState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    BanterError::io(format!(
                        "Failed to create state directory '{}': {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let json = serde_json::to_string_pretty(state)?;

        // Write to a temporary file in the same directory, then rename
        // over the real file so readers only ever see a complete blob.
        let tmp_path = self.path.with_extension("json.tmp");
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(json.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path).map_err(|e| {
            BanterError::io(format!(
                "Failed to rename temp file '{}' to '{}': {}",
                tmp_path.display(),
                self.path.display(),
                e
            ))
        })?;

        Ok(())
    }
}
