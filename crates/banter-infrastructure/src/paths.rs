//! Unified path management for banter state files.
//!
//! All banter persistence lives under one platform config directory,
//! resolved through the `dirs` crate. This ensures consistency across
//! Linux, macOS, and Windows.

use banter_core::error::{BanterError, Result};
use std::path::PathBuf;

/// Unified path management for banter.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/banter/            # Config directory (XDG on Linux)
/// └── state.json               # Full application state blob
/// ```
pub struct BanterPaths;

impl BanterPaths {
    /// Returns the banter configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/banter/`)
    /// - `Err(BanterError::Config)`: Could not determine the platform
    ///   config directory
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("banter"))
            .ok_or_else(|| BanterError::config("Cannot find config directory"))
    }

    /// Returns the path to the application state file.
    ///
    /// This is the single well-known key under which the whole state blob
    /// is stored.
    pub fn state_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("state.json"))
    }
}
