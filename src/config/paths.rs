//! Path management for Penny
//!
//! ## Path Resolution Order
//!
//! 1. `PENNY_DATA_DIR` environment variable (if set)
//! 2. The platform data directory (`~/.local/share/penny` on Linux,
//!    `~/Library/Application Support/penny` on macOS, `%APPDATA%\penny` on Windows)
//! 3. `./.penny` when no home directory can be determined

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::PennyError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "PENNY_DATA_DIR";

/// Manages all paths used by Penny
#[derive(Debug, Clone)]
pub struct PennyPaths {
    /// Base directory for all Penny data
    base_dir: PathBuf,
}

impl PennyPaths {
    /// Create a new PennyPaths instance using the resolution order above
    pub fn new() -> Result<Self, PennyError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path(),
        };

        Ok(Self { base_dir })
    }

    /// Create PennyPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to expenses.csv
    pub fn expenses_file(&self) -> PathBuf {
        self.base_dir.join("expenses.csv")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), PennyError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PennyError::Io(format!("Failed to create base directory: {}", e)))
    }
}

fn resolve_default_path() -> PathBuf {
    ProjectDirs::from("", "", "penny")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".penny"))
}
