//! Configuration module for Penny
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::PennyPaths;
pub use settings::Settings;
