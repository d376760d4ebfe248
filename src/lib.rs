//! Penny - Terminal-based personal expense tracker
//!
//! This library provides the core functionality for the Penny expense
//! tracker: expenses are kept in a single CSV file and addressed from the
//! command line by their position in the listing.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, money, identifiers)
//! - `storage`: CSV file storage layer
//! - `services`: Business logic layer
//! - `reports`: Monthly summaries
//! - `audit`: Audit logging system
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use penny::config::{paths::PennyPaths, settings::Settings};
//! use penny::services::ExpenseService;
//! use penny::storage::Storage;
//!
//! let paths = PennyPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths).with_audit(settings.audit_enabled);
//! let expenses = ExpenseService::new(&storage).view_all()?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{PennyError, PennyResult};
