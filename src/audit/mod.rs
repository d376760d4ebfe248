//! Audit logging system for Penny
//!
//! Records every add, edit and delete with before/after snapshots in an
//! append-only audit log.
//!
//! # Architecture
//!
//! - `AuditEntry`: a single log entry with timestamp, operation, expense ID
//!   and optional before/after values.
//! - `AuditLogger`: writes entries to the audit log file as JSON lines.
//! - `generate_diff`: builds a human-readable summary of what an edit changed.
//!
//! # Example
//!
//! ```rust,ignore
//! use penny::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! let entry = AuditEntry::create(expense.id.to_string(), Some(expense.describe()), &expense);
//! logger.log(&entry)?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
