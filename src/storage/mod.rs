//! Storage layer for Penny
//!
//! Provides CSV file storage with atomic rewrites and lazy file creation,
//! plus the audit trail for every mutation.

pub mod expenses;
pub mod file_io;

pub use expenses::{ExpenseRepository, EXPENSE_HEADER};
pub use file_io::{append_csv, read_csv, write_csv_atomic};

use crate::audit::{generate_diff, AuditEntry, AuditLogger};
use crate::config::paths::PennyPaths;
use crate::error::PennyResult;
use crate::models::Expense;

/// Main storage coordinator that provides access to the repository and audit log
pub struct Storage {
    pub expenses: ExpenseRepository,
    audit: AuditLogger,
    audit_enabled: bool,
}

impl Storage {
    /// Create a new Storage instance
    ///
    /// Nothing is created on disk until the first write.
    pub fn new(paths: PennyPaths) -> Self {
        Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            audit: AuditLogger::new(paths.audit_log()),
            audit_enabled: true,
        }
    }

    /// Turn audit logging on or off
    pub fn with_audit(mut self, enabled: bool) -> Self {
        self.audit_enabled = enabled;
        self
    }

    pub fn audit_log(&self) -> &AuditLogger {
        &self.audit
    }

    /// Record a newly added expense
    pub fn log_create(&self, expense: &Expense) -> PennyResult<()> {
        if !self.audit_enabled {
            return Ok(());
        }
        self.audit.log(&AuditEntry::create(
            expense.id.to_storage_string(),
            Some(expense.describe()),
            expense,
        ))
    }

    /// Record an edit along with a summary of the changed fields
    pub fn log_update(&self, before: &Expense, after: &Expense) -> PennyResult<()> {
        if !self.audit_enabled {
            return Ok(());
        }
        let diff = match (serde_json::to_value(before), serde_json::to_value(after)) {
            (Ok(b), Ok(a)) => generate_diff(&b, &a),
            _ => None,
        };
        self.audit.log(&AuditEntry::update(
            after.id.to_storage_string(),
            Some(after.describe()),
            before,
            after,
            diff,
        ))
    }

    /// Record a deleted expense
    pub fn log_delete(&self, expense: &Expense) -> PennyResult<()> {
        if !self.audit_enabled {
            return Ok(());
        }
        self.audit.log(&AuditEntry::delete(
            expense.id.to_storage_string(),
            Some(expense.describe()),
            expense,
        ))
    }
}
