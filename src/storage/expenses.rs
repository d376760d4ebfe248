//! Expense repository for CSV storage
//!
//! Persists the full expense set to `expenses.csv`, one row per expense in
//! insertion order. File order is what display indices are computed from.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PennyError, PennyResult};
use crate::models::{
    format_date, normalize_category, parse_amount, parse_date, Expense, ExpenseId,
};

use super::file_io::{append_csv, read_csv, write_csv_atomic};

/// Column order of `expenses.csv`
pub const EXPENSE_HEADER: [&str; 5] = ["id", "amount", "category", "date", "note"];

/// One row of `expenses.csv`, kept as text so the file stays human-editable
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ExpenseRow {
    id: String,
    amount: String,
    category: String,
    date: String,
    note: String,
}

impl From<&Expense> for ExpenseRow {
    fn from(expense: &Expense) -> Self {
        Self {
            id: expense.id.to_storage_string(),
            amount: expense.amount.to_string(),
            category: expense.category.clone(),
            date: format_date(expense.date),
            note: expense.note.clone(),
        }
    }
}

impl ExpenseRow {
    fn into_expense(self, line: usize) -> PennyResult<Expense> {
        let invalid = |e: PennyError| PennyError::Storage(format!("Invalid expense on line {}: {}", line, e));

        let id = ExpenseId::parse(&self.id).map_err(|_| {
            PennyError::Storage(format!("Invalid expense id on line {}: '{}'", line, self.id))
        })?;

        let expense = Expense {
            id,
            amount: parse_amount(&self.amount).map_err(invalid)?,
            category: normalize_category(&self.category).map_err(invalid)?,
            date: parse_date(&self.date).map_err(invalid)?,
            note: self.note,
        };

        Ok(expense)
    }
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
}

impl ExpenseRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file has been created yet
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load all expenses in file order
    ///
    /// A missing file is an empty set. Rows that fail validation or repeat an
    /// ID are reported as storage errors rather than skipped, so a later
    /// rewrite can never silently drop them.
    pub fn load(&self) -> PennyResult<Vec<Expense>> {
        let rows: Vec<(usize, ExpenseRow)> = read_csv(&self.path)?;

        let mut seen = HashSet::with_capacity(rows.len());
        let mut expenses = Vec::with_capacity(rows.len());
        for (line, row) in rows {
            let expense = row.into_expense(line)?;
            if !seen.insert(expense.id) {
                return Err(PennyError::Storage(format!(
                    "Duplicate expense id on line {}: {}",
                    line,
                    expense.id.to_storage_string()
                )));
            }
            expenses.push(expense);
        }

        tracing::debug!(count = expenses.len(), path = %self.path.display(), "loaded expenses");
        Ok(expenses)
    }

    /// Replace the persisted set with `expenses`, preserving their order
    pub fn save_all(&self, expenses: &[Expense]) -> PennyResult<()> {
        let rows: Vec<ExpenseRow> = expenses.iter().map(ExpenseRow::from).collect();
        write_csv_atomic(&self.path, &EXPENSE_HEADER, &rows)?;

        tracing::debug!(count = rows.len(), path = %self.path.display(), "saved expenses");
        Ok(())
    }

    /// Add one expense after the existing ones
    pub fn append(&self, expense: &Expense) -> PennyResult<()> {
        append_csv(&self.path, &EXPENSE_HEADER, &ExpenseRow::from(expense))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ExpenseRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = ExpenseRepository::new(temp_dir.path().join("expenses.csv"));
        (temp_dir, repo)
    }

    fn expense(amount: &str, category: &str, date: &str, note: &str) -> Expense {
        Expense::from_input(amount, category, date, Some(note)).unwrap()
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        assert!(repo.load().unwrap().is_empty());
        assert!(!repo.exists());
    }

    #[test]
    fn test_append_and_load_preserves_order() {
        let (_temp_dir, repo) = create_test_repo();
        let food = expense("50", "food", "20-02-2026", "lunch");
        let transport = expense("120", "transport", "19-02-2026", "");

        repo.append(&food).unwrap();
        repo.append(&transport).unwrap();

        let loaded = repo.load().unwrap();
        assert_eq!(loaded, vec![food, transport]);
    }

    #[test]
    fn test_file_layout() {
        let (_temp_dir, repo) = create_test_repo();
        let food = expense("50", "food", "20-02-2026", "lunch, with friends");
        repo.append(&food).unwrap();

        let contents = fs::read_to_string(repo.path()).unwrap();
        let expected = format!(
            "id,amount,category,date,note\n{},50.00,food,20-02-2026,\"lunch, with friends\"\n",
            food.id.to_storage_string()
        );
        assert_eq!(contents, expected);
    }

    #[test]
    fn test_save_all_of_load_is_noop() {
        let (_temp_dir, repo) = create_test_repo();
        repo.append(&expense("50", "food", "20-02-2026", "lunch")).unwrap();
        repo.append(&expense("120.5", "transport", "19-02-2026", "")).unwrap();
        repo.append(&expense("9.99", "misc", "01-03-2026", "quote \" inside")).unwrap();

        let before = fs::read(repo.path()).unwrap();
        repo.save_all(&repo.load().unwrap()).unwrap();
        let after = fs::read(repo.path()).unwrap();

        assert_eq!(before, after);
    }

    #[test]
    fn test_save_all_replaces_everything() {
        let (_temp_dir, repo) = create_test_repo();
        repo.append(&expense("50", "food", "20-02-2026", "")).unwrap();

        let replacement = vec![expense("1", "misc", "01-01-2026", "")];
        repo.save_all(&replacement).unwrap();

        assert_eq!(repo.load().unwrap(), replacement);
    }

    #[test]
    fn test_invalid_row_is_reported() {
        let (_temp_dir, repo) = create_test_repo();
        fs::write(
            repo.path(),
            "id,amount,category,date,note\n550e8400-e29b-41d4-a716-446655440000,-5.00,food,20-02-2026,\n",
        )
        .unwrap();

        let err = repo.load().unwrap_err();
        assert!(matches!(err, PennyError::Storage(ref msg) if msg.contains("line 2")));
    }

    #[test]
    fn test_duplicate_id_is_reported() {
        let (_temp_dir, repo) = create_test_repo();
        let food = expense("50", "food", "20-02-2026", "");
        repo.save_all(&[food.clone(), food]).unwrap();

        let err = repo.load().unwrap_err();
        assert!(err.to_string().contains("Duplicate expense id"));
    }
}
