//! Expense service
//!
//! Business logic for expenses: validation on the way in, and the mapping
//! between transient display indices and stable expense IDs.
//!
//! Display indices are 1-based positions in the current file order. They are
//! recomputed from a fresh load on every call and never stored. Mutations
//! resolve an index to an [`ExpenseId`] first and then operate on that ID.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::error::{PennyError, PennyResult};
use crate::models::{
    format_date, normalize_category, normalize_note, parse_amount, parse_date, Expense, ExpenseId,
};
use crate::reports::MonthlySummary;
use crate::storage::Storage;

/// An expense paired with its display index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedExpense {
    pub display_index: usize,
    pub expense: Expense,
}

/// Input for creating a new expense, as typed by the user
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub amount: String,
    pub category: String,
    pub date: String,
    pub note: Option<String>,
}

/// Fields to change on an existing expense; `None` leaves a field as is
#[derive(Debug, Clone, Default)]
pub struct ExpenseUpdate {
    pub amount: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
    pub note: Option<String>,
}

impl ExpenseUpdate {
    pub fn is_empty(&self) -> bool {
        self.amount.is_none() && self.category.is_none() && self.date.is_none() && self.note.is_none()
    }

    /// Apply the update to a copy of `expense`, validating each supplied field
    pub fn apply(&self, expense: &Expense) -> PennyResult<Expense> {
        let mut updated = expense.clone();
        if let Some(amount) = &self.amount {
            updated.amount = parse_amount(amount)?;
        }
        if let Some(category) = &self.category {
            updated.category = normalize_category(category)?;
        }
        if let Some(date) = &self.date {
            updated.date = parse_date(date)?;
        }
        if let Some(note) = &self.note {
            updated.note = normalize_note(note);
        }
        updated.validate()?;
        Ok(updated)
    }
}

/// Criteria for filtering expenses; all set criteria must match
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    /// Normalized category to match exactly
    pub category: Option<String>,
    /// Inclusive start date
    pub from: Option<NaiveDate>,
    /// Inclusive end date
    pub to: Option<NaiveDate>,
}

impl ExpenseFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter from raw command-line values
    pub fn from_input(
        category: Option<&str>,
        from: Option<&str>,
        to: Option<&str>,
    ) -> PennyResult<Self> {
        let mut filter = Self::new();
        if let Some(category) = category {
            filter.category = Some(normalize_category(category)?);
        }
        filter.from = from.map(parse_date).transpose()?;
        filter.to = to.map(parse_date).transpose()?;

        if let (Some(from), Some(to)) = (filter.from, filter.to) {
            if from > to {
                return Err(PennyError::InvalidDate(format!(
                    "{} is after {}",
                    format_date(from),
                    format_date(to)
                )));
            }
        }
        Ok(filter)
    }

    /// Filter by category (normalized)
    pub fn category(mut self, category: &str) -> PennyResult<Self> {
        self.category = Some(normalize_category(category)?);
        Ok(self)
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.from.is_none() && self.to.is_none()
    }

    pub fn matches(&self, expense: &Expense) -> bool {
        self.category.as_ref().map_or(true, |c| &expense.category == c)
            && self.from.map_or(true, |from| expense.date >= from)
            && self.to.map_or(true, |to| expense.date <= to)
    }

    /// Human description used in messages, e.g. "in category 'food'"
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if let Some(category) = &self.category {
            parts.push(format!("in category '{}'", category));
        }
        match (self.from, self.to) {
            (Some(from), Some(to)) => {
                parts.push(format!("from {} to {}", format_date(from), format_date(to)))
            }
            (Some(from), None) => parts.push(format!("from {}", format_date(from))),
            (None, Some(to)) => parts.push(format!("up to {}", format_date(to))),
            (None, None) => {}
        }
        if parts.is_empty() {
            "at all".to_string()
        } else {
            parts.join(" ")
        }
    }
}

/// Pair each expense with its 1-based position
pub fn number_expenses(expenses: Vec<Expense>) -> Vec<IndexedExpense> {
    expenses
        .into_iter()
        .enumerate()
        .map(|(i, expense)| IndexedExpense {
            display_index: i + 1,
            expense,
        })
        .collect()
}

/// Map a 1-based display index to the stable ID of the expense at that position
pub fn resolve_display_index(expenses: &[Expense], display_index: usize) -> PennyResult<ExpenseId> {
    display_index
        .checked_sub(1)
        .and_then(|i| expenses.get(i))
        .map(|e| e.id)
        .ok_or_else(|| PennyError::expense_not_found(display_index))
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate and record a new expense
    pub fn add(&self, input: CreateExpenseInput) -> PennyResult<Expense> {
        let expense = Expense::from_input(
            &input.amount,
            &input.category,
            &input.date,
            input.note.as_deref(),
        )
        .map_err(|e| {
            tracing::warn!(error = %e, "rejected new expense");
            e
        })?;

        self.storage.expenses.append(&expense)?;
        report_audit_failure(expense.id, self.storage.log_create(&expense));

        tracing::info!(id = %expense.id, "added expense {}", expense.describe());
        Ok(expense)
    }

    /// All expenses with their display indices, in file order
    pub fn view_all(&self) -> PennyResult<Vec<IndexedExpense>> {
        let expenses = self.storage.expenses.load()?;
        if expenses.is_empty() {
            tracing::warn!("no expense data found");
        }
        Ok(number_expenses(expenses))
    }

    /// Expenses matching `filter`, in file order
    ///
    /// Each result keeps the display index it has in the full listing, so
    /// the numbers shown match `view_all` and can be used with edit/delete.
    pub fn filter(&self, filter: &ExpenseFilter) -> PennyResult<Vec<IndexedExpense>> {
        let matched: Vec<IndexedExpense> = number_expenses(self.storage.expenses.load()?)
            .into_iter()
            .filter(|indexed| filter.matches(&indexed.expense))
            .collect();

        if matched.is_empty() {
            tracing::warn!("no expenses {}", filter.describe());
            return Err(PennyError::NoExpenses(filter.describe()));
        }

        tracing::info!(count = matched.len(), "filtered expenses {}", filter.describe());
        Ok(matched)
    }

    /// Totals for one calendar month
    pub fn summary(&self, month: u32, year: i32) -> PennyResult<MonthlySummary> {
        let expenses = self.storage.expenses.load()?;
        let summary = MonthlySummary::generate(&expenses, month, year)?;

        tracing::info!(month, year, total = %summary.total, "generated monthly summary");
        Ok(summary)
    }

    /// Look up one expense by display index
    pub fn get(&self, display_index: usize) -> PennyResult<IndexedExpense> {
        let expenses = self.storage.expenses.load()?;
        let id = self.resolve(&expenses, display_index)?;
        let position = position_of(&expenses, id)?;

        Ok(IndexedExpense {
            display_index,
            expense: expenses[position].clone(),
        })
    }

    /// Apply a partial update to the expense at `display_index`
    pub fn edit(&self, display_index: usize, update: &ExpenseUpdate) -> PennyResult<Expense> {
        if update.is_empty() {
            return Err(PennyError::Validation(
                "provide at least one of --amount, --category, --date or --note".into(),
            ));
        }

        let mut expenses = self.storage.expenses.load()?;
        let id = self.resolve(&expenses, display_index)?;
        let position = position_of(&expenses, id)?;

        let before = expenses[position].clone();
        let after = update.apply(&before)?;
        expenses[position] = after.clone();

        self.storage.expenses.save_all(&expenses)?;
        report_audit_failure(id, self.storage.log_update(&before, &after));

        tracing::info!(id = %id, display_index, "edited expense");
        Ok(after)
    }

    /// Remove the expense at `display_index`, returning it
    pub fn delete(&self, display_index: usize) -> PennyResult<Expense> {
        let mut expenses = self.storage.expenses.load()?;
        let id = self.resolve(&expenses, display_index)?;
        let position = position_of(&expenses, id)?;

        let removed = expenses.remove(position);
        self.storage.expenses.save_all(&expenses)?;
        report_audit_failure(id, self.storage.log_delete(&removed));

        tracing::info!(id = %id, display_index, "deleted expense");
        Ok(removed)
    }

    /// Distinct categories in use, sorted
    pub fn categories(&self) -> PennyResult<Vec<String>> {
        let expenses = self.storage.expenses.load()?;
        let categories: BTreeSet<String> = expenses.into_iter().map(|e| e.category).collect();
        Ok(categories.into_iter().collect())
    }

    fn resolve(&self, expenses: &[Expense], display_index: usize) -> PennyResult<ExpenseId> {
        resolve_display_index(expenses, display_index).map_err(|e| {
            tracing::warn!(display_index, total = expenses.len(), "display index not found");
            e
        })
    }
}

/// The expense file is already written when this runs, so a failed audit
/// write is logged and the operation still succeeds.
fn report_audit_failure(id: ExpenseId, result: PennyResult<()>) {
    if let Err(e) = result {
        tracing::warn!(id = %id, error = %e, "failed to write audit entry");
    }
}

fn position_of(expenses: &[Expense], id: ExpenseId) -> PennyResult<usize> {
    expenses
        .iter()
        .position(|e| e.id == id)
        .ok_or_else(|| PennyError::NotFound {
            entity_type: "Expense",
            identifier: id.to_string(),
        })
}
