//! Monthly Summary
//!
//! Totals spending for one calendar month, overall and per category.

use std::collections::HashMap;

use crate::error::{PennyError, PennyResult};
use crate::models::{Expense, Money};

/// Years accepted by the summary
pub const MIN_YEAR: i32 = 2000;
pub const MAX_YEAR: i32 = 2100;

/// Spending in one category for the month
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
    /// Number of expenses in the category
    pub count: usize,
    /// Share of the month's total, 0-100
    pub percentage: f64,
}

/// Monthly Summary
#[derive(Debug, Clone)]
pub struct MonthlySummary {
    pub month: u32,
    pub year: i32,
    /// Sum of every matching expense
    pub total: Money,
    pub expense_count: usize,
    /// Per-category totals, largest first
    pub categories: Vec<CategoryTotal>,
}

impl MonthlySummary {
    /// Aggregate the expenses dated in `month`/`year`
    ///
    /// Fails with `InvalidDate` for a month outside 1-12 or a year outside
    /// 2000-2100, and with `NoExpenses` when nothing falls in the month.
    pub fn generate(expenses: &[Expense], month: u32, year: i32) -> PennyResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(PennyError::InvalidDate(format!("month {} (must be 1-12)", month)));
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(PennyError::InvalidDate(format!(
                "year {} (must be {}-{})",
                year, MIN_YEAR, MAX_YEAR
            )));
        }

        let in_month: Vec<&Expense> = expenses.iter().filter(|e| e.in_month(month, year)).collect();
        if in_month.is_empty() {
            return Err(PennyError::NoExpenses(format!("for {:02}/{}", month, year)));
        }

        let overflow = || {
            PennyError::Validation(format!(
                "total for {:02}/{} is too large to add up",
                month, year
            ))
        };

        let mut total = Money::zero();
        let mut by_category: HashMap<&str, (Money, usize)> = HashMap::new();
        for expense in &in_month {
            total = total.checked_add(expense.amount).ok_or_else(overflow)?;

            let entry = by_category
                .entry(expense.category.as_str())
                .or_insert((Money::zero(), 0));
            entry.0 = entry.0.checked_add(expense.amount).ok_or_else(overflow)?;
            entry.1 += 1;
        }

        let mut categories: Vec<CategoryTotal> = by_category
            .into_iter()
            .map(|(category, (amount, count))| CategoryTotal {
                category: category.to_string(),
                total: amount,
                count,
                percentage: amount.cents() as f64 / total.cents() as f64 * 100.0,
            })
            .collect();

        // Largest spend first; ties broken by name so output is stable
        categories.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.category.cmp(&b.category)));

        Ok(Self {
            month,
            year,
            total,
            expense_count: in_month.len(),
            categories,
        })
    }

    /// Total for one category, if it had any spending this month
    pub fn total_for(&self, category: &str) -> Option<Money> {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(amount: &str, category: &str, date: &str) -> Expense {
        Expense::from_input(amount, category, date, None).unwrap()
    }

    fn sample() -> Vec<Expense> {
        vec![
            expense("50", "food", "20-02-2026"),
            expense("30", "food", "15-02-2026"),
            expense("120", "transport", "18-02-2026"),
            expense("999", "food", "20-03-2026"),
            expense("5", "food", "20-02-2025"),
        ]
    }

    #[test]
    fn test_totals_for_month() {
        let summary = MonthlySummary::generate(&sample(), 2, 2026).unwrap();

        assert_eq!(summary.total, Money::from_cents(20000));
        assert_eq!(summary.expense_count, 3);
        assert_eq!(summary.total_for("food"), Some(Money::from_cents(8000)));
        assert_eq!(summary.total_for("transport"), Some(Money::from_cents(12000)));
        assert_eq!(summary.total_for("rent"), None);
    }

    #[test]
    fn test_breakdown_sums_to_total() {
        let summary = MonthlySummary::generate(&sample(), 2, 2026).unwrap();
        let breakdown = summary
            .categories
            .iter()
            .try_fold(Money::zero(), |acc, c| acc.checked_add(c.total));
        assert_eq!(breakdown, Some(summary.total));

        let pct: f64 = summary.categories.iter().map(|c| c.percentage).sum();
        assert!((pct - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_sorted_largest_first() {
        let summary = MonthlySummary::generate(&sample(), 2, 2026).unwrap();
        let order: Vec<&str> = summary.categories.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(order, vec!["transport", "food"]);
        assert_eq!(summary.categories[1].count, 2);
    }

    #[test]
    fn test_empty_month() {
        let err = MonthlySummary::generate(&sample(), 7, 2026).unwrap_err();
        assert!(matches!(err, PennyError::NoExpenses(_)));
    }

    #[test]
    fn test_month_and_year_bounds() {
        for (month, year) in [(0, 2026), (13, 2026), (2, 1999), (2, 2101)] {
            let err = MonthlySummary::generate(&sample(), month, year).unwrap_err();
            assert!(matches!(err, PennyError::InvalidDate(_)), "{}/{}", month, year);
        }
    }

    #[test]
    fn test_overflowing_total_is_an_error() {
        let mut first = expense("1", "big", "20-02-2026");
        let mut second = expense("1", "big", "21-02-2026");
        first.amount = Money::from_cents(i64::MAX - 10);
        second.amount = Money::from_cents(20);

        let err = MonthlySummary::generate(&[first, second], 2, 2026).unwrap_err();
        assert!(matches!(err, PennyError::Validation(ref m) if m.contains("02/2026")));
    }
}
