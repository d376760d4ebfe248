//! Expense display formatting
//!
//! Renders numbered expense listings as tables for terminal output.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::services::IndexedExpense;

/// One table row of a listing
#[derive(Tabled)]
struct ExpenseTableRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Note")]
    note: String,
}

impl ExpenseTableRow {
    fn new(indexed: &IndexedExpense, currency: &str) -> Self {
        let expense = &indexed.expense;
        Self {
            index: indexed.display_index,
            id: expense.id.to_string(),
            amount: expense.amount.format_with_symbol(currency),
            category: expense.category.clone(),
            date: expense.date_string(),
            note: truncate(&expense.note, 40),
        }
    }
}

/// Format a numbered list of expenses as a table
pub fn format_expense_table(expenses: &[IndexedExpense], currency: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows: Vec<ExpenseTableRow> = expenses
        .iter()
        .map(|e| ExpenseTableRow::new(e, currency))
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .modify(Columns::single(2), Alignment::right());

    format!("{}\n", table)
}

/// Format one expense for a confirmation prompt
pub fn format_expense_details(indexed: &IndexedExpense, currency: &str) -> String {
    let expense = &indexed.expense;
    let mut output = String::new();

    output.push_str(&format!("Expense #{} ({})\n", indexed.display_index, expense.id));
    output.push_str(&format!(
        "  Amount:   {}\n",
        expense.amount.format_with_symbol(currency)
    ));
    output.push_str(&format!("  Category: {}\n", expense.category));
    output.push_str(&format!("  Date:     {}\n", expense.date_string()));
    if !expense.note.is_empty() {
        output.push_str(&format!("  Note:     {}\n", expense.note));
    }

    output
}

/// Format the distinct category names
pub fn format_category_list(categories: &[String]) -> String {
    if categories.is_empty() {
        return "No categories yet.\n".to_string();
    }

    let mut output = String::from("Categories:\n");
    for category in categories {
        output.push_str(&format!("  - {}\n", category));
    }
    output
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars - 1).collect();
        format!("{}…", head)
    }
}
