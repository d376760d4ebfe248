//! Expense CLI commands
//!
//! Implements the add, view, filter, summary, edit, delete and categories
//! commands on top of `ExpenseService`.

use clap::Subcommand;

use super::prompt::confirm;
use crate::config::settings::Settings;
use crate::display::report::format_percentage;
use crate::display::{
    format_category_list, format_expense_details, format_expense_table, format_monthly_summary,
};
use crate::error::{PennyError, PennyResult};
use crate::services::{CreateExpenseInput, ExpenseFilter, ExpenseService, ExpenseUpdate};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Add a new expense
    Add {
        /// Amount spent (e.g., "50" or "12.50")
        #[arg(short, long, allow_hyphen_values = true)]
        amount: String,
        /// Category name (e.g., food, transport)
        #[arg(short, long)]
        category: String,
        /// Date of the expense (DD-MM-YYYY)
        #[arg(short, long)]
        date: String,
        /// Optional note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// List all expenses
    View,

    /// List expenses matching a category and/or date range
    Filter {
        /// Category to match
        #[arg(short, long)]
        category: Option<String>,
        /// Start date, inclusive (DD-MM-YYYY)
        #[arg(long)]
        from: Option<String>,
        /// End date, inclusive (DD-MM-YYYY)
        #[arg(long)]
        to: Option<String>,
    },

    /// Show the total and category breakdown for one month
    Summary {
        /// Month (1-12)
        #[arg(short, long)]
        month: u32,
        /// Year (e.g., 2026)
        #[arg(short, long)]
        year: i32,
    },

    /// Edit an expense by its number in `penny view`
    Edit {
        /// Expense number as shown by `penny view`
        index: usize,
        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New date (DD-MM-YYYY)
        #[arg(short, long)]
        date: Option<String>,
        /// New note (use "" to clear)
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Delete an expense by its number in `penny view`
    Delete {
        /// Expense number as shown by `penny view`
        index: usize,
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// List the categories in use
    Categories,
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> PennyResult<()> {
    let service = ExpenseService::new(storage);
    let currency = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            date,
            note,
        } => {
            let expense = service.add(CreateExpenseInput {
                amount,
                category,
                date,
                note,
            })?;
            println!(
                "✓ Expense added: {} - {} on {}",
                expense.amount.format_with_symbol(currency),
                expense.category,
                expense.date_string()
            );
        }

        ExpenseCommands::View => {
            let expenses = service.view_all()?;
            print!("{}", format_expense_table(&expenses, currency));
        }

        ExpenseCommands::Filter { category, from, to } => {
            let filter =
                ExpenseFilter::from_input(category.as_deref(), from.as_deref(), to.as_deref())?;
            if filter.is_empty() {
                return Err(PennyError::Validation(
                    "Provide at least one of --category, --from or --to".into(),
                ));
            }

            match service.filter(&filter) {
                Ok(expenses) => {
                    println!("Expenses {}:", filter.describe());
                    print!("{}", format_expense_table(&expenses, currency));
                }
                Err(e @ PennyError::NoExpenses(_)) => {
                    if filter.category.is_some() {
                        let categories = service.categories()?;
                        if !categories.is_empty() {
                            eprintln!("Available categories: {}", categories.join(", "));
                        }
                    }
                    return Err(e);
                }
                Err(e) => return Err(e),
            }
        }

        ExpenseCommands::Summary { month, year } => {
            let summary = service.summary(month, year)?;
            print!("{}", format_monthly_summary(&summary, currency));
            if let Some(top) = summary.categories.first() {
                println!();
                println!(
                    "Top category: {} ({})",
                    top.category,
                    format_percentage(top.percentage)
                );
            }
        }

        ExpenseCommands::Edit {
            index,
            amount,
            category,
            date,
            note,
        } => {
            let update = ExpenseUpdate {
                amount,
                category,
                date,
                note,
            };
            let updated = service.edit(index, &update)?;
            println!(
                "✓ Expense #{} updated: {} - {} on {}",
                index,
                updated.amount.format_with_symbol(currency),
                updated.category,
                updated.date_string()
            );
        }

        ExpenseCommands::Delete { index, yes } => {
            let target = service.get(index)?;

            if !yes {
                print!("{}", format_expense_details(&target, currency));
                if !confirm(&format!("Delete expense #{}?", index))? {
                    println!("Aborted.");
                    return Ok(());
                }
            }

            let removed = service.delete(index)?;
            println!(
                "✓ Expense #{} deleted: {} - {}",
                index,
                removed.amount.format_with_symbol(currency),
                removed.category
            );
        }

        ExpenseCommands::Categories => {
            let categories = service.categories()?;
            print!("{}", format_category_list(&categories));
        }
    }

    Ok(())
}
