//! Service layer for Penny
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation and the display-index contract.

pub mod expense;

pub use expense::{
    number_expenses, resolve_display_index, CreateExpenseInput, ExpenseFilter, ExpenseService,
    ExpenseUpdate, IndexedExpense,
};
