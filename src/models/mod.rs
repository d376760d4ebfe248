//! Core data models for Penny
//!
//! This module contains the expense record, its stable identifier and the
//! money type used for amounts.

pub mod expense;
pub mod ids;
pub mod money;

pub use expense::{
    format_date, normalize_category, normalize_note, parse_amount, parse_date, Expense,
    DATE_FORMAT, MAX_AMOUNT,
};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
