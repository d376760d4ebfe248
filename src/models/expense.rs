//! Expense model
//!
//! An expense is a single recorded spend: a positive amount, a category
//! label, the calendar date it happened on and an optional note. Raw user
//! input is validated here before it can reach storage.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::ExpenseId;
use super::money::Money;
use crate::error::{PennyError, PennyResult};

/// Textual date format used on input, in listings and in storage
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Largest amount a single expense may have (1,000,000,000.00)
///
/// Keeps sums over any realistic number of records inside `i64` cents.
pub const MAX_AMOUNT: Money = Money::from_cents(100_000_000_000);

/// A tracked expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Stable identifier, assigned once at creation
    pub id: ExpenseId,

    /// Amount spent (always positive)
    pub amount: Money,

    /// Normalized category label
    pub category: String,

    /// Day the expense happened
    #[serde(with = "date_serde")]
    pub date: NaiveDate,

    /// Free-text note
    #[serde(default)]
    pub note: String,
}

impl Expense {
    /// Create an expense from already-parsed values, assigning a fresh ID
    ///
    /// The values are still checked, so an expense built this way upholds
    /// the same invariants as one built from raw input.
    pub fn new(
        amount: Money,
        category: &str,
        date: NaiveDate,
        note: impl Into<String>,
    ) -> PennyResult<Self> {
        let expense = Self {
            id: ExpenseId::new(),
            amount,
            category: normalize_category(category)?,
            date,
            note: normalize_note(&note.into()),
        };
        expense.validate()?;
        Ok(expense)
    }

    /// Build an expense from raw command-line values
    pub fn from_input(
        amount: &str,
        category: &str,
        date: &str,
        note: Option<&str>,
    ) -> PennyResult<Self> {
        Self::new(
            parse_amount(amount)?,
            category,
            parse_date(date)?,
            note.unwrap_or_default(),
        )
    }

    /// Check the record invariants
    pub fn validate(&self) -> PennyResult<()> {
        if !self.amount.is_positive() || self.amount > MAX_AMOUNT {
            return Err(PennyError::InvalidAmount(self.amount.to_string()));
        }
        if self.category.trim().is_empty() {
            return Err(PennyError::InvalidCategory(self.category.clone()));
        }
        Ok(())
    }

    /// Date in its `DD-MM-YYYY` form
    pub fn date_string(&self) -> String {
        format_date(self.date)
    }

    /// Short human description used in logs and the audit trail
    pub fn describe(&self) -> String {
        format!("{} {} on {}", self.amount, self.category, self.date_string())
    }

    /// Check whether the expense falls in the given month and year
    pub fn in_month(&self, month: u32, year: i32) -> bool {
        use chrono::Datelike;
        self.date.month() == month && self.date.year() == year
    }
}

/// Parse a user-supplied amount, rejecting anything not strictly positive
/// or above `MAX_AMOUNT`
pub fn parse_amount(raw: &str) -> PennyResult<Money> {
    let amount =
        Money::parse(raw).map_err(|_| PennyError::InvalidAmount(raw.trim().to_string()))?;
    if !amount.is_positive() || amount > MAX_AMOUNT {
        return Err(PennyError::InvalidAmount(raw.trim().to_string()));
    }
    Ok(amount)
}

/// Parse a `DD-MM-YYYY` date, rejecting malformed or impossible dates
pub fn parse_date(raw: &str) -> PennyResult<NaiveDate> {
    let trimmed = raw.trim();
    let invalid = || PennyError::InvalidDate(trimmed.to_string());

    // chrono accepts short years for %Y, so insist on a four-digit year
    let parts: Vec<&str> = trimmed.split('-').collect();
    if parts.len() != 3 || parts[2].len() != 4 {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| invalid())
}

/// Format a date as `DD-MM-YYYY`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Trim and lowercase a category, rejecting empty labels
pub fn normalize_category(raw: &str) -> PennyResult<String> {
    let category = raw.trim().to_lowercase();
    if category.is_empty() {
        return Err(PennyError::InvalidCategory(raw.to_string()));
    }
    Ok(category)
}

pub fn normalize_note(raw: &str) -> String {
    raw.trim().to_string()
}

mod date_serde {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{format_date, DATE_FORMAT};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&s, DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32, m: u32, y: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_from_input() {
        let expense = Expense::from_input("50", "  Food ", "20-02-2026", Some(" lunch ")).unwrap();
        assert_eq!(expense.amount.cents(), 5000);
        assert_eq!(expense.category, "food");
        assert_eq!(expense.date, date(20, 2, 2026));
        assert_eq!(expense.note, "lunch");
    }

    #[test]
    fn test_note_defaults_to_empty() {
        let expense = Expense::from_input("12.5", "transport", "19-02-2026", None).unwrap();
        assert_eq!(expense.note, "");
    }

    #[test]
    fn test_each_expense_gets_fresh_id() {
        let a = Expense::from_input("1", "food", "01-01-2026", None).unwrap();
        let b = Expense::from_input("1", "food", "01-01-2026", None).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_amount_must_be_positive() {
        for raw in ["0", "-5", "0.00", "0.001"] {
            let err = Expense::from_input(raw, "food", "20-02-2026", None).unwrap_err();
            assert!(matches!(err, PennyError::InvalidAmount(_)), "{}", raw);
        }
    }

    #[test]
    fn test_amount_is_capped() {
        let expense = Expense::from_input("1000000000", "rent", "20-02-2026", None).unwrap();
        assert_eq!(expense.amount, MAX_AMOUNT);

        for raw in ["1000000000.01", "90000000000000000"] {
            let err = Expense::from_input(raw, "rent", "20-02-2026", None).unwrap_err();
            assert!(matches!(err, PennyError::InvalidAmount(ref v) if v == raw), "{}", raw);
        }
    }

    #[test]
    fn test_amount_must_be_numeric() {
        let err = parse_amount("fifty").unwrap_err();
        assert!(matches!(err, PennyError::InvalidAmount(ref v) if v == "fifty"));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("20-02-2026").unwrap(), date(20, 2, 2026));
        assert_eq!(parse_date(" 01-12-2025 ").unwrap(), date(1, 12, 2025));
    }

    #[test]
    fn test_parse_date_rejects_bad_input() {
        for raw in ["2026-02-20", "20/02/2026", "31-02-2026", "32-01-2026", "20-02-26", "", "today"] {
            let err = parse_date(raw).unwrap_err();
            assert!(matches!(err, PennyError::InvalidDate(_)), "{}", raw);
        }
    }

    #[test]
    fn test_leap_day() {
        assert!(parse_date("29-02-2028").is_ok());
        assert!(parse_date("29-02-2026").is_err());
    }

    #[test]
    fn test_empty_category_rejected() {
        let err = Expense::from_input("5", "   ", "20-02-2026", None).unwrap_err();
        assert!(matches!(err, PennyError::InvalidCategory(_)));
    }

    #[test]
    fn test_in_month() {
        let expense = Expense::from_input("5", "food", "20-02-2026", None).unwrap();
        assert!(expense.in_month(2, 2026));
        assert!(!expense.in_month(3, 2026));
        assert!(!expense.in_month(2, 2025));
    }

    #[test]
    fn test_json_uses_display_forms() {
        let expense = Expense::from_input("5", "food", "20-02-2026", None).unwrap();
        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(json["date"], "20-02-2026");
        assert_eq!(json["amount"], "5.00");

        let back: Expense = serde_json::from_value(json).unwrap();
        assert_eq!(back, expense);
    }
}
