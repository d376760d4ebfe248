//! Reports for Penny
//!
//! Aggregations computed over the loaded expense set.

pub mod monthly;

pub use monthly::{CategoryTotal, MonthlySummary};
