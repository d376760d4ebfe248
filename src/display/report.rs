//! Report formatting utilities for terminal output

use crate::reports::MonthlySummary;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "-".repeat(width)
}

/// Format a monthly summary with its per-category breakdown
pub fn format_monthly_summary(summary: &MonthlySummary, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Monthly Summary for {:02}/{}\n\n",
        summary.month, summary.year
    ));
    output.push_str(&format!(
        "Total Spent: {} ({} expense{})\n\n",
        summary.total.format_with_symbol(currency),
        summary.expense_count,
        if summary.expense_count == 1 { "" } else { "s" }
    ));

    output.push_str("Category Breakdown:\n");
    output.push_str(&separator(44));
    output.push('\n');

    for category in &summary.categories {
        output.push_str(&format!(
            "{:<20} {:>14} {:>8}\n",
            category.category,
            category.total.format_with_symbol(currency),
            format_percentage(category.percentage)
        ));
    }

    output
}
