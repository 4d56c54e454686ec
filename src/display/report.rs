//! Report formatting for terminal output
//!
//! Shared layout helpers plus the text renderings of summaries, grouped
//! totals and the expense distribution.

use std::collections::BTreeMap;

use crate::models::{GroupTotals, Money, Summary, YearMonth};
use crate::reports::CategoryShare;

const WIDTH: usize = 50;

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

/// One block per whole 5% of share
pub fn share_bar(pct: f64) -> String {
    if pct <= 0.0 {
        return String::new();
    }
    "█".repeat((pct / 5.0) as usize)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

fn title_block(output: &mut String, title: &str) {
    output.push_str(&double_separator(WIDTH));
    output.push('\n');
    output.push_str(title);
    output.push('\n');
    output.push_str(&double_separator(WIDTH));
    output.push('\n');
}

/// Overall income, expense and balance
pub fn format_summary(summary: &Summary, symbol: &str) -> String {
    let mut output = String::new();
    title_block(&mut output, "FINANCIAL SUMMARY");

    output.push_str(&format!(
        "Total Income:   {}\n",
        summary.total_income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Total Expense:  {}\n",
        summary.total_expense.format_with_symbol(symbol)
    ));
    output.push_str(&separator(WIDTH));
    output.push('\n');

    let icon = if summary.balance.is_negative() { "✗" } else { "✓" };
    output.push_str(&format!(
        "Balance:        {} {}\n",
        summary.balance.format_with_symbol(symbol),
        icon
    ));
    output.push_str(&double_separator(WIDTH));
    output.push('\n');

    output
}

/// Grouped totals as `name : amount`, largest first
pub fn format_totals(title: &str, totals: &GroupTotals, symbol: &str) -> String {
    let mut output = String::new();
    title_block(&mut output, title);

    if totals.is_empty() {
        output.push_str("No transactions found.\n");
    }
    for (name, amount) in totals.sorted_desc() {
        output.push_str(&format!(
            "{:<20} : {}\n",
            truncate(name, 20),
            amount.format_with_symbol(symbol)
        ));
    }

    output.push_str(&double_separator(WIDTH));
    output.push('\n');
    output
}

/// One line per month, oldest first
pub fn format_monthly(monthly: &BTreeMap<YearMonth, Summary>, symbol: &str) -> String {
    if monthly.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    for (month, summary) in monthly {
        output.push_str(&format!(
            "{} | Income: {} | Expense: {} | Net: {}\n",
            month,
            summary.total_income.format_with_symbol(symbol),
            summary.total_expense.format_with_symbol(symbol),
            summary.balance.format_with_symbol(symbol)
        ));
    }
    output
}

/// Totals for a single month
pub fn format_month_report(month: YearMonth, summary: &Summary, symbol: &str) -> String {
    let mut output = String::new();
    title_block(&mut output, &format!("MONTHLY REPORT - {}", month));

    output.push_str(&format!(
        "Total Income:    {}\n",
        summary.total_income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Total Expense:   {}\n",
        summary.total_expense.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Net Balance:     {}\n",
        summary.balance.format_with_symbol(symbol)
    ));
    output.push_str(&double_separator(WIDTH));
    output.push('\n');
    output
}

/// Expense shares with a bar per category
pub fn format_distribution(shares: &[CategoryShare], symbol: &str) -> String {
    if shares.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let total: Money = shares.iter().map(|s| s.amount).sum();

    let mut output = String::from("Expense Distribution:\n");
    for share in shares {
        output.push_str(&format!(
            "  {} ({:.1}%) {} {}\n",
            share.category,
            share.percentage,
            share_bar(share.percentage),
            share.amount.format_with_symbol(symbol)
        ));
    }
    output.push_str(&separator(WIDTH));
    output.push('\n');
    output.push_str(&format!("Total Expense: {}\n", total.format_with_symbol(symbol)));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(50.0), "50%");
    }

    #[test]
    fn test_share_bar() {
        assert_eq!(share_bar(75.0).chars().count(), 15);
        assert_eq!(share_bar(4.9), "");
        assert_eq!(share_bar(0.0), "");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Test", 4), "Test");
        assert_eq!(truncate("Café au lait", 6), "Caf...");
    }

    #[test]
    fn test_format_summary() {
        let mut totals = GroupTotals::new();
        totals.add("Salary", Money::from_units(5000));
        totals.add("Rent", Money::from_units(1200));
        let summary = Summary::new(Money::from_units(5000), Money::from_units(1200), totals);

        let text = format_summary(&summary, "₹");
        assert!(text.contains("Total Income:   ₹5000.00"));
        assert!(text.contains("Total Expense:  ₹1200.00"));
        assert!(text.contains("Balance:        ₹3800.00 ✓"));
    }

    #[test]
    fn test_format_totals_sorted() {
        let mut totals = GroupTotals::new();
        totals.add("Food", Money::from_units(10));
        totals.add("Rent", Money::from_units(900));

        let text = format_totals("CATEGORY REPORT", &totals, "$");
        let rent = text.find("Rent").unwrap();
        let food = text.find("Food").unwrap();
        assert!(rent < food);
        assert!(text.contains("$900.00"));
    }

    #[test]
    fn test_format_monthly() {
        let mut monthly = BTreeMap::new();
        monthly.insert(
            YearMonth::new(2024, 1).unwrap(),
            Summary::new(Money::from_units(10), Money::from_units(25), GroupTotals::new()),
        );
        let text = format_monthly(&monthly, "₹");
        assert_eq!(
            text,
            "2024-01 | Income: ₹10.00 | Expense: ₹25.00 | Net: -₹15.00\n"
        );
    }

    #[test]
    fn test_format_distribution() {
        let shares = vec![CategoryShare {
            category: "Rent".into(),
            amount: Money::from_units(300),
            percentage: 100.0,
        }];
        let text = format_distribution(&shares, "₹");
        assert!(text.contains("Rent (100.0%) ████████████████████ ₹300.00"));
        assert_eq!(format_distribution(&[], "₹"), "No expenses found.\n");
    }
}
