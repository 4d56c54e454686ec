//! Budget display formatting

use crate::models::{Budget, BudgetStatus, YearMonth};

use super::report::format_percentage;

/// Every budget as `category (month): limit`
pub fn format_budget_list(budgets: &[Budget], symbol: &str) -> String {
    if budgets.is_empty() {
        return "No budgets set.\n".to_string();
    }

    let mut output = String::from("Current Budgets:\n");
    for budget in budgets {
        output.push_str(&format!(
            "  {} ({}): {}\n",
            budget.category,
            budget.month,
            budget.limit.format_with_symbol(symbol)
        ));
    }
    output
}

fn format_status_line(status: &BudgetStatus, symbol: &str) -> String {
    let pct = status
        .percentage
        .map(format_percentage)
        .unwrap_or_else(|| "n/a".to_string());

    format!(
        "  {}: {} / {} ({}) {} {}\n",
        status.category,
        status.spent.format_with_symbol(symbol),
        status.limit.format_with_symbol(symbol),
        pct,
        status.level.icon(),
        status.level.label()
    )
}

/// Spending against each budget of `month`
pub fn format_budget_status(month: YearMonth, statuses: &[BudgetStatus], symbol: &str) -> String {
    let mut output = format!("Budget Status for {}:\n", month);

    if statuses.is_empty() {
        output.push_str("  No budgets set for this month.\n");
        return output;
    }

    for status in statuses {
        output.push_str(&format_status_line(status, symbol));
    }
    output
}
