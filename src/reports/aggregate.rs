//! Pure rollups over a transaction snapshot
//!
//! Every function here takes borrowed, immutable input and allocates fresh
//! output. None of them touch the store or its lock.

use std::collections::BTreeMap;

use crate::models::{
    Budget, BudgetStatus, GroupTotals, Money, Summary, Transaction, TransactionType, YearMonth,
};

/// Total of all transactions of one type
pub fn sum_by_type(transactions: &[Transaction], kind: TransactionType) -> Money {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}

/// Group transactions by `key` and sum their amounts
pub fn group_sum<'a, I, F, K>(transactions: I, key: F) -> GroupTotals
where
    I: IntoIterator<Item = &'a Transaction>,
    F: Fn(&'a Transaction) -> K,
    K: AsRef<str>,
{
    let mut totals = GroupTotals::new();
    for txn in transactions {
        totals.add(key(txn).as_ref(), txn.amount);
    }
    totals
}

/// Totals per category, both income and expense
pub fn by_category(transactions: &[Transaction]) -> GroupTotals {
    group_sum(transactions, |t| t.category.as_str())
}

/// Totals per payment method, both income and expense
pub fn by_payment_method(transactions: &[Transaction]) -> GroupTotals {
    group_sum(transactions, |t| t.payment_method.as_str())
}

/// Totals per `YYYY-MM`, both income and expense
pub fn by_month(transactions: &[Transaction]) -> GroupTotals {
    group_sum(transactions, |t| t.month().to_string())
}

/// Income, expense, balance and category totals for a set of transactions
pub fn summarize(transactions: &[Transaction]) -> Summary {
    Summary::new(
        sum_by_type(transactions, TransactionType::Income),
        sum_by_type(transactions, TransactionType::Expense),
        by_category(transactions),
    )
}

/// One summary per month that has at least one transaction
pub fn monthly_summaries(transactions: &[Transaction]) -> BTreeMap<YearMonth, Summary> {
    let mut grouped: BTreeMap<YearMonth, Vec<Transaction>> = BTreeMap::new();
    for txn in transactions {
        grouped.entry(txn.month()).or_default().push(txn.clone());
    }

    grouped
        .into_iter()
        .map(|(month, txns)| (month, summarize(&txns)))
        .collect()
}

/// Transactions dated within `month`
pub fn in_month(transactions: &[Transaction], month: YearMonth) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| month.contains(t.date))
        .cloned()
        .collect()
}

/// Expense spent against each budget set for `month`, in budget order
pub fn budget_status(
    transactions: &[Transaction],
    budgets: &[Budget],
    month: YearMonth,
) -> Vec<BudgetStatus> {
    budgets
        .iter()
        .filter(|b| b.month == month)
        .map(|budget| {
            let spent: Money = transactions
                .iter()
                .filter(|t| t.is_expense() && month.contains(t.date))
                .filter(|t| t.in_category(&budget.category))
                .map(|t| t.amount)
                .sum();
            BudgetStatus::new(budget.category.clone(), spent, budget.limit)
        })
        .collect()
}

/// A category's slice of total expense
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub amount: Money,
    /// Percent of total expense; 0 when there is no expense at all
    pub percentage: f64,
}

/// Expense-only category totals with their share, largest first
pub fn expense_distribution(transactions: &[Transaction]) -> Vec<CategoryShare> {
    let totals = group_sum(
        transactions.iter().filter(|t| t.is_expense()),
        |t| t.category.as_str(),
    );
    let total_expense = totals.total();

    totals
        .sorted_desc()
        .into_iter()
        .map(|(category, amount)| CategoryShare {
            category: category.to_string(),
            amount,
            percentage: amount.percent_of(total_expense).unwrap_or(0.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetStatusLevel, NewTransaction};
    use chrono::NaiveDate;

    fn txn(kind: TransactionType, units: i64, category: &str, date: (i32, u32, u32)) -> Transaction {
        NewTransaction::new(
            kind,
            Money::from_units(units),
            category,
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        )
        .into_transaction(Default::default())
    }

    fn jan() -> YearMonth {
        YearMonth::new(2024, 1).unwrap()
    }

    fn salary_and_rent() -> Vec<Transaction> {
        vec![
            txn(TransactionType::Income, 5000, "Salary", (2024, 1, 10)),
            txn(TransactionType::Expense, 1200, "Rent", (2024, 1, 15)),
        ]
    }

    #[test]
    fn test_summary_scenario() {
        let summary = summarize(&salary_and_rent());

        assert_eq!(summary.total_income, Money::from_units(5000));
        assert_eq!(summary.total_expense, Money::from_units(1200));
        assert_eq!(summary.balance, Money::from_units(3800));
        assert_eq!(summary.category_totals.len(), 2);
        assert_eq!(summary.category_totals.get("Salary"), Some(Money::from_units(5000)));
        assert_eq!(summary.category_totals.get("Rent"), Some(Money::from_units(1200)));
    }

    #[test]
    fn test_summary_invariants() {
        let txns = vec![
            txn(TransactionType::Income, 100, "Gift", (2024, 2, 1)),
            txn(TransactionType::Expense, 30, "Food", (2024, 2, 2)),
            txn(TransactionType::Expense, 20, "Gift", (2024, 3, 2)),
            txn(TransactionType::Income, 7, "Food", (2024, 3, 9)),
        ];
        let summary = summarize(&txns);

        assert_eq!(summary.total_income - summary.total_expense, summary.balance);
        assert_eq!(
            summary.category_totals.total(),
            summary.total_income + summary.total_expense
        );
    }

    #[test]
    fn test_empty_input_is_zero_summary() {
        let summary = summarize(&[]);
        assert_eq!(summary, Summary::default());
        assert!(summary.category_totals.is_empty());
        assert!(monthly_summaries(&[]).is_empty());
        assert!(expense_distribution(&[]).is_empty());
    }

    #[test]
    fn test_monthly_summaries_one_entry_per_month() {
        let mut txns = salary_and_rent();
        txns.push(txn(TransactionType::Expense, 50, "Food", (2024, 2, 29)));
        txns.push(txn(TransactionType::Income, 10, "Interest", (2023, 12, 31)));

        let monthly = monthly_summaries(&txns);
        let months: Vec<String> = monthly.keys().map(|m| m.to_string()).collect();
        assert_eq!(months, vec!["2023-12", "2024-01", "2024-02"]);
        assert_eq!(monthly[&jan()].balance, Money::from_units(3800));
        assert_eq!(monthly[&jan().next()].total_expense, Money::from_units(50));
    }

    #[test]
    fn test_by_month_and_payment_method() {
        let mut txns = salary_and_rent();
        txns[0].payment_method = "Bank Transfer".into();
        txns.push(txn(TransactionType::Expense, 80, "Food", (2024, 2, 3)));

        let months = by_month(&txns);
        assert_eq!(months.get("2024-01"), Some(Money::from_units(6200)));
        assert_eq!(months.get("2024-02"), Some(Money::from_units(80)));

        let methods = by_payment_method(&txns);
        assert_eq!(methods.get("Bank Transfer"), Some(Money::from_units(5000)));
        assert_eq!(methods.get("Unknown"), Some(Money::from_units(1280)));
    }

    #[test]
    fn test_budget_status_exceeded_scenario() {
        let budgets = vec![Budget::new("Rent", Money::from_units(1000), jan())];
        let status = budget_status(&salary_and_rent(), &budgets, jan());

        assert_eq!(status.len(), 1);
        assert_eq!(status[0].category, "Rent");
        assert_eq!(status[0].spent, Money::from_units(1200));
        assert_eq!(status[0].limit, Money::from_units(1000));
        assert_eq!(status[0].percentage, Some(120.0));
        assert_eq!(status[0].level, BudgetStatusLevel::Exceeded);
    }

    #[test]
    fn test_budget_status_only_counts_month_expenses() {
        let txns = vec![
            txn(TransactionType::Expense, 70, "food", (2024, 1, 3)),
            txn(TransactionType::Expense, 500, "Food", (2024, 2, 3)),
            txn(TransactionType::Income, 500, "Food", (2024, 1, 4)),
        ];
        let budgets = vec![
            Budget::new("Food", Money::from_units(100), jan()),
            Budget::new("Travel", Money::from_units(300), jan()),
            Budget::new("Food", Money::from_units(100), jan().next()),
        ];

        let status = budget_status(&txns, &budgets, jan());
        assert_eq!(status.len(), 2);
        assert_eq!(status[0].spent, Money::from_units(70));
        assert_eq!(status[0].level, BudgetStatusLevel::Ok);
        assert_eq!(status[1].category, "Travel");
        assert_eq!(status[1].spent, Money::zero());
        assert_eq!(status[1].percentage, Some(0.0));
    }

    #[test]
    fn test_budget_status_thresholds_from_transactions() {
        let budgets = vec![Budget::new("Food", Money::from_units(100), jan())];
        let level_for = |units: i64| {
            let txns = vec![txn(TransactionType::Expense, units, "Food", (2024, 1, 5))];
            budget_status(&txns, &budgets, jan())[0].level
        };

        assert_eq!(level_for(79), BudgetStatusLevel::Ok);
        assert_eq!(level_for(80), BudgetStatusLevel::Ok);
        assert_eq!(level_for(81), BudgetStatusLevel::Warning);
        assert_eq!(level_for(100), BudgetStatusLevel::Warning);
        assert_eq!(level_for(101), BudgetStatusLevel::Exceeded);
    }

    #[test]
    fn test_expense_distribution() {
        let txns = vec![
            txn(TransactionType::Expense, 300, "Rent", (2024, 1, 1)),
            txn(TransactionType::Expense, 100, "Food", (2024, 1, 2)),
            txn(TransactionType::Income, 900, "Salary", (2024, 1, 3)),
        ];
        let shares = expense_distribution(&txns);

        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].category, "Rent");
        assert_eq!(shares[0].percentage, 75.0);
        assert_eq!(shares[1].percentage, 25.0);
    }

    #[test]
    fn test_expense_distribution_zero_total() {
        let txns = vec![txn(TransactionType::Expense, 0, "Free", (2024, 1, 1))];
        let shares = expense_distribution(&txns);
        assert_eq!(shares[0].percentage, 0.0);
    }

    #[test]
    fn test_in_month() {
        let mut txns = salary_and_rent();
        txns.push(txn(TransactionType::Expense, 5, "Food", (2024, 2, 1)));
        assert_eq!(in_month(&txns, jan()).len(), 2);
    }
}
