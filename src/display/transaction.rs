//! Transaction display formatting
//!
//! Tables for transaction lists and a detail view for a single record.

use tabled::{settings::Style, Table, Tabled};

use crate::models::Transaction;

use super::report::truncate;

/// One table row
#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Method")]
    method: String,
    #[tabled(rename = "Tags")]
    tags: String,
}

impl TransactionRow {
    fn new(txn: &Transaction, symbol: &str) -> Self {
        let method = if txn.recurring {
            format!("{} (Recurring)", txn.payment_method)
        } else {
            txn.payment_method.clone()
        };

        Self {
            id: txn.id.to_string(),
            date: txn.date.format("%Y-%m-%d").to_string(),
            kind: txn.kind.as_str().to_uppercase(),
            amount: txn.amount.format_with_symbol(symbol),
            category: truncate(&txn.category, 20),
            description: truncate(&txn.description, 30),
            method,
            tags: txn.tag_list().join(", "),
        }
    }
}

/// Format a single transaction on one line
pub fn format_transaction_row(txn: &Transaction) -> String {
    txn.to_string()
}

/// Format a list of transactions as a table with a count footer
pub fn format_transaction_table(transactions: &[Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows: Vec<TransactionRow> = transactions
        .iter()
        .map(|t| TransactionRow::new(t, symbol))
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::sharp());

    format!("{}\nTotal transactions: {}\n", table, transactions.len())
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Type:        {}\n", txn.kind.as_str().to_uppercase()));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%Y-%m-%d")));
    output.push_str(&format!("Amount:      {}\n", txn.amount.format_with_symbol(symbol)));
    output.push_str(&format!("Category:    {}\n", txn.category));

    if !txn.description.is_empty() {
        output.push_str(&format!("Description: {}\n", txn.description));
    }

    output.push_str(&format!("Method:      {}\n", txn.payment_method));

    if txn.recurring {
        output.push_str("Recurring:   yes\n");
    }

    let tags = txn.tag_list();
    if !tags.is_empty() {
        output.push_str(&format!("Tags:        {}\n", tags.join(", ")));
    }

    output
}
