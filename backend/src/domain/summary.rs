//! Aggregation of transactions into report figures.
use std::collections::HashMap;

use crate::domain::models::{
    report::{CategoryTotal, ReportSummary},
    transaction::Transaction,
};

/// Expense categories listed in a report summary
pub const TOP_CATEGORY_LIMIT: usize = 5;

/// Build the summary for a set of transactions already filtered to the period
pub fn summarize(transactions: &[Transaction]) -> ReportSummary {
    if transactions.is_empty() {
        return ReportSummary::empty();
    }

    let mut income = 0.0;
    let mut expenses = 0.0;
    let mut by_category: HashMap<&str, f64> = HashMap::new();

    for transaction in transactions {
        if transaction.is_expense() {
            expenses += transaction.amount;
            *by_category.entry(transaction.category.as_str()).or_insert(0.0) += transaction.amount;
        } else {
            income += transaction.amount;
        }
    }

    let balance = income - expenses;
    let savings_rate = if income > 0.0 { balance / income * 100.0 } else { 0.0 };

    let mut top_categories: Vec<CategoryTotal> = by_category
        .into_iter()
        .map(|(name, amount)| CategoryTotal {
            name: name.to_string(),
            amount: round2(amount),
            percentage: if expenses > 0.0 { round2(amount / expenses * 100.0) } else { 0.0 },
        })
        .collect();
    // Ties broken by name so output is stable
    top_categories.sort_by(|a, b| {
        b.amount
            .total_cmp(&a.amount)
            .then_with(|| a.name.cmp(&b.name))
    });
    top_categories.truncate(TOP_CATEGORY_LIMIT);

    ReportSummary {
        income: round2(income),
        expenses: round2(expenses),
        balance: round2(balance),
        savings_rate: round2(savings_rate),
        top_categories,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
