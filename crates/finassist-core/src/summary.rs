//! Budget Summarizer
//!
//! Aggregates the transaction sequence into income/expense/net totals plus
//! the dominant expense category, and renders a demographic-flavored
//! summary sentence.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Transaction, TransactionKind, UserProfile};
use crate::templates;

/// Aggregate totals derived from a transaction sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetReport {
    pub total_income: f64,
    pub total_expenses: f64,
    pub net_flow: f64,
    /// None when there are no expense rows at all
    pub largest_expense_category: Option<String>,
}

/// Compute the budget report for a transaction sequence
///
/// Category totals accumulate in first-seen order and the maximum is taken
/// with a strictly-greater comparison, so ties go to the category that
/// appeared first in the sequence. Defined for the empty sequence (all
/// totals zero, no largest category).
pub fn analyze(transactions: &[Transaction]) -> BudgetReport {
    let total_income: f64 = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Income)
        .map(|t| t.amount)
        .sum();
    let total_expenses: f64 = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Expense)
        .map(|t| t.amount)
        .sum();

    // Insertion-ordered accumulation keeps the tie-break deterministic.
    let mut categories: Vec<(&str, f64)> = Vec::new();
    for t in transactions {
        if t.kind != TransactionKind::Expense {
            continue;
        }
        match categories.iter_mut().find(|(name, _)| *name == t.category) {
            Some((_, total)) => *total += t.amount,
            None => categories.push((&t.category, t.amount)),
        }
    }

    let largest_expense_category = categories
        .iter()
        .fold(None::<(&str, f64)>, |best, &(name, total)| match best {
            Some((_, best_total)) if total <= best_total => best,
            _ => Some((name, total)),
        })
        .map(|(name, _)| name.to_string());

    BudgetReport {
        total_income,
        total_expenses,
        net_flow: total_income - total_expenses,
        largest_expense_category,
    }
}

/// Render the budget summary sentence for the given profile
pub fn summarize(transactions: &[Transaction], profile: &UserProfile) -> String {
    let report = analyze(transactions);

    let mut vars = HashMap::new();
    vars.insert(
        "intro",
        templates::summary_intro(profile.demographic).to_string(),
    );
    vars.insert("total_income", templates::money(report.total_income));
    vars.insert("total_expenses", templates::money(report.total_expenses));
    vars.insert("net_flow", templates::money(report.net_flow));
    vars.insert(
        "largest_category",
        report
            .largest_expense_category
            .unwrap_or_else(|| "N/A".to_string()),
    );

    templates::render(templates::SUMMARY_BODY, &vars)
}
