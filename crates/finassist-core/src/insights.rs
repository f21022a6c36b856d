//! Spending Insights
//!
//! Aggregates the groceries and dining-out totals and renders a
//! demographic-flavored suggestion.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Transaction, UserProfile};
use crate::templates;

/// Category labels the insight generator aggregates
pub const GROCERIES_CATEGORY: &str = "Groceries";
pub const DINING_OUT_CATEGORY: &str = "Dining Out";

/// Totals for the two insight categories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySpend {
    pub groceries: f64,
    pub dining_out: f64,
}

/// Sum the groceries and dining-out totals
///
/// Matching is a case-sensitive exact comparison on the category label and
/// ignores the transaction kind; every other category is skipped.
pub fn category_spend(transactions: &[Transaction]) -> CategorySpend {
    let sum_for = |label: &str| -> f64 {
        transactions
            .iter()
            .filter(|t| t.category == label)
            .map(|t| t.amount)
            .sum()
    };

    CategorySpend {
        groceries: sum_for(GROCERIES_CATEGORY),
        dining_out: sum_for(DINING_OUT_CATEGORY),
    }
}

/// Render the spending insight for the given profile
pub fn spending_insights(transactions: &[Transaction], profile: &UserProfile) -> String {
    let spend = category_spend(transactions);

    let mut vars = HashMap::new();
    vars.insert("groceries", templates::money(spend.groceries));
    vars.insert("dining_out", templates::money(spend.dining_out));

    templates::render(templates::insights_template(profile.demographic), &vars)
}
