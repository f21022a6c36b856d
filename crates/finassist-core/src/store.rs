//! Demo transaction store
//!
//! A fixed, in-memory ledger used by every session. The sequence is
//! recreated identically on each call and never mutated, so every
//! aggregate derived from it is a pure function of this list.

use chrono::NaiveDate;

use crate::models::{Transaction, TransactionKind};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    // Inputs below are fixed constants, all valid calendar dates.
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// The fixed demo ledger: one salary deposit and seven expenses
pub fn demo_transactions() -> Vec<Transaction> {
    use TransactionKind::{Expense, Income};

    vec![
        Transaction::new(date(2023, 10, 1), 50.00, Expense, "Groceries"),
        Transaction::new(date(2023, 10, 2), 15.75, Expense, "Dining Out"),
        Transaction::new(date(2023, 10, 3), 1500.00, Income, "Salary"),
        Transaction::new(date(2023, 10, 5), 75.20, Expense, "Shopping"),
        Transaction::new(date(2023, 10, 6), 25.00, Expense, "Dining Out"),
        Transaction::new(date(2023, 10, 7), 45.00, Expense, "Groceries"),
        Transaction::new(date(2023, 10, 8), 100.00, Expense, "Entertainment"),
        Transaction::new(date(2023, 10, 10), 30.00, Expense, "Dining Out"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_store_is_stable() {
        let first = demo_transactions();
        let second = demo_transactions();
        assert_eq!(first, second);
        assert_eq!(first.len(), 8);
    }

    #[test]
    fn test_demo_store_ordering() {
        let transactions = demo_transactions();
        for pair in transactions.windows(2) {
            assert!(pair[0].date <= pair[1].date);
        }
    }

    #[test]
    fn test_demo_store_amounts_non_negative() {
        assert!(demo_transactions().iter().all(|t| t.amount >= 0.0));
    }
}
