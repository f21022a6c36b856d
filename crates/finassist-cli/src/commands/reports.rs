//! One-shot report commands (summary, insights, ask, transactions)

use anyhow::{Context, Result};
use finassist_core::{
    analyze, demo_transactions, route, spending_insights, summarize, TransactionKind, UserProfile,
};

pub fn cmd_summary(profile: &UserProfile, json: bool) -> Result<()> {
    let transactions = demo_transactions();

    if json {
        let report = analyze(&transactions);
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        );
        return Ok(());
    }

    println!();
    println!("💰 Budget Summary");
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   {}", summarize(&transactions, profile));
    println!();
    Ok(())
}

pub fn cmd_insights(profile: &UserProfile) -> Result<()> {
    let transactions = demo_transactions();

    println!();
    println!("🔍 Spending Insights");
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   {}", spending_insights(&transactions, profile));
    println!();
    Ok(())
}

pub fn cmd_ask(question: &str) -> Result<()> {
    println!();
    println!("🙋 {}", question);
    println!("🤖 {}", route(question));
    println!();
    Ok(())
}

pub fn cmd_transactions(json: bool) -> Result<()> {
    let transactions = demo_transactions();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&transactions)
                .context("Failed to serialize transactions")?
        );
        return Ok(());
    }

    println!();
    println!("📒 Demo Transactions");
    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   {:<12} {:>10} {:<9} {}",
        "Date", "Amount", "Type", "Category"
    );
    for tx in &transactions {
        println!(
            "   {:<12} {:>10.2} {:<9} {}",
            tx.date.to_string(),
            tx.amount,
            tx.kind.as_str(),
            tx.category
        );
    }

    let income: f64 = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Income)
        .map(|t| t.amount)
        .sum();
    let expenses: f64 = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Expense)
        .map(|t| t.amount)
        .sum();
    println!();
    println!(
        "   {} transactions | income ${:.2} | expenses ${:.2}",
        transactions.len(),
        income,
        expenses
    );
    println!();
    Ok(())
}
