//! Domain models for FinAssist

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether a transaction adds to or draws from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(format!("Unknown transaction kind: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single financial transaction
///
/// Immutable once constructed. `amount` is always non-negative; direction
/// comes from `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub amount: f64,
    pub kind: TransactionKind,
    /// Free-form label used for aggregation (e.g., "Groceries")
    pub category: String,
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        amount: f64,
        kind: TransactionKind,
        category: impl Into<String>,
    ) -> Self {
        Self {
            date,
            amount,
            kind,
            category: category.into(),
        }
    }
}

/// User segment that selects which canned phrasing template is used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Demographic {
    #[default]
    Student,
    Professional,
    Retiree,
}

impl Demographic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Professional => "professional",
            Self::Retiree => "retiree",
        }
    }

    /// All supported demographics, for CLI help text
    pub fn all() -> &'static [Demographic] {
        &[Self::Student, Self::Professional, Self::Retiree]
    }
}

impl std::str::FromStr for Demographic {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "student" => Ok(Self::Student),
            "professional" => Ok(Self::Professional),
            "retiree" => Ok(Self::Retiree),
            _ => Err(format!(
                "Unknown demographic: {} (valid: student, professional, retiree)",
                s
            )),
        }
    }
}

impl std::fmt::Display for Demographic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-session user profile
///
/// Edited in place when the user changes profile settings; no history kept.
/// Age is free text and deliberately unvalidated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub demographic: Demographic,
    pub age: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            demographic: Demographic::Student,
            age: "20".to_string(),
        }
    }
}

/// Who authored a conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Self::User),
            "assistant" => Ok(Self::Assistant),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One role-tagged turn in the conversation log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_transaction_kind_round_trip() {
        assert_eq!(TransactionKind::Income.as_str(), "income");
        assert_eq!(
            TransactionKind::from_str("EXPENSE").unwrap(),
            TransactionKind::Expense
        );
        assert!(TransactionKind::from_str("transfer").is_err());
    }

    #[test]
    fn test_demographic_round_trip() {
        for d in Demographic::all() {
            assert_eq!(Demographic::from_str(d.as_str()).unwrap(), *d);
        }
        assert!(Demographic::from_str("alien").is_err());
    }

    #[test]
    fn test_default_profile() {
        let profile = UserProfile::default();
        assert_eq!(profile.demographic, Demographic::Student);
        assert_eq!(profile.age, "20");
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&Role::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
    }
}
