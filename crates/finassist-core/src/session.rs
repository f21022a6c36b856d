//! Session Context
//!
//! Explicit per-session state object passed to every operation: the user
//! profile, the transaction sequence, and the conversation log. Created on
//! session start, discarded on session end; there is no process-wide
//! state. One discrete event is processed at a time (compute, append,
//! redraw) before the next is accepted.

use crate::conversation::ConversationLog;
use crate::insights::spending_insights;
use crate::models::{Message, Role, Transaction, UserProfile};
use crate::router::route;
use crate::store::demo_transactions;
use crate::summary::summarize;

/// Button-style actions that skip the user turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    BudgetSummary,
    SpendingInsights,
}

impl QuickAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BudgetSummary => "budget_summary",
            Self::SpendingInsights => "spending_insights",
        }
    }
}

impl std::str::FromStr for QuickAction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "budget_summary" | "summary" => Ok(Self::BudgetSummary),
            "spending_insights" | "insights" => Ok(Self::SpendingInsights),
            _ => Err(format!("Unknown quick action: {}", s)),
        }
    }
}

/// State owned exclusively by one user session
#[derive(Debug, Clone)]
pub struct Session {
    profile: UserProfile,
    transactions: Vec<Transaction>,
    log: ConversationLog,
}

impl Session {
    /// Start a session with the default profile and the demo ledger
    pub fn new() -> Self {
        Self::with_profile(UserProfile::default())
    }

    /// Start a session with a specific profile
    pub fn with_profile(profile: UserProfile) -> Self {
        Self {
            profile,
            transactions: demo_transactions(),
            log: ConversationLog::new(),
        }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Edit the profile in place (sidebar-style control)
    pub fn profile_mut(&mut self) -> &mut UserProfile {
        &mut self.profile
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Full conversation in arrival order, for redraw
    pub fn messages(&self) -> &[Message] {
        self.log.messages()
    }

    /// One full free-text turn: log the user message, route it, log the
    /// assistant reply, and return it
    pub fn submit(&mut self, text: &str) -> String {
        self.log.append(Role::User, text);
        let response = route(text);
        self.log.append(Role::Assistant, response.clone());
        response
    }

    /// One quick-action turn: only the assistant reply is logged, no
    /// synthetic user turn
    pub fn quick_action(&mut self, action: QuickAction) -> String {
        let response = match action {
            QuickAction::BudgetSummary => summarize(&self.transactions, &self.profile),
            QuickAction::SpendingInsights => spending_insights(&self.transactions, &self.profile),
        };
        self.log.append(Role::Assistant, response.clone());
        response
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Demographic;

    #[test]
    fn test_submit_logs_both_turns() {
        let mut session = Session::new();
        let response = session.submit("I want to save for a house");

        let messages = session.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(messages[0].content, "I want to save for a house");
        assert_eq!(messages[1].role, Role::Assistant);
        assert_eq!(messages[1].content, response);
    }

    #[test]
    fn test_quick_action_logs_assistant_only() {
        let mut session = Session::new();
        let response = session.quick_action(QuickAction::BudgetSummary);

        let messages = session.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, Role::Assistant);
        assert_eq!(messages[0].content, response);
    }

    #[test]
    fn test_profile_edit_changes_phrasing() {
        let mut session = Session::new();
        let student = session.quick_action(QuickAction::BudgetSummary);

        session.profile_mut().demographic = Demographic::Professional;
        let professional = session.quick_action(QuickAction::BudgetSummary);

        assert!(student.starts_with("Hey there!"));
        assert!(professional.starts_with("Hello!"));
        // Only the greeting varies; the figures are identical.
        assert!(student.contains("$1500.00") && professional.contains("$1500.00"));
    }

    #[test]
    fn test_repeated_actions_are_pure() {
        let mut session = Session::new();
        let first = session.quick_action(QuickAction::SpendingInsights);
        let second = session.quick_action(QuickAction::SpendingInsights);
        assert_eq!(first, second);
    }

    #[test]
    fn test_quick_action_from_str() {
        use std::str::FromStr;
        assert_eq!(
            QuickAction::from_str("summary").unwrap(),
            QuickAction::BudgetSummary
        );
        assert_eq!(
            QuickAction::from_str("insights").unwrap(),
            QuickAction::SpendingInsights
        );
        assert!(QuickAction::from_str("forecast").is_err());
    }
}
