//! FinAssist Core Library
//!
//! Shared functionality for the FinAssist conversational finance demo:
//! - Fixed in-memory demo transaction store
//! - Budget summarizer and spending-insight generator
//! - Keyword-based intent router with canned reply templates
//! - Append-only conversation log and per-session context
//! - Memoized sentiment-model loader (metadata only, never consulted
//!   for responses)

pub mod conversation;
pub mod error;
pub mod insights;
pub mod models;
pub mod router;
pub mod sentiment;
pub mod session;
pub mod store;
pub mod summary;
pub mod templates;

pub use conversation::ConversationLog;
pub use error::{Error, Result};
pub use insights::{category_spend, spending_insights, CategorySpend};
pub use models::{Demographic, Message, Role, Transaction, TransactionKind, UserProfile};
pub use router::{classify, route, Intent};
pub use sentiment::{
    HubBackend, LoadStatus, MockSentimentBackend, SentimentBackend, SentimentLoader,
    SentimentModelInfo,
};
pub use session::{QuickAction, Session};
pub use store::demo_transactions;
pub use summary::{analyze, summarize, BudgetReport};
