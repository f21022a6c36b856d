//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `chat` - Interactive chat session
//! - `model` - Sentiment model availability check
//! - `reports` - One-shot commands (summary, insights, ask, transactions)

pub mod chat;
pub mod model;
pub mod reports;

// Re-export command functions for main.rs
pub use chat::*;
pub use model::*;
pub use reports::*;

use std::str::FromStr;

use anyhow::Result;
use finassist_core::{Demographic, UserProfile};

/// Build a profile from the global --demographic and --age flags
pub fn resolve_profile(demographic: &str, age: &str) -> Result<UserProfile> {
    let demographic = Demographic::from_str(demographic).map_err(|e| anyhow::anyhow!(e))?;
    Ok(UserProfile {
        demographic,
        age: age.to_string(),
    })
}
