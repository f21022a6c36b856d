//! Conversation Log
//!
//! Append-only ordered sequence of role-tagged messages. This sequence is
//! the entire conversation state: entries are never mutated, removed, or
//! reordered, and the log is unbounded.

use serde::{Deserialize, Serialize};

use crate::models::{Message, Role};

/// Append-only message log for one session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationLog {
    messages: Vec<Message>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry to the end of the log; never fails
    pub fn append(&mut self, role: Role, content: impl Into<String>) {
        self.messages.push(Message::new(role, content));
    }

    /// The full sequence in arrival order, for redraw
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The most recent entry, if any
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_arrival_order() {
        let mut log = ConversationLog::new();
        for i in 0..5 {
            log.append(Role::User, format!("message {}", i));
        }

        assert_eq!(log.len(), 5);
        for (i, message) in log.messages().iter().enumerate() {
            assert_eq!(message.content, format!("message {}", i));
        }
    }

    #[test]
    fn test_roles_are_tagged() {
        let mut log = ConversationLog::new();
        log.append(Role::User, "question");
        log.append(Role::Assistant, "answer");

        let messages = log.messages();
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(messages[1].role, Role::Assistant);
        assert_eq!(log.last().unwrap().content, "answer");
    }

    #[test]
    fn test_empty_log() {
        let log = ConversationLog::new();
        assert!(log.is_empty());
        assert!(log.last().is_none());
        assert!(log.messages().is_empty());
    }
}
