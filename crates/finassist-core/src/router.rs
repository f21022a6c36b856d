//! Intent Router
//!
//! Selects a canned reply for free-text input via an ordered list of
//! keyword rules. Rules are checked in priority order and only the first
//! match fires; anything unmatched falls through to a default reply that
//! echoes the question verbatim.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::templates;

/// The intent classes the router can resolve to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Investing,
    Saving,
    Taxes,
    Fallback,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Investing => "investing",
            Self::Saving => "saving",
            Self::Taxes => "taxes",
            Self::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One routing rule: any keyword hit selects the intent
struct IntentRule {
    intent: Intent,
    keywords: &'static [&'static str],
}

/// Priority-ordered rule table; first match wins.
///
/// Matching is substring-based on the lower-cased input, with no
/// punctuation stripping or tokenization, so keyword additions must be
/// substring-safe ("investments" matches "investment").
const RULES: &[IntentRule] = &[
    IntentRule {
        intent: Intent::Investing,
        keywords: &["investment"],
    },
    IntentRule {
        intent: Intent::Saving,
        keywords: &["save", "savings"],
    },
    IntentRule {
        intent: Intent::Taxes,
        keywords: &["tax", "taxes"],
    },
];

/// Classify free text into an intent
pub fn classify(input: &str) -> Intent {
    let lowered = input.to_lowercase();
    for rule in RULES {
        if rule.keywords.iter().any(|k| lowered.contains(k)) {
            return rule.intent;
        }
    }
    Intent::Fallback
}

/// Route free text to its canned reply
///
/// The fallback reply embeds the original (uncased) input verbatim.
pub fn route(input: &str) -> String {
    match classify(input) {
        Intent::Investing => templates::REPLY_INVESTING.to_string(),
        Intent::Saving => templates::REPLY_SAVING.to_string(),
        Intent::Taxes => templates::REPLY_TAXES.to_string(),
        Intent::Fallback => {
            let mut vars = HashMap::new();
            vars.insert("query", input.to_string());
            templates::render(templates::REPLY_FALLBACK, &vars)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_investment_has_priority() {
        // "investment" is checked before "save" and "tax"
        assert_eq!(
            classify("should I save on taxes via investments?"),
            Intent::Investing
        );
        assert_eq!(classify("tell me about investment options"), Intent::Investing);
    }

    #[test]
    fn test_save_matches_before_tax() {
        assert_eq!(classify("I want to save for a house"), Intent::Saving);
        assert_eq!(classify("how are my SAVINGS doing"), Intent::Saving);
    }

    #[test]
    fn test_tax_intent() {
        assert_eq!(classify("What about my taxes this year?"), Intent::Taxes);
        assert_eq!(classify("tax question"), Intent::Taxes);
    }

    #[test]
    fn test_substring_matching() {
        // No tokenization: "investments" contains "investment"
        assert_eq!(classify("my investments"), Intent::Investing);
        // "conservation" contains neither keyword set
        assert_eq!(classify("conservation"), Intent::Fallback);
    }

    #[test]
    fn test_fallback_echoes_input_verbatim() {
        let reply = route("Hello THERE");
        assert!(reply.contains("'Hello THERE'"));
        assert!(reply.starts_with("I am a simulated assistant."));
    }

    #[test]
    fn test_routing_is_case_insensitive() {
        assert_eq!(route("INVESTMENT advice"), route("investment advice"));
    }
}
