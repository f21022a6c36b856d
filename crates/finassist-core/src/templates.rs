//! Canned response templates
//!
//! All user-visible response wording lives here so the generator modules
//! stay data-driven. Templates use simple mustache-style `{{var}}`
//! placeholders rendered by [`render`].

use std::collections::HashMap;

use crate::models::Demographic;

/// Body of the budget summary, appended after the demographic intro
pub const SUMMARY_BODY: &str = "{{intro}}This month, you've had a total income of \
${{total_income}} and total expenses of ${{total_expenses}}. This leaves you with a net \
flow of ${{net_flow}}. Your largest spending category was {{largest_category}}.";

/// Spending insights, one template per demographic
pub const INSIGHTS_STUDENT: &str = "Looking at your spending, you've spent \
${{groceries}} on groceries and ${{dining_out}} on dining out. A great way to save \
money is to try cooking more at home!";

pub const INSIGHTS_PROFESSIONAL: &str = "Your spending shows ${{groceries}} on \
groceries and ${{dining_out}} on dining out. Consider meal-prepping to optimize your \
expenses and free up some cash for savings or investments.";

pub const INSIGHTS_GENERIC: &str = "Based on your transactions, you spent \
${{groceries}} on groceries and ${{dining_out}} on dining out. These categories are a \
good place to look for opportunities to save.";

/// Canned replies selected by the intent router
pub const REPLY_INVESTING: &str = "Investing is a great way to grow your wealth over \
time! I can provide general advice, but for specific strategies, it's best to consult \
a professional.";

pub const REPLY_SAVING: &str = "Saving money is a key part of financial health. A good \
strategy is to set a specific savings goal each month and treat it like a bill.";

pub const REPLY_TAXES: &str = "Taxes can be complex. While I can offer basic \
information, please consult a tax professional for detailed advice on your specific \
situation.";

/// Fallback reply; embeds the original question verbatim
pub const REPLY_FALLBACK: &str = "I am a simulated assistant. I can help you with \
budget summaries and spending insights. To truly answer this, you would need to \
integrate a generative model that can handle queries like: '{{query}}'";

/// Opening phrase for the budget summary, keyed by demographic
pub fn summary_intro(demographic: Demographic) -> &'static str {
    match demographic {
        Demographic::Student => "Hey there! Let's take a look at your budget. ",
        Demographic::Professional => "Hello! Here's a quick summary of your financial status. ",
        _ => "Hi! I've put together a summary of your recent transactions. ",
    }
}

/// Spending insights template, keyed by demographic
pub fn insights_template(demographic: Demographic) -> &'static str {
    match demographic {
        Demographic::Student => INSIGHTS_STUDENT,
        Demographic::Professional => INSIGHTS_PROFESSIONAL,
        _ => INSIGHTS_GENERIC,
    }
}

/// Render a template with `{{var}}` placeholders replaced
///
/// Unknown placeholders are left in place; unused vars are ignored.
pub fn render(template: &str, vars: &HashMap<&str, String>) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        let pattern = format!("{{{{{}}}}}", key);
        result = result.replace(&pattern, value);
    }
    result
}

/// Format a money amount the way every template expects it
pub fn money(amount: f64) -> String {
    format!("{:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_replaces_vars() {
        let mut vars = HashMap::new();
        vars.insert("query", "hello".to_string());
        let rendered = render(REPLY_FALLBACK, &vars);
        assert!(rendered.contains("queries like: 'hello'"));
        assert!(!rendered.contains("{{query}}"));
    }

    #[test]
    fn test_render_leaves_unknown_placeholders() {
        let vars = HashMap::new();
        let rendered = render("cost: ${{total}}", &vars);
        assert_eq!(rendered, "cost: ${{total}}");
    }

    #[test]
    fn test_money_two_decimals() {
        assert_eq!(money(1500.0), "1500.00");
        assert_eq!(money(340.95), "340.95");
        assert_eq!(money(-12.5), "-12.50");
    }

    #[test]
    fn test_intro_per_demographic() {
        assert!(summary_intro(Demographic::Student).starts_with("Hey there!"));
        assert!(summary_intro(Demographic::Professional).starts_with("Hello!"));
        assert!(summary_intro(Demographic::Retiree).starts_with("Hi!"));
    }
}
