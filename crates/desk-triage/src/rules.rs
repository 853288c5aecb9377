//! Keyword-based triage rules.
//!
//! Category and priority are resolved independently from ordered rule
//! tables evaluated top-down; the first matching rule on each axis wins.

use serde::{Deserialize, Serialize};

use desk_core::types::{Category, Priority};

use crate::normalize::normalize;

/// A single category rule: any keyword hit resolves to `category`.
struct CategoryRule {
    keywords: &'static [&'static str],
    category: Category,
}

/// Keywords that escalate any complaint to Critical priority.
const ESCALATION_KEYWORDS: &[&str] = &["urgent", "emergency"];

/// Outcome of classifying one complaint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triage {
    pub category: Category,
    pub priority: Priority,
    /// Advisory text for staff; informational only.
    pub suggestion: String,
}

/// Ordered triage rule tables, built once and reused.
pub struct RuleSet {
    category_rules: Vec<CategoryRule>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleSet {
    /// Create the rule set with the standard category table.
    ///
    /// Order matters: a complaint mentioning both billing and technical
    /// terms resolves to the earlier rule.
    pub fn new() -> Self {
        let category_rules = vec![
            CategoryRule {
                keywords: &["billing", "payment"],
                category: Category::Billing,
            },
            CategoryRule {
                keywords: &["technical", "not working", "error"],
                category: Category::Technical,
            },
            CategoryRule {
                keywords: &["service", "support"],
                category: Category::Service,
            },
        ];

        Self { category_rules }
    }

    /// Classify complaint text into category, priority, and suggestion.
    ///
    /// Deterministic and side-effect free. The input is normalized first
    /// (normalization is idempotent, so pre-normalized text is fine);
    /// matching is plain substring containment.
    pub fn classify(&self, text: &str) -> Triage {
        let normalized = normalize(text);

        let category = self
            .category_rules
            .iter()
            .find(|rule| contains_any(&normalized, rule.keywords))
            .map(|rule| rule.category)
            .unwrap_or(Category::General);

        let escalated = contains_any(&normalized, ESCALATION_KEYWORDS);
        let priority = if escalated {
            Priority::Critical
        } else if matches!(category, Category::Billing | Category::Technical) {
            Priority::High
        } else {
            Priority::Medium
        };

        let suggestion = suggestion_for(category, escalated).to_string();

        tracing::debug!(category = %category, priority = %priority, "complaint classified");

        Triage {
            category,
            priority,
            suggestion,
        }
    }
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text.contains(kw))
}

/// Advisory text keyed to the triage outcome. Escalation wins over the
/// category-specific text; the suggestion never feeds back into the rules.
fn suggestion_for(category: Category, escalated: bool) -> &'static str {
    if escalated {
        return "Escalate immediately to the management team.";
    }
    match category {
        Category::Billing => "Review the transaction history and consider a refund.",
        Category::Technical => "Escalate to technical support for investigation.",
        Category::Service => "Route to the customer service queue for follow-up.",
        Category::General => "Create a general inquiry for the team to review.",
    }
}

// =============================================================================
// Tests
// =============================================================================
