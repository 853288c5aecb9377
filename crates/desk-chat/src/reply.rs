//! Canned acknowledgment replies.
//!
//! Selection is category-first with an urgency override slotted before the
//! service and general texts, so a critical billing complaint still gets
//! the billing acknowledgment.

use desk_core::types::{Category, Priority};

/// Pick the acknowledgment for a classified message.
pub fn acknowledgment(category: Category, priority: Priority) -> &'static str {
    match (category, priority) {
        (Category::Billing, _) => {
            "I understand you have a billing concern. Let me create a high-priority ticket \
             for our billing team to review your account."
        }
        (Category::Technical, _) => {
            "I see you're experiencing technical difficulties. I'll generate a technical \
             support ticket for our IT team."
        }
        (_, Priority::Critical) => {
            "This sounds urgent! I'm creating a high-priority ticket that will be escalated \
             immediately to our management team."
        }
        (Category::Service, _) => {
            "Thank you for reaching out about our service. I'll create a support ticket to \
             address your concerns promptly."
        }
        _ => {
            "I understand your concern. Let me create a general inquiry ticket for our team \
             to review and respond to your issue."
        }
    }
}
