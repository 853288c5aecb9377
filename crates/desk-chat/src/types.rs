//! Types for the conversational intake.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use desk_core::types::{Category, Priority, Ticket, Timestamp};
use desk_triage::Triage;

/// One entry in a conversation transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub content: String,
    /// True for the complainant's messages, false for the assistant's.
    pub from_user: bool,
    pub timestamp: Timestamp,
}

impl ChatMessage {
    pub fn new(content: impl Into<String>, from_user: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            from_user,
            timestamp: Timestamp::now(),
        }
    }
}

/// A classified complaint awaiting materialization into a ticket.
///
/// Carries exactly what the classifier computed for the message; a staged
/// submission holds one of these between its acknowledgment and creation
/// phases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketDraft {
    pub description: String,
    pub category: Category,
    pub priority: Priority,
    pub suggestion: String,
}

impl TicketDraft {
    pub fn from_triage(description: &str, triage: &Triage) -> Self {
        Self {
            description: description.to_string(),
            category: triage.category,
            priority: triage.priority,
            suggestion: triage.suggestion.clone(),
        }
    }
}

/// Result of submitting one chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageOutcome {
    /// Canned acknowledgment shown to the complainant.
    pub reply: String,
    /// The ticket materialized from the message, when one was produced.
    pub ticket: Option<Ticket>,
}

/// Optional fields supplied alongside a complaint at creation.
#[derive(Debug, Clone, Default)]
pub struct ComplaintMeta {
    pub customer: Option<String>,
    pub assigned_to: Option<String>,
    pub title: Option<String>,
}
