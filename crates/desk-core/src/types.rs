//! Core types and value objects for the desk system.
//!
//! Defines the ticket entity, its classification enumerations, and the
//! millisecond timestamp newtype shared by every member crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// =============================================================================
// Enums
// =============================================================================

/// Complaint categories assigned by the triage classifier.
///
/// Variant names double as the case-sensitive wire/display literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Technical,
    Billing,
    Service,
    General,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Technical => write!(f, "Technical"),
            Category::Billing => write!(f, "Billing"),
            Category::Service => write!(f, "Service"),
            Category::General => write!(f, "General"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Technical" => Ok(Category::Technical),
            "Billing" => Ok(Category::Billing),
            "Service" => Ok(Category::Service),
            "General" => Ok(Category::General),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

/// Ticket priority assigned by the triage classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Low => write!(f, "Low"),
            Priority::Medium => write!(f, "Medium"),
            Priority::High => write!(f, "High"),
            Priority::Critical => write!(f, "Critical"),
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Priority::Low),
            "Medium" => Ok(Priority::Medium),
            "High" => Ok(Priority::High),
            "Critical" => Ok(Priority::Critical),
            _ => Err(format!("Unknown priority: {}", s)),
        }
    }
}

/// Ticket lifecycle states.
///
/// The in-progress state serializes and displays as "In Progress" -- the
/// space is part of the wire literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketStatus {
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
    Closed,
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketStatus::Open => write!(f, "Open"),
            TicketStatus::InProgress => write!(f, "In Progress"),
            TicketStatus::Resolved => write!(f, "Resolved"),
            TicketStatus::Closed => write!(f, "Closed"),
        }
    }
}

impl std::str::FromStr for TicketStatus {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Open" => Ok(TicketStatus::Open),
            "In Progress" => Ok(TicketStatus::InProgress),
            "Resolved" => Ok(TicketStatus::Resolved),
            "Closed" => Ok(TicketStatus::Closed),
            _ => Err(format!("Unknown ticket status: {}", s)),
        }
    }
}

// =============================================================================
// Timestamp
// =============================================================================

/// Milliseconds since the Unix epoch.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now().timestamp_millis())
    }

    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt.timestamp_millis())
    }

    pub fn to_datetime(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.0).unwrap_or_default()
    }

    /// The current time, nudged forward if the clock has not advanced past
    /// `prev`. Keeps repeated stamps on the same record strictly increasing.
    pub fn next_after(prev: Timestamp) -> Self {
        let now = Self::now();
        if now.0 > prev.0 {
            now
        } else {
            Self(prev.0 + 1)
        }
    }
}

// =============================================================================
// Ticket
// =============================================================================

/// A classified complaint tracked by the desk.
///
/// `id`, `description`, `category`, `priority`, and `created_at` are fixed at
/// creation; only `status`, `assigned_to`, and `updated_at` mutate afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
    pub status: TicketStatus,
    pub assigned_to: Option<String>,
    pub customer: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    /// Advisory text from the classifier; never drives control flow.
    pub ai_suggestion: Option<String>,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ---- Category ----

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Technical.to_string(), "Technical");
        assert_eq!(Category::Billing.to_string(), "Billing");
        assert_eq!(Category::Service.to_string(), "Service");
        assert_eq!(Category::General.to_string(), "General");
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("Technical".parse::<Category>().unwrap(), Category::Technical);
        assert_eq!("Billing".parse::<Category>().unwrap(), Category::Billing);
        assert_eq!("Service".parse::<Category>().unwrap(), Category::Service);
        assert_eq!("General".parse::<Category>().unwrap(), Category::General);
        assert!("technical".parse::<Category>().is_err());
        assert!("invalid".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serde_json_format() {
        assert_eq!(serde_json::to_string(&Category::Billing).unwrap(), "\"Billing\"");
        assert_eq!(serde_json::to_string(&Category::General).unwrap(), "\"General\"");
    }

    #[test]
    fn test_category_serde_round_trip() {
        for variant in [
            Category::Technical,
            Category::Billing,
            Category::Service,
            Category::General,
        ] {
            let json = serde_json::to_string(&variant).unwrap();
            let rt: Category = serde_json::from_str(&json).unwrap();
            assert_eq!(variant, rt);
        }
    }

    // ---- Priority ----

    #[test]
    fn test_priority_display_from_str_round_trip() {
        for variant in [
            Priority::Low,
            Priority::Medium,
            Priority::High,
            Priority::Critical,
        ] {
            let s = variant.to_string();
            let parsed: Priority = s.parse().unwrap();
            assert_eq!(variant, parsed);
        }
    }

    #[test]
    fn test_priority_from_str_case_sensitive() {
        assert!("low".parse::<Priority>().is_err());
        assert!("CRITICAL".parse::<Priority>().is_err());
    }

    #[test]
    fn test_priority_serde_json_format() {
        assert_eq!(serde_json::to_string(&Priority::Critical).unwrap(), "\"Critical\"");
        assert_eq!(serde_json::to_string(&Priority::Low).unwrap(), "\"Low\"");
    }

    // ---- TicketStatus ----

    #[test]
    fn test_status_display_wire_literals() {
        assert_eq!(TicketStatus::Open.to_string(), "Open");
        assert_eq!(TicketStatus::InProgress.to_string(), "In Progress");
        assert_eq!(TicketStatus::Resolved.to_string(), "Resolved");
        assert_eq!(TicketStatus::Closed.to_string(), "Closed");
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("Open".parse::<TicketStatus>().unwrap(), TicketStatus::Open);
        assert_eq!(
            "In Progress".parse::<TicketStatus>().unwrap(),
            TicketStatus::InProgress
        );
        assert_eq!("Resolved".parse::<TicketStatus>().unwrap(), TicketStatus::Resolved);
        assert_eq!("Closed".parse::<TicketStatus>().unwrap(), TicketStatus::Closed);
    }

    #[test]
    fn test_status_rejects_unspaced_variant_name() {
        assert!("InProgress".parse::<TicketStatus>().is_err());
        assert!("in progress".parse::<TicketStatus>().is_err());
    }

    #[test]
    fn test_status_serde_in_progress_literal() {
        assert_eq!(
            serde_json::to_string(&TicketStatus::InProgress).unwrap(),
            "\"In Progress\""
        );
        let rt: TicketStatus = serde_json::from_str("\"In Progress\"").unwrap();
        assert_eq!(rt, TicketStatus::InProgress);
        assert!(serde_json::from_str::<TicketStatus>("\"InProgress\"").is_err());
    }

    #[test]
    fn test_status_display_from_str_round_trip() {
        for variant in [
            TicketStatus::Open,
            TicketStatus::InProgress,
            TicketStatus::Resolved,
            TicketStatus::Closed,
        ] {
            let s = variant.to_string();
            let parsed: TicketStatus = s.parse().unwrap();
            assert_eq!(variant, parsed);
        }
    }

    #[test]
    fn test_from_str_error_messages() {
        assert_eq!(
            "bogus".parse::<Category>().unwrap_err(),
            "Unknown category: bogus"
        );
        assert_eq!(
            "bogus".parse::<Priority>().unwrap_err(),
            "Unknown priority: bogus"
        );
        assert_eq!(
            "bogus".parse::<TicketStatus>().unwrap_err(),
            "Unknown ticket status: bogus"
        );
    }

    // ---- Timestamp ----

    #[test]
    fn test_timestamp_now_is_recent() {
        let ts = Timestamp::now();
        let dt = ts.to_datetime();
        let delta = (Utc::now() - dt).num_seconds().abs();
        assert!(delta < 5);
    }

    #[test]
    fn test_timestamp_datetime_round_trip() {
        let ts = Timestamp(1_700_000_000_123);
        let rt = Timestamp::from_datetime(ts.to_datetime());
        assert_eq!(ts, rt);
    }

    #[test]
    fn test_timestamp_next_after_strictly_increases() {
        let prev = Timestamp::now();
        let next = Timestamp::next_after(prev);
        assert!(next > prev);
    }

    #[test]
    fn test_timestamp_next_after_future_prev() {
        // Even when prev is ahead of the clock the result must advance.
        let prev = Timestamp(Timestamp::now().0 + 60_000);
        let next = Timestamp::next_after(prev);
        assert_eq!(next.0, prev.0 + 1);
    }

    #[test]
    fn test_timestamp_ordering() {
        assert!(Timestamp(2) > Timestamp(1));
        assert!(Timestamp(1) < Timestamp(2));
        assert_eq!(Timestamp(7), Timestamp(7));
    }

    // ---- Ticket ----

    fn sample_ticket() -> Ticket {
        let now = Timestamp::now();
        Ticket {
            id: Uuid::new_v4(),
            title: "Login Issues".to_string(),
            description: "Unable to login to my account".to_string(),
            category: Category::Technical,
            priority: Priority::High,
            status: TicketStatus::Open,
            assigned_to: Some("Tech Team".to_string()),
            customer: Some("John Doe".to_string()),
            created_at: now,
            updated_at: now,
            ai_suggestion: Some("Escalate to technical support for investigation.".to_string()),
        }
    }

    #[test]
    fn test_ticket_serde_round_trip() {
        let ticket = sample_ticket();
        let json = serde_json::to_string(&ticket).unwrap();
        let rt: Ticket = serde_json::from_str(&json).unwrap();
        assert_eq!(ticket.id, rt.id);
        assert_eq!(ticket.title, rt.title);
        assert_eq!(ticket.description, rt.description);
        assert_eq!(ticket.category, rt.category);
        assert_eq!(ticket.priority, rt.priority);
        assert_eq!(ticket.status, rt.status);
        assert_eq!(ticket.assigned_to, rt.assigned_to);
        assert_eq!(ticket.customer, rt.customer);
        assert_eq!(ticket.created_at, rt.created_at);
        assert_eq!(ticket.updated_at, rt.updated_at);
        assert_eq!(ticket.ai_suggestion, rt.ai_suggestion);
    }

    #[test]
    fn test_ticket_serde_none_optionals() {
        let mut ticket = sample_ticket();
        ticket.assigned_to = None;
        ticket.customer = None;
        ticket.ai_suggestion = None;
        let json = serde_json::to_string(&ticket).unwrap();
        let rt: Ticket = serde_json::from_str(&json).unwrap();
        assert!(rt.assigned_to.is_none());
        assert!(rt.customer.is_none());
        assert!(rt.ai_suggestion.is_none());
    }

    #[test]
    fn test_ticket_json_uses_wire_literals() {
        let mut ticket = sample_ticket();
        ticket.status = TicketStatus::InProgress;
        let json = serde_json::to_string(&ticket).unwrap();
        assert!(json.contains("\"In Progress\""));
        assert!(json.contains("\"Technical\""));
        assert!(json.contains("\"High\""));
    }

    #[test]
    fn test_enums_are_copy() {
        let c = Category::Billing;
        let c2 = c;
        assert_eq!(c, c2);

        let p = Priority::Medium;
        let p2 = p;
        assert_eq!(p, p2);

        let s = TicketStatus::Resolved;
        let s2 = s;
        assert_eq!(s, s2);
    }
}
