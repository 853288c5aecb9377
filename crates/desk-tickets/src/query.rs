//! Filtering and aggregate counts over ticket snapshots.
//!
//! The filter is stable: it keeps the input sequence's relative order and
//! never re-sorts. Text search is case-insensitive substring matching ORed
//! across id, title, description, category, and customer; status and
//! priority are exact-equality predicates; all present predicates AND.

use serde::Serialize;

use desk_core::types::{Priority, Ticket, TicketStatus};

// =============================================================================
// TicketFilter
// =============================================================================

/// Predicates for a ticket query. Absent fields are always-true.
#[derive(Debug, Clone, Default)]
pub struct TicketFilter {
    pub search: Option<String>,
    pub status: Option<TicketStatus>,
    pub priority: Option<Priority>,
}

/// Apply `f` to a ticket snapshot, preserving relative order.
///
/// An empty result is valid; callers distinguish "nothing matched" from
/// "no tickets exist" via the store's total count.
pub fn filter(tickets: &[Ticket], f: &TicketFilter) -> Vec<Ticket> {
    let needle = f
        .search
        .as_deref()
        .map(str::to_lowercase)
        .filter(|s| !s.is_empty());

    tickets
        .iter()
        .filter(|t| {
            if let Some(ref needle) = needle {
                if !matches_search(t, needle) {
                    return false;
                }
            }
            if let Some(status) = f.status {
                if t.status != status {
                    return false;
                }
            }
            if let Some(priority) = f.priority {
                if t.priority != priority {
                    return false;
                }
            }
            true
        })
        .cloned()
        .collect()
}

/// Substring match across every searchable field (lowercased needle).
fn matches_search(ticket: &Ticket, needle: &str) -> bool {
    ticket.id.to_string().to_lowercase().contains(needle)
        || ticket.title.to_lowercase().contains(needle)
        || ticket.description.to_lowercase().contains(needle)
        || ticket.category.to_string().to_lowercase().contains(needle)
        || ticket
            .customer
            .as_deref()
            .is_some_and(|c| c.to_lowercase().contains(needle))
}

// =============================================================================
// Aggregate counts
// =============================================================================

/// Per-status ticket counts for the summary view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
    pub closed: usize,
}

impl StatusCounts {
    pub fn total(&self) -> usize {
        self.open + self.in_progress + self.resolved + self.closed
    }

    /// Tickets still awaiting resolution (open + in progress).
    pub fn unresolved(&self) -> usize {
        self.open + self.in_progress
    }

    /// Tickets handled to completion (resolved + closed).
    pub fn settled(&self) -> usize {
        self.resolved + self.closed
    }
}

/// Per-priority ticket counts for the summary view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PriorityCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub critical: usize,
}

impl PriorityCounts {
    pub fn total(&self) -> usize {
        self.low + self.medium + self.high + self.critical
    }
}

/// Tally the full ticket set by status.
pub fn count_by_status(tickets: &[Ticket]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for ticket in tickets {
        match ticket.status {
            TicketStatus::Open => counts.open += 1,
            TicketStatus::InProgress => counts.in_progress += 1,
            TicketStatus::Resolved => counts.resolved += 1,
            TicketStatus::Closed => counts.closed += 1,
        }
    }
    counts
}

/// Tally the full ticket set by priority.
pub fn count_by_priority(tickets: &[Ticket]) -> PriorityCounts {
    let mut counts = PriorityCounts::default();
    for ticket in tickets {
        match ticket.priority {
            Priority::Low => counts.low += 1,
            Priority::Medium => counts.medium += 1,
            Priority::High => counts.high += 1,
            Priority::Critical => counts.critical += 1,
        }
    }
    counts
}

// =============================================================================
// Tests
// =============================================================================
