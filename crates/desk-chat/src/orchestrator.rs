//! Desk orchestrator: the surface the presentation layer calls.
//!
//! Wires the shared ticket store and the chat intake together, translates
//! wire literals (including the "all" filter sentinel), and serves the
//! aggregate counts the summary views render.

use std::sync::Arc;

use uuid::Uuid;

use desk_core::config::DeskConfig;
use desk_core::types::{Priority, Ticket, TicketStatus};
use desk_tickets::{
    count_by_priority, count_by_status, filter, parse_priority, parse_status, PriorityCounts,
    StatusCounts, TicketError, TicketFilter, TicketStore,
};

use crate::error::ChatError;
use crate::intake::{Intake, StagedSubmission};
use crate::types::{ChatMessage, ComplaintMeta, MessageOutcome};

/// Filter value meaning "no predicate" in the staff views.
const FILTER_ALL: &str = "all";

/// Central coordinator for the complaint desk.
pub struct DeskOrchestrator {
    store: Arc<TicketStore>,
    intake: Intake,
}

impl DeskOrchestrator {
    /// Build an orchestrator from configuration.
    pub fn new(config: DeskConfig) -> Self {
        let store = Arc::new(TicketStore::with_config(&config.triage));
        let intake = Intake::new(Arc::clone(&store), config.chat);
        Self { store, intake }
    }

    /// Create a complaint ticket directly (staff and self-service forms).
    pub fn create_complaint(&self, text: &str, meta: ComplaintMeta) -> Result<Ticket, TicketError> {
        self.store
            .create(text, meta.customer, meta.assigned_to, meta.title)
    }

    /// Look up one ticket.
    pub fn get_ticket(&self, id: Uuid) -> Result<Ticket, TicketError> {
        self.store.get(id)
    }

    /// Move a ticket to the status named by a wire literal.
    ///
    /// Unknown literals are rejected and leave the ticket untouched.
    pub fn update_ticket_status(&self, id: Uuid, status: &str) -> Result<Ticket, TicketError> {
        let status = parse_status(status)?;
        self.store.update(id, Some(status), None)
    }

    /// Assign a ticket to a team or person.
    pub fn assign_ticket(&self, id: Uuid, assignee: &str) -> Result<Ticket, TicketError> {
        self.store.update(id, None, Some(assignee.to_string()))
    }

    /// List tickets matching the given filters, newest-first.
    ///
    /// `status` and `priority` take wire literals; `"all"`, the empty
    /// string, and `None` all mean "no predicate".
    pub fn list_tickets(
        &self,
        search: Option<&str>,
        status: Option<&str>,
        priority: Option<&str>,
    ) -> Result<Vec<Ticket>, TicketError> {
        let ticket_filter = TicketFilter {
            search: search
                .map(str::to_string)
                .filter(|s| !s.trim().is_empty()),
            status: parse_status_filter(status)?,
            priority: parse_priority_filter(priority)?,
        };
        Ok(filter(&self.store.list(), &ticket_filter))
    }

    /// Aggregate counts over the full ticket set for the summary views.
    pub fn ticket_stats(&self) -> (StatusCounts, PriorityCounts) {
        let snapshot = self.store.list();
        (count_by_status(&snapshot), count_by_priority(&snapshot))
    }

    /// Total tickets ever created. Lets callers distinguish an empty filter
    /// result from "no tickets exist".
    pub fn ticket_count(&self) -> usize {
        self.store.len()
    }

    /// Handle one chat message synchronously.
    pub fn submit_complaint_message(&self, text: &str) -> Result<MessageOutcome, ChatError> {
        self.intake.submit_message(text)
    }

    /// Handle one chat message with the cancellable two-phase flow.
    pub fn submit_complaint_message_staged(
        &self,
        text: &str,
    ) -> Result<StagedSubmission, ChatError> {
        self.intake.submit_message_staged(text)
    }

    /// Conversation history, oldest first.
    pub fn transcript(&self) -> Vec<ChatMessage> {
        self.intake.transcript()
    }
}

impl Default for DeskOrchestrator {
    fn default() -> Self {
        Self::new(DeskConfig::default())
    }
}

fn parse_status_filter(value: Option<&str>) -> Result<Option<TicketStatus>, TicketError> {
    match value {
        None => Ok(None),
        Some(s) if s.is_empty() || s == FILTER_ALL => Ok(None),
        Some(s) => parse_status(s).map(Some),
    }
}

fn parse_priority_filter(value: Option<&str>) -> Result<Option<Priority>, TicketError> {
    match value {
        None => Ok(None),
        Some(s) if s.is_empty() || s == FILTER_ALL => Ok(None),
        Some(s) => parse_priority(s).map(Some),
    }
}

// =============================================================================
// Tests
// =============================================================================
