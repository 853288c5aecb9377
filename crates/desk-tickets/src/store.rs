//! In-memory ticket repository.
//!
//! Owns the ticket set and the triage rule set. Creation classifies the
//! complaint; mutation goes through the lifecycle rules and always advances
//! `updated_at`.

use std::sync::Mutex;

use uuid::Uuid;

use desk_core::config::TriageConfig;
use desk_core::error::DeskError;
use desk_core::types::{Ticket, TicketStatus, Timestamp};
use desk_triage::{normalize, RuleSet};

use crate::error::TicketError;
use crate::lifecycle::validate_transition;

/// In-memory ticket store with creation, lookup, mutation, and listing.
///
/// Tickets are kept newest-first; `list` returns them in that order.
pub struct TicketStore {
    rules: RuleSet,
    title_max_chars: usize,
    tickets: Mutex<Vec<Ticket>>,
}

impl TicketStore {
    /// Create an empty store with default settings.
    pub fn new() -> Self {
        Self::with_config(&TriageConfig::default())
    }

    /// Create an empty store using the given triage settings.
    pub fn with_config(config: &TriageConfig) -> Self {
        Self {
            rules: RuleSet::new(),
            title_max_chars: config.title_max_chars,
            tickets: Mutex::new(Vec::new()),
        }
    }

    /// Create a ticket from complaint text.
    ///
    /// Classifies the description, derives a title when none is supplied,
    /// and prepends the new ticket so listings read newest-first. Fails with
    /// `EmptyInput` when the description normalizes to nothing.
    pub fn create(
        &self,
        description: &str,
        customer: Option<String>,
        assigned_to: Option<String>,
        title: Option<String>,
    ) -> Result<Ticket, TicketError> {
        if normalize(description).is_empty() {
            return Err(TicketError::EmptyInput);
        }

        let triage = self.rules.classify(description);
        let now = Timestamp::now();
        let ticket = Ticket {
            id: Uuid::new_v4(),
            title: title.unwrap_or_else(|| self.derive_title(description)),
            description: description.to_string(),
            category: triage.category,
            priority: triage.priority,
            status: TicketStatus::Open,
            assigned_to,
            customer,
            created_at: now,
            updated_at: now,
            ai_suggestion: Some(triage.suggestion),
        };

        let mut tickets = self.lock()?;
        tickets.insert(0, ticket.clone());

        tracing::info!(
            id = %ticket.id,
            category = %ticket.category,
            priority = %ticket.priority,
            "ticket created"
        );
        Ok(ticket)
    }

    /// Get a ticket by id.
    pub fn get(&self, id: Uuid) -> Result<Ticket, TicketError> {
        let tickets = self.lock()?;
        tickets
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(TicketError::NotFound(id))
    }

    /// Update a ticket's status and/or assignee.
    ///
    /// Status changes are validated by the lifecycle rules. Any accepted
    /// call refreshes `updated_at` to a strictly later stamp, including
    /// writes that set a field to its current value.
    pub fn update(
        &self,
        id: Uuid,
        status: Option<TicketStatus>,
        assigned_to: Option<String>,
    ) -> Result<Ticket, TicketError> {
        let mut tickets = self.lock()?;
        let ticket = tickets
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TicketError::NotFound(id))?;

        if let Some(new_status) = status {
            validate_transition(ticket.status, new_status)?;
            if ticket.status != new_status {
                tracing::info!(
                    id = %ticket.id,
                    from = %ticket.status,
                    to = %new_status,
                    "ticket status changed"
                );
            }
            ticket.status = new_status;
        }
        if let Some(assignee) = assigned_to {
            ticket.assigned_to = Some(assignee);
        }

        ticket.updated_at = Timestamp::next_after(ticket.updated_at);
        Ok(ticket.clone())
    }

    /// Snapshot of all tickets, newest-first.
    pub fn list(&self) -> Vec<Ticket> {
        match self.tickets.lock() {
            Ok(tickets) => tickets.clone(),
            Err(_) => vec![],
        }
    }

    /// Total number of tickets ever created (deletion is unsupported).
    pub fn len(&self) -> usize {
        self.tickets.lock().map(|t| t.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn derive_title(&self, description: &str) -> String {
        let truncated: String = description.chars().take(self.title_max_chars).collect();
        format!("{}...", truncated)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<Ticket>>, TicketError> {
        self.tickets
            .lock()
            .map_err(|e| TicketError::Storage(DeskError::Storage(format!("Lock poisoned: {}", e))))
    }
}

impl Default for TicketStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
