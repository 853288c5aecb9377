//! Conversation driver: one message in, at most one ticket out.
//!
//! The intake owns only the transcript; ticket persistence is delegated to
//! the shared store. The staged variant models the original two-phase typing
//! delay as cancellable tasks, so an abandoned exchange can never leak a
//! ticket.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::Notify;
use tokio::task::JoinHandle;

use desk_core::config::ChatConfig;
use desk_core::types::Ticket;
use desk_tickets::TicketStore;
use desk_triage::{normalize, RuleSet};

use crate::error::ChatError;
use crate::reply::acknowledgment;
use crate::types::{ChatMessage, MessageOutcome, TicketDraft};

/// Chat intake over a shared ticket store.
pub struct Intake {
    rules: RuleSet,
    store: Arc<TicketStore>,
    transcript: Arc<Mutex<Vec<ChatMessage>>>,
    config: ChatConfig,
}

impl Intake {
    /// Create an intake whose transcript starts with the configured greeting.
    pub fn new(store: Arc<TicketStore>, config: ChatConfig) -> Self {
        let transcript = Arc::new(Mutex::new(vec![ChatMessage::new(
            config.greeting.clone(),
            false,
        )]));
        Self {
            rules: RuleSet::new(),
            store,
            transcript,
            config,
        }
    }

    /// Handle one complaint message synchronously.
    ///
    /// Records both sides of the exchange, classifies the text, and
    /// materializes exactly one ticket through the repository.
    pub fn submit_message(&self, text: &str) -> Result<MessageOutcome, ChatError> {
        self.validate(text)?;
        self.record(ChatMessage::new(text, true))?;

        let triage = self.rules.classify(text);
        let reply = acknowledgment(triage.category, triage.priority).to_string();
        self.record(ChatMessage::new(reply.clone(), false))?;

        let ticket = self.store.create(text, None, None, None)?;
        tracing::debug!(id = %ticket.id, "ticket materialized from chat exchange");

        Ok(MessageOutcome {
            reply,
            ticket: Some(ticket),
        })
    }

    /// Handle one complaint message with the two-phase delayed flow.
    ///
    /// The user message is recorded immediately; the acknowledgment lands in
    /// the transcript after `ack_delay_ms` and the ticket is created after a
    /// further `materialize_delay_ms`. Cancelling the returned handle before
    /// a phase runs drops that phase silently -- no ticket is created for an
    /// abandoned exchange.
    pub fn submit_message_staged(&self, text: &str) -> Result<StagedSubmission, ChatError> {
        self.validate(text)?;
        self.record(ChatMessage::new(text, true))?;

        let triage = self.rules.classify(text);
        let draft = TicketDraft::from_triage(text, &triage);
        let reply = acknowledgment(triage.category, triage.priority).to_string();

        let cancel = Arc::new(Notify::new());
        let cancelled = Arc::clone(&cancel);
        let store = Arc::clone(&self.store);
        let transcript = Arc::clone(&self.transcript);
        let ack_delay = Duration::from_millis(self.config.ack_delay_ms);
        let materialize_delay = Duration::from_millis(self.config.materialize_delay_ms);

        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(ack_delay) => {}
                _ = cancelled.notified() => {
                    tracing::debug!("staged submission cancelled before acknowledgment");
                    return None;
                }
            }

            if let Ok(mut messages) = transcript.lock() {
                messages.push(ChatMessage::new(reply, false));
            }

            tokio::select! {
                _ = tokio::time::sleep(materialize_delay) => {}
                _ = cancelled.notified() => {
                    tracing::debug!("staged submission cancelled before ticket creation");
                    return None;
                }
            }

            match store.create(&draft.description, None, None, None) {
                Ok(ticket) => {
                    tracing::debug!(id = %ticket.id, "ticket materialized from staged exchange");
                    Some(ticket)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "staged ticket creation failed");
                    None
                }
            }
        });

        Ok(StagedSubmission { cancel, handle })
    }

    /// Snapshot of the conversation history, oldest first.
    pub fn transcript(&self) -> Vec<ChatMessage> {
        match self.transcript.lock() {
            Ok(messages) => messages.clone(),
            Err(_) => vec![],
        }
    }

    fn validate(&self, text: &str) -> Result<(), ChatError> {
        if normalize(text).is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if text.chars().count() > self.config.max_message_chars {
            return Err(ChatError::MessageTooLong(self.config.max_message_chars));
        }
        Ok(())
    }

    fn record(&self, message: ChatMessage) -> Result<(), ChatError> {
        let mut messages = self
            .transcript
            .lock()
            .map_err(|e| ChatError::Storage(format!("transcript lock poisoned: {}", e)))?;
        messages.push(message);
        Ok(())
    }
}

/// Handle on an in-flight two-phase submission.
pub struct StagedSubmission {
    cancel: Arc<Notify>,
    handle: JoinHandle<Option<Ticket>>,
}

impl StagedSubmission {
    /// Drop whichever phases have not run yet. Safe to call more than once.
    pub fn cancel(&self) {
        self.cancel.notify_one();
    }

    /// Wait for the submission to finish. `None` means it was cancelled (or
    /// creation failed) and no ticket exists.
    pub async fn join(self) -> Option<Ticket> {
        self.handle.await.ok().flatten()
    }
}

// =============================================================================
// Tests
// =============================================================================
