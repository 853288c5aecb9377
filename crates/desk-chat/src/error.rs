//! Error types for the chat intake.

use desk_tickets::TicketError;

/// Errors from the conversational intake.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("message exceeds maximum length of {0} characters")]
    MessageTooLong(usize),
    #[error("ticket error: {0}")]
    Ticket(#[from] TicketError),
    #[error("storage error: {0}")]
    Storage(String),
}
