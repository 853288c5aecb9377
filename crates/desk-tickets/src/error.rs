//! Error types for the ticket engine.

use desk_core::error::DeskError;
use uuid::Uuid;

/// Errors from ticket creation, lookup, and mutation.
#[derive(Debug, thiserror::Error)]
pub enum TicketError {
    #[error("complaint text cannot be empty")]
    EmptyInput,
    #[error("Ticket not found: {0}")]
    NotFound(Uuid),
    #[error("Invalid ticket status: {0}")]
    InvalidStatus(String),
    #[error("Invalid ticket priority: {0}")]
    InvalidPriority(String),
    #[error("Storage error: {0}")]
    Storage(#[from] DeskError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_error_display() {
        let err = TicketError::EmptyInput;
        assert_eq!(err.to_string(), "complaint text cannot be empty");

        let id = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
        let err = TicketError::NotFound(id);
        assert_eq!(
            err.to_string(),
            "Ticket not found: 550e8400-e29b-41d4-a716-446655440000"
        );

        let err = TicketError::InvalidStatus("Pending".to_string());
        assert_eq!(err.to_string(), "Invalid ticket status: Pending");

        let err = TicketError::InvalidPriority("Sev1".to_string());
        assert_eq!(err.to_string(), "Invalid ticket priority: Sev1");
    }

    #[test]
    fn test_ticket_error_from_desk_error() {
        let storage_err = DeskError::Storage("lock poisoned".to_string());
        let ticket_err: TicketError = storage_err.into();
        assert!(matches!(ticket_err, TicketError::Storage(_)));
        assert!(ticket_err.to_string().contains("lock poisoned"));
    }

    #[test]
    fn test_errors_implement_debug() {
        let err = TicketError::NotFound(Uuid::new_v4());
        let dbg = format!("{:?}", err);
        assert!(dbg.contains("NotFound"));
    }
}
