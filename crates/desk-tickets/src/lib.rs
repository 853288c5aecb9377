//! Ticket engine for the desk system.
//!
//! Owns the in-memory ticket repository, validates lifecycle transitions,
//! and answers filtered queries and aggregate counts over the ticket set.

pub mod error;
pub mod lifecycle;
pub mod query;
pub mod store;

pub use error::TicketError;
pub use lifecycle::{parse_priority, parse_status, validate_transition};
pub use query::{count_by_priority, count_by_status, filter, PriorityCounts, StatusCounts, TicketFilter};
pub use store::TicketStore;
