//! Shared foundation for the desk workspace.
//!
//! Defines the ticket data model, the top-level error type, configuration,
//! and logging initialization used by every other member crate.

pub mod config;
pub mod error;
pub mod logging;
pub mod types;

pub use config::{ChatConfig, DeskConfig, GeneralConfig, TriageConfig};
pub use error::{DeskError, Result};
pub use types::{Category, Priority, Ticket, TicketStatus, Timestamp};
