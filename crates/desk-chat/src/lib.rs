//! Conversational intake for the desk system.
//!
//! Turns a single chat message into exactly one classified ticket, keeps the
//! conversation transcript, and exposes the facade the presentation layer
//! calls into.

pub mod error;
pub mod intake;
pub mod orchestrator;
pub mod reply;
pub mod types;

pub use error::ChatError;
pub use intake::{Intake, StagedSubmission};
pub use orchestrator::DeskOrchestrator;
pub use reply::acknowledgment;
pub use types::{ChatMessage, ComplaintMeta, MessageOutcome, TicketDraft};
