//! Core domain types for ozchat.
//!
//! A "session" is one anonymous visitor's conversation thread; a "message"
//! is one line in it, tagged with who authored it. The operator-facing
//! view types (`SessionOverview`, `PendingConversation`) live here too so
//! the storage and http crates agree on their shape.

pub mod constants;
pub mod env_config;
mod message;
mod responder_config;
mod session;

pub use message::{Message, SenderRole, UnknownSenderRole};
pub use responder_config::ResponderConfig;
pub use session::{DashboardStats, PendingConversation, Session, SessionOverview};
