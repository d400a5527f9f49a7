//! Business logic layer for ozchat.
//!
//! [`ChatService`] handles the visitor path (send, history, cursor polls)
//! and triggers the [`SimulatedResponder`]; [`OperatorService`] is the
//! concealed human's override channel; [`SessionService`] covers explicit
//! session lifecycle. All of them talk to storage through the narrow
//! `ChatStore` capability handed in at construction.

mod chat_service;
mod error;
mod operator_service;
mod responder;
mod session_service;

pub use chat_service::{ChatService, SendOutcome};
pub use error::ServiceError;
pub use operator_service::OperatorService;
pub use responder::SimulatedResponder;
pub use session_service::SessionService;
