//! Named defaults shared across the workspace.

/// Fixed acknowledgement returned to the visitor immediately after a send,
/// before any (simulated or operator) reply lands.
pub const SEND_ACK: &str = "I'm processing your message and will respond shortly...";

/// Prefix for server-generated session tokens.
pub const SESSION_TOKEN_PREFIX: &str = "session_";

/// Random alphanumeric characters appended after the prefix.
pub const SESSION_TOKEN_LEN: usize = 9;

/// Lower bound of the simulated-reply delay, in milliseconds.
pub const DEFAULT_REPLY_DELAY_MIN_MS: u64 = 1_000;

/// Upper bound of the simulated-reply delay, in milliseconds.
pub const DEFAULT_REPLY_DELAY_MAX_MS: u64 = 4_000;

/// Canned replies the simulated responder draws from, uniformly at random.
pub const DEFAULT_REPLIES: &[&str] = &[
    "That's an interesting question. Let me think about that...",
    "I understand what you're asking. Here's my perspective...",
    "Based on my analysis, I would say...",
    "That's a great point! Let me elaborate...",
    "I can help you with that. Here's what I recommend...",
    "From my understanding, the answer would be...",
    "That's fascinating! Here's what I think...",
    "Let me process that information for you...",
    "I see what you mean. Here's my take...",
    "That's a complex question. Allow me to explain...",
];
