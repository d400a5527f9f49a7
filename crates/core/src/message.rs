use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One line of a conversation. Append-only: messages are never edited or
/// deleted, and `id` is assigned by the store in insertion order (it
/// doubles as the polling cursor).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub session_id: String,
    pub sender: SenderRole,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// Who authored a message.
///
/// `Ai` covers both the simulated responder and an operator impersonating
/// it, so the two are indistinguishable on the wire. `Admin` is
/// the operator speaking openly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SenderRole {
    User,
    Ai,
    Admin,
}

impl SenderRole {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Ai => "ai",
            Self::Admin => "admin",
        }
    }

    /// Whether this role counts as a response when deciding if a
    /// conversation still needs the operator's attention.
    pub const fn is_response(self) -> bool {
        matches!(self, Self::Ai | Self::Admin)
    }
}

impl std::str::FromStr for SenderRole {
    type Err = UnknownSenderRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "ai" => Ok(Self::Ai),
            "admin" => Ok(Self::Admin),
            _ => Err(UnknownSenderRole(s.to_owned())),
        }
    }
}

impl std::fmt::Display for SenderRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a stored sender string is outside the closed role set.
#[derive(Debug, thiserror::Error)]
#[error("unknown sender role: {0}")]
pub struct UnknownSenderRole(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_str() {
        for role in [SenderRole::User, SenderRole::Ai, SenderRole::Admin] {
            assert_eq!(role.as_str().parse::<SenderRole>().unwrap(), role);
        }
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!("operator".parse::<SenderRole>().is_err());
    }

    #[test]
    fn only_ai_and_admin_count_as_responses() {
        assert!(!SenderRole::User.is_response());
        assert!(SenderRole::Ai.is_response());
        assert!(SenderRole::Admin.is_response());
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&SenderRole::Ai).unwrap(), "\"ai\"");
    }
}
