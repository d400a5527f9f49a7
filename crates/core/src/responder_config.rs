use std::time::Duration;

use crate::constants::{DEFAULT_REPLIES, DEFAULT_REPLY_DELAY_MAX_MS, DEFAULT_REPLY_DELAY_MIN_MS};
use crate::env_config::env_parse_with_default;

/// Injected configuration for the simulated responder.
///
/// The reply corpus and delay window are data, not code, so tests can
/// substitute a deterministic corpus and a zero delay.
#[derive(Debug, Clone)]
pub struct ResponderConfig {
    pub replies: Vec<String>,
    pub min_delay: Duration,
    pub max_delay: Duration,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            replies: DEFAULT_REPLIES.iter().map(|s| (*s).to_owned()).collect(),
            min_delay: Duration::from_millis(DEFAULT_REPLY_DELAY_MIN_MS),
            max_delay: Duration::from_millis(DEFAULT_REPLY_DELAY_MAX_MS),
        }
    }
}

impl ResponderConfig {
    /// Build from environment, falling back to defaults.
    ///
    /// `OZCHAT_REPLY_DELAY_MIN_MS` / `OZCHAT_REPLY_DELAY_MAX_MS` override
    /// the delay window. A min above the max is clamped to the max and
    /// logged rather than rejected.
    pub fn from_env() -> Self {
        let min_ms: u64 =
            env_parse_with_default("OZCHAT_REPLY_DELAY_MIN_MS", DEFAULT_REPLY_DELAY_MIN_MS);
        let max_ms: u64 =
            env_parse_with_default("OZCHAT_REPLY_DELAY_MAX_MS", DEFAULT_REPLY_DELAY_MAX_MS);
        let (min_ms, max_ms) = if min_ms > max_ms {
            tracing::warn!(min_ms, max_ms, "reply delay min exceeds max, clamping");
            (max_ms, max_ms)
        } else {
            (min_ms, max_ms)
        };
        Self {
            min_delay: Duration::from_millis(min_ms),
            max_delay: Duration::from_millis(max_ms),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_corpus_is_nonempty() {
        let config = ResponderConfig::default();
        assert!(!config.replies.is_empty());
        assert!(config.min_delay <= config.max_delay);
    }
}
