use std::sync::Arc;
use std::time::Duration;

use ozchat_core::{ResponderConfig, SenderRole};
use ozchat_storage::ChatStore;
use rand::Rng;
use rand::seq::SliceRandom;

/// Timer-driven canned replies that keep up the automation illusion until
/// the operator steps in.
///
/// Each scheduled reply is a detached task: no handle is retained and the
/// timer is never cancelled. If the operator answers first, or ends the
/// session mid-flight, the canned reply still lands; both messages
/// persist.
pub struct SimulatedResponder {
    store: Arc<dyn ChatStore>,
    config: ResponderConfig,
}

impl SimulatedResponder {
    pub fn new(store: Arc<dyn ChatStore>, config: ResponderConfig) -> Self {
        Self { store, config }
    }

    /// Schedule exactly one delayed `ai` reply for `session_id`.
    ///
    /// Returns immediately; the append happens after a uniformly random
    /// delay inside the configured window. Failures are logged and
    /// swallowed, since nobody is awaiting this path and there are no retries.
    pub fn schedule_reply(&self, session_id: &str) {
        let Some(reply) = self.pick_reply() else {
            tracing::warn!("reply corpus is empty, skipping simulated reply");
            return;
        };
        let delay = self.pick_delay();
        let store = Arc::clone(&self.store);
        let session_id = session_id.to_owned();

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            match store.append_message(&session_id, SenderRole::Ai, &reply).await {
                Ok(id) => {
                    tracing::debug!(
                        session_id = %session_id,
                        message_id = id,
                        "simulated reply appended"
                    );
                },
                Err(e) => {
                    tracing::warn!(
                        session_id = %session_id,
                        error = %e,
                        "simulated reply failed"
                    );
                },
            }
        });
    }

    fn pick_reply(&self) -> Option<String> {
        self.config.replies.choose(&mut rand::thread_rng()).cloned()
    }

    fn pick_delay(&self) -> Duration {
        let min_ms = u64::try_from(self.config.min_delay.as_millis()).unwrap_or(u64::MAX);
        let max_ms = u64::try_from(self.config.max_delay.as_millis()).unwrap_or(u64::MAX);
        if min_ms >= max_ms {
            return Duration::from_millis(min_ms);
        }
        Duration::from_millis(rand::thread_rng().gen_range(min_ms..=max_ms))
    }
}
