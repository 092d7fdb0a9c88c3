//! Giveaway timer service for the deferred "giveaway ended" edit.
//!
//! Each `/giveaway` invocation schedules one timer. When it fires the original reply
//! is edited to say the giveaway ended and its button is removed. Timers live only in
//! memory, keyed by the interaction ID, so a restart drops them. Each entry keeps the
//! task's abort handle so a timer can be cancelled before it fires.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::AbortHandle;

use crate::server::service::{responder::Responder, response::giveaway::giveaway_ended};

/// Service owning all pending giveaway timers.
///
/// Cheap to clone; clones share the same registry.
#[derive(Clone, Default)]
pub struct GiveawayTimerService {
    /// Pending timers by interaction ID.
    timers: Arc<RwLock<HashMap<u64, AbortHandle>>>,
}

impl GiveawayTimerService {
    /// Creates a service with no pending timers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules the ended edit for a giveaway reply.
    ///
    /// Spawns a task that sleeps for `delay`, edits the reply through `responder` and
    /// then removes its own registry entry. Edit failures (for example a deleted
    /// message) are logged and otherwise ignored. Scheduling again under the same
    /// `invocation_id` aborts and replaces the earlier timer.
    ///
    /// # Arguments
    /// - `invocation_id` - Interaction ID of the giveaway command
    /// - `delay` - Time until the giveaway ends; zero fires on the next tick
    /// - `responder` - Reply handle of the giveaway interaction
    pub async fn schedule(
        &self,
        invocation_id: u64,
        delay: Duration,
        responder: Arc<dyn Responder>,
    ) {
        // Held until the entry is inserted so the task cannot remove it first
        let mut timers = self.timers.write().await;

        let registry = self.timers.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            match responder.edit_reply(&giveaway_ended()).await {
                Ok(()) => tracing::info!("Giveaway {} ended", invocation_id),
                Err(e) => tracing::error!("Failed to end giveaway {}: {}", invocation_id, e),
            }

            let mut timers = registry.write().await;
            if timers
                .get(&invocation_id)
                .is_some_and(|handle| handle.id() == tokio::task::id())
            {
                timers.remove(&invocation_id);
            }
        });

        if let Some(previous) = timers.insert(invocation_id, handle.abort_handle()) {
            tracing::warn!("Replacing pending giveaway timer {}", invocation_id);
            previous.abort();
        }

        tracing::debug!("Scheduled giveaway {} to end in {:?}", invocation_id, delay);
    }

    /// Cancels a pending timer without editing the reply.
    ///
    /// # Returns
    /// - `true` - A pending timer existed and was aborted
    /// - `false` - No timer is pending for this ID (never scheduled or already fired)
    pub async fn cancel(&self, invocation_id: u64) -> bool {
        match self.timers.write().await.remove(&invocation_id) {
            Some(handle) => {
                handle.abort();
                tracing::info!("Cancelled giveaway {}", invocation_id);
                true
            }
            None => false,
        }
    }

    /// Number of timers that have not fired yet.
    pub async fn pending(&self) -> usize {
        self.timers.read().await.len()
    }
}
