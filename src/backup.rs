//! Periodic backup of the note collection
//!
//! Scoped lifecycle: the task starts when the store is activated and the
//! token tears it down on deactivation, so no timer outlives its store.

use std::time::Duration;

use tokio::time;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::storage::Storage;
use crate::store::NoteStore;

/// Default wall-clock interval between backups: 5 minutes
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Back up the store on a fixed interval until the token is cancelled
///
/// A failed write is logged and dropped; the next tick retries with a fresh
/// snapshot.
pub async fn run<S: Storage>(
    store: NoteStore,
    storage: S,
    interval: Duration,
    shutdown: CancellationToken,
) {
    let mut ticker = time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    // a tokio interval fires immediately; skip that tick so the first
    // backup lands one full interval after activation
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                match store.backup(&storage).await {
                    Ok(()) => {
                        tracing::debug!(area = store.area().id, "Automatic backup written");
                    }
                    Err(error) => {
                        tracing::warn!(area = store.area().id, %error, "Automatic backup failed");
                    }
                }
            }
            () = shutdown.cancelled() => {
                tracing::debug!(area = store.area().id, "Backup task stopped");
                break;
            }
        }
    }
}
