//! Background task that writes settings to disk after changes settle.

use super::store::SettingsStore;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument};

/// Default quiet period before a burst of changes is written out.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(250);

/// Handle to a running persister.
#[derive(Debug)]
pub struct PersisterHandle {
    shutdown: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl PersisterHandle {
    /// Stops the persister, writing any pending change first.
    #[instrument(skip(self))]
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Err(e) = self.task.await {
            error!(error = %e, "Settings persister task failed");
        }
    }
}

/// Spawns a task that saves `store` once it has been quiet for `debounce`.
///
/// Must be called inside a tokio runtime.
#[instrument(skip(store))]
pub fn spawn_persister(store: SettingsStore, debounce: Duration) -> PersisterHandle {
    let (shutdown_tx, mut shutdown_rx) = oneshot::channel();
    let mut rx = store.watch();
    rx.mark_unchanged();

    let task = tokio::spawn(async move {
        let mut dirty = false;
        loop {
            tokio::select! {
                changed = rx.changed() => {
                    if changed.is_err() {
                        debug!("Settings store dropped, persister exiting");
                        break;
                    }
                    rx.mark_unchanged();
                    dirty = true;
                }
                _ = tokio::time::sleep(debounce), if dirty => {
                    flush(&store);
                    dirty = false;
                }
                _ = &mut shutdown_rx => {
                    debug!("Persister shutdown requested");
                    break;
                }
            }
        }
        if dirty || rx.has_changed().unwrap_or(false) {
            flush(&store);
        }
        info!("Settings persister stopped");
    });

    PersisterHandle {
        shutdown: Some(shutdown_tx),
        task,
    }
}

fn flush(store: &SettingsStore) {
    if let Err(e) = store.save() {
        error!(error = %e, "Failed to persist settings");
    }
}
