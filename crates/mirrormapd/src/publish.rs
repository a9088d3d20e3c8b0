//! Snapshot publishing boundary.
//!
//! The refresh loop hands each finished snapshot to a publisher; the map
//! front end only ever sees what comes out of this seam. The bundled
//! implementation keeps the latest snapshot in a watch channel for the HTTP
//! surface; alternative front ends implement [`SnapshotPublisher`].

use mirrormap_core::Snapshot;
use std::sync::Arc;
use tokio::sync::watch;

/// Consumes one complete snapshot per refresh tick.
pub trait SnapshotPublisher: Send + Sync {
    fn publish(&self, snapshot: Snapshot);
}

/// Watch-channel backed store of the most recent snapshot. Holds `None`
/// until the first tick completes.
#[derive(Clone)]
pub struct SnapshotStore {
    tx: Arc<watch::Sender<Option<Snapshot>>>,
    rx: watch::Receiver<Option<Snapshot>>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        let (tx, rx) = watch::channel(None);
        Self { tx: Arc::new(tx), rx }
    }

    /// Most recent snapshot, if any tick has completed yet.
    pub fn latest(&self) -> Option<Snapshot> {
        self.rx.borrow().clone()
    }
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotPublisher for SnapshotStore {
    fn publish(&self, snapshot: Snapshot) {
        // The store holds its own receiver, so send cannot fail.
        let _ = self.tx.send(Some(snapshot));
    }
}
