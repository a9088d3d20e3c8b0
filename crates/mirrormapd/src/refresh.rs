//! Periodic refresh driver.
//!
//! Owns the fixed cadence; the aggregator itself stays schedule-free so any
//! driver can produce snapshots on demand.

use crate::publish::SnapshotPublisher;
use mirrormap_core::Aggregator;
use std::time::Duration;
use tokio::time::{self, MissedTickBehavior};
use tracing::info;

/// Drive the aggregator on a fixed cadence, publishing every snapshot.
/// The first tick fires immediately; runs until the task is aborted.
pub async fn run<P: SnapshotPublisher>(aggregator: Aggregator, period: Duration, publisher: P) {
    let mut ticker = time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        let snapshot = aggregator.collect().await;
        let reachable = snapshot.nodes.iter().filter(|n| n.reachable).count();
        info!(
            "Refresh complete: {}/{} nodes reachable",
            reachable,
            snapshot.nodes.len()
        );

        publisher.publish(snapshot);
    }
}
