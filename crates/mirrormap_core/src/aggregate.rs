//! Per-tick aggregation of node states.
//!
//! Every registered node is fetched exactly once per invocation, all nodes
//! concurrently and failure-isolated from each other. The result always has
//! one entry per node, in registry order.

use crate::extract::UsageFields;
use crate::fetch::StatusFetcher;
use crate::registry::Registry;
use crate::snapshot::{NodeState, Snapshot};
use chrono::Utc;
use tokio::task::JoinSet;
use tracing::{info, warn};

/// Runs one full fetch-and-extract pass over the registry per invocation.
/// Owns no schedule of its own: any driver (interval timer, manual trigger,
/// test harness) calls [`Aggregator::collect`] to produce a snapshot.
pub struct Aggregator {
    registry: Registry,
    fetcher: StatusFetcher,
}

impl Aggregator {
    pub fn new(registry: Registry, fetcher: StatusFetcher) -> Self {
        Self { registry, fetcher }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Produce one snapshot. A failing node becomes an unreachable entry and
    /// never disturbs its siblings; the snapshot is complete only once every
    /// node's result is in.
    pub async fn collect(&self) -> Snapshot {
        let mut join_set = JoinSet::new();

        for (index, descriptor) in self.registry.nodes().iter().cloned().enumerate() {
            let fetcher = self.fetcher.clone();
            join_set.spawn(async move {
                let state = match fetcher.fetch(&descriptor.endpoint_url).await {
                    Ok(body) => {
                        let usage = UsageFields::from_text(&body);
                        info!(
                            "Fetched {}: total={}, daily={}",
                            descriptor.endpoint_url,
                            usage.total.as_deref().unwrap_or("N/A"),
                            usage.daily.as_deref().unwrap_or("N/A"),
                        );
                        NodeState::reachable(descriptor, usage)
                    }
                    Err(err) => {
                        warn!(
                            "Node {} unreachable ({}): {}",
                            descriptor.id,
                            err.kind(),
                            err
                        );
                        NodeState::unreachable(descriptor)
                    }
                };
                (index, state)
            });
        }

        let mut slots: Vec<Option<NodeState>> = vec![None; self.registry.len()];
        while let Some(joined) = join_set.join_next().await {
            if let Ok((index, state)) = joined {
                slots[index] = Some(state);
            }
        }

        // A slot can only stay empty if its task panicked; fill it with an
        // unreachable entry so no node is ever dropped from the snapshot.
        let nodes = slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                slot.unwrap_or_else(|| {
                    warn!(
                        "Node {} task did not report; marking unreachable",
                        self.registry.nodes()[index].id
                    );
                    NodeState::unreachable(self.registry.nodes()[index].clone())
                })
            })
            .collect();

        Snapshot {
            generated_at: Utc::now(),
            nodes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_empty_registry_yields_empty_snapshot() {
        let registry = Registry::new(Vec::new()).unwrap();
        let fetcher = StatusFetcher::new(Duration::from_secs(1)).unwrap();
        let snapshot = Aggregator::new(registry, fetcher).collect().await;
        assert!(snapshot.nodes.is_empty());
    }
}
