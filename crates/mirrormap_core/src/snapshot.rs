//! Aggregated node state.
//!
//! A snapshot is rebuilt from scratch every tick; nothing is merged with the
//! previous tick's data.

use crate::extract::UsageFields;
use crate::registry::NodeDescriptor;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-node result for one refresh tick. An unreachable node never carries
/// usage figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeState {
    pub descriptor: NodeDescriptor,
    pub reachable: bool,
    pub total_usage: Option<String>,
    pub daily_usage: Option<String>,
}

impl NodeState {
    /// Node answered; usage fields are whatever extraction found (either may
    /// still be missing on its own).
    pub fn reachable(descriptor: NodeDescriptor, usage: UsageFields) -> Self {
        Self {
            descriptor,
            reachable: true,
            total_usage: usage.total,
            daily_usage: usage.daily,
        }
    }

    /// Node did not answer this tick.
    pub fn unreachable(descriptor: NodeDescriptor) -> Self {
        Self {
            descriptor,
            reachable: false,
            total_usage: None,
            daily_usage: None,
        }
    }
}

/// One complete refresh result: exactly one entry per registered node, in
/// registry order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub generated_at: DateTime<Utc>,
    pub nodes: Vec<NodeState>,
}

impl Snapshot {
    /// Flatten into the marker tuples the map front end consumes.
    pub fn markers(&self) -> Vec<NodeMarker> {
        self.nodes.iter().map(NodeMarker::from_state).collect()
    }
}

/// What the UI layer sees per node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeMarker {
    pub display_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub reachable: bool,
    pub total_usage: Option<String>,
    pub daily_usage: Option<String>,
}

impl NodeMarker {
    fn from_state(state: &NodeState) -> Self {
        Self {
            display_name: state.descriptor.display_name.clone(),
            latitude: state.descriptor.latitude,
            longitude: state.descriptor.longitude,
            reachable: state.reachable,
            total_usage: state.total_usage.clone(),
            daily_usage: state.daily_usage.clone(),
        }
    }
}
