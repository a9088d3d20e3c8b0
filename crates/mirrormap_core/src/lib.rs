//! Mirror network status pipeline.
//!
//! Polls the registered mirror stats endpoints, pulls usage figures out of
//! their plaintext responses, and aggregates everything into per-tick
//! snapshots for the map front end.

pub mod aggregate;
pub mod extract;
pub mod fetch;
pub mod registry;
pub mod snapshot;

pub use aggregate::Aggregator;
pub use extract::{extract_daily, extract_total, UsageFields};
pub use fetch::{FetchError, StatusFetcher};
pub use registry::{NodeDescriptor, Registry, RegistryError};
pub use snapshot::{NodeMarker, NodeState, Snapshot};
