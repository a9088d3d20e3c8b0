//! Mirror node registry.
//!
//! The set of monitored endpoints is fixed at startup. The registry is built
//! once from configuration, validated, and then only read.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One registered mirror node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDescriptor {
    /// Stable identifier (e.g., "bom", "hyd")
    pub id: String,
    /// Human-readable name shown on the map
    pub display_name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Plaintext stats endpoint, fetched every tick
    pub endpoint_url: String,
}

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("duplicate node id: {0}")]
    DuplicateId(String),
    #[error("node {0} has an empty id")]
    EmptyId(String),
}

/// Immutable, ordered collection of monitored nodes. Snapshot order follows
/// registry order.
#[derive(Debug, Clone)]
pub struct Registry {
    nodes: Vec<NodeDescriptor>,
}

impl Registry {
    /// Build a registry, rejecting duplicate or empty node ids.
    pub fn new(nodes: Vec<NodeDescriptor>) -> Result<Self, RegistryError> {
        let mut seen = std::collections::HashSet::new();
        for node in &nodes {
            if node.id.is_empty() {
                return Err(RegistryError::EmptyId(node.display_name.clone()));
            }
            if !seen.insert(node.id.as_str()) {
                return Err(RegistryError::DuplicateId(node.id.clone()));
            }
        }
        Ok(Self { nodes })
    }

    pub fn nodes(&self) -> &[NodeDescriptor] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node by id.
    pub fn get(&self, id: &str) -> Option<&NodeDescriptor> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, name: &str) -> NodeDescriptor {
        NodeDescriptor {
            id: id.to_string(),
            display_name: name.to_string(),
            latitude: 19.4,
            longitude: 72.8777,
            endpoint_url: format!("https://mirror.{}.example.net/stats", id),
        }
    }

    #[test]
    fn test_registry_preserves_order() {
        let registry = Registry::new(vec![node("bom", "Mumbai"), node("del", "Delhi")]).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.nodes()[0].id, "bom");
        assert_eq!(registry.nodes()[1].id, "del");
    }

    #[test]
    fn test_registry_rejects_duplicate_id() {
        let result = Registry::new(vec![node("bom", "Mumbai"), node("bom", "Mumbai-2")]);
        assert!(matches!(result, Err(RegistryError::DuplicateId(id)) if id == "bom"));
    }

    #[test]
    fn test_registry_rejects_empty_id() {
        let result = Registry::new(vec![node("", "Nowhere")]);
        assert!(matches!(result, Err(RegistryError::EmptyId(_))));
    }

    #[test]
    fn test_registry_lookup() {
        let registry = Registry::new(vec![node("hyd", "Hyderabad")]).unwrap();
        assert_eq!(registry.get("hyd").unwrap().display_name, "Hyderabad");
        assert!(registry.get("maa").is_none());
    }

    #[test]
    fn test_empty_registry_is_allowed() {
        let registry = Registry::new(Vec::new()).unwrap();
        assert!(registry.is_empty());
    }
}
