//! Configuration management for mirrormapd.
//!
//! Loads settings from /etc/mirrormap/config.toml or falls back to the
//! built-in Albony mirror registry and defaults.

use anyhow::{Context, Result};
use mirrormap_core::{NodeDescriptor, Registry};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

/// Config file path
pub const CONFIG_PATH: &str = "/etc/mirrormap/config.toml";

/// Daemon-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaemonConfig {
    /// Seconds between refresh ticks
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,

    /// Per-fetch timeout in seconds
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,

    /// Listen address for the snapshot API
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

fn default_refresh_interval() -> u64 {
    60
}

fn default_fetch_timeout() -> u64 {
    5
}

fn default_listen_addr() -> String {
    "127.0.0.1:7870".to_string()
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: default_refresh_interval(),
            fetch_timeout_secs: default_fetch_timeout(),
            listen_addr: default_listen_addr(),
        }
    }
}

impl DaemonConfig {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

/// Full daemon configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub daemon: DaemonConfig,

    /// Monitored mirror nodes, in map display order
    #[serde(default = "default_nodes")]
    pub nodes: Vec<NodeDescriptor>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            daemon: DaemonConfig::default(),
            nodes: default_nodes(),
        }
    }
}

/// The Albony mirror network, as shipped.
fn default_nodes() -> Vec<NodeDescriptor> {
    let nodes = [
        ("bom", "Mumbai", 19.4, 72.8777, "https://mirror.bom.albony.in/stats"),
        ("bom2", "Mumbai-2 (EIX)", 19.0760, 72.8777, "https://mirror.bom2.albony.in/stats"),
        ("del", "Delhi (EIX)", 28.7041, 77.1025, "https://mirror.del.albony.in/stats"),
        ("del2", "Delhi (Cityline)", 28.9, 77.3, "https://mirror.del2.albony.in/stats"),
        ("hyd", "Hyderabad", 17.3850, 78.4867, "https://mirror.hyd.albony.in/stats"),
        ("ajl", "Aizawl", 23.7271, 92.7176, "https://mirror.ajl.albony.in/stats"),
        ("maa", "Chennai", 13.0827, 80.2707, "https://mirror.maa.albony.in/stats"),
        ("nag", "Nagpur", 21.1458, 79.0882, "https://mirror.nag.albony.in/stats"),
    ];

    nodes
        .into_iter()
        .map(|(id, name, lat, lon, url)| NodeDescriptor {
            id: id.to_string(),
            display_name: name.to_string(),
            latitude: lat,
            longitude: lon,
            endpoint_url: url.to_string(),
        })
        .collect()
}

impl Config {
    /// Load config from the default path, or fall back to defaults.
    pub fn load_or_default() -> Self {
        Self::load(Path::new(CONFIG_PATH)).unwrap_or_else(|e| {
            warn!("Config not found, using built-in defaults: {}", e);
            Config::default()
        })
    }

    /// Load config from a specific path; an explicit path failing is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Build the validated node registry from this config.
    pub fn registry(&self) -> Result<Registry> {
        Registry::new(self.nodes.clone()).context("Invalid node registry in config")
    }
}
