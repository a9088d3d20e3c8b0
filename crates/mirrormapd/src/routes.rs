//! HTTP surface for the latest snapshot.
//!
//! The map front end polls these endpoints; it never talks to the pipeline
//! directly.

use crate::publish::SnapshotStore;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use mirrormap_core::NodeMarker;
use serde::{Deserialize, Serialize};

/// State shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: SnapshotStore,
    pub node_count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub nodes: usize,
    pub last_refresh: Option<DateTime<Utc>>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/v1/snapshot", get(snapshot))
        .route("/v1/health", get(health))
        .with_state(state)
}

/// Latest markers in registry order. Defensively serves an empty list before
/// the first tick completes.
async fn snapshot(State(state): State<AppState>) -> Json<Vec<NodeMarker>> {
    let markers = state
        .store
        .latest()
        .map(|s| s.markers())
        .unwrap_or_default();
    Json(markers)
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let last_refresh = state.store.latest().map(|s| s.generated_at);
    Json(HealthResponse {
        status: "ok".to_string(),
        nodes: state.node_count,
        last_refresh,
    })
}
