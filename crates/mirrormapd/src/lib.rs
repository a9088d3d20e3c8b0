//! Mirror map daemon library - exposes modules for testing.

pub mod config;
pub mod publish;
pub mod refresh;
pub mod routes;
