//! Bowling score tracker: HTTP API.
//!
//! Exposes the scoring context over axum. The binary in `main.rs` wires the
//! routers defined here to an in-memory game registry.

pub mod config;
pub mod error;
pub mod notation;
pub mod routes;
pub mod state;
