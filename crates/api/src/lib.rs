//! HTTP API: configuration, routing, and request/response mapping for the
//! skill half-life dashboard.

pub mod app;
pub mod config;
pub mod middleware;
