use axum::{routing::get, Router};

pub mod dashboard;
pub mod system;

/// Router for all dataset-backed endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/status", get(system::status))
        .route("/filters", get(dashboard::filters))
        .route("/dashboard", get(dashboard::get_dashboard).post(dashboard::post_dashboard))
        .route("/charts/:id", get(dashboard::get_chart))
}
