use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, Json};

use crate::app::dto::StatusResponse;
use crate::app::services::AppServices;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Cache state: whether the dataset has been loaded yet, and from where.
pub async fn status(Extension(services): Extension<Arc<AppServices>>) -> Json<StatusResponse> {
    let loaded_at = services.loaded_at();
    Json(StatusResponse {
        source: services.source_description(),
        loaded: loaded_at.is_some(),
        loaded_at,
    })
}
