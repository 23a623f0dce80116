use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use halflife_infra::analytics::ChartId;

use crate::app::dto::SelectionRequest;
use crate::app::errors;
use crate::app::services::AppServices;

pub async fn filters(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    match services.filter_options() {
        Ok(options) => (StatusCode::OK, Json(options)).into_response(),
        Err(e) => errors::load_error_to_response(e),
    }
}

pub async fn get_dashboard(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    render_dashboard(&services, SelectionRequest::default())
}

pub async fn post_dashboard(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<SelectionRequest>,
) -> axum::response::Response {
    render_dashboard(&services, body)
}

fn render_dashboard(services: &AppServices, request: SelectionRequest) -> axum::response::Response {
    match services.dashboard(request) {
        Ok(dashboard) => (StatusCode::OK, Json(dashboard)).into_response(),
        Err(e) => errors::load_error_to_response(e),
    }
}

pub async fn get_chart(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match id.parse::<ChartId>() {
        Ok(id) => id,
        Err(e) => return errors::json_error(StatusCode::NOT_FOUND, "not_found", e.to_string()),
    };

    match services.chart(id) {
        Ok(spec) => (StatusCode::OK, Json(spec)).into_response(),
        Err(e) => errors::load_error_to_response(e),
    }
}
