use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use halflife_infra::LoadError;

/// Dataset load failures: fatal for the request, nothing partial is returned.
pub fn load_error_to_response(err: LoadError) -> axum::response::Response {
    tracing::error!("dataset unavailable: {err}");
    json_error(StatusCode::SERVICE_UNAVAILABLE, "load_error", err.to_string())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
