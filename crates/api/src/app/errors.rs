use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use crate::app::services::ServiceError;

pub fn service_error_to_response(err: ServiceError) -> axum::response::Response {
    match err {
        ServiceError::Invalid(issues) => {
            let messages: Vec<String> = issues.iter().map(ToString::to_string).collect();
            (
                StatusCode::BAD_REQUEST,
                axum::Json(json!({
                    "error": "validation_error",
                    "errors": messages,
                })),
            )
                .into_response()
        }
        ServiceError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "item not found"),
        ServiceError::Backend { message } => {
            json_error(StatusCode::BAD_GATEWAY, "store_error", message)
        }
    }
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
