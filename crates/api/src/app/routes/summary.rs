use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use stockroom_inventory::summary::format_cents;

use crate::app::errors;
use crate::app::services::InventoryService;

pub async fn get_summary(
    Extension(services): Extension<Arc<InventoryService>>,
) -> axum::response::Response {
    match services.summary() {
        Ok(summary) => {
            let total_value = format_cents(summary.total_value_cents);
            (
                StatusCode::OK,
                Json(serde_json::json!({
                    "summary": summary,
                    "total_value": total_value,
                })),
            )
                .into_response()
        }
        Err(e) => errors::service_error_to_response(e),
    }
}
