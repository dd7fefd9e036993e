use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};

use stockroom_core::ItemId;
use stockroom_inventory::FilterCriteria;

use crate::app::{dto, errors};
use crate::app::services::InventoryService;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_item).get(list_items))
        .route("/search", get(search_items))
        .route("/bulk", post(bulk_update))
        .route("/:id", put(update_item).delete(delete_item))
}

pub async fn create_item(
    Extension(services): Extension<Arc<InventoryService>>,
    Json(body): Json<dto::ItemRequest>,
) -> axum::response::Response {
    match services.add_item(body.into_draft()) {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn list_items(
    Extension(services): Extension<Arc<InventoryService>>,
    Query(query): Query<dto::ListQuery>,
) -> axum::response::Response {
    let after = match query.after {
        Some(s) => match s.parse::<ItemId>() {
            Ok(id) => Some(id),
            Err(_) => {
                return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid cursor")
            }
        },
        None => None,
    };

    match services.list_items(query.page_size, after) {
        Ok(page) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "items": page.items,
                "count": page.items.len(),
                "next_cursor": page.next_cursor,
            })),
        )
            .into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn search_items(
    Extension(services): Extension<Arc<InventoryService>>,
    Query(criteria): Query<FilterCriteria>,
) -> axum::response::Response {
    match services.filter_items(&criteria) {
        Ok(items) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "items": items,
                "count": items.len(),
            })),
        )
            .into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn update_item(
    Extension(services): Extension<Arc<InventoryService>>,
    Path(id): Path<String>,
    Json(body): Json<dto::ItemRequest>,
) -> axum::response::Response {
    let id: ItemId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid item id")
        }
    };

    match services.update_item(id, body.into_draft()) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn delete_item(
    Extension(services): Extension<Arc<InventoryService>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ItemId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid item id")
        }
    };

    match services.delete_item(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn bulk_update(
    Extension(services): Extension<Arc<InventoryService>>,
    Json(body): Json<dto::BulkUpdateRequest>,
) -> axum::response::Response {
    let entries = body.items.into_iter().map(|e| e.into_entry()).collect();

    match services.bulk_update(entries) {
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
