use axum::{routing::get, Router};

pub mod items;
pub mod summary;
pub mod system;

/// Full routing tree.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route("/summary", get(summary::get_summary))
        .nest("/items", items::router())
}
