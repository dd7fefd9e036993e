//! HTTP application wiring (axum router + service wiring).
//!
//! - `services.rs`: the inventory service (validator-gated store access)
//! - `routes/`: HTTP routes + handlers, one file per area
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests). Backed by the in-memory record store.
pub fn build_app() -> Router {
    let services = Arc::new(services::InventoryService::in_memory());
    routes::router().layer(ServiceBuilder::new().layer(Extension(services)))
}
