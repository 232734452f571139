use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/salons/:salon_id/services",
            get(handlers::service::list_services),
        )
        .route(
            "/api/salons/:salon_id/services",
            post(handlers::service::create_service),
        )
        .route("/api/services/:id", put(handlers::service::update_service))
        .route("/api/services/:id", delete(handlers::service::delete_service))
}
