use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/salons", post(handlers::salon::create_salon))
        .route("/api/salons/:id", get(handlers::salon::get_salon))
        .route("/api/salons/:id/hours", get(handlers::salon::get_salon_hours))
        .route("/api/salons/:id/hours", put(handlers::salon::update_salon_hours))
}
