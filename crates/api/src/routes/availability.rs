use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route(
        "/api/stylists/:stylist_id/availability",
        get(handlers::availability::list_available_slots),
    )
}
