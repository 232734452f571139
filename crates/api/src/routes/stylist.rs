use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/salons/:salon_id/stylists",
            get(handlers::stylist::list_stylists),
        )
        .route(
            "/api/salons/:salon_id/stylists",
            post(handlers::stylist::create_stylist),
        )
        .route("/api/stylists/:id", put(handlers::stylist::update_stylist))
        .route("/api/stylists/:id", delete(handlers::stylist::delete_stylist))
        .route(
            "/api/stylists/:id/schedule",
            get(handlers::stylist::get_stylist_schedule),
        )
        .route(
            "/api/stylists/:id/schedule",
            put(handlers::stylist::update_stylist_schedule),
        )
}
