use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/clients", get(handlers::client::list_clients))
        .route("/api/clients", post(handlers::client::create_client))
}
