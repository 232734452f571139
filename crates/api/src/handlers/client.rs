use axum::{extract::State, Json};
use chairtime_core::{
    errors::BookingError,
    models::client::{Client, CreateClientRequest},
};
use std::sync::Arc;

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn list_clients(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Client>>, AppError> {
    let clients = chairtime_db::repositories::client::get_clients(&state.db_pool)
        .await
        .map_err(BookingError::Database)?;

    Ok(Json(clients.into_iter().map(Into::into).collect()))
}

/// Find-or-create by email: booking flows submit client details with
/// every booking, and a returning client must not produce a duplicate
/// record.
#[axum::debug_handler]
pub async fn create_client(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateClientRequest>,
) -> Result<Json<Client>, AppError> {
    if payload.email.trim().is_empty() {
        return Err(AppError(BookingError::Validation(
            "Client email must not be empty".to_string(),
        )));
    }

    if let Some(existing) =
        chairtime_db::repositories::client::get_client_by_email(&state.db_pool, &payload.email)
            .await
            .map_err(BookingError::Database)?
    {
        return Ok(Json(existing.into()));
    }

    let db_client = chairtime_db::repositories::client::create_client(&state.db_pool, &payload)
        .await
        .map_err(BookingError::Database)?;

    Ok(Json(db_client.into()))
}
