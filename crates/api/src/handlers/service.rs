use axum::{
    extract::{Path, State},
    Json,
};
use chairtime_core::{
    errors::BookingError,
    models::service::{CreateServiceRequest, Service, ServiceTiming, UpdateServiceRequest},
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn create_service(
    State(state): State<Arc<ApiState>>,
    Path(salon_id): Path<Uuid>,
    Json(payload): Json<CreateServiceRequest>,
) -> Result<Json<Service>, AppError> {
    // Malformed timing never reaches the catalog.
    ServiceTiming {
        duration_minutes: payload.duration_minutes,
        buffer_before_minutes: payload.buffer_before_minutes,
        buffer_after_minutes: payload.buffer_after_minutes,
        processing_time_minutes: payload.processing_time_minutes,
    }
    .validate()?;

    chairtime_db::repositories::salon::get_salon_by_id(&state.db_pool, salon_id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Salon with ID {} not found", salon_id)))?;

    let db_service =
        chairtime_db::repositories::service::create_service(&state.db_pool, salon_id, &payload)
            .await
            .map_err(BookingError::Database)?;

    Ok(Json(db_service.into()))
}

#[axum::debug_handler]
pub async fn list_services(
    State(state): State<Arc<ApiState>>,
    Path(salon_id): Path<Uuid>,
) -> Result<Json<Vec<Service>>, AppError> {
    let services =
        chairtime_db::repositories::service::get_services_by_salon_id(&state.db_pool, salon_id)
            .await
            .map_err(BookingError::Database)?;

    Ok(Json(services.into_iter().map(Into::into).collect()))
}

#[axum::debug_handler]
pub async fn update_service(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateServiceRequest>,
) -> Result<Json<Service>, AppError> {
    let existing = chairtime_db::repositories::service::get_service_by_id(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Service with ID {} not found", id)))?;

    // Validate the timing as it would look after the update.
    ServiceTiming {
        duration_minutes: payload.duration_minutes.unwrap_or(existing.duration_minutes),
        buffer_before_minutes: payload
            .buffer_before_minutes
            .unwrap_or(existing.buffer_before_minutes),
        buffer_after_minutes: payload
            .buffer_after_minutes
            .unwrap_or(existing.buffer_after_minutes),
        processing_time_minutes: payload
            .processing_time_minutes
            .unwrap_or(existing.processing_time_minutes),
    }
    .validate()?;

    let db_service =
        chairtime_db::repositories::service::update_service(&state.db_pool, id, &payload)
            .await
            .map_err(BookingError::Database)?
            .ok_or_else(|| BookingError::NotFound(format!("Service with ID {} not found", id)))?;

    Ok(Json(db_service.into()))
}

#[axum::debug_handler]
pub async fn delete_service(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let deleted = chairtime_db::repositories::service::delete_service(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?;

    if !deleted {
        return Err(AppError(BookingError::NotFound(format!(
            "Service with ID {} not found",
            id
        ))));
    }

    Ok(Json(serde_json::json!({ "success": true })))
}
