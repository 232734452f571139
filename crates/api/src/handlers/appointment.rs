use axum::{
    extract::{Path, Query, State},
    Json,
};
use chairtime_core::{
    errors::BookingError,
    models::{
        appointment::Appointment,
        booking::{AppointmentListQuery, AppointmentResponse, UpdateAppointmentRequest},
        service::Service,
    },
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<Arc<ApiState>>,
    Path(salon_id): Path<Uuid>,
    Query(query): Query<AppointmentListQuery>,
) -> Result<Json<Vec<AppointmentResponse>>, AppError> {
    let range_start = query
        .start_date
        .map(|d| d.and_time(chrono::NaiveTime::MIN).and_utc());
    let range_end = query
        .end_date
        .map(|d| (d + chrono::Duration::days(1)).and_time(chrono::NaiveTime::MIN).and_utc());

    let rows = chairtime_db::repositories::appointment::get_appointments_by_salon_id(
        &state.db_pool,
        salon_id,
        range_start,
        range_end,
    )
    .await
    .map_err(BookingError::Database)?;

    let mut responses = Vec::with_capacity(rows.len());
    for row in rows {
        let appointment = Appointment::try_from(row)?;
        responses.push(with_service_window(&state, appointment).await?);
    }

    Ok(Json(responses))
}

#[axum::debug_handler]
pub async fn update_appointment(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateAppointmentRequest>,
) -> Result<Json<AppointmentResponse>, AppError> {
    let existing =
        chairtime_db::repositories::appointment::get_appointment_by_id(&state.db_pool, id)
            .await
            .map_err(BookingError::Database)?
            .ok_or_else(|| {
                BookingError::NotFound(format!("Appointment with ID {} not found", id))
            })?;
    let existing = Appointment::try_from(existing)?;

    if let Some(next) = payload.status {
        if !existing.status.can_transition_to(next) {
            return Err(AppError(BookingError::Validation(format!(
                "cannot change appointment status from {} to {}",
                existing.status, next
            ))));
        }
    }

    let updated = chairtime_db::repositories::appointment::update_appointment(
        &state.db_pool,
        id,
        payload.status,
        payload.payment_status.map(|p| p.as_str()),
        payload.notes.as_deref(),
    )
    .await
    .map_err(BookingError::Database)?
    .ok_or_else(|| BookingError::NotFound(format!("Appointment with ID {} not found", id)))?;

    let appointment = Appointment::try_from(updated)?;
    let response = with_service_window(&state, appointment).await?;
    Ok(Json(response))
}

/// Administrative hard delete. Day-to-day cancellation goes through the
/// status update with soft-cancel semantics.
#[axum::debug_handler]
pub async fn delete_appointment(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let deleted = chairtime_db::repositories::appointment::delete_appointment(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?;

    if !deleted {
        return Err(AppError(BookingError::NotFound(format!(
            "Appointment with ID {} not found",
            id
        ))));
    }

    Ok(Json(serde_json::json!({ "success": true })))
}

/// Attaches the client-visible service window, derived from the causing
/// service's current buffers. A deleted service falls back to zero
/// buffers, leaving the raw block.
async fn with_service_window(
    state: &ApiState,
    appointment: Appointment,
) -> Result<AppointmentResponse, AppError> {
    let timing =
        chairtime_db::repositories::service::get_service_by_id(&state.db_pool, appointment.service_id)
            .await
            .map_err(BookingError::Database)?
            .map(|s| Service::from(s).timing())
            .unwrap_or(chairtime_core::models::service::ServiceTiming {
                duration_minutes: (appointment.end_time - appointment.start_time).num_minutes()
                    as i32,
                buffer_before_minutes: 0,
                buffer_after_minutes: 0,
                processing_time_minutes: 0,
            });

    Ok(AppointmentResponse::from_appointment(appointment, &timing))
}
