//! # Booking Handler
//!
//! The commit side of the two-step book flow. The earlier availability
//! read is treated as advisory only: everything is re-validated here, at
//! transaction time, against current state.
//!
//! The occupied interval is recomputed from the service's current buffers
//! (a client-supplied end time is never trusted), the working window is
//! re-resolved, and the conflict check plus insert run atomically inside
//! `insert_appointment_if_free`, serialized per stylist. A losing
//! concurrent request gets a 409 `slot_unavailable` and no state change.

use axum::{extract::State, Json};
use chairtime_core::{
    errors::BookingError,
    models::{
        appointment::{Appointment, BookingChannel},
        booking::{AppointmentResponse, BookSlotRequest},
        service::Service,
    },
    scheduling::{self, Interval},
};
use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::info;

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn book_slot(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<BookSlotRequest>,
) -> Result<Json<AppointmentResponse>, AppError> {
    let service =
        chairtime_db::repositories::service::get_service_by_id(&state.db_pool, payload.service_id)
            .await
            .map_err(BookingError::Database)?
            .ok_or_else(|| {
                BookingError::NotFound(format!("Service with ID {} not found", payload.service_id))
            })?;
    let service = Service::from(service);

    if service.salon_id != payload.salon_id {
        return Err(AppError(BookingError::Validation(
            "Service does not belong to the given salon".to_string(),
        )));
    }

    let timing = service.timing();
    timing.validate()?;

    let stylist =
        chairtime_db::repositories::stylist::get_stylist_by_id(&state.db_pool, payload.stylist_id)
            .await
            .map_err(BookingError::Database)?
            .ok_or_else(|| {
                BookingError::NotFound(format!("Stylist with ID {} not found", payload.stylist_id))
            })?;

    if stylist.salon_id != payload.salon_id {
        return Err(AppError(BookingError::Validation(
            "Stylist does not belong to the given salon".to_string(),
        )));
    }
    if !stylist.is_active {
        return Err(AppError(BookingError::SlotUnavailable));
    }

    chairtime_db::repositories::client::get_client_by_id(&state.db_pool, payload.client_id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| {
            BookingError::NotFound(format!("Client with ID {} not found", payload.client_id))
        })?;

    // Recompute the occupied block from current buffers; the client sends
    // only the externally visible service start.
    let block_start = payload.start_time - timing.buffer_before();
    let block_end = block_start + timing.occupied_span();
    let block = Interval::new(block_start, block_end);

    let not_before = Utc::now() + Duration::minutes(state.booking_min_lead_minutes);
    if block_start < not_before {
        return Err(AppError(BookingError::Validation(
            "Requested start time is in the past".to_string(),
        )));
    }

    // Re-resolve the working window for the requested date instead of
    // trusting the earlier availability read.
    let date = block_start.date_naive();
    let day_of_week = scheduling::hours::weekday_index(date);
    let salon_hours = chairtime_db::repositories::salon::get_salon_hours(
        &state.db_pool,
        payload.salon_id,
        day_of_week,
    )
    .await
    .map_err(BookingError::Database)?
    .map(Into::into);
    let schedule = chairtime_db::repositories::stylist::get_stylist_schedule(
        &state.db_pool,
        payload.stylist_id,
        day_of_week,
    )
    .await
    .map_err(BookingError::Database)?
    .map(Into::into);

    let window = scheduling::stylist_working_interval(salon_hours.as_ref(), schedule.as_ref(), date)
        .ok_or(BookingError::SlotUnavailable)?;
    if !window.contains(&block) {
        return Err(AppError(BookingError::SlotUnavailable));
    }

    let channel = payload.channel.unwrap_or(BookingChannel::Form);
    let candidate = chairtime_db::repositories::appointment::NewAppointment {
        salon_id: payload.salon_id,
        client_id: payload.client_id,
        stylist_id: payload.stylist_id,
        service_id: payload.service_id,
        start_time: block_start,
        end_time: block_end,
        status: channel.initial_status(),
        channel,
        notes: payload.notes.clone(),
    };

    let inserted = chairtime_db::repositories::appointment::insert_appointment_if_free(
        &state.db_pool,
        &candidate,
    )
    .await
    .map_err(BookingError::Database)?
    .ok_or(BookingError::SlotUnavailable)?;

    let appointment = Appointment::try_from(inserted)?;
    info!(
        appointment_id = %appointment.id,
        stylist_id = %appointment.stylist_id,
        start = %appointment.start_time,
        "booked appointment"
    );

    Ok(Json(AppointmentResponse::from_appointment(appointment, &timing)))
}
