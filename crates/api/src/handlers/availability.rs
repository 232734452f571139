//! # Availability Handler
//!
//! Computes the bookable slots for a (stylist, service, date) request.
//!
//! The pipeline mirrors the scheduling core's design:
//!
//! 1. Resolve the stylist's working window for the date: salon opening
//!    hours intersected with the stylist's own weekly schedule. A closed
//!    day is a valid result and yields an empty slot list, not an error.
//! 2. Read the stylist's committed busy intervals for that window.
//!    Appointment rows store the full occupied block (buffers included),
//!    so no further expansion is needed here.
//! 3. Walk the window with the slot generator and collect the external
//!    start times.
//!
//! Nothing is cached between requests; every call reads current state, so
//! a booking committed in between is reflected immediately.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chairtime_core::{
    errors::BookingError,
    models::booking::{AvailabilityQuery, AvailabilityResponse},
    scheduling::{self, Interval, SlotQuery, DEFAULT_GRANULARITY_MINUTES},
};
use chrono::{Duration, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn list_available_slots(
    State(state): State<Arc<ApiState>>,
    Path(stylist_id): Path<Uuid>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let granularity_minutes = query
        .granularity_minutes
        .unwrap_or(DEFAULT_GRANULARITY_MINUTES as u32);
    if granularity_minutes == 0 || granularity_minutes > 24 * 60 {
        return Err(AppError(BookingError::Validation(format!(
            "granularity_minutes must be between 1 and 1440, got {granularity_minutes}"
        ))));
    }

    let stylist =
        chairtime_db::repositories::stylist::get_stylist_by_id(&state.db_pool, stylist_id)
            .await
            .map_err(BookingError::Database)?
            .ok_or_else(|| {
                BookingError::NotFound(format!("Stylist with ID {} not found", stylist_id))
            })?;

    let service =
        chairtime_db::repositories::service::get_service_by_id(&state.db_pool, query.service_id)
            .await
            .map_err(BookingError::Database)?
            .ok_or_else(|| {
                BookingError::NotFound(format!("Service with ID {} not found", query.service_id))
            })?;

    let timing = chairtime_core::models::service::Service::from(service).timing();
    timing.validate()?;

    let empty = AvailabilityResponse {
        stylist_id,
        service_id: query.service_id,
        date: query.date,
        slots: Vec::new(),
    };

    // A deactivated stylist takes no new bookings.
    if !stylist.is_active {
        return Ok(Json(empty));
    }

    let day_of_week = scheduling::hours::weekday_index(query.date);
    let salon_hours = chairtime_db::repositories::salon::get_salon_hours(
        &state.db_pool,
        stylist.salon_id,
        day_of_week,
    )
    .await
    .map_err(BookingError::Database)?
    .map(Into::into);

    let schedule = chairtime_db::repositories::stylist::get_stylist_schedule(
        &state.db_pool,
        stylist_id,
        day_of_week,
    )
    .await
    .map_err(BookingError::Database)?
    .map(Into::into);

    let Some(window) = scheduling::stylist_working_interval(
        salon_hours.as_ref(),
        schedule.as_ref(),
        query.date,
    ) else {
        // Closed day: empty sequence, not an error.
        return Ok(Json(empty));
    };

    let busy = chairtime_db::repositories::appointment::get_busy_intervals(
        &state.db_pool,
        stylist_id,
        window.start,
        window.end,
    )
    .await
    .map_err(BookingError::Database)?
    .into_iter()
    .map(|(start, end)| Interval::new(start, end))
    .collect();

    let not_before = Utc::now() + Duration::minutes(state.booking_min_lead_minutes);
    let slots = SlotQuery::new(window, timing, busy)
        .with_granularity(Duration::minutes(granularity_minutes as i64))
        .with_not_before(not_before)
        .slots()
        .collect();

    Ok(Json(AvailabilityResponse {
        stylist_id,
        service_id: query.service_id,
        date: query.date,
        slots,
    }))
}
