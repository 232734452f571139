use axum::{
    extract::{Path, State},
    Json,
};
use chairtime_core::{
    errors::BookingError,
    models::salon::{
        CreateSalonRequest, Salon, SalonHoursEntry, SalonHoursResponse, UpdateSalonHoursRequest,
    },
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn create_salon(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateSalonRequest>,
) -> Result<Json<Salon>, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError(BookingError::Validation(
            "Salon name must not be empty".to_string(),
        )));
    }

    let db_salon = chairtime_db::repositories::salon::create_salon(
        &state.db_pool,
        &payload.name,
        payload.address.as_deref(),
        payload.phone.as_deref(),
        payload.email.as_deref(),
    )
    .await
    .map_err(BookingError::Database)?;

    Ok(Json(db_salon.into()))
}

#[axum::debug_handler]
pub async fn get_salon(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Salon>, AppError> {
    let db_salon = chairtime_db::repositories::salon::get_salon_by_id(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Salon with ID {} not found", id)))?;

    Ok(Json(db_salon.into()))
}

#[axum::debug_handler]
pub async fn get_salon_hours(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<SalonHoursResponse>, AppError> {
    // 404 for a salon that does not exist, empty hours for one that does.
    chairtime_db::repositories::salon::get_salon_by_id(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Salon with ID {} not found", id)))?;

    let hours = chairtime_db::repositories::salon::get_all_salon_hours(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?;

    let response = SalonHoursResponse {
        salon_id: id,
        hours: hours
            .into_iter()
            .map(|h| SalonHoursEntry {
                day_of_week: h.day_of_week,
                open_time: h.open_time,
                close_time: h.close_time,
                is_closed: h.is_closed,
            })
            .collect(),
    };

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn update_salon_hours(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateSalonHoursRequest>,
) -> Result<Json<SalonHoursResponse>, AppError> {
    chairtime_db::repositories::salon::get_salon_by_id(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Salon with ID {} not found", id)))?;

    for entry in &payload.hours {
        validate_hours_entry(entry)?;
    }

    let mut saved = Vec::with_capacity(payload.hours.len());
    for entry in &payload.hours {
        let row = chairtime_db::repositories::salon::upsert_salon_hours(
            &state.db_pool,
            id,
            entry.day_of_week,
            entry.open_time,
            entry.close_time,
            entry.is_closed,
        )
        .await
        .map_err(BookingError::Database)?;

        saved.push(SalonHoursEntry {
            day_of_week: row.day_of_week,
            open_time: row.open_time,
            close_time: row.close_time,
            is_closed: row.is_closed,
        });
    }

    Ok(Json(SalonHoursResponse {
        salon_id: id,
        hours: saved,
    }))
}

fn validate_hours_entry(entry: &SalonHoursEntry) -> Result<(), AppError> {
    if !(0..=6).contains(&entry.day_of_week) {
        return Err(AppError(BookingError::Validation(format!(
            "day_of_week must be 0-6, got {}",
            entry.day_of_week
        ))));
    }
    if !entry.is_closed {
        match (entry.open_time, entry.close_time) {
            (Some(open), Some(close)) if open < close => {}
            _ => {
                return Err(AppError(BookingError::Validation(
                    "open days need open_time earlier than close_time".to_string(),
                )));
            }
        }
    }
    Ok(())
}
