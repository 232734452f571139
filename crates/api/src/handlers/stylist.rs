use axum::{
    extract::{Path, State},
    Json,
};
use chairtime_core::{
    errors::BookingError,
    models::stylist::{
        CreateStylistRequest, Stylist, StylistScheduleEntry, StylistScheduleResponse,
        UpdateStylistRequest, UpdateStylistScheduleRequest,
    },
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn create_stylist(
    State(state): State<Arc<ApiState>>,
    Path(salon_id): Path<Uuid>,
    Json(payload): Json<CreateStylistRequest>,
) -> Result<Json<Stylist>, AppError> {
    chairtime_db::repositories::salon::get_salon_by_id(&state.db_pool, salon_id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Salon with ID {} not found", salon_id)))?;

    let db_stylist =
        chairtime_db::repositories::stylist::create_stylist(&state.db_pool, salon_id, &payload)
            .await
            .map_err(BookingError::Database)?;

    Ok(Json(db_stylist.into()))
}

#[axum::debug_handler]
pub async fn list_stylists(
    State(state): State<Arc<ApiState>>,
    Path(salon_id): Path<Uuid>,
) -> Result<Json<Vec<Stylist>>, AppError> {
    let stylists =
        chairtime_db::repositories::stylist::get_stylists_by_salon_id(&state.db_pool, salon_id)
            .await
            .map_err(BookingError::Database)?;

    Ok(Json(stylists.into_iter().map(Into::into).collect()))
}

#[axum::debug_handler]
pub async fn update_stylist(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStylistRequest>,
) -> Result<Json<Stylist>, AppError> {
    let db_stylist =
        chairtime_db::repositories::stylist::update_stylist(&state.db_pool, id, &payload)
            .await
            .map_err(BookingError::Database)?
            .ok_or_else(|| BookingError::NotFound(format!("Stylist with ID {} not found", id)))?;

    Ok(Json(db_stylist.into()))
}

#[axum::debug_handler]
pub async fn delete_stylist(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let deleted = chairtime_db::repositories::stylist::delete_stylist(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?;

    if !deleted {
        return Err(AppError(BookingError::NotFound(format!(
            "Stylist with ID {} not found",
            id
        ))));
    }

    Ok(Json(serde_json::json!({ "success": true })))
}

#[axum::debug_handler]
pub async fn get_stylist_schedule(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<StylistScheduleResponse>, AppError> {
    chairtime_db::repositories::stylist::get_stylist_by_id(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Stylist with ID {} not found", id)))?;

    let schedule =
        chairtime_db::repositories::stylist::get_full_stylist_schedule(&state.db_pool, id)
            .await
            .map_err(BookingError::Database)?;

    let response = StylistScheduleResponse {
        stylist_id: id,
        schedule: schedule
            .into_iter()
            .map(|s| StylistScheduleEntry {
                day_of_week: s.day_of_week,
                start_time: s.start_time,
                end_time: s.end_time,
                is_available: s.is_available,
            })
            .collect(),
    };

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn update_stylist_schedule(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStylistScheduleRequest>,
) -> Result<Json<StylistScheduleResponse>, AppError> {
    chairtime_db::repositories::stylist::get_stylist_by_id(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Stylist with ID {} not found", id)))?;

    for entry in &payload.schedule {
        validate_schedule_entry(entry)?;
    }

    let mut saved = Vec::with_capacity(payload.schedule.len());
    for entry in &payload.schedule {
        let row = chairtime_db::repositories::stylist::upsert_stylist_schedule(
            &state.db_pool,
            id,
            entry.day_of_week,
            entry.start_time,
            entry.end_time,
            entry.is_available,
        )
        .await
        .map_err(BookingError::Database)?;

        saved.push(StylistScheduleEntry {
            day_of_week: row.day_of_week,
            start_time: row.start_time,
            end_time: row.end_time,
            is_available: row.is_available,
        });
    }

    Ok(Json(StylistScheduleResponse {
        stylist_id: id,
        schedule: saved,
    }))
}

fn validate_schedule_entry(entry: &StylistScheduleEntry) -> Result<(), AppError> {
    if !(0..=6).contains(&entry.day_of_week) {
        return Err(AppError(BookingError::Validation(format!(
            "day_of_week must be 0-6, got {}",
            entry.day_of_week
        ))));
    }
    if entry.is_available {
        match (entry.start_time, entry.end_time) {
            (Some(start), Some(end)) if start < end => {}
            _ => {
                return Err(AppError(BookingError::Validation(
                    "available days need start_time earlier than end_time".to_string(),
                )));
            }
        }
    }
    Ok(())
}
