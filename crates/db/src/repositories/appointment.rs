use crate::models::DbAppointment;
use chairtime_core::models::appointment::{AppointmentStatus, BookingChannel};
use chrono::{DateTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

const APPOINTMENT_COLUMNS: &str = "id, salon_id, client_id, stylist_id, service_id, start_time, \
     end_time, status, channel, payment_status, notes, created_at";

/// A fully validated appointment candidate, interval recomputed
/// server-side. `start_time`/`end_time` are the occupied block including
/// buffers.
#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub salon_id: Uuid,
    pub client_id: Uuid,
    pub stylist_id: Uuid,
    pub service_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: AppointmentStatus,
    pub channel: BookingChannel,
    pub notes: Option<String>,
}

/// Returns the committed busy intervals for a stylist within a range,
/// ordered by start. Cancelled and no-show appointments do not block the
/// calendar and are excluded.
pub async fn get_busy_intervals(
    pool: &Pool<Postgres>,
    stylist_id: Uuid,
    range_start: DateTime<Utc>,
    range_end: DateTime<Utc>,
) -> Result<Vec<(DateTime<Utc>, DateTime<Utc>)>> {
    let intervals = sqlx::query_as::<_, (DateTime<Utc>, DateTime<Utc>)>(
        r#"
        SELECT start_time, end_time
        FROM appointments
        WHERE stylist_id = $1
          AND status NOT IN ('cancelled', 'no_show')
          AND start_time < $3
          AND end_time > $2
        ORDER BY start_time ASC
        "#,
    )
    .bind(stylist_id)
    .bind(range_start)
    .bind(range_end)
    .fetch_all(pool)
    .await?;

    Ok(intervals)
}

/// The atomic check-then-insert behind booking.
///
/// Conflict checks and the insert run in one transaction serialized per
/// stylist through a Postgres advisory lock, so two concurrent requests
/// for overlapping intervals cannot both pass the check. Returns
/// `Ok(None)` when the interval is already taken; the transaction is then
/// rolled back without mutating state. A dropped (timed-out) transaction
/// likewise rolls back, leaving no partial row.
pub async fn insert_appointment_if_free(
    pool: &Pool<Postgres>,
    candidate: &NewAppointment,
) -> Result<Option<DbAppointment>> {
    let mut tx = pool.begin().await?;

    // Serialize bookings per stylist for the duration of this transaction.
    sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1::text))")
        .bind(candidate.stylist_id)
        .execute(&mut *tx)
        .await?;

    let conflict: Option<(Uuid,)> = sqlx::query_as(
        r#"
        SELECT id
        FROM appointments
        WHERE stylist_id = $1
          AND status NOT IN ('cancelled', 'no_show')
          AND start_time < $3
          AND end_time > $2
        LIMIT 1
        "#,
    )
    .bind(candidate.stylist_id)
    .bind(candidate.start_time)
    .bind(candidate.end_time)
    .fetch_optional(&mut *tx)
    .await?;

    if conflict.is_some() {
        tx.rollback().await?;
        return Ok(None);
    }

    let appointment = sqlx::query_as::<_, DbAppointment>(&format!(
        r#"
        INSERT INTO appointments
            (salon_id, client_id, stylist_id, service_id, start_time, end_time,
             status, channel, notes)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING {APPOINTMENT_COLUMNS}
        "#
    ))
    .bind(candidate.salon_id)
    .bind(candidate.client_id)
    .bind(candidate.stylist_id)
    .bind(candidate.service_id)
    .bind(candidate.start_time)
    .bind(candidate.end_time)
    .bind(candidate.status.as_str())
    .bind(candidate.channel.as_str())
    .bind(&candidate.notes)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(Some(appointment))
}

pub async fn get_appointment_by_id(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<DbAppointment>> {
    let appointment = sqlx::query_as::<_, DbAppointment>(&format!(
        r#"
        SELECT {APPOINTMENT_COLUMNS}
        FROM appointments
        WHERE id = $1
        "#
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(appointment)
}

pub async fn get_appointments_by_salon_id(
    pool: &Pool<Postgres>,
    salon_id: Uuid,
    range_start: Option<DateTime<Utc>>,
    range_end: Option<DateTime<Utc>>,
) -> Result<Vec<DbAppointment>> {
    let appointments = sqlx::query_as::<_, DbAppointment>(&format!(
        r#"
        SELECT {APPOINTMENT_COLUMNS}
        FROM appointments
        WHERE salon_id = $1
          AND ($2::timestamptz IS NULL OR end_time > $2)
          AND ($3::timestamptz IS NULL OR start_time < $3)
        ORDER BY start_time ASC
        "#
    ))
    .bind(salon_id)
    .bind(range_start)
    .bind(range_end)
    .fetch_all(pool)
    .await?;

    Ok(appointments)
}

pub async fn update_appointment(
    pool: &Pool<Postgres>,
    id: Uuid,
    status: Option<AppointmentStatus>,
    payment_status: Option<&str>,
    notes: Option<&str>,
) -> Result<Option<DbAppointment>> {
    let appointment = sqlx::query_as::<_, DbAppointment>(&format!(
        r#"
        UPDATE appointments
        SET status = COALESCE($2, status),
            payment_status = COALESCE($3, payment_status),
            notes = COALESCE($4, notes)
        WHERE id = $1
        RETURNING {APPOINTMENT_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(status.map(|s| s.as_str()))
    .bind(payment_status)
    .bind(notes)
    .fetch_optional(pool)
    .await?;

    Ok(appointment)
}

/// Administrative hard delete. Normal cancellation is a status update.
pub async fn delete_appointment(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM appointments
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
