use crate::models::{DbStylist, DbStylistSchedule};
use chairtime_core::models::stylist::{CreateStylistRequest, UpdateStylistRequest};
use chrono::NaiveTime;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

const STYLIST_COLUMNS: &str =
    "id, salon_id, first_name, last_name, email, phone, specialties, is_active, created_at";

pub async fn create_stylist(
    pool: &Pool<Postgres>,
    salon_id: Uuid,
    request: &CreateStylistRequest,
) -> Result<DbStylist> {
    let stylist = sqlx::query_as::<_, DbStylist>(&format!(
        r#"
        INSERT INTO stylists (salon_id, first_name, last_name, email, phone, specialties)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING {STYLIST_COLUMNS}
        "#
    ))
    .bind(salon_id)
    .bind(&request.first_name)
    .bind(&request.last_name)
    .bind(&request.email)
    .bind(&request.phone)
    .bind(&request.specialties)
    .fetch_one(pool)
    .await?;

    Ok(stylist)
}

pub async fn get_stylist_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbStylist>> {
    let stylist = sqlx::query_as::<_, DbStylist>(&format!(
        r#"
        SELECT {STYLIST_COLUMNS}
        FROM stylists
        WHERE id = $1
        "#
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(stylist)
}

pub async fn get_stylists_by_salon_id(
    pool: &Pool<Postgres>,
    salon_id: Uuid,
) -> Result<Vec<DbStylist>> {
    let stylists = sqlx::query_as::<_, DbStylist>(&format!(
        r#"
        SELECT {STYLIST_COLUMNS}
        FROM stylists
        WHERE salon_id = $1
        ORDER BY last_name ASC, first_name ASC
        "#
    ))
    .bind(salon_id)
    .fetch_all(pool)
    .await?;

    Ok(stylists)
}

pub async fn update_stylist(
    pool: &Pool<Postgres>,
    id: Uuid,
    request: &UpdateStylistRequest,
) -> Result<Option<DbStylist>> {
    let stylist = sqlx::query_as::<_, DbStylist>(&format!(
        r#"
        UPDATE stylists
        SET first_name = COALESCE($2, first_name),
            last_name = COALESCE($3, last_name),
            email = COALESCE($4, email),
            phone = COALESCE($5, phone),
            specialties = COALESCE($6, specialties),
            is_active = COALESCE($7, is_active)
        WHERE id = $1
        RETURNING {STYLIST_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(&request.first_name)
    .bind(&request.last_name)
    .bind(&request.email)
    .bind(&request.phone)
    .bind(&request.specialties)
    .bind(request.is_active)
    .fetch_optional(pool)
    .await?;

    Ok(stylist)
}

pub async fn delete_stylist(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM stylists
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn get_stylist_schedule(
    pool: &Pool<Postgres>,
    stylist_id: Uuid,
    day_of_week: i32,
) -> Result<Option<DbStylistSchedule>> {
    let schedule = sqlx::query_as::<_, DbStylistSchedule>(
        r#"
        SELECT id, stylist_id, day_of_week, start_time, end_time, is_available
        FROM stylist_schedule
        WHERE stylist_id = $1 AND day_of_week = $2
        "#,
    )
    .bind(stylist_id)
    .bind(day_of_week)
    .fetch_optional(pool)
    .await?;

    Ok(schedule)
}

pub async fn get_full_stylist_schedule(
    pool: &Pool<Postgres>,
    stylist_id: Uuid,
) -> Result<Vec<DbStylistSchedule>> {
    let schedule = sqlx::query_as::<_, DbStylistSchedule>(
        r#"
        SELECT id, stylist_id, day_of_week, start_time, end_time, is_available
        FROM stylist_schedule
        WHERE stylist_id = $1
        ORDER BY day_of_week ASC
        "#,
    )
    .bind(stylist_id)
    .fetch_all(pool)
    .await?;

    Ok(schedule)
}

pub async fn upsert_stylist_schedule(
    pool: &Pool<Postgres>,
    stylist_id: Uuid,
    day_of_week: i32,
    start_time: Option<NaiveTime>,
    end_time: Option<NaiveTime>,
    is_available: bool,
) -> Result<DbStylistSchedule> {
    let schedule = sqlx::query_as::<_, DbStylistSchedule>(
        r#"
        INSERT INTO stylist_schedule (stylist_id, day_of_week, start_time, end_time, is_available)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (stylist_id, day_of_week)
        DO UPDATE SET start_time = $3, end_time = $4, is_available = $5
        RETURNING id, stylist_id, day_of_week, start_time, end_time, is_available
        "#,
    )
    .bind(stylist_id)
    .bind(day_of_week)
    .bind(start_time)
    .bind(end_time)
    .bind(is_available)
    .fetch_one(pool)
    .await?;

    Ok(schedule)
}
