use crate::models::{DbSalon, DbSalonHours};
use chrono::NaiveTime;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_salon(
    pool: &Pool<Postgres>,
    name: &str,
    address: Option<&str>,
    phone: Option<&str>,
    email: Option<&str>,
) -> Result<DbSalon> {
    let salon = sqlx::query_as::<_, DbSalon>(
        r#"
        INSERT INTO salons (name, address, phone, email)
        VALUES ($1, $2, $3, $4)
        RETURNING id, name, address, phone, email, created_at
        "#,
    )
    .bind(name)
    .bind(address)
    .bind(phone)
    .bind(email)
    .fetch_one(pool)
    .await?;

    Ok(salon)
}

pub async fn get_salon_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbSalon>> {
    let salon = sqlx::query_as::<_, DbSalon>(
        r#"
        SELECT id, name, address, phone, email, created_at
        FROM salons
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(salon)
}

pub async fn get_salon_hours(
    pool: &Pool<Postgres>,
    salon_id: Uuid,
    day_of_week: i32,
) -> Result<Option<DbSalonHours>> {
    let hours = sqlx::query_as::<_, DbSalonHours>(
        r#"
        SELECT id, salon_id, day_of_week, open_time, close_time, is_closed
        FROM salon_hours
        WHERE salon_id = $1 AND day_of_week = $2
        "#,
    )
    .bind(salon_id)
    .bind(day_of_week)
    .fetch_optional(pool)
    .await?;

    Ok(hours)
}

pub async fn get_all_salon_hours(
    pool: &Pool<Postgres>,
    salon_id: Uuid,
) -> Result<Vec<DbSalonHours>> {
    let hours = sqlx::query_as::<_, DbSalonHours>(
        r#"
        SELECT id, salon_id, day_of_week, open_time, close_time, is_closed
        FROM salon_hours
        WHERE salon_id = $1
        ORDER BY day_of_week ASC
        "#,
    )
    .bind(salon_id)
    .fetch_all(pool)
    .await?;

    Ok(hours)
}

pub async fn upsert_salon_hours(
    pool: &Pool<Postgres>,
    salon_id: Uuid,
    day_of_week: i32,
    open_time: Option<NaiveTime>,
    close_time: Option<NaiveTime>,
    is_closed: bool,
) -> Result<DbSalonHours> {
    let hours = sqlx::query_as::<_, DbSalonHours>(
        r#"
        INSERT INTO salon_hours (salon_id, day_of_week, open_time, close_time, is_closed)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (salon_id, day_of_week)
        DO UPDATE SET open_time = $3, close_time = $4, is_closed = $5
        RETURNING id, salon_id, day_of_week, open_time, close_time, is_closed
        "#,
    )
    .bind(salon_id)
    .bind(day_of_week)
    .bind(open_time)
    .bind(close_time)
    .bind(is_closed)
    .fetch_one(pool)
    .await?;

    Ok(hours)
}
