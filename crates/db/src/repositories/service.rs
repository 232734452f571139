use crate::models::DbService;
use chairtime_core::models::service::{CreateServiceRequest, UpdateServiceRequest};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

const SERVICE_COLUMNS: &str = "id, salon_id, name, description, duration_minutes, price_cents, \
     buffer_before_minutes, buffer_after_minutes, processing_time_minutes, created_at";

pub async fn create_service(
    pool: &Pool<Postgres>,
    salon_id: Uuid,
    request: &CreateServiceRequest,
) -> Result<DbService> {
    let service = sqlx::query_as::<_, DbService>(&format!(
        r#"
        INSERT INTO services
            (salon_id, name, description, duration_minutes, price_cents,
             buffer_before_minutes, buffer_after_minutes, processing_time_minutes)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING {SERVICE_COLUMNS}
        "#
    ))
    .bind(salon_id)
    .bind(&request.name)
    .bind(&request.description)
    .bind(request.duration_minutes)
    .bind(request.price_cents)
    .bind(request.buffer_before_minutes)
    .bind(request.buffer_after_minutes)
    .bind(request.processing_time_minutes)
    .fetch_one(pool)
    .await?;

    Ok(service)
}

pub async fn get_service_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbService>> {
    let service = sqlx::query_as::<_, DbService>(&format!(
        r#"
        SELECT {SERVICE_COLUMNS}
        FROM services
        WHERE id = $1
        "#
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(service)
}

pub async fn get_services_by_salon_id(
    pool: &Pool<Postgres>,
    salon_id: Uuid,
) -> Result<Vec<DbService>> {
    let services = sqlx::query_as::<_, DbService>(&format!(
        r#"
        SELECT {SERVICE_COLUMNS}
        FROM services
        WHERE salon_id = $1
        ORDER BY name ASC
        "#
    ))
    .bind(salon_id)
    .fetch_all(pool)
    .await?;

    Ok(services)
}

pub async fn update_service(
    pool: &Pool<Postgres>,
    id: Uuid,
    request: &UpdateServiceRequest,
) -> Result<Option<DbService>> {
    let service = sqlx::query_as::<_, DbService>(&format!(
        r#"
        UPDATE services
        SET name = COALESCE($2, name),
            description = COALESCE($3, description),
            duration_minutes = COALESCE($4, duration_minutes),
            price_cents = COALESCE($5, price_cents),
            buffer_before_minutes = COALESCE($6, buffer_before_minutes),
            buffer_after_minutes = COALESCE($7, buffer_after_minutes),
            processing_time_minutes = COALESCE($8, processing_time_minutes)
        WHERE id = $1
        RETURNING {SERVICE_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(&request.name)
    .bind(&request.description)
    .bind(request.duration_minutes)
    .bind(request.price_cents)
    .bind(request.buffer_before_minutes)
    .bind(request.buffer_after_minutes)
    .bind(request.processing_time_minutes)
    .fetch_optional(pool)
    .await?;

    Ok(service)
}

pub async fn delete_service(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM services
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
