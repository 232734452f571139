use crate::models::DbClient;
use chairtime_core::models::client::CreateClientRequest;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

const CLIENT_COLUMNS: &str =
    "id, first_name, last_name, email, phone, notes, preferred_stylist_id, created_at";

pub async fn create_client(
    pool: &Pool<Postgres>,
    request: &CreateClientRequest,
) -> Result<DbClient> {
    let client = sqlx::query_as::<_, DbClient>(&format!(
        r#"
        INSERT INTO clients (first_name, last_name, email, phone, notes, preferred_stylist_id)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING {CLIENT_COLUMNS}
        "#
    ))
    .bind(&request.first_name)
    .bind(&request.last_name)
    .bind(&request.email)
    .bind(&request.phone)
    .bind(&request.notes)
    .bind(request.preferred_stylist_id)
    .fetch_one(pool)
    .await?;

    Ok(client)
}

pub async fn get_client_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbClient>> {
    let client = sqlx::query_as::<_, DbClient>(&format!(
        r#"
        SELECT {CLIENT_COLUMNS}
        FROM clients
        WHERE id = $1
        "#
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(client)
}

pub async fn get_client_by_email(pool: &Pool<Postgres>, email: &str) -> Result<Option<DbClient>> {
    let client = sqlx::query_as::<_, DbClient>(&format!(
        r#"
        SELECT {CLIENT_COLUMNS}
        FROM clients
        WHERE email = $1
        "#
    ))
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(client)
}

pub async fn get_clients(pool: &Pool<Postgres>) -> Result<Vec<DbClient>> {
    let clients = sqlx::query_as::<_, DbClient>(&format!(
        r#"
        SELECT {CLIENT_COLUMNS}
        FROM clients
        ORDER BY last_name ASC, first_name ASC
        "#
    ))
    .fetch_all(pool)
    .await?;

    Ok(clients)
}
