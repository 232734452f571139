use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create salons table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS salons (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name VARCHAR(255) NOT NULL,
            address TEXT NULL,
            phone VARCHAR(50) NULL,
            email VARCHAR(255) NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create salon_hours table, one row per (salon, weekday)
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS salon_hours (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            salon_id UUID NOT NULL REFERENCES salons(id),
            day_of_week INTEGER NOT NULL CHECK (day_of_week BETWEEN 0 AND 6),
            open_time TIME NULL,
            close_time TIME NULL,
            is_closed BOOLEAN NOT NULL DEFAULT FALSE,
            CONSTRAINT salon_hours_unique_day UNIQUE (salon_id, day_of_week)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create services table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS services (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            salon_id UUID NOT NULL REFERENCES salons(id),
            name VARCHAR(255) NOT NULL,
            description TEXT NULL,
            duration_minutes INTEGER NOT NULL CHECK (duration_minutes > 0),
            price_cents BIGINT NOT NULL DEFAULT 0,
            buffer_before_minutes INTEGER NOT NULL DEFAULT 0 CHECK (buffer_before_minutes >= 0),
            buffer_after_minutes INTEGER NOT NULL DEFAULT 0 CHECK (buffer_after_minutes >= 0),
            processing_time_minutes INTEGER NOT NULL DEFAULT 0 CHECK (processing_time_minutes >= 0),
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create stylists table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS stylists (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            salon_id UUID NOT NULL REFERENCES salons(id),
            first_name VARCHAR(255) NOT NULL,
            last_name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NULL,
            phone VARCHAR(50) NULL,
            specialties TEXT[] NOT NULL DEFAULT '{}',
            is_active BOOLEAN NOT NULL DEFAULT TRUE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create stylist_schedule table, one row per (stylist, weekday)
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS stylist_schedule (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            stylist_id UUID NOT NULL REFERENCES stylists(id),
            day_of_week INTEGER NOT NULL CHECK (day_of_week BETWEEN 0 AND 6),
            start_time TIME NULL,
            end_time TIME NULL,
            is_available BOOLEAN NOT NULL DEFAULT TRUE,
            CONSTRAINT stylist_schedule_unique_day UNIQUE (stylist_id, day_of_week)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create clients table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS clients (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            first_name VARCHAR(255) NOT NULL,
            last_name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL UNIQUE,
            phone VARCHAR(50) NULL,
            notes TEXT NULL,
            preferred_stylist_id UUID NULL REFERENCES stylists(id),
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create appointments table. start_time/end_time store the full
    // occupied block with service buffers baked in.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS appointments (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            salon_id UUID NOT NULL REFERENCES salons(id),
            client_id UUID NOT NULL REFERENCES clients(id),
            stylist_id UUID NOT NULL REFERENCES stylists(id),
            service_id UUID NOT NULL REFERENCES services(id),
            start_time TIMESTAMP WITH TIME ZONE NOT NULL,
            end_time TIMESTAMP WITH TIME ZONE NOT NULL,
            status VARCHAR(20) NOT NULL DEFAULT 'pending',
            channel VARCHAR(20) NOT NULL DEFAULT 'form',
            payment_status VARCHAR(20) NOT NULL DEFAULT 'pending',
            notes TEXT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_time_range CHECK (end_time > start_time)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_salon_hours_salon_id ON salon_hours(salon_id);
        CREATE INDEX IF NOT EXISTS idx_services_salon_id ON services(salon_id);
        CREATE INDEX IF NOT EXISTS idx_stylists_salon_id ON stylists(salon_id);
        CREATE INDEX IF NOT EXISTS idx_stylist_schedule_stylist_id ON stylist_schedule(stylist_id);
        CREATE INDEX IF NOT EXISTS idx_clients_email ON clients(email);
        CREATE INDEX IF NOT EXISTS idx_appointments_salon_id ON appointments(salon_id);
        CREATE INDEX IF NOT EXISTS idx_appointments_stylist_id ON appointments(stylist_id);
        CREATE INDEX IF NOT EXISTS idx_appointments_start_time ON appointments(start_time);
        CREATE INDEX IF NOT EXISTS idx_appointments_stylist_time ON appointments(stylist_id, start_time, end_time);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
