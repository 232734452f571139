use chairtime_core::errors::BookingError;
use chairtime_core::models::appointment::Appointment;
use chairtime_core::models::client::Client;
use chairtime_core::models::salon::{Salon, SalonHours};
use chairtime_core::models::service::Service;
use chairtime_core::models::stylist::{Stylist, StylistSchedule};
use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSalon {
    pub id: Uuid,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<DbSalon> for Salon {
    fn from(row: DbSalon) -> Self {
        Salon {
            id: row.id,
            name: row.name,
            address: row.address,
            phone: row.phone,
            email: row.email,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSalonHours {
    pub id: Uuid,
    pub salon_id: Uuid,
    pub day_of_week: i32,
    pub open_time: Option<NaiveTime>,
    pub close_time: Option<NaiveTime>,
    pub is_closed: bool,
}

impl From<DbSalonHours> for SalonHours {
    fn from(row: DbSalonHours) -> Self {
        SalonHours {
            salon_id: row.salon_id,
            day_of_week: row.day_of_week,
            open_time: row.open_time,
            close_time: row.close_time,
            is_closed: row.is_closed,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbService {
    pub id: Uuid,
    pub salon_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub duration_minutes: i32,
    pub price_cents: i64,
    pub buffer_before_minutes: i32,
    pub buffer_after_minutes: i32,
    pub processing_time_minutes: i32,
    pub created_at: DateTime<Utc>,
}

impl From<DbService> for Service {
    fn from(row: DbService) -> Self {
        Service {
            id: row.id,
            salon_id: row.salon_id,
            name: row.name,
            description: row.description,
            duration_minutes: row.duration_minutes,
            price_cents: row.price_cents,
            buffer_before_minutes: row.buffer_before_minutes,
            buffer_after_minutes: row.buffer_after_minutes,
            processing_time_minutes: row.processing_time_minutes,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbStylist {
    pub id: Uuid,
    pub salon_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub specialties: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<DbStylist> for Stylist {
    fn from(row: DbStylist) -> Self {
        Stylist {
            id: row.id,
            salon_id: row.salon_id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            phone: row.phone,
            specialties: row.specialties,
            is_active: row.is_active,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbStylistSchedule {
    pub id: Uuid,
    pub stylist_id: Uuid,
    pub day_of_week: i32,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub is_available: bool,
}

impl From<DbStylistSchedule> for StylistSchedule {
    fn from(row: DbStylistSchedule) -> Self {
        StylistSchedule {
            stylist_id: row.stylist_id,
            day_of_week: row.day_of_week,
            start_time: row.start_time,
            end_time: row.end_time,
            is_available: row.is_available,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbClient {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub preferred_stylist_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<DbClient> for Client {
    fn from(row: DbClient) -> Self {
        Client {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            phone: row.phone,
            notes: row.notes,
            preferred_stylist_id: row.preferred_stylist_id,
            created_at: row.created_at,
        }
    }
}

/// Appointment row. Status, channel, and payment status are stored as
/// TEXT; `TryFrom` parses them into the domain enums.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAppointment {
    pub id: Uuid,
    pub salon_id: Uuid,
    pub client_id: Uuid,
    pub stylist_id: Uuid,
    pub service_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: String,
    pub channel: String,
    pub payment_status: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<DbAppointment> for Appointment {
    type Error = BookingError;

    fn try_from(row: DbAppointment) -> Result<Self, Self::Error> {
        Ok(Appointment {
            id: row.id,
            salon_id: row.salon_id,
            client_id: row.client_id,
            stylist_id: row.stylist_id,
            service_id: row.service_id,
            start_time: row.start_time,
            end_time: row.end_time,
            status: row.status.parse()?,
            channel: row.channel.parse()?,
            payment_status: row.payment_status.parse()?,
            notes: row.notes,
            created_at: row.created_at,
        })
    }
}
