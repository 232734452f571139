use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::appointment::{
    Appointment, AppointmentStatus, BookingChannel, PaymentStatus,
};
use crate::models::service::ServiceTiming;

#[derive(Debug, Clone, Deserialize)]
pub struct AvailabilityQuery {
    pub service_id: Uuid,
    pub date: NaiveDate,
    pub granularity_minutes: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub stylist_id: Uuid,
    pub service_id: Uuid,
    pub date: NaiveDate,
    /// Externally bookable service start times, ascending.
    pub slots: Vec<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookSlotRequest {
    pub salon_id: Uuid,
    pub client_id: Uuid,
    pub stylist_id: Uuid,
    pub service_id: Uuid,
    /// Externally visible service start, as returned by the availability
    /// endpoint. The occupied block is recomputed server-side from the
    /// service's current buffers.
    pub start_time: DateTime<Utc>,
    pub channel: Option<BookingChannel>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentResponse {
    pub id: Uuid,
    pub salon_id: Uuid,
    pub client_id: Uuid,
    pub stylist_id: Uuid,
    pub service_id: Uuid,
    /// Start of the full occupied block, including buffer-before.
    pub block_start: DateTime<Utc>,
    /// End of the full occupied block, including buffer-after.
    pub block_end: DateTime<Utc>,
    /// When the client should show up.
    pub service_start: DateTime<Utc>,
    /// When the service (including processing time) finishes.
    pub service_end: DateTime<Utc>,
    pub status: AppointmentStatus,
    pub channel: BookingChannel,
    pub payment_status: PaymentStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl AppointmentResponse {
    pub fn from_appointment(appointment: Appointment, timing: &ServiceTiming) -> Self {
        let service_start = appointment.start_time + timing.buffer_before();
        let service_end = service_start + timing.service_length();
        Self {
            id: appointment.id,
            salon_id: appointment.salon_id,
            client_id: appointment.client_id,
            stylist_id: appointment.stylist_id,
            service_id: appointment.service_id,
            block_start: appointment.start_time,
            block_end: appointment.end_time,
            service_start,
            service_end,
            status: appointment.status,
            channel: appointment.channel,
            payment_status: appointment.payment_status,
            notes: appointment.notes,
            created_at: appointment.created_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAppointmentRequest {
    pub status: Option<AppointmentStatus>,
    pub payment_status: Option<PaymentStatus>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppointmentListQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}
