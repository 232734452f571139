use chrono::Duration;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{BookingError, BookingResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: Uuid,
    pub salon_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub duration_minutes: i32,
    pub price_cents: i64,
    pub buffer_before_minutes: i32,
    pub buffer_after_minutes: i32,
    pub processing_time_minutes: i32,
}

impl Service {
    pub fn timing(&self) -> ServiceTiming {
        ServiceTiming {
            duration_minutes: self.duration_minutes,
            buffer_before_minutes: self.buffer_before_minutes,
            buffer_after_minutes: self.buffer_after_minutes,
            processing_time_minutes: self.processing_time_minutes,
        }
    }
}

/// The scheduling-relevant timing of a service, separated from the rest of
/// the service record so the slot generator does not depend on names or
/// prices.
///
/// The occupied span is what actually blocks a stylist's calendar:
/// buffer-before + hands-on duration + processing time + buffer-after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceTiming {
    pub duration_minutes: i32,
    pub buffer_before_minutes: i32,
    pub buffer_after_minutes: i32,
    pub processing_time_minutes: i32,
}

impl ServiceTiming {
    pub fn validate(&self) -> BookingResult<()> {
        if self.duration_minutes <= 0 {
            return Err(BookingError::InvalidService(format!(
                "duration must be positive, got {} minutes",
                self.duration_minutes
            )));
        }
        if self.buffer_before_minutes < 0
            || self.buffer_after_minutes < 0
            || self.processing_time_minutes < 0
        {
            return Err(BookingError::InvalidService(
                "buffers and processing time must not be negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Total calendar time the stylist is blocked for one booking.
    pub fn occupied_span(&self) -> Duration {
        Duration::minutes(
            (self.buffer_before_minutes
                + self.duration_minutes
                + self.processing_time_minutes
                + self.buffer_after_minutes) as i64,
        )
    }

    pub fn buffer_before(&self) -> Duration {
        Duration::minutes(self.buffer_before_minutes as i64)
    }

    pub fn buffer_after(&self) -> Duration {
        Duration::minutes(self.buffer_after_minutes as i64)
    }

    /// Hands-on duration plus processing time: the part of the block that
    /// is visible to the client as "their appointment".
    pub fn service_length(&self) -> Duration {
        Duration::minutes((self.duration_minutes + self.processing_time_minutes) as i64)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateServiceRequest {
    pub name: String,
    pub description: Option<String>,
    pub duration_minutes: i32,
    pub price_cents: i64,
    #[serde(default)]
    pub buffer_before_minutes: i32,
    #[serde(default)]
    pub buffer_after_minutes: i32,
    #[serde(default)]
    pub processing_time_minutes: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateServiceRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub duration_minutes: Option<i32>,
    pub price_cents: Option<i64>,
    pub buffer_before_minutes: Option<i32>,
    pub buffer_after_minutes: Option<i32>,
    pub processing_time_minutes: Option<i32>,
}
