use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::BookingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
    NoShow,
}

impl AppointmentStatus {
    /// Whether an appointment in this status occupies the stylist's
    /// calendar. Pending holds still block their slot; only cancellations
    /// and no-shows free it.
    pub fn blocks_calendar(&self) -> bool {
        !matches!(self, Self::Cancelled | Self::NoShow)
    }

    /// Legal status transitions for calendar management. Terminal states
    /// (completed, cancelled, no_show) cannot be left.
    pub fn can_transition_to(&self, next: AppointmentStatus) -> bool {
        match self {
            Self::Pending => matches!(next, Self::Confirmed | Self::Cancelled),
            Self::Confirmed => {
                matches!(next, Self::Completed | Self::Cancelled | Self::NoShow)
            }
            Self::Completed | Self::Cancelled | Self::NoShow => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::NoShow => "no_show",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            "no_show" => Ok(Self::NoShow),
            other => Err(BookingError::Validation(format!(
                "unknown appointment status: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Refunded => "refunded",
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            "refunded" => Ok(Self::Refunded),
            other => Err(BookingError::Validation(format!(
                "unknown payment status: {other}"
            ))),
        }
    }
}

/// How a booking reached us. Voice bookings are auto-confirmed; form
/// bookings start as pending holds until the salon confirms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingChannel {
    Form,
    Voice,
}

impl BookingChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Form => "form",
            Self::Voice => "voice",
        }
    }

    pub fn initial_status(&self) -> AppointmentStatus {
        match self {
            Self::Form => AppointmentStatus::Pending,
            Self::Voice => AppointmentStatus::Confirmed,
        }
    }
}

impl FromStr for BookingChannel {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "form" => Ok(Self::Form),
            "voice" => Ok(Self::Voice),
            other => Err(BookingError::Validation(format!(
                "unknown booking channel: {other}"
            ))),
        }
    }
}

/// A booked appointment. `start_time`/`end_time` are the full occupied
/// block on the stylist's calendar, half-open `[start, end)`, with the
/// service's buffers already baked in at creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub salon_id: Uuid,
    pub client_id: Uuid,
    pub stylist_id: Uuid,
    pub service_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: AppointmentStatus,
    pub channel: BookingChannel,
    pub payment_status: PaymentStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}
