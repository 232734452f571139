use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Salon {
    pub id: Uuid,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Opening hours for one weekday. `day_of_week` is 0 = Sunday through
/// 6 = Saturday. When `is_closed` is set, the open/close times are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalonHours {
    pub salon_id: Uuid,
    pub day_of_week: i32,
    pub open_time: Option<NaiveTime>,
    pub close_time: Option<NaiveTime>,
    pub is_closed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSalonRequest {
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalonHoursEntry {
    pub day_of_week: i32,
    pub open_time: Option<NaiveTime>,
    pub close_time: Option<NaiveTime>,
    #[serde(default)]
    pub is_closed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSalonHoursRequest {
    pub hours: Vec<SalonHoursEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalonHoursResponse {
    pub salon_id: Uuid,
    pub hours: Vec<SalonHoursEntry>,
}
