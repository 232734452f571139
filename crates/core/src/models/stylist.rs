use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stylist {
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

/// One weekday of a stylist's working schedule. Effective hours for a day
/// are the intersection of these times with the salon's opening hours.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StylistSchedule {
    pub stylist_id: Uuid,
    pub day_of_week: i32,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub is_available: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStylistRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub specialties: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStylistRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub specialties: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StylistScheduleEntry {
    pub day_of_week: i32,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    #[serde(default = "default_available")]
    pub is_available: bool,
}

fn default_available() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStylistScheduleRequest {
    pub schedule: Vec<StylistScheduleEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StylistScheduleResponse {
    pub stylist_id: Uuid,
    pub schedule: Vec<StylistScheduleEntry>,
}
