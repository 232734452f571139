use chairtime_core::models::appointment::AppointmentStatus;
use chrono::{DateTime, NaiveTime, Utc};
use mockall::mock;
use uuid::Uuid;

use crate::models::{
    DbAppointment, DbClient, DbSalon, DbSalonHours, DbService, DbStylist, DbStylistSchedule,
};
use crate::repositories::appointment::NewAppointment;

// Mock repositories for testing
mock! {
    pub SalonRepo {
        pub async fn create_salon(
            &self,
            name: &'static str,
            address: Option<&'static str>,
            phone: Option<&'static str>,
            email: Option<&'static str>,
        ) -> eyre::Result<DbSalon>;

        pub async fn get_salon_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbSalon>>;

        pub async fn get_salon_hours(
            &self,
            salon_id: Uuid,
            day_of_week: i32,
        ) -> eyre::Result<Option<DbSalonHours>>;

        pub async fn upsert_salon_hours(
            &self,
            salon_id: Uuid,
            day_of_week: i32,
            open_time: Option<NaiveTime>,
            close_time: Option<NaiveTime>,
            is_closed: bool,
        ) -> eyre::Result<DbSalonHours>;
    }
}

mock! {
    pub ServiceRepo {
        pub async fn get_service_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbService>>;

        pub async fn get_services_by_salon_id(
            &self,
            salon_id: Uuid,
        ) -> eyre::Result<Vec<DbService>>;

        pub async fn delete_service(
            &self,
            id: Uuid,
        ) -> eyre::Result<bool>;
    }
}

mock! {
    pub StylistRepo {
        pub async fn get_stylist_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbStylist>>;

        pub async fn get_stylists_by_salon_id(
            &self,
            salon_id: Uuid,
        ) -> eyre::Result<Vec<DbStylist>>;

        pub async fn get_stylist_schedule(
            &self,
            stylist_id: Uuid,
            day_of_week: i32,
        ) -> eyre::Result<Option<DbStylistSchedule>>;
    }
}

mock! {
    pub ClientRepo {
        pub async fn get_client_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbClient>>;

        pub async fn get_client_by_email(
            &self,
            email: &'static str,
        ) -> eyre::Result<Option<DbClient>>;
    }
}

mock! {
    pub AppointmentRepo {
        pub async fn get_busy_intervals(
            &self,
            stylist_id: Uuid,
            range_start: DateTime<Utc>,
            range_end: DateTime<Utc>,
        ) -> eyre::Result<Vec<(DateTime<Utc>, DateTime<Utc>)>>;

        pub async fn insert_appointment_if_free(
            &self,
            candidate: NewAppointment,
        ) -> eyre::Result<Option<DbAppointment>>;

        pub async fn get_appointment_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbAppointment>>;

        pub async fn update_appointment(
            &self,
            id: Uuid,
            status: Option<AppointmentStatus>,
            payment_status: Option<&'static str>,
            notes: Option<&'static str>,
        ) -> eyre::Result<Option<DbAppointment>>;

        pub async fn delete_appointment(
            &self,
            id: Uuid,
        ) -> eyre::Result<bool>;
    }
}
