pub mod appointment;
pub mod availability;
pub mod booking;
pub mod client;
pub mod health;
pub mod salon;
pub mod service;
pub mod stylist;
