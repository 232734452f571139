pub mod appointment;
pub mod booking;
pub mod client;
pub mod salon;
pub mod service;
pub mod stylist;
