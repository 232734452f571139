//! # Chairtime Core
//!
//! Domain models and scheduling algorithms for the Chairtime salon booking
//! service. This crate is pure: it performs no I/O and knows nothing about
//! the database or HTTP layers.
//!
//! The scheduling module contains the availability core:
//!
//! - interval arithmetic over half-open time ranges
//! - working-hours resolution (salon hours intersected with stylist
//!   schedules)
//! - lazy slot generation for a requested service

pub mod errors;
pub mod models;
pub mod scheduling;
