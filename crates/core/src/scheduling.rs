//! # Scheduling Core
//!
//! The availability algorithms behind slot listing and booking:
//!
//! 1. [`hours`] resolves a stylist's working interval for a date by
//!    intersecting salon opening hours with the stylist's own schedule.
//! 2. [`interval`] provides half-open interval arithmetic, including the
//!    merge step that coalesces overlapping busy intervals before they are
//!    subtracted from the working window.
//! 3. [`slots`] walks the working window at a fixed granularity and emits
//!    every start time whose full occupied block (buffers included) fits
//!    without touching a busy interval.
//!
//! Everything here is pure: persistence hands in the current salon hours,
//! stylist schedule, and committed busy intervals, and gets back a lazy
//! sequence of bookable start times. Re-running a query against unchanged
//! inputs yields the identical sequence.

pub mod hours;
pub mod interval;
pub mod slots;

pub use hours::{salon_open_interval, stylist_working_interval};
pub use interval::Interval;
pub use slots::{SlotIter, SlotQuery, DEFAULT_GRANULARITY_MINUTES};
