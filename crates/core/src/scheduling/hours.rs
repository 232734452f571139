use chrono::{Datelike, NaiveDate, NaiveTime};

use crate::models::salon::SalonHours;
use crate::models::stylist::StylistSchedule;
use crate::scheduling::interval::Interval;

/// Day-of-week index used throughout: 0 = Sunday through 6 = Saturday.
pub fn weekday_index(date: NaiveDate) -> i32 {
    date.weekday().num_days_from_sunday() as i32
}

/// Resolves the salon's open interval for a date.
///
/// Absence of configuration is a valid "closed" result, never an error:
/// a missing record, a set closed flag, a record for a different weekday,
/// missing times, or a degenerate range (close <= open) all yield `None`.
pub fn salon_open_interval(hours: Option<&SalonHours>, date: NaiveDate) -> Option<Interval> {
    let hours = hours?;
    if hours.is_closed || hours.day_of_week != weekday_index(date) {
        return None;
    }
    day_interval(date, hours.open_time?, hours.close_time?)
}

/// Resolves a stylist's effective working interval for a date: the
/// intersection of the salon's open interval and the stylist's own
/// scheduled interval for that weekday. If either side is closed,
/// unavailable, or missing, or the intersection is empty, the stylist has
/// no availability that day.
pub fn stylist_working_interval(
    salon_hours: Option<&SalonHours>,
    schedule: Option<&StylistSchedule>,
    date: NaiveDate,
) -> Option<Interval> {
    let open = salon_open_interval(salon_hours, date)?;

    let schedule = schedule?;
    if !schedule.is_available || schedule.day_of_week != weekday_index(date) {
        return None;
    }
    let scheduled = day_interval(date, schedule.start_time?, schedule.end_time?)?;

    open.intersect(&scheduled)
}

fn day_interval(date: NaiveDate, start: NaiveTime, end: NaiveTime) -> Option<Interval> {
    if end <= start {
        return None;
    }
    Some(Interval::new(
        date.and_time(start).and_utc(),
        date.and_time(end).and_utc(),
    ))
}
