use chairtime_core::models::service::Service;
use chairtime_core::scheduling::{self, Interval, SlotQuery};
use chairtime_db::models::{DbSalonHours, DbService, DbStylist, DbStylistSchedule};
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use mockall::predicate;
use pretty_assertions::assert_eq;
use uuid::Uuid;

use crate::test_utils::TestContext;

// 2025-06-02 is a Monday (day_of_week = 1).
fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
}

fn time(hour: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, min, 0).unwrap()
}

fn at(hour: u32, min: u32) -> DateTime<Utc> {
    monday().and_time(time(hour, min)).and_utc()
}

fn stylist_row(salon_id: Uuid, active: bool) -> DbStylist {
    DbStylist {
        id: Uuid::new_v4(),
        salon_id,
        first_name: "Dana".to_string(),
        last_name: "Reyes".to_string(),
        email: None,
        phone: None,
        specialties: vec!["color".to_string()],
        is_active: active,
        created_at: Utc::now(),
    }
}

fn service_row(salon_id: Uuid, duration: i32) -> DbService {
    DbService {
        id: Uuid::new_v4(),
        salon_id,
        name: "Cut".to_string(),
        description: None,
        duration_minutes: duration,
        price_cents: 4_500,
        buffer_before_minutes: 0,
        buffer_after_minutes: 0,
        processing_time_minutes: 0,
        created_at: Utc::now(),
    }
}

fn hours_row(salon_id: Uuid, open: (u32, u32), close: (u32, u32)) -> DbSalonHours {
    DbSalonHours {
        id: Uuid::new_v4(),
        salon_id,
        day_of_week: 1,
        open_time: Some(time(open.0, open.1)),
        close_time: Some(time(close.0, close.1)),
        is_closed: false,
    }
}

fn schedule_row(stylist_id: Uuid, start: (u32, u32), end: (u32, u32)) -> DbStylistSchedule {
    DbStylistSchedule {
        id: Uuid::new_v4(),
        stylist_id,
        day_of_week: 1,
        start_time: Some(time(start.0, start.1)),
        end_time: Some(time(end.0, end.1)),
        is_available: true,
    }
}

/// Mirrors the availability handler's pipeline against mock repositories:
/// resolve the working window, pull busy intervals, run the slot
/// generator.
async fn list_slots_wrapper(
    ctx: &mut TestContext,
    stylist: &DbStylist,
    service: &DbService,
    date: NaiveDate,
) -> eyre::Result<Vec<DateTime<Utc>>> {
    if !stylist.is_active {
        return Ok(Vec::new());
    }

    let day_of_week = scheduling::hours::weekday_index(date);
    let salon_hours = ctx
        .salon_repo
        .get_salon_hours(stylist.salon_id, day_of_week)
        .await?
        .map(chairtime_core::models::salon::SalonHours::from);
    let schedule = ctx
        .stylist_repo
        .get_stylist_schedule(stylist.id, day_of_week)
        .await?
        .map(chairtime_core::models::stylist::StylistSchedule::from);

    let Some(window) =
        scheduling::stylist_working_interval(salon_hours.as_ref(), schedule.as_ref(), date)
    else {
        return Ok(Vec::new());
    };

    let busy = ctx
        .appointment_repo
        .get_busy_intervals(stylist.id, window.start, window.end)
        .await?
        .into_iter()
        .map(|(start, end)| Interval::new(start, end))
        .collect();

    let timing = Service::from(service.clone()).timing();
    Ok(SlotQuery::new(window, timing, busy).slots().collect())
}

#[tokio::test]
async fn test_slots_skip_existing_appointment() {
    let mut ctx = TestContext::new();
    let salon_id = Uuid::new_v4();
    let stylist = stylist_row(salon_id, true);
    let service = service_row(salon_id, 30);

    ctx.salon_repo
        .expect_get_salon_hours()
        .with(predicate::eq(salon_id), predicate::eq(1))
        .returning(move |s, _| Ok(Some(hours_row(s, (9, 0), (18, 0)))));
    let stylist_id = stylist.id;
    ctx.stylist_repo
        .expect_get_stylist_schedule()
        .with(predicate::eq(stylist_id), predicate::eq(1))
        .returning(|s, _| Ok(Some(schedule_row(s, (9, 0), (17, 0)))));
    ctx.appointment_repo
        .expect_get_busy_intervals()
        .returning(|_, _, _| Ok(vec![(at(10, 0), at(10, 45))]));

    let slots = list_slots_wrapper(&mut ctx, &stylist, &service, monday())
        .await
        .expect("availability computation succeeds");

    assert!(slots.contains(&at(9, 30)));
    assert!(!slots.contains(&at(9, 45)));
    assert!(!slots.contains(&at(10, 30)));
    assert!(slots.contains(&at(10, 45)));
    assert_eq!(slots.first(), Some(&at(9, 0)));
    assert_eq!(slots.last(), Some(&at(16, 30)));
}

#[tokio::test]
async fn test_closed_day_yields_empty_list_not_error() {
    let mut ctx = TestContext::new();
    let salon_id = Uuid::new_v4();
    let stylist = stylist_row(salon_id, true);
    let service = service_row(salon_id, 30);

    // No salon hours configured for the requested weekday.
    ctx.salon_repo
        .expect_get_salon_hours()
        .returning(|_, _| Ok(None));
    ctx.stylist_repo
        .expect_get_stylist_schedule()
        .returning(|s, _| Ok(Some(schedule_row(s, (9, 0), (17, 0)))));

    let slots = list_slots_wrapper(&mut ctx, &stylist, &service, monday())
        .await
        .expect("closed day is not an error");

    assert_eq!(slots, Vec::<DateTime<Utc>>::new());
}

#[tokio::test]
async fn test_inactive_stylist_has_no_slots() {
    let mut ctx = TestContext::new();
    let salon_id = Uuid::new_v4();
    let stylist = stylist_row(salon_id, false);
    let service = service_row(salon_id, 30);

    let slots = list_slots_wrapper(&mut ctx, &stylist, &service, monday())
        .await
        .expect("inactive stylist is not an error");

    assert!(slots.is_empty());
}

#[tokio::test]
async fn test_repeated_reads_are_idempotent() {
    let mut ctx = TestContext::new();
    let salon_id = Uuid::new_v4();
    let stylist = stylist_row(salon_id, true);
    let service = service_row(salon_id, 45);

    ctx.salon_repo
        .expect_get_salon_hours()
        .returning(move |s, _| Ok(Some(hours_row(s, (9, 0), (18, 0)))));
    ctx.stylist_repo
        .expect_get_stylist_schedule()
        .returning(|s, _| Ok(Some(schedule_row(s, (10, 0), (16, 0)))));
    ctx.appointment_repo
        .expect_get_busy_intervals()
        .returning(|_, _, _| Ok(vec![(at(12, 0), at(13, 30))]));

    let first = list_slots_wrapper(&mut ctx, &stylist, &service, monday())
        .await
        .unwrap();
    let second = list_slots_wrapper(&mut ctx, &stylist, &service, monday())
        .await
        .unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_buffered_service_blocks_and_shifts() {
    let mut ctx = TestContext::new();
    let salon_id = Uuid::new_v4();
    let stylist = stylist_row(salon_id, true);
    let mut service = service_row(salon_id, 30);
    service.buffer_before_minutes = 15;
    service.buffer_after_minutes = 15;

    ctx.salon_repo
        .expect_get_salon_hours()
        .returning(move |s, _| Ok(Some(hours_row(s, (9, 0), (18, 0)))));
    ctx.stylist_repo
        .expect_get_stylist_schedule()
        .returning(|s, _| Ok(Some(schedule_row(s, (9, 0), (11, 0)))));
    ctx.appointment_repo
        .expect_get_busy_intervals()
        .returning(|_, _, _| Ok(vec![]));

    let slots = list_slots_wrapper(&mut ctx, &stylist, &service, monday())
        .await
        .unwrap();

    // Occupied span is 60 minutes; the visible start trails the block by
    // the buffer-before. Blocks start 9:00, 9:15, ..., 10:00.
    assert_eq!(slots.first(), Some(&at(9, 15)));
    assert_eq!(slots.last(), Some(&at(10, 15)));
    for pair in slots.windows(2) {
        assert_eq!(pair[1] - pair[0], Duration::minutes(15));
    }
}
