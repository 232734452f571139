use chairtime_core::errors::BookingError;
use chairtime_core::models::appointment::{AppointmentStatus, BookingChannel};
use chairtime_core::models::service::ServiceTiming;
use chairtime_core::scheduling::Interval;
use chairtime_db::models::DbAppointment;
use chairtime_db::repositories::appointment::NewAppointment;
use chrono::{DateTime, NaiveDate, Utc};
use pretty_assertions::assert_eq;
use uuid::Uuid;

use crate::test_utils::TestContext;

fn at(hour: u32, min: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(2025, 6, 2)
        .unwrap()
        .and_hms_opt(hour, min, 0)
        .unwrap()
        .and_utc()
}

fn timing() -> ServiceTiming {
    ServiceTiming {
        duration_minutes: 30,
        buffer_before_minutes: 10,
        buffer_after_minutes: 5,
        processing_time_minutes: 0,
    }
}

fn candidate(visible_start: DateTime<Utc>, timing: &ServiceTiming) -> NewAppointment {
    let block_start = visible_start - timing.buffer_before();
    NewAppointment {
        salon_id: Uuid::new_v4(),
        client_id: Uuid::new_v4(),
        stylist_id: Uuid::new_v4(),
        service_id: Uuid::new_v4(),
        start_time: block_start,
        end_time: block_start + timing.occupied_span(),
        status: AppointmentStatus::Pending,
        channel: BookingChannel::Form,
        notes: None,
    }
}

fn inserted_row(candidate: &NewAppointment) -> DbAppointment {
    DbAppointment {
        id: Uuid::new_v4(),
        salon_id: candidate.salon_id,
        client_id: candidate.client_id,
        stylist_id: candidate.stylist_id,
        service_id: candidate.service_id,
        start_time: candidate.start_time,
        end_time: candidate.end_time,
        status: candidate.status.as_str().to_string(),
        channel: candidate.channel.as_str().to_string(),
        payment_status: "pending".to_string(),
        notes: candidate.notes.clone(),
        created_at: Utc::now(),
    }
}

/// Mirrors the booking handler's commit step: window containment re-check
/// followed by the atomic insert, mapping a `None` result to
/// `SlotUnavailable`.
async fn book_wrapper(
    ctx: &mut TestContext,
    window: Interval,
    candidate: NewAppointment,
) -> Result<DbAppointment, BookingError> {
    let block = Interval::new(candidate.start_time, candidate.end_time);
    if !window.contains(&block) {
        return Err(BookingError::SlotUnavailable);
    }

    ctx.appointment_repo
        .insert_appointment_if_free(candidate)
        .await
        .map_err(BookingError::Database)?
        .ok_or(BookingError::SlotUnavailable)
}

#[tokio::test]
async fn test_booking_a_free_slot_succeeds() {
    let mut ctx = TestContext::new();
    let timing = timing();
    let candidate = candidate(at(10, 0), &timing);

    ctx.appointment_repo
        .expect_insert_appointment_if_free()
        .returning(|c| Ok(Some(inserted_row(&c))));

    let window = Interval::new(at(9, 0), at(17, 0));
    let booked = book_wrapper(&mut ctx, window, candidate.clone())
        .await
        .expect("free slot books");

    // The stored block covers buffers on both sides of the visible start.
    assert_eq!(booked.start_time, at(9, 50));
    assert_eq!(booked.end_time, at(10, 35));
    assert_eq!(booked.status, "pending");
}

#[tokio::test]
async fn test_taken_slot_reports_slot_unavailable() {
    let mut ctx = TestContext::new();
    let candidate = candidate(at(10, 0), &timing());

    // The atomic primitive found a conflicting row at commit time.
    ctx.appointment_repo
        .expect_insert_appointment_if_free()
        .returning(|_| Ok(None));

    let window = Interval::new(at(9, 0), at(17, 0));
    let result = book_wrapper(&mut ctx, window, candidate).await;

    assert!(matches!(result, Err(BookingError::SlotUnavailable)));
}

#[tokio::test]
async fn test_block_outside_working_window_is_rejected() {
    let mut ctx = TestContext::new();
    let timing = timing();
    // Visible start 16:50 fits, but the block runs to 17:25, past close.
    let candidate = candidate(at(16, 50), &timing);

    let window = Interval::new(at(9, 0), at(17, 0));
    let result = book_wrapper(&mut ctx, window, candidate).await;

    assert!(matches!(result, Err(BookingError::SlotUnavailable)));
}

#[tokio::test]
async fn test_exactly_one_of_two_conflicting_bookings_wins() {
    let mut ctx = TestContext::new();
    let timing = timing();
    let first = candidate(at(11, 0), &timing);
    let mut second = first.clone();
    second.client_id = Uuid::new_v4();

    // The advisory lock serializes the two transactions; whichever runs
    // first inserts, the second sees its row and backs off.
    let mut call = 0;
    ctx.appointment_repo
        .expect_insert_appointment_if_free()
        .returning(move |c| {
            call += 1;
            if call == 1 {
                Ok(Some(inserted_row(&c)))
            } else {
                Ok(None)
            }
        });

    let window = Interval::new(at(9, 0), at(17, 0));
    let winner = book_wrapper(&mut ctx, window, first).await;
    let loser = book_wrapper(&mut ctx, window, second).await;

    assert!(winner.is_ok());
    assert!(matches!(loser, Err(BookingError::SlotUnavailable)));
}

#[tokio::test]
async fn test_persistence_failure_is_not_reported_as_conflict() {
    let mut ctx = TestContext::new();
    let candidate = candidate(at(10, 0), &timing());

    ctx.appointment_repo
        .expect_insert_appointment_if_free()
        .returning(|_| Err(eyre::eyre!("connection reset")));

    let window = Interval::new(at(9, 0), at(17, 0));
    let result = book_wrapper(&mut ctx, window, candidate).await;

    // Callers must be able to tell "re-query and retry" from "backend
    // down", so these are distinct variants.
    assert!(matches!(result, Err(BookingError::Database(_))));
}
