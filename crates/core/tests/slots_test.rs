use chairtime_core::models::service::ServiceTiming;
use chairtime_core::scheduling::{Interval, SlotQuery};
use chrono::{DateTime, Duration, Utc};
use pretty_assertions::assert_eq;

fn at(hour: u32, min: u32) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(&format!("2025-06-02T{hour:02}:{min:02}:00Z"))
        .unwrap()
        .with_timezone(&Utc)
}

fn interval(start: (u32, u32), end: (u32, u32)) -> Interval {
    Interval::new(at(start.0, start.1), at(end.0, end.1))
}

fn timing(duration: i32) -> ServiceTiming {
    ServiceTiming {
        duration_minutes: duration,
        buffer_before_minutes: 0,
        buffer_after_minutes: 0,
        processing_time_minutes: 0,
    }
}

/// The scenario from the booking rules: salon open 09:00-18:00 Monday,
/// stylist scheduled 09:00-17:00, one confirmed 45-minute appointment at
/// 10:00. A 30-minute service at 15-minute granularity must skip every
/// start that would run into the busy block.
#[test]
fn test_slots_around_existing_appointment() {
    let query = SlotQuery::new(
        interval((9, 0), (17, 0)),
        timing(30),
        vec![interval((10, 0), (10, 45))],
    );

    let slots: Vec<_> = query.slots().collect();

    // 09:30 ends exactly at 10:00, adjacent to the busy block: valid.
    assert!(slots.contains(&at(9, 30)));
    // 09:45 would run 09:45-10:15, overlapping the appointment.
    assert!(!slots.contains(&at(9, 45)));
    assert!(!slots.contains(&at(10, 0)));
    assert!(!slots.contains(&at(10, 15)));
    assert!(!slots.contains(&at(10, 30)));
    // 10:45 starts exactly when the appointment ends: valid.
    assert!(slots.contains(&at(10, 45)));

    assert_eq!(slots.first(), Some(&at(9, 0)));
    // Last 30-minute slot that still fits before 17:00.
    assert_eq!(slots.last(), Some(&at(16, 30)));
}

#[test]
fn test_exact_tail_fit_produces_one_slot() {
    // One hour left at the end of the day, one-hour service: exactly one
    // slot at the earliest start, none later.
    let query = SlotQuery::new(interval((16, 0), (17, 0)), timing(60), vec![]);

    let slots: Vec<_> = query.slots().collect();
    assert_eq!(slots, vec![at(16, 0)]);
}

#[test]
fn test_service_longer_than_window_yields_nothing() {
    let query = SlotQuery::new(interval((9, 0), (10, 0)), timing(90), vec![]);
    assert_eq!(query.slots().count(), 0);
}

#[test]
fn test_empty_window_yields_nothing() {
    let query = SlotQuery::new(interval((9, 0), (9, 0)), timing(30), vec![]);
    assert_eq!(query.slots().count(), 0);
}

#[test]
fn test_overlapping_busy_intervals_leave_no_false_gap() {
    // Two overlapping busy blocks cover 10:00-11:30 with no real gap.
    // An unmerged subtraction would wrongly offer starts inside them.
    let query = SlotQuery::new(
        interval((9, 0), (12, 0)),
        timing(30),
        vec![interval((10, 0), (11, 0)), interval((10, 30), (11, 30))],
    );

    let slots: Vec<_> = query.slots().collect();
    assert_eq!(
        slots,
        vec![at(9, 0), at(9, 15), at(9, 30), at(11, 30)]
    );
}

#[test]
fn test_buffers_shift_the_visible_start() {
    // 30 minutes hands-on with a 10-minute buffer before and 5 after:
    // the block is 45 minutes and the client-visible start trails the
    // block start by the buffer-before.
    let query = SlotQuery::new(
        interval((9, 0), (10, 30)),
        ServiceTiming {
            duration_minutes: 30,
            buffer_before_minutes: 10,
            buffer_after_minutes: 5,
            processing_time_minutes: 0,
        },
        vec![],
    );

    let slots: Vec<_> = query.slots().collect();
    assert_eq!(slots, vec![at(9, 10), at(9, 25), at(9, 40), at(9, 55)]);
}

#[test]
fn test_processing_time_blocks_the_calendar() {
    // 30 minutes hands-on plus 30 minutes processing: only one such block
    // fits into a one-hour window.
    let query = SlotQuery::new(
        interval((9, 0), (10, 0)),
        ServiceTiming {
            duration_minutes: 30,
            buffer_before_minutes: 0,
            buffer_after_minutes: 0,
            processing_time_minutes: 30,
        },
        vec![],
    );

    let slots: Vec<_> = query.slots().collect();
    assert_eq!(slots, vec![at(9, 0)]);
}

#[test]
fn test_not_before_drops_past_slots() {
    let query = SlotQuery::new(interval((9, 0), (11, 0)), timing(30), vec![])
        .with_not_before(at(10, 10));

    let slots: Vec<_> = query.slots().collect();
    assert_eq!(slots, vec![at(10, 15), at(10, 30)]);
}

#[test]
fn test_granularity_controls_the_step() {
    let query = SlotQuery::new(interval((9, 0), (11, 0)), timing(60), vec![])
        .with_granularity(Duration::minutes(30));

    let slots: Vec<_> = query.slots().collect();
    assert_eq!(slots, vec![at(9, 0), at(9, 30), at(10, 0)]);
}

#[test]
fn test_repeated_runs_yield_identical_sequences() {
    let query = SlotQuery::new(
        interval((9, 0), (17, 0)),
        timing(45),
        vec![interval((11, 0), (12, 15)), interval((14, 30), (15, 0))],
    );

    let first: Vec<_> = query.slots().collect();
    let second: Vec<_> = query.slots().collect();
    assert_eq!(first, second);
}

#[test]
fn test_every_emitted_slot_is_actually_free() {
    let busy = vec![interval((10, 0), (10, 45)), interval((13, 0), (14, 30))];
    let timing = ServiceTiming {
        duration_minutes: 40,
        buffer_before_minutes: 5,
        buffer_after_minutes: 10,
        processing_time_minutes: 15,
    };
    let window = interval((9, 0), (17, 0));
    let query = SlotQuery::new(window, timing, busy.clone());

    for visible_start in query.slots() {
        let block_start = visible_start - timing.buffer_before();
        let block = Interval::new(block_start, block_start + timing.occupied_span());

        assert!(window.contains(&block), "block {block:?} escapes the window");
        for b in &busy {
            assert!(!block.overlaps(b), "block {block:?} overlaps busy {b:?}");
        }
    }
}
