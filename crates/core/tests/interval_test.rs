use chairtime_core::scheduling::Interval;
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

#[test]
fn test_adjacent_intervals_do_not_overlap() {
    let morning = interval((9, 0), (10, 0));
    let next = interval((10, 0), (11, 0));

    assert!(!morning.overlaps(&next));
    assert!(!next.overlaps(&morning));
}

#[test]
fn test_partial_overlap_is_detected() {
    let a = interval((9, 0), (10, 0));
    let b = interval((9, 30), (10, 30));

    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
}

#[test]
fn test_containment() {
    let day = interval((9, 0), (18, 0));
    let lunch = interval((12, 0), (13, 0));

    assert!(day.contains(&lunch));
    assert!(!lunch.contains(&day));
    assert!(day.contains(&day));
}

#[test]
fn test_intersect_produces_common_range() {
    let salon = interval((9, 0), (18, 0));
    let stylist = interval((8, 0), (17, 0));

    let effective = salon.intersect(&stylist).expect("ranges overlap");
    assert_eq!(effective, interval((9, 0), (17, 0)));
}

#[test]
fn test_intersect_of_disjoint_ranges_is_none() {
    let morning = interval((9, 0), (12, 0));
    let evening = interval((14, 0), (18, 0));

    assert_eq!(morning.intersect(&evening), None);
}

#[test]
fn test_empty_interval() {
    let empty = interval((10, 0), (10, 0));
    assert!(empty.is_empty());
    assert!(!interval((10, 0), (10, 1)).is_empty());
}

#[test]
fn test_duration() {
    assert_eq!(interval((9, 0), (9, 45)).duration(), Duration::minutes(45));
}

#[test]
fn test_merge_coalesces_overlapping_intervals() {
    let merged = Interval::merge(vec![
        interval((11, 0), (12, 0)),
        interval((9, 0), (10, 0)),
        interval((9, 30), (10, 30)),
    ]);

    assert_eq!(
        merged,
        vec![interval((9, 0), (10, 30)), interval((11, 0), (12, 0))]
    );
}

#[test]
fn test_merge_coalesces_adjacent_intervals() {
    let merged = Interval::merge(vec![
        interval((9, 0), (10, 0)),
        interval((10, 0), (11, 0)),
    ]);

    assert_eq!(merged, vec![interval((9, 0), (11, 0))]);
}

#[test]
fn test_merge_drops_empty_intervals() {
    let merged = Interval::merge(vec![
        interval((10, 0), (10, 0)),
        interval((9, 0), (9, 30)),
    ]);

    assert_eq!(merged, vec![interval((9, 0), (9, 30))]);
}

#[test]
fn test_merge_of_nothing_is_empty() {
    assert_eq!(Interval::merge(vec![]), vec![]);
}
