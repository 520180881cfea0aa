use chrono::{NaiveDate, NaiveTime, Timelike};
use clockflow::core::timefix::{
    DEFAULT_DISPLAY_OFFSET_HOURS, display_parts, display_time, store_timestamp,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
}

fn t(h: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, min, 0).expect("valid time")
}

#[test]
fn test_store_keeps_wall_clock_digits() {
    let ts = store_timestamp(d(2024, 1, 15), t(8, 0));
    assert_eq!(ts.to_rfc3339(), "2024-01-15T08:00:00+00:00");
}

#[test]
fn test_display_adds_offset() {
    let ts = store_timestamp(d(2024, 1, 15), t(8, 0));
    let (date, time) = display_parts(ts, DEFAULT_DISPLAY_OFFSET_HOURS);

    assert_eq!(date, d(2024, 1, 15));
    assert_eq!(time, t(11, 0));
}

#[test]
fn test_round_trip_shifts_time_by_offset() {
    // write D+T, read back → T + 3h, same date
    for (h, m) in [(0, 0), (8, 30), (12, 15), (20, 59)] {
        let ts = store_timestamp(d(2024, 6, 10), t(h, m));
        let (date, time) = display_parts(ts, 3);

        assert_eq!(time.hour(), (h + 3) % 24);
        assert_eq!(time.minute(), m);
        assert_eq!(date, d(2024, 6, 10));
    }
}

#[test]
fn test_round_trip_crosses_midnight() {
    // 22:30 + 3h = 01:30 on the next day
    let ts = store_timestamp(d(2024, 1, 31), t(22, 30));
    let (date, time) = display_parts(ts, 3);

    assert_eq!(time, t(1, 30));
    assert_eq!(date, d(2024, 2, 1));
}

#[test]
fn test_display_time_formats_hhmm() {
    let ts = store_timestamp(d(2024, 1, 15), t(17, 5));
    assert_eq!(display_time(ts, 3), "20:05");
}

#[test]
fn test_zero_offset_is_identity() {
    let ts = store_timestamp(d(2024, 1, 15), t(8, 0));
    let (date, time) = display_parts(ts, 0);

    assert_eq!(date, d(2024, 1, 15));
    assert_eq!(time, t(8, 0));
}
