//! Date and time formats used in image capture metadata.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Format of `DateTime`, `DateTimeOriginal`, and `DateTimeDigitized`.
pub const DATE_TIME_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

/// Format of the GPS `DateStamp`.
pub const DATE_STAMP_FORMAT: &str = "%Y:%m:%d";

/// Parse a metadata date/time string.
///
/// Leading and trailing whitespace and NULs are tolerated; some cameras pad
/// these fields.
///
/// ```
/// # use geotempo_common::datetime::*;
/// let date = parse_date_time("2021:06:15 08:00:00\0").unwrap();
/// assert_eq!(format_date_time(date), "2021:06:15 08:00:00");
/// assert!(parse_date_time("last tuesday").is_none());
/// ```
pub fn parse_date_time(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(clean(text), DATE_TIME_FORMAT).ok()
}

pub fn format_date_time(date: NaiveDateTime) -> String {
    date.format(DATE_TIME_FORMAT).to_string()
}

/// Parse a GPS `DateStamp` string.
pub fn parse_date_stamp(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(clean(text), DATE_STAMP_FORMAT).ok()
}

pub fn format_date_stamp(date: NaiveDate) -> String {
    date.format(DATE_STAMP_FORMAT).to_string()
}

/// Interpret a GPS `TimeStamp` hour/minute/second triple as a time of day.
///
/// Hour and minute must be whole numbers in range; the second may carry a
/// fraction. Out-of-range components yield `None`.
pub fn time_from_triple((hour, min, sec): (f64, f64, f64)) -> Option<NaiveTime> {
    let hour = whole_component(hour, 24.)?;
    let min = whole_component(min, 60.)?;

    if !(0. ..60.).contains(&sec) {
        return None;
    }
    let whole = sec.trunc();
    // Keep rounding below the leap second range
    let micro = ((sec - whole) * 1_000_000.).round().min(999_999.);

    NaiveTime::from_hms_micro_opt(hour, min, checked_u32(whole)?, checked_u32(micro)?)
}

/// Decompose a time of day into a GPS `TimeStamp` triple.
pub fn time_to_triple(time: NaiveTime) -> (f64, f64, f64) {
    let sec = f64::from(time.second()) + f64::from(time.nanosecond()) / 1_000_000_000.;

    (f64::from(time.hour()), f64::from(time.minute()), sec)
}

fn whole_component(value: f64, max: f64) -> Option<u32> {
    if value.fract() == 0. && (0. ..max).contains(&value) {
        checked_u32(value)
    } else {
        None
    }
}

fn checked_u32(value: f64) -> Option<u32> {
    if value.is_finite() && (0. ..=f64::from(u32::MAX)).contains(&value) {
        Some(value as u32)
    } else {
        None
    }
}

fn clean(text: &str) -> &str {
    text.trim_matches(|c: char| c == '\0' || c.is_whitespace())
}
