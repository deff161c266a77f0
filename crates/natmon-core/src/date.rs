//! Total date parsing and the chronological ordering key
//!
//! The dataset carries partial dates: a "month/day" string that may be empty
//! or malformed, and a year that may be 0 for "unknown". Parsing is total —
//! missing pieces default deterministically so sorting always succeeds.

use chrono::NaiveDate;

/// Parse a "month/day" fragment, defaulting each piece to 1
///
/// Out-of-range or unparseable values fall back to 1 as well, so the result
/// is always a plausible (month, day) pair.
pub fn parse_month_day(date: &str) -> (u32, u32) {
    let mut parts = date.trim().splitn(2, '/');
    let month = parts
        .next()
        .and_then(|p| p.trim().parse::<u32>().ok())
        .filter(|m| (1..=12).contains(m))
        .unwrap_or(1);
    let day = parts
        .next()
        .and_then(|p| p.trim().parse::<u32>().ok())
        .filter(|d| (1..=31).contains(d))
        .unwrap_or(1);
    (month, day)
}

/// Linearize (year, "month/day") into a single orderable instant
///
/// Never fails: impossible combinations (e.g. 2/30) degrade to the first of
/// the month, then to January 1st of the year.
pub fn ordering_instant(year: i32, date: &str) -> NaiveDate {
    let (month, day) = parse_month_day(date);
    NaiveDate::from_ymd_opt(year, month, day)
        .or_else(|| NaiveDate::from_ymd_opt(year, month, 1))
        .or_else(|| NaiveDate::from_ymd_opt(year, 1, 1))
        .unwrap_or(NaiveDate::MIN)
}
