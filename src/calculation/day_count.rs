//! Calendar-day arithmetic shared by the pricing and reminder rules.
//!
//! Deadlines (expiry, renewal, rent due) are calendar dates that start at
//! midnight; "now" is a full timestamp. Day counts are floored so that a
//! deadline later today is 0 days away and one that passed at midnight is -1.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

const SECONDS_PER_DAY: i64 = 86_400;

/// Whole days from `now` until midnight at the start of `deadline`, floored.
///
/// # Example
///
/// ```
/// use stay_engine::calculation::days_until;
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// let deadline = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
///
/// let morning = NaiveDateTime::parse_from_str("2024-03-01 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(days_until(deadline, morning), 10);
///
/// // Part-way through the day the remaining time is 9.x days, floored to 9
/// let afternoon = NaiveDateTime::parse_from_str("2024-03-01 14:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(days_until(deadline, afternoon), 9);
///
/// // Any time after the deadline's midnight is at least one day late
/// let after = NaiveDateTime::parse_from_str("2024-03-11 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(days_until(deadline, after), -1);
/// ```
pub fn days_until(deadline: NaiveDate, now: NaiveDateTime) -> i64 {
    let deadline = deadline.and_time(NaiveTime::MIN);
    (deadline - now).num_seconds().div_euclid(SECONDS_PER_DAY)
}

/// Returns the last valid day number of the month containing `date`.
///
/// # Example
///
/// ```
/// use stay_engine::calculation::last_day_of_month;
/// use chrono::NaiveDate;
///
/// assert_eq!(last_day_of_month(NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()), 29);
/// assert_eq!(last_day_of_month(NaiveDate::from_ymd_opt(2023, 2, 10).unwrap()), 28);
/// assert_eq!(last_day_of_month(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()), 30);
/// ```
pub fn last_day_of_month(date: NaiveDate) -> u32 {
    (28..=31)
        .rev()
        .find(|day| date.with_day(*day).is_some())
        .unwrap_or(28)
}

/// Returns the due date for a monthly `due_day` in the month containing `reference`.
///
/// A due day past the end of the month is clamped to the month's last day,
/// so a charge due on the 31st falls due on the 30th in April and on the
/// 28th or 29th in February. A due day of 0 is treated as the 1st.
///
/// # Example
///
/// ```
/// use stay_engine::calculation::due_date_in_month;
/// use chrono::NaiveDate;
///
/// let april = NaiveDate::from_ymd_opt(2024, 4, 12).unwrap();
/// assert_eq!(due_date_in_month(april, 31), NaiveDate::from_ymd_opt(2024, 4, 30).unwrap());
/// assert_eq!(due_date_in_month(april, 5), NaiveDate::from_ymd_opt(2024, 4, 5).unwrap());
/// ```
pub fn due_date_in_month(reference: NaiveDate, due_day: u32) -> NaiveDate {
    let day = due_day.clamp(1, last_day_of_month(reference));
    reference.with_day(day).unwrap_or(reference)
}
