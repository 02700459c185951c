//! Day grouping for the scheduler.
//!
//! Appointments are partitioned by date, days are iterated in ascending date
//! order, and each day is ordered by real time of day. Clock strings come in
//! two shapes, `"09:00 AM"` (display form) and `"13:30"` (form input), and
//! both are parsed before comparing so `"01:00 PM"` sorts after `"11:00 AM"`.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};

use medidash_contracts::appointment::Appointment;

/// One day of the scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateGroup<'a> {
    pub date: NaiveDate,
    pub appointments: Vec<&'a Appointment>,
}

/// Parse a clock string in 12-hour (`"9:00 AM"`, `"09:00PM"`) or 24-hour
/// (`"13:30"`) form.
pub fn parse_clock(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    for format in ["%I:%M %p", "%I:%M%p", "%H:%M"] {
        if let Ok(t) = NaiveTime::parse_from_str(s, format) {
            return Some(t);
        }
    }
    // "13:30 PM": a 24-hour time with a redundant suffix.
    let (clock, suffix) = s.split_once(' ')?;
    if suffix.eq_ignore_ascii_case("am") || suffix.eq_ignore_ascii_case("pm") {
        return NaiveTime::parse_from_str(clock, "%H:%M").ok();
    }
    None
}

/// Chronological comparison of two clock strings. Unparsable strings sort
/// after parsable ones and compare lexicographically among themselves.
pub fn compare_clock(a: &str, b: &str) -> Ordering {
    match (parse_clock(a), parse_clock(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Render a time in the scheduler's display form, `"01:30 PM"`.
pub fn format_clock(t: NaiveTime) -> String {
    t.format("%I:%M %p").to_string()
}

/// Group `appointments` by date.
///
/// Every input appointment lands in exactly one group; flattening the groups
/// in order yields the input re-ordered by (date, time).
pub fn group_by_date<'a, I>(appointments: I) -> Vec<DateGroup<'a>>
where
    I: IntoIterator<Item = &'a Appointment>,
{
    let mut by_date: BTreeMap<NaiveDate, Vec<&'a Appointment>> = BTreeMap::new();
    for appointment in appointments {
        by_date.entry(appointment.date).or_default().push(appointment);
    }

    by_date
        .into_iter()
        .map(|(date, mut appointments)| {
            appointments.sort_by(|a, b| compare_clock(&a.time, &b.time));
            DateGroup { date, appointments }
        })
        .collect()
}
