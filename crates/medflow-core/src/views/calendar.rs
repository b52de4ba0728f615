//! Calendar buckets for the scheduler views.
//!
//! Appointments whose patient or consultant no longer exists are
//! dropped from every bucket. This is dangling-reference tolerance on
//! read, not integrity enforcement.

use chrono::{Datelike, Days, NaiveDate};

use crate::models::{Appointment, ClinicData};

/// Appointments that still resolve to a live patient and consultant,
/// optionally restricted to one consultant.
pub fn visible_appointments(data: &ClinicData, consultant_filter: Option<&str>) -> Vec<Appointment> {
    data.appointments
        .iter()
        .filter(|a| {
            data.find_patient(&a.patient_id).is_some()
                && data.find_consultant(&a.consultant_id).is_some()
        })
        .filter(|a| consultant_filter.map_or(true, |id| a.consultant_id == id))
        .cloned()
        .collect()
}

/// One day's sittings, ordered by start time.
pub fn day_bucket(data: &ClinicData, date: NaiveDate, consultant_filter: Option<&str>) -> Vec<Appointment> {
    let mut apps: Vec<Appointment> = visible_appointments(data, consultant_filter)
        .into_iter()
        .filter(|a| a.date == date)
        .collect();
    apps.sort_by(|a, b| a.start_time.cmp(&b.start_time));
    apps
}

/// The Sunday-start week containing `date`, one bucket per day.
pub fn week_buckets(
    data: &ClinicData,
    date: NaiveDate,
    consultant_filter: Option<&str>,
) -> Vec<(NaiveDate, Vec<Appointment>)> {
    let sunday = date - Days::new(u64::from(date.weekday().num_days_from_sunday()));
    (0..7)
        .map(|offset| {
            let day = sunday + Days::new(offset);
            (day, day_bucket(data, day, consultant_filter))
        })
        .collect()
}

/// Every day of the civil month containing `date`, one bucket per day.
pub fn month_buckets(
    data: &ClinicData,
    date: NaiveDate,
    consultant_filter: Option<&str>,
) -> Vec<(NaiveDate, Vec<Appointment>)> {
    let mut buckets = Vec::new();
    let mut day = date.with_day(1).unwrap_or(date);
    while day.month() == date.month() {
        buckets.push((day, day_bucket(data, day, consultant_filter)));
        day = day + Days::new(1);
    }
    buckets
}
