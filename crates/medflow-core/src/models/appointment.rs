//! Appointments and recurring sitting plans.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single booked sitting.
///
/// Patient and consultant names are snapshots taken at booking time; a
/// plan of N sittings is materialized as N independent rows sharing no
/// group id beyond the weekly date offset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    /// Appointment ID
    pub id: String,
    /// Booked patient ID
    pub patient_id: String,
    /// Patient name snapshot
    pub patient_name: String,
    /// Booked consultant ID
    pub consultant_id: String,
    /// Consultant name snapshot
    pub consultant_name: String,
    /// Appointment date
    pub date: NaiveDate,
    /// Slot start, "HH:MM"
    pub start_time: String,
    /// Slot end, "HH:MM"
    pub end_time: String,
    /// Position within the plan, 1-based
    pub sitting_number: u32,
    /// Total sittings in the plan
    pub total_sittings: u32,
    /// Booking notes
    pub notes: String,
}

/// A booking request for one or more weekly sittings.
#[derive(Debug, Clone, PartialEq)]
pub struct SittingPlan {
    pub patient_id: String,
    pub consultant_id: String,
    /// Date of the first sitting
    pub first_date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    /// Number of sittings to book, one per week
    pub total_sittings: u32,
    pub notes: String,
}

impl SittingPlan {
    /// Expand the plan into its appointment rows: sitting i lands exactly
    /// 7 * (i - 1) days after the first date, at the same time of day,
    /// numbered i of N. `None` when a sitting would fall outside the
    /// representable date range.
    pub fn materialize(&self, patient_name: &str, consultant_name: &str) -> Option<Vec<Appointment>> {
        (1..=self.total_sittings)
            .map(|i| {
                let date = self
                    .first_date
                    .checked_add_days(Days::new(7 * u64::from(i - 1)))?;
                Some(Appointment {
                    id: uuid::Uuid::new_v4().to_string(),
                    patient_id: self.patient_id.clone(),
                    patient_name: patient_name.to_string(),
                    consultant_id: self.consultant_id.clone(),
                    consultant_name: consultant_name.to_string(),
                    date,
                    start_time: self.start_time.clone(),
                    end_time: self.end_time.clone(),
                    sitting_number: i,
                    total_sittings: self.total_sittings,
                    notes: self.notes.clone(),
                })
            })
            .collect()
    }
}
