//! Master activity log: all sittings across all case sheets.

use crate::models::{ClinicData, PatientEntry};

/// Flatten every patient's records into one list, newest date first.
/// Entries on the same date keep their case-sheet order.
pub fn all_entries(data: &ClinicData) -> Vec<PatientEntry> {
    let mut entries: Vec<PatientEntry> = data
        .patients
        .iter()
        .flat_map(|p| p.records.iter().cloned())
        .collect();
    entries.sort_by(|a, b| b.date.cmp(&a.date));
    entries
}

/// The `n` most recent sittings (dashboard table).
pub fn recent(data: &ClinicData, n: usize) -> Vec<PatientEntry> {
    let mut entries = all_entries(data);
    entries.truncate(n);
    entries
}
