//! Revenue and performance projections.
//!
//! All functions are pure derivations over entry slices; windows are
//! anchored at a caller-supplied "today" so reports are reproducible.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate};

use crate::models::{ClinicData, PatientEntry};

/// Rolling report window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPeriod {
    /// Last 7 days
    Weekly,
    /// Last 30 days
    Monthly,
}

impl ReportPeriod {
    pub fn days(&self) -> u64 {
        match self {
            Self::Weekly => 7,
            Self::Monthly => 30,
        }
    }
}

/// Aggregated financials over a report window.
#[derive(Debug, Clone, PartialEq)]
pub struct RevenueSummary {
    /// Sum of fees over the window, INR
    pub total_collection: f64,
    /// Number of sittings in the window
    pub sittings: usize,
    /// Percent of sittings marked Completed, rounded
    pub completion_rate: u32,
    /// Mean fee per sitting in the window, INR
    pub average_revenue: f64,
}

/// Headline dashboard counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlineMetrics {
    pub total_patients: usize,
    pub total_sittings: usize,
    /// Sittings dated in the current calendar month
    pub sittings_this_month: usize,
}

/// Entries dated within the rolling window ending at `today` (inclusive
/// cutoff, matching the original filter).
pub fn in_window(entries: &[PatientEntry], period: ReportPeriod, today: NaiveDate) -> Vec<PatientEntry> {
    let cutoff = today - Days::new(period.days());
    entries.iter().filter(|e| e.date >= cutoff).cloned().collect()
}

/// Financial rollup of a window's entries. Entries with no fee count as
/// zero-collection sittings.
pub fn revenue_summary(entries: &[PatientEntry]) -> RevenueSummary {
    let total_collection: f64 = entries.iter().filter_map(|e| e.fee).sum();
    let sittings = entries.len();
    let completed = entries
        .iter()
        .filter(|e| e.status == crate::models::EntryStatus::Completed)
        .count();
    let denominator = sittings.max(1) as f64;

    RevenueSummary {
        total_collection,
        sittings,
        completion_rate: ((completed as f64 / denominator) * 100.0).round() as u32,
        average_revenue: total_collection / denominator,
    }
}

/// Sitting counts per consultant, most active first; ties break on name.
pub fn consultant_counts(entries: &[PatientEntry]) -> Vec<(String, usize)> {
    ranked_counts(entries.iter().map(|e| e.consultant.clone()))
}

/// The `limit` most frequent procedures.
pub fn top_procedures(entries: &[PatientEntry], limit: usize) -> Vec<(String, usize)> {
    let mut ranked = ranked_counts(entries.iter().map(|e| e.procedure.clone()));
    ranked.truncate(limit);
    ranked
}

/// Sittings per day, oldest first (chart series).
pub fn daily_volume(entries: &[PatientEntry]) -> Vec<(NaiveDate, usize)> {
    let mut by_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for entry in entries {
        *by_day.entry(entry.date).or_insert(0) += 1;
    }
    by_day.into_iter().collect()
}

/// Dashboard counters over the whole aggregate.
pub fn headline_metrics(data: &ClinicData, today: NaiveDate) -> HeadlineMetrics {
    let entries: Vec<&PatientEntry> = data.patients.iter().flat_map(|p| p.records.iter()).collect();
    let sittings_this_month = entries
        .iter()
        .filter(|e| e.date.year() == today.year() && e.date.month() == today.month())
        .count();

    HeadlineMetrics {
        total_patients: data.patients.len(),
        total_sittings: entries.len(),
        sittings_this_month,
    }
}

/// Render a window's entries as a billing CSV document.
pub fn entries_csv(entries: &[PatientEntry]) -> String {
    let mut csv = String::new();
    csv.push_str("date,patient_name,consultant,procedure,fee_inr,status\n");
    for entry in entries {
        csv.push_str(&format!(
            "{},{},{},{},{},{}\n",
            entry.date,
            escape_csv(&entry.patient_name),
            escape_csv(&entry.consultant),
            escape_csv(&entry.procedure),
            entry.fee.unwrap_or(0.0),
            entry.status,
        ));
    }
    csv
}

fn ranked_counts<I: Iterator<Item = String>>(keys: I) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for key in keys {
        *counts.entry(key).or_insert(0) += 1;
    }
    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}

/// Escape a string for CSV output.
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
