//! The clinical context slice attached to practice queries.

use serde::{Deserialize, Serialize};

/// One treatment record in delegate-facing form.
///
/// Field names here are the wire contract the practice-manager prompt
/// was written against; callers map their case-sheet entries into this
/// shape before querying.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContextRecord {
    /// Sitting date, ISO `YYYY-MM-DD`
    pub date: String,
    /// Patient name
    pub patient: String,
    /// Consultant name
    pub consultant: String,
    /// Clinical impression / diagnosis
    pub impression: String,
    /// Procedure label
    pub procedure: String,
    /// Free-text clinical notes
    pub clinical_notes: String,
    /// Session fee in INR
    pub fee_inr: Option<f64>,
}

/// Serialize records for embedding into a prompt.
pub fn context_json(records: &[ContextRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(records)
}
