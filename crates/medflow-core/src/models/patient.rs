//! Patient case sheets and treatment entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Status of a treatment sitting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EntryStatus {
    Completed,
    Pending,
    #[serde(rename = "Follow-up")]
    FollowUp,
}

impl std::fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Completed => write!(f, "Completed"),
            Self::Pending => write!(f, "Pending"),
            Self::FollowUp => write!(f, "Follow-up"),
        }
    }
}

/// One treatment sitting recorded against a patient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientEntry {
    /// Entry ID
    pub id: String,
    /// Date of the sitting
    pub date: NaiveDate,
    /// Patient name, denormalized for log and export views
    pub patient_name: String,
    /// Consultant name (by-name reference, survives consultant deletion)
    pub consultant: String,
    /// Procedure label
    pub procedure: String,
    /// Clinical impression / diagnosis
    pub diagnosis: String,
    /// Free-text clinical notes
    pub notes: String,
    /// Session fee in INR
    pub fee: Option<f64>,
    /// Sitting status
    pub status: EntryStatus,
}

/// Fields supplied when logging a new sitting; the entry ID is assigned
/// by the mutator.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryDraft {
    pub date: NaiveDate,
    pub patient_name: String,
    pub consultant: String,
    pub procedure: String,
    pub diagnosis: String,
    pub notes: String,
    pub fee: Option<f64>,
    pub status: EntryStatus,
}

impl EntryDraft {
    /// Materialize the draft into an entry with a fresh ID.
    pub fn into_entry(self) -> PatientEntry {
        PatientEntry {
            id: uuid::Uuid::new_v4().to_string(),
            date: self.date,
            patient_name: self.patient_name,
            consultant: self.consultant,
            procedure: self.procedure,
            diagnosis: self.diagnosis,
            notes: self.notes,
            fee: self.fee,
            status: self.status,
        }
    }
}

/// A patient case sheet with its owned treatment records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    /// Patient ID
    pub id: String,
    /// Full name
    pub name: String,
    /// Contact phone
    pub phone: String,
    /// Contact email
    pub email: String,
    /// Treatment entries, owned exclusively by this patient
    #[serde(default)]
    pub records: Vec<PatientEntry>,
    /// Locked case sheets reject new entries until unlocked
    #[serde(default)]
    pub locked: bool,
}

impl Patient {
    /// Register a new patient with an empty, unlocked case sheet.
    pub fn new(name: String, phone: String, email: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            phone,
            email,
            records: Vec::new(),
            locked: false,
        }
    }

    /// Check whether a sitting with the same (date, procedure, consultant)
    /// has already been logged. Uniqueness is only enforced at creation
    /// time; existing duplicates are left alone.
    pub fn has_duplicate(&self, date: NaiveDate, procedure: &str, consultant: &str) -> bool {
        self.records
            .iter()
            .any(|r| r.date == date && r.procedure == procedure && r.consultant == consultant)
    }
}
