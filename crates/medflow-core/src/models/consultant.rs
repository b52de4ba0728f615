//! Consultant directory and declared availability.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Display color for a consultant, drawn from a fixed palette.
///
/// The rendering layer maps each tag to its own styling; the core only
/// guarantees the tag is one of a known set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Blue,
    Emerald,
    Purple,
    Amber,
    Rose,
    Slate,
}

/// A consultant in the practice directory.
///
/// Entries and appointments reference consultants by id/name snapshot;
/// there is no referential integrity beyond filtering on read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Consultant {
    /// Consultant ID
    pub id: String,
    /// Display name
    pub name: String,
    /// Specialty line (e.g. "MDS - Endodontics")
    pub specialty: String,
    /// Calendar display color
    pub color: ColorTag,
}

impl Consultant {
    /// Add a consultant to the directory.
    pub fn new(name: String, specialty: String, color: ColorTag) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            specialty,
            color,
        }
    }
}

/// Declared per-consultant availability window.
///
/// Informational only: bookings are never validated against it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkingHours {
    /// Consultant this window belongs to
    pub consultant_id: String,
    /// Days the consultant is available
    pub days: Vec<Weekday>,
    /// Start of day, "HH:MM"
    pub start: String,
    /// End of day, "HH:MM"
    pub end: String,
}

impl WorkingHours {
    /// Monday-through-Saturday default window.
    pub fn default_for(consultant_id: &str) -> Self {
        Self {
            consultant_id: consultant_id.to_string(),
            days: vec![
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
                Weekday::Sat,
            ],
            start: "10:00".into(),
            end: "19:00".into(),
        }
    }
}
