//! The clinic aggregate root and its built-in seed dataset.

use serde::{Deserialize, Serialize};

use super::appointment::Appointment;
use super::consultant::{ColorTag, Consultant, WorkingHours};
use super::patient::{EntryStatus, Patient, PatientEntry};
use super::settings::PracticeSettings;

/// Procedure labels offered by the practice.
pub const PROCEDURES: &[&str] = &[
    "Dental Consultation",
    "RCT (Root Canal Treatment)",
    "Scaling & Polishing",
    "Dental Filling / Restoration",
    "Physiotherapy Session",
    "Manual Therapy & Mobilization",
    "Dry Needling / TENS",
    "Post-Op Rehabilitation",
    "Tooth Extraction",
    "Orthodontic Adjustment",
];

/// The single root object holding all clinic state.
///
/// Persisted and rewritten wholesale on every mutation. Missing sections
/// in a stored document are backfilled with defaults on load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClinicData {
    #[serde(default)]
    pub patients: Vec<Patient>,
    #[serde(default = "seed_consultants")]
    pub consultants: Vec<Consultant>,
    #[serde(default)]
    pub appointments: Vec<Appointment>,
    #[serde(default = "seed_working_hours")]
    pub working_hours: Vec<WorkingHours>,
    #[serde(default)]
    pub settings: PracticeSettings,
}

impl ClinicData {
    /// The built-in default dataset used when no document exists yet.
    pub fn seed() -> Self {
        Self {
            patients: vec![seed_patient()],
            consultants: seed_consultants(),
            appointments: Vec::new(),
            working_hours: seed_working_hours(),
            settings: PracticeSettings::default(),
        }
    }

    pub fn find_patient(&self, id: &str) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == id)
    }

    pub fn find_patient_mut(&mut self, id: &str) -> Option<&mut Patient> {
        self.patients.iter_mut().find(|p| p.id == id)
    }

    pub fn find_consultant(&self, id: &str) -> Option<&Consultant> {
        self.consultants.iter().find(|c| c.id == id)
    }
}

fn seed_consultants() -> Vec<Consultant> {
    vec![
        Consultant {
            id: "1".into(),
            name: "Dr. Sameer Verma".into(),
            specialty: "MDS - Endodontics".into(),
            color: ColorTag::Blue,
        },
        Consultant {
            id: "2".into(),
            name: "Dr. Anjali Mehta".into(),
            specialty: "BPT - Physiotherapist".into(),
            color: ColorTag::Emerald,
        },
        Consultant {
            id: "3".into(),
            name: "Dr. Karan Shah".into(),
            specialty: "MDS - Orthodontics".into(),
            color: ColorTag::Purple,
        },
        Consultant {
            id: "4".into(),
            name: "Dr. Ritu Hegde".into(),
            specialty: "MPT - Sports Rehab".into(),
            color: ColorTag::Amber,
        },
    ]
}

fn seed_working_hours() -> Vec<WorkingHours> {
    seed_consultants()
        .iter()
        .map(|c| WorkingHours::default_for(&c.id))
        .collect()
}

fn seed_patient() -> Patient {
    Patient {
        id: "p1".into(),
        name: "Rajesh Khanna".into(),
        phone: "+91 98200-12345".into(),
        email: "rajesh.k@example.in".into(),
        records: vec![PatientEntry {
            id: "e1".into(),
            date: "2024-03-01".parse().expect("valid seed date"),
            patient_name: "Rajesh Khanna".into(),
            consultant: "Dr. Sameer Verma".into(),
            procedure: "RCT (Root Canal Treatment)".into(),
            diagnosis: "Acute Irreversible Pulpitis".into(),
            notes: "First sitting completed. Access opening done. BMP initiated.".into(),
            fee: Some(2500.0),
            status: EntryStatus::Completed,
        }],
        locked: false,
    }
}
