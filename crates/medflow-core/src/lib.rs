//! MedFlow Core Library
//!
//! Local-first clinic management core: patient case sheets, consultant
//! directory, appointment scheduling, activity log, and revenue views.
//!
//! # Architecture
//!
//! ```text
//! UI action ──▶ Clinic mutator ──▶ ClinicStore (read-modify-write the
//!                                    whole aggregate document)
//!                    │
//!                    ▼
//!              updated ClinicData ──▶ views (log / reports / calendar)
//!                                       recomputed per render
//! ```
//!
//! # Core Principle
//!
//! All state lives in one JSON aggregate behind an injected storage
//! port. Mutators are synchronous: load, apply one change, persist,
//! return. A corrupt stored document is surfaced as an error; recovery
//! to the seed dataset is an explicit, user-confirmed call.
//!
//! # Modules
//!
//! - [`models`]: domain types (Patient, Consultant, Appointment, etc.)
//! - [`store`]: storage port, JSON document persistence, backup import/export
//! - [`clinic`]: domain mutators over the aggregate
//! - [`views`]: derived projections (master log, reports, calendar buckets)

pub mod clinic;
pub mod models;
pub mod store;
pub mod views;

// Re-export commonly used types
pub use clinic::{Clinic, ClinicError, ClinicResult};
pub use models::{
    Appointment, ClinicData, ColorTag, Consultant, EntryDraft, EntryStatus, Patient,
    PatientEntry, PracticeSettings, SettingsPatch, SittingPlan, WorkingHours,
};
pub use store::{ClinicStore, JsonFileStore, MemoryStore, StoreError, StoreResult};
