//! Domain mutators over the clinic aggregate.
//!
//! Every operation follows the same shape: load the full aggregate from
//! the store, apply exactly one change, persist the full aggregate, and
//! return it. Failed operations leave the stored document untouched.

use thiserror::Error;
use tracing::debug;

use crate::models::{
    Appointment, ClinicData, Consultant, EntryDraft, Patient, SettingsPatch, SittingPlan,
};
use crate::store::{self, backup, ClinicStore, StoreError, StoreResult};

/// Errors surfaced by clinic operations.
#[derive(Error, Debug)]
pub enum ClinicError {
    #[error("patient case sheet not found: {0}")]
    NotFound(String),

    #[error("case sheet is locked; unlock it to add sittings")]
    Locked,

    #[error("this procedure has already been logged for this patient on this date")]
    DuplicateEntry,

    #[error("sitting plan extends beyond the supported date range")]
    PlanOutOfRange,

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type ClinicResult<T> = Result<T, ClinicError>;

/// The clinic service: one mutator per user action, all going through
/// the injected storage port.
pub struct Clinic<S: ClinicStore> {
    store: S,
}

impl<S: ClinicStore> Clinic<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the current aggregate, seeding defaults on first use.
    pub fn data(&self) -> StoreResult<ClinicData> {
        store::load(&self.store)
    }

    /// Replace the stored aggregate with the seed dataset. Only called
    /// after the user confirms recovery from a corrupt document.
    pub fn reset_to_seed(&self) -> StoreResult<ClinicData> {
        store::reset_to_seed(&self.store)
    }

    // -- case sheets ------------------------------------------------------

    /// Register a new patient with an empty case sheet.
    pub fn add_patient(&self, patient: Patient) -> ClinicResult<ClinicData> {
        let mut data = self.data()?;
        debug!(patient = %patient.name, "registering patient");
        data.patients.push(patient);
        store::save(&self.store, &data)?;
        Ok(data)
    }

    /// Log a treatment sitting against a patient's case sheet.
    ///
    /// Rejected when the patient is missing, the case sheet is locked,
    /// or an entry with the same (date, procedure, consultant) already
    /// exists for that patient.
    pub fn add_entry(&self, patient_id: &str, draft: EntryDraft) -> ClinicResult<ClinicData> {
        let mut data = self.data()?;
        let patient = data
            .find_patient_mut(patient_id)
            .ok_or_else(|| ClinicError::NotFound(patient_id.to_string()))?;

        if patient.locked {
            return Err(ClinicError::Locked);
        }
        if patient.has_duplicate(draft.date, &draft.procedure, &draft.consultant) {
            return Err(ClinicError::DuplicateEntry);
        }

        debug!(patient = %patient.name, procedure = %draft.procedure, "logging sitting");
        patient.records.push(draft.into_entry());
        store::save(&self.store, &data)?;
        Ok(data)
    }

    /// Flip a patient's lock flag. A missing patient is a no-op, matching
    /// the original behavior.
    pub fn toggle_patient_lock(&self, patient_id: &str) -> ClinicResult<ClinicData> {
        let mut data = self.data()?;
        if let Some(patient) = data.find_patient_mut(patient_id) {
            patient.locked = !patient.locked;
            debug!(patient = %patient.name, locked = patient.locked, "case sheet lock toggled");
            store::save(&self.store, &data)?;
        }
        Ok(data)
    }

    // -- consultants ------------------------------------------------------

    pub fn add_consultant(&self, consultant: Consultant) -> ClinicResult<ClinicData> {
        let mut data = self.data()?;
        data.consultants.push(consultant);
        store::save(&self.store, &data)?;
        Ok(data)
    }

    /// Remove a consultant and every appointment booked with them.
    /// Historical entries reference consultants by name and stay intact.
    pub fn delete_consultant(&self, consultant_id: &str) -> ClinicResult<ClinicData> {
        let mut data = self.data()?;
        let before = data.appointments.len();
        data.appointments.retain(|a| a.consultant_id != consultant_id);
        data.consultants.retain(|c| c.id != consultant_id);
        debug!(
            consultant_id,
            cascaded = before - data.appointments.len(),
            "consultant removed"
        );
        store::save(&self.store, &data)?;
        Ok(data)
    }

    // -- appointments -----------------------------------------------------

    /// Book a plan of weekly sittings. The referenced patient and
    /// consultant must both exist at booking time; their names are
    /// snapshotted onto every row.
    pub fn book_sitting_plan(&self, plan: SittingPlan) -> ClinicResult<ClinicData> {
        let mut data = self.data()?;
        let patient_name = data
            .find_patient(&plan.patient_id)
            .map(|p| p.name.clone())
            .ok_or_else(|| ClinicError::NotFound(plan.patient_id.clone()))?;
        let consultant_name = data
            .find_consultant(&plan.consultant_id)
            .map(|c| c.name.clone())
            .ok_or_else(|| ClinicError::NotFound(plan.consultant_id.clone()))?;

        let mut rows = plan
            .materialize(&patient_name, &consultant_name)
            .ok_or(ClinicError::PlanOutOfRange)?;
        debug!(patient = %patient_name, sittings = rows.len(), "sitting plan booked");
        data.appointments.append(&mut rows);
        store::save(&self.store, &data)?;
        Ok(data)
    }

    pub fn add_appointment(&self, appointment: Appointment) -> ClinicResult<ClinicData> {
        let mut data = self.data()?;
        data.appointments.push(appointment);
        store::save(&self.store, &data)?;
        Ok(data)
    }

    pub fn delete_appointment(&self, appointment_id: &str) -> ClinicResult<ClinicData> {
        let mut data = self.data()?;
        data.appointments.retain(|a| a.id != appointment_id);
        store::save(&self.store, &data)?;
        Ok(data)
    }

    // -- settings & access ------------------------------------------------

    /// Merge a partial settings update.
    pub fn update_settings(&self, patch: SettingsPatch) -> ClinicResult<ClinicData> {
        let mut data = self.data()?;
        data.settings.apply(patch);
        store::save(&self.store, &data)?;
        Ok(data)
    }

    /// Check a PIN against the stored admin PIN.
    pub fn verify_admin_pin(&self, pin: &str) -> ClinicResult<bool> {
        let data = self.data()?;
        Ok(data.settings.admin_pin == pin)
    }

    /// Check an email against the recovery email, case-insensitively.
    pub fn verify_recovery_email(&self, email: &str) -> ClinicResult<bool> {
        let data = self.data()?;
        Ok(data.settings.recovery_email.eq_ignore_ascii_case(email))
    }

    // -- backup -----------------------------------------------------------

    /// Export the current aggregate as a backup document.
    pub fn export_backup(&self) -> ClinicResult<String> {
        let data = self.data()?;
        Ok(backup::export_json(&data)?)
    }

    /// Import a backup document, replacing the stored aggregate.
    pub fn import_backup(&self, content: &str) -> ClinicResult<ClinicData> {
        Ok(backup::import_json(&self.store, content)?)
    }
}
