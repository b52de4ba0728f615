//! Practice configuration.

use serde::{Deserialize, Serialize};

/// Practice-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PracticeSettings {
    /// Clinic display name
    pub clinic_name: String,
    /// 4-digit admin PIN gating the admin role
    pub admin_pin: String,
    /// Email accepted by the PIN recovery flow
    pub recovery_email: String,
}

impl Default for PracticeSettings {
    fn default() -> Self {
        Self {
            clinic_name: "Smile & Spine Dental-Physio Centre".into(),
            admin_pin: "1234".into(),
            recovery_email: "admin@smileandspine.in".into(),
        }
    }
}

/// Partial settings update; `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsPatch {
    pub clinic_name: Option<String>,
    pub admin_pin: Option<String>,
    pub recovery_email: Option<String>,
}

impl PracticeSettings {
    /// Apply a partial update in place.
    pub fn apply(&mut self, patch: SettingsPatch) {
        if let Some(clinic_name) = patch.clinic_name {
            self.clinic_name = clinic_name;
        }
        if let Some(admin_pin) = patch.admin_pin {
            self.admin_pin = admin_pin;
        }
        if let Some(recovery_email) = patch.recovery_email {
            self.recovery_email = recovery_email;
        }
    }
}
