//! Backup export and import.
//!
//! The backup file format is the persisted document itself, pretty
//! printed, with a date-stamped filename. Import requires the `settings`
//! and `patients` sections to be present and never touches the stored
//! document on failure.

use chrono::NaiveDate;
use tracing::debug;

use super::{save, ClinicStore, StoreError, StoreResult};
use crate::models::ClinicData;

/// Serialize the aggregate as a pretty-printed backup document.
pub fn export_json(data: &ClinicData) -> StoreResult<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Date-stamped filename for a backup taken on `date`.
pub fn backup_file_name(date: NaiveDate) -> String {
    format!("medflow_backup_{}.json", date.format("%Y-%m-%d"))
}

/// Validate and import a backup document, replacing the stored aggregate.
///
/// Fails with [`StoreError::InvalidBackup`] when the content is not JSON
/// or lacks the required `settings`/`patients` sections; the previously
/// stored document is left unchanged in every failure case.
pub fn import_json<S: ClinicStore>(store: &S, content: &str) -> StoreResult<ClinicData> {
    let value: serde_json::Value = serde_json::from_str(content)
        .map_err(|e| StoreError::InvalidBackup(format!("failed to read backup file: {e}")))?;

    let object = value
        .as_object()
        .ok_or_else(|| StoreError::InvalidBackup("backup is not a JSON object".into()))?;
    for required in ["settings", "patients"] {
        if !object.contains_key(required) {
            return Err(StoreError::InvalidBackup(format!(
                "backup is missing the required `{required}` section"
            )));
        }
    }

    let data: ClinicData = serde_json::from_value(value)
        .map_err(|e| StoreError::InvalidBackup(format!("backup structure invalid: {e}")))?;

    save(store, &data)?;
    debug!(
        patients = data.patients.len(),
        appointments = data.appointments.len(),
        "backup imported"
    );
    Ok(data)
}
