//! Scenario tests for the clinic mutators.

use chrono::NaiveDate;
use medflow_core::{
    Clinic, ClinicError, ColorTag, Consultant, EntryDraft, EntryStatus, MemoryStore, Patient,
    SittingPlan, StoreError,
};

fn setup_clinic() -> Clinic<MemoryStore> {
    Clinic::new(MemoryStore::new())
}

fn make_draft(date: &str, procedure: &str, consultant: &str) -> EntryDraft {
    EntryDraft {
        date: date.parse().unwrap(),
        patient_name: "Meera Iyer".into(),
        consultant: consultant.into(),
        procedure: procedure.into(),
        diagnosis: "Chronic lower back pain".into(),
        notes: "Session tolerated well.".into(),
        fee: Some(600.0),
        status: EntryStatus::Completed,
    }
}

fn register_patient(clinic: &Clinic<MemoryStore>) -> String {
    let patient = Patient::new("Meera Iyer".into(), "+91 98200-55555".into(), "meera@example.in".into());
    let id = patient.id.clone();
    clinic.add_patient(patient).unwrap();
    id
}

#[test]
fn duplicate_entry_rejected_and_records_unchanged() {
    let clinic = setup_clinic();
    let patient_id = register_patient(&clinic);

    clinic
        .add_entry(&patient_id, make_draft("2024-03-04", "Physiotherapy Session", "Dr. Anjali Mehta"))
        .unwrap();

    let before = clinic.data().unwrap();
    let err = clinic
        .add_entry(&patient_id, make_draft("2024-03-04", "Physiotherapy Session", "Dr. Anjali Mehta"))
        .unwrap_err();

    assert!(matches!(err, ClinicError::DuplicateEntry));
    assert_eq!(clinic.data().unwrap(), before);
    assert_eq!(before.find_patient(&patient_id).unwrap().records.len(), 1);
}

#[test]
fn same_procedure_different_consultant_is_not_a_duplicate() {
    let clinic = setup_clinic();
    let patient_id = register_patient(&clinic);

    clinic
        .add_entry(&patient_id, make_draft("2024-03-04", "Physiotherapy Session", "Dr. Anjali Mehta"))
        .unwrap();
    let data = clinic
        .add_entry(&patient_id, make_draft("2024-03-04", "Physiotherapy Session", "Dr. Ritu Hegde"))
        .unwrap();

    assert_eq!(data.find_patient(&patient_id).unwrap().records.len(), 2);
}

#[test]
fn locked_case_sheet_rejects_entries_until_unlocked() {
    let clinic = setup_clinic();
    let patient_id = register_patient(&clinic);

    let data = clinic.toggle_patient_lock(&patient_id).unwrap();
    assert!(data.find_patient(&patient_id).unwrap().locked);

    let err = clinic
        .add_entry(&patient_id, make_draft("2024-03-04", "Physiotherapy Session", "Dr. Anjali Mehta"))
        .unwrap_err();
    assert!(matches!(err, ClinicError::Locked));

    // Unlocking permits the very same call
    clinic.toggle_patient_lock(&patient_id).unwrap();
    let data = clinic
        .add_entry(&patient_id, make_draft("2024-03-04", "Physiotherapy Session", "Dr. Anjali Mehta"))
        .unwrap();
    assert_eq!(data.find_patient(&patient_id).unwrap().records.len(), 1);
}

#[test]
fn export_then_import_reproduces_the_aggregate() {
    let clinic = setup_clinic();
    let patient_id = register_patient(&clinic);
    clinic
        .add_entry(&patient_id, make_draft("2024-03-04", "Dry Needling / TENS", "Dr. Ritu Hegde"))
        .unwrap();
    clinic
        .book_sitting_plan(SittingPlan {
            patient_id: patient_id.clone(),
            consultant_id: "4".into(),
            first_date: "2024-03-11".parse().unwrap(),
            start_time: "16:00".into(),
            end_time: "16:45".into(),
            total_sittings: 3,
            notes: String::new(),
        })
        .unwrap();

    let original = clinic.data().unwrap();
    let exported = clinic.export_backup().unwrap();

    // Import into a fresh clinic
    let other = setup_clinic();
    let imported = other.import_backup(&exported).unwrap();
    assert_eq!(imported, original);
    assert_eq!(other.data().unwrap(), original);
}

#[test]
fn import_of_malformed_backup_preserves_existing_state() {
    let clinic = setup_clinic();
    let patient_id = register_patient(&clinic);
    let before = clinic.data().unwrap();

    for bad in [
        "not json at all",
        r#"{"settings": {"clinic_name":"X","admin_pin":"1","recovery_email":"a@b"}}"#,
        r#"{"patients": []}"#,
    ] {
        let err = clinic.import_backup(bad).unwrap_err();
        assert!(matches!(err, ClinicError::Store(StoreError::InvalidBackup(_))));
        assert_eq!(clinic.data().unwrap(), before);
    }

    // The failed imports must not have touched the registered patient
    assert!(clinic.data().unwrap().find_patient(&patient_id).is_some());
}

#[test]
fn deleting_a_consultant_cascades_to_appointments_only() {
    let clinic = setup_clinic();
    let patient_id = register_patient(&clinic);

    let consultant = Consultant::new("Dr. Farida Khan".into(), "MDS - Periodontics".into(), ColorTag::Rose);
    let consultant_id = consultant.id.clone();
    clinic.add_consultant(consultant).unwrap();

    // Historical entry naming the consultant, plus bookings with them
    clinic
        .add_entry(&patient_id, make_draft("2024-03-04", "Scaling & Polishing", "Dr. Farida Khan"))
        .unwrap();
    clinic
        .book_sitting_plan(SittingPlan {
            patient_id: patient_id.clone(),
            consultant_id: consultant_id.clone(),
            first_date: "2024-03-11".parse().unwrap(),
            start_time: "10:00".into(),
            end_time: "10:30".into(),
            total_sittings: 2,
            notes: String::new(),
        })
        .unwrap();
    // Booking with a different consultant survives the cascade
    clinic
        .book_sitting_plan(SittingPlan {
            patient_id: patient_id.clone(),
            consultant_id: "1".into(),
            first_date: "2024-03-12".parse().unwrap(),
            start_time: "11:00".into(),
            end_time: "11:30".into(),
            total_sittings: 1,
            notes: String::new(),
        })
        .unwrap();

    let data = clinic.delete_consultant(&consultant_id).unwrap();

    assert!(data.find_consultant(&consultant_id).is_none());
    assert!(data.appointments.iter().all(|a| a.consultant_id != consultant_id));
    assert_eq!(data.appointments.len(), 1);

    // Entries reference consultants by name and stay intact
    let records = &data.find_patient(&patient_id).unwrap().records;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].consultant, "Dr. Farida Khan");
}

#[test]
fn sitting_plan_books_weekly_numbered_rows() {
    let clinic = setup_clinic();
    let patient_id = register_patient(&clinic);

    let data = clinic
        .book_sitting_plan(SittingPlan {
            patient_id: patient_id.clone(),
            consultant_id: "2".into(),
            first_date: "2024-03-01".parse().unwrap(),
            start_time: "10:00".into(),
            end_time: "10:30".into(),
            total_sittings: 5,
            notes: "Rehab block".into(),
        })
        .unwrap();

    assert_eq!(data.appointments.len(), 5);
    for (i, app) in data.appointments.iter().enumerate() {
        let expected = "2024-03-01".parse::<NaiveDate>().unwrap() + chrono::Days::new(7 * i as u64);
        assert_eq!(app.date, expected);
        assert_eq!(app.sitting_number, (i + 1) as u32);
        assert_eq!(app.total_sittings, 5);
        assert_eq!(app.patient_name, "Meera Iyer");
        assert_eq!(app.consultant_name, "Dr. Anjali Mehta");
    }
}

#[test]
fn booking_against_unknown_ids_fails() {
    let clinic = setup_clinic();
    let patient_id = register_patient(&clinic);

    let plan = SittingPlan {
        patient_id: "ghost".into(),
        consultant_id: "2".into(),
        first_date: "2024-03-01".parse().unwrap(),
        start_time: "10:00".into(),
        end_time: "10:30".into(),
        total_sittings: 1,
        notes: String::new(),
    };
    assert!(matches!(clinic.book_sitting_plan(plan).unwrap_err(), ClinicError::NotFound(_)));

    let plan = SittingPlan {
        patient_id,
        consultant_id: "ghost".into(),
        first_date: "2024-03-01".parse().unwrap(),
        start_time: "10:00".into(),
        end_time: "10:30".into(),
        total_sittings: 1,
        notes: String::new(),
    };
    assert!(matches!(clinic.book_sitting_plan(plan).unwrap_err(), ClinicError::NotFound(_)));
    assert!(clinic.data().unwrap().appointments.is_empty());
}

#[test]
fn plan_past_the_date_range_is_rejected_without_booking() {
    let clinic = setup_clinic();
    let patient_id = register_patient(&clinic);

    let err = clinic
        .book_sitting_plan(SittingPlan {
            patient_id,
            consultant_id: "2".into(),
            first_date: NaiveDate::MAX,
            start_time: "10:00".into(),
            end_time: "10:30".into(),
            total_sittings: 2,
            notes: String::new(),
        })
        .unwrap_err();

    assert!(matches!(err, ClinicError::PlanOutOfRange));
    assert!(clinic.data().unwrap().appointments.is_empty());
}

#[test]
fn delete_appointment_removes_one_row() {
    let clinic = setup_clinic();
    let patient_id = register_patient(&clinic);
    let data = clinic
        .book_sitting_plan(SittingPlan {
            patient_id,
            consultant_id: "3".into(),
            first_date: "2024-03-01".parse().unwrap(),
            start_time: "12:00".into(),
            end_time: "12:30".into(),
            total_sittings: 2,
            notes: String::new(),
        })
        .unwrap();

    let doomed = data.appointments[0].id.clone();
    let data = clinic.delete_appointment(&doomed).unwrap();
    assert_eq!(data.appointments.len(), 1);
    assert_ne!(data.appointments[0].id, doomed);
}
