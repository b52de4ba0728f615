//! Property tests for sitting-plan expansion.

use chrono::{Datelike, Days, NaiveDate};
use medflow_core::SittingPlan;
use proptest::prelude::*;

fn make_plan(first_date: NaiveDate, total_sittings: u32) -> SittingPlan {
    SittingPlan {
        patient_id: "p-1".into(),
        consultant_id: "c-1".into(),
        first_date,
        start_time: "10:00".into(),
        end_time: "10:30".into(),
        total_sittings,
        notes: String::new(),
    }
}

proptest! {
    #[test]
    fn plan_expands_to_weekly_rows(
        days_from_epoch in 0u64..36_500,
        total_sittings in 1u32..=24,
    ) {
        let first_date = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap() + Days::new(days_from_epoch);
        let plan = make_plan(first_date, total_sittings);
        let rows = plan.materialize("Meera Iyer", "Dr. Anjali Mehta").unwrap();

        prop_assert_eq!(rows.len(), total_sittings as usize);
        for (i, row) in rows.iter().enumerate() {
            // Exactly 7 days after the previous sitting
            prop_assert_eq!(row.date, first_date + Days::new(7 * i as u64));
            // Weekly offsets never change the day of the week
            prop_assert_eq!(row.date.weekday(), first_date.weekday());
            prop_assert_eq!(row.sitting_number, (i + 1) as u32);
            prop_assert_eq!(row.total_sittings, total_sittings);
            prop_assert_eq!(row.start_time.as_str(), "10:00");
            prop_assert_eq!(row.end_time.as_str(), "10:30");
        }
    }

    #[test]
    fn plan_rows_have_unique_ids(total_sittings in 2u32..=12) {
        let first_date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let rows = make_plan(first_date, total_sittings)
            .materialize("Meera Iyer", "Dr. Anjali Mehta")
            .unwrap();
        let mut ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), rows.len());
    }
}
