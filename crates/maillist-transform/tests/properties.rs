//! Property tests for the filter and dedupe invariants.

use std::collections::BTreeSet;

use proptest::prelude::*;

use maillist_model::{CellValue, Record, Table};
use maillist_transform::{RecordNormalizer, is_blocked_email};

fn email_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // Plausible addresses, some colliding, some upper-cased.
        "[a-c]{1,2}@(x|y)\\.com",
        "[A-C]{1,2}@X\\.com",
        // Placeholder addresses the filter must drop.
        "(teste|cliente|nao|semem|pacie)[a-z]{0,3}@x\\.com",
        "0{1,4}@x\\.com",
        // Missing.
        Just(String::new()),
    ]
}

fn table_strategy() -> impl Strategy<Value = Table> {
    prop::collection::vec((email_strategy(), "[a-z ]{0,12}"), 0..40).prop_map(|rows| {
        let mut table = Table::new(vec!["EmailPaciente".to_string(), "Paciente".to_string()]);
        for (email, name) in rows {
            table
                .push_row(Record {
                    cells: vec![CellValue::from_raw(&email), CellValue::from_raw(&name)],
                })
                .unwrap();
        }
        table
    })
}

proptest! {
    #[test]
    fn survivors_have_valid_distinct_emails(input in table_strategy()) {
        let rows_in = input.row_count();
        let (output, report) = RecordNormalizer::new()
            .process_with_report(input)
            .unwrap();

        let mut seen = BTreeSet::new();
        for row in 0..output.row_count() {
            let cell = output.cell(row, "EmailAddress").unwrap();
            let address = cell.as_text().expect("surviving email is never missing");
            prop_assert!(!is_blocked_email(address));
            prop_assert!(seen.insert(address.to_string()), "duplicate {address}");
        }

        prop_assert_eq!(report.rows_in, rows_in);
        prop_assert_eq!(
            report.rows_out + report.dropped.len(),
            rows_in,
            "every input row is either kept or accounted for"
        );
    }

    #[test]
    fn processing_is_deterministic(input in table_strategy()) {
        let once = RecordNormalizer::new().process(input.clone()).unwrap();
        let twice = RecordNormalizer::new().process(input).unwrap();
        prop_assert_eq!(once, twice);
    }
}
