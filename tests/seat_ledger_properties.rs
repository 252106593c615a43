//! Property tests for the seat ledger invariant.
//!
//! For every school, `occupied <= total` must hold after any sequence of
//! debits and administrative capacity edits, successful or not.

use proptest::prelude::*;

use central_cidadao::domain::foundation::{EducationLevel, SchoolId};
use central_cidadao::domain::school::{School, SeatStatus};

#[derive(Debug, Clone)]
enum LedgerOp {
    Debit,
    SetTotal(u32),
}

fn ledger_op() -> impl Strategy<Value = LedgerOp> {
    prop_oneof![
        3 => Just(LedgerOp::Debit),
        1 => (0u32..50).prop_map(LedgerOp::SetTotal),
    ]
}

proptest! {
    #[test]
    fn occupied_never_exceeds_total(
        initial_total in 0u32..50,
        ops in proptest::collection::vec(ledger_op(), 0..200),
    ) {
        let mut school = School::new(
            SchoolId::new(),
            "EMEF Propriedade".to_string(),
            EducationLevel::FundamentalI,
            initial_total,
        )
        .unwrap();

        for op in ops {
            match op {
                LedgerOp::Debit => {
                    let before = school.occupied_seats();
                    match school.debit_seat() {
                        Ok(()) => prop_assert_eq!(school.occupied_seats(), before + 1),
                        Err(_) => prop_assert_eq!(school.occupied_seats(), before),
                    }
                }
                LedgerOp::SetTotal(total) => {
                    // rejected edits must leave the counters untouched
                    let before = (school.total_seats(), school.occupied_seats());
                    if school.set_total_seats(total).is_err() {
                        prop_assert_eq!((school.total_seats(), school.occupied_seats()), before);
                    }
                }
            }
            prop_assert!(school.occupied_seats() <= school.total_seats());
        }
    }

    #[test]
    fn classification_is_consistent_with_counters(
        total in 0u32..100,
        occupied_seed in 0u32..100,
    ) {
        let occupied = occupied_seed.min(total);
        let status = SeatStatus::classify(total, occupied);
        let available = total - occupied;

        match status {
            SeatStatus::Full => prop_assert_eq!(available, 0),
            SeatStatus::Limited => {
                prop_assert!(available > 0);
                prop_assert!(f64::from(occupied) / f64::from(total) >= 0.8);
            }
            SeatStatus::Open => {
                prop_assert!(available > 0);
                prop_assert!(f64::from(occupied) / f64::from(total) < 0.8);
            }
        }
    }
}
