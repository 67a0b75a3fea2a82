//! Domain-specific assertion macros for claimparse harnesses.
//!
//! These add context-rich failure messages that make it clear *which* claim
//! or car broke an invariant and what the raw input looked like.

use claim_core::types::{DRIVER_FIO_MISSING, HEAD_FIO_MISSING};
use claim_core::{Car, Claim};

// ---------------------------------------------------------------------------
// Car assertions
// ---------------------------------------------------------------------------

/// Assert that a car carries the given plate and a full driver FIO.
///
/// ```rust
/// assert_car!(car, "А123ВС77", ["Иванов", "Иван", "Иванович"]);
/// ```
#[macro_export]
macro_rules! assert_car {
    ($car:expr, $plate:expr, [$surname:expr, $name:expr, $patronymic:expr]) => {{
        let car: &claim_core::Car = &$car;
        let plate: &str = $plate;
        if car.number != plate {
            panic!(
                "assert_car! failed: plate\n  expected: {:?}\n  actual:   {:?}",
                plate, car.number
            );
        }
        match &car.fio {
            Some(fio) if fio.surname == $surname && fio.name == $name && fio.patronymic == $patronymic => {}
            other => panic!(
                "assert_car! failed: driver of {:?}\n  expected: {} {} {}\n  actual:   {:?}",
                car.number, $surname, $name, $patronymic, other
            ),
        }
        if !car.valid || car.reason.is_some() {
            panic!("assert_car! failed: {:?} should be valid, got {:?}", car.number, car);
        }
    }};
}

/// Assert that a car kept its plate but has no resolvable driver.
#[macro_export]
macro_rules! assert_car_without_driver {
    ($car:expr, $plate:expr) => {{
        let car: &claim_core::Car = &$car;
        let plate: &str = $plate;
        if car.number != plate || car.valid || car.fio.is_some() {
            panic!(
                "assert_car_without_driver! failed:\n  expected plate {:?}, invalid, no FIO\n  actual: {:?}",
                plate, car
            );
        }
        assert_eq!(
            car.reason.as_deref(),
            Some(claim_core::types::DRIVER_FIO_MISSING),
            "assert_car_without_driver! failed: reason of {:?}",
            car.number
        );
    }};
}

pub fn assert_driver_reason(car: &Car) {
    assert_eq!(
        car.reason.as_deref(),
        Some(DRIVER_FIO_MISSING),
        "car {:?} is invalid without the driver reason",
        car.number
    );
}

// ---------------------------------------------------------------------------
// Claim invariants
// ---------------------------------------------------------------------------

/// Check every structural invariant a produced claim must satisfy:
/// validity tracks the head FIO, a reason exists exactly when invalid, plates
/// are compact uppercase, and single-line fields hold no line breaks.
pub fn assert_claim_invariants(claim: &Claim) {
    let ctx = format!("claim {:?} (district {:?})", claim.code, claim.district);

    assert_eq!(
        claim.valid,
        claim.company.head.fio.is_some(),
        "{ctx}: valid must track the head FIO"
    );
    if claim.valid {
        assert_eq!(claim.reason, None, "{ctx}: valid claim carries a reason");
    } else {
        assert_eq!(
            claim.reason.as_deref(),
            Some(HEAD_FIO_MISSING),
            "{ctx}: invalid claim without the head reason"
        );
    }

    for (field, value) in [
        ("activity", &claim.company.activity),
        ("title", &claim.company.title),
        ("address", &claim.company.address),
    ] {
        assert!(!value.contains('\n'), "{ctx}: {field} spans lines: {value:?}");
    }
    assert!(
        claim.company.inn.chars().all(|c| c.is_ascii_digit()),
        "{ctx}: inn {:?} is not digits-only",
        claim.company.inn
    );

    for car in &claim.cars {
        assert!(!car.number.is_empty(), "{ctx}: car without a plate");
        assert!(
            !car.number.chars().any(char::is_whitespace),
            "{ctx}: plate {:?} contains whitespace",
            car.number
        );
        assert!(
            !car.number.chars().any(char::is_lowercase),
            "{ctx}: plate {:?} is not uppercase",
            car.number
        );
        assert_eq!(
            car.valid,
            car.fio.is_some(),
            "{ctx}: car {:?} validity must track its FIO",
            car.number
        );
        if !car.valid {
            assert_driver_reason(car);
        }
    }
}
