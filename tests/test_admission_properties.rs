use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use venue_admission::domain::admission::admission_config::AdmissionConfig;
use venue_admission::domain::admission::admission_controller::AdmissionController;
use venue_admission::domain::reservation::reservation::Reservation;

const GRID_SLOTS: i64 = 48;

const EXTREME_QUANTITIES: [i64; 6] = [i64::MAX, i64::MIN, i64::MAX / 2, i64::MIN / 2, 1_000_000, -1_000_000];

fn opening() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap()
}

fn random_quantity(rng: &mut StdRng) -> i64 {
    if rng.random_range(0..10) == 0 {
        EXTREME_QUANTITIES[rng.random_range(0..EXTREME_QUANTITIES.len())]
    } else {
        rng.random_range(1..=30)
    }
}

fn random_reservation(rng: &mut StdRng, aligned: bool) -> Reservation {
    let quantity = random_quantity(rng);

    if aligned {
        let start_slot = rng.random_range(0..GRID_SLOTS);
        let slots = rng.random_range(1..=8);
        Reservation::new(quantity, opening() + TimeDelta::minutes(15 * start_slot), TimeDelta::minutes(15 * slots))
    } else {
        let start_minute = rng.random_range(0..GRID_SLOTS * 15);
        let duration = rng.random_range(0..=120);
        Reservation::new(quantity, opening() + TimeDelta::minutes(start_minute), TimeDelta::minutes(duration))
    }
}

#[test]
fn test_admitted_reservation_fits_at_its_own_instants() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut controller = AdmissionController::default();

    for _ in 0..500 {
        let reservation = random_reservation(&mut rng, false);
        let instants: Vec<_> = controller.sampled_instants(&reservation).collect();

        if controller.try_add(reservation) {
            for instant in instants {
                let occupancy = controller.occupancy_at(instant);
                assert!(occupancy.slot_load <= occupancy.slot_capacity, "slot over capacity at {}", instant);
                assert!(occupancy.venue_load <= occupancy.venue_capacity, "venue over capacity at {}", instant);
            }
        }
    }

    assert!(!controller.is_empty());
}

#[test]
fn test_grid_aligned_reservations_never_overcommit() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut controller = AdmissionController::default();

    for _ in 0..300 {
        controller.try_add(random_reservation(&mut rng, true));

        for slot in 0..GRID_SLOTS + 8 {
            let occupancy = controller.occupancy_at(opening() + TimeDelta::minutes(15 * slot));
            assert!(occupancy.slot_load <= 50);
            assert!(occupancy.venue_load <= 450);
        }
    }
}

#[test]
fn test_rejected_requests_never_change_state() {
    let mut rng = StdRng::seed_from_u64(1234);
    let mut controller = AdmissionController::new(AdmissionConfig::new(40, 120, TimeDelta::minutes(15)).unwrap());

    for _ in 0..300 {
        let before: Vec<Reservation> = controller.committed().cloned().collect();

        if !controller.try_add(random_reservation(&mut rng, false)) {
            let after: Vec<Reservation> = controller.committed().cloned().collect();
            assert_eq!(before, after);
        }
    }
}
