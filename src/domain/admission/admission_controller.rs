use chrono::{DateTime, Utc};

use crate::domain::admission::admission::{Admission, CapacityConstraint, Occupancy, Rejection};
use crate::domain::admission::admission_config::AdmissionConfig;
use crate::domain::reservation::reservation::{Reservation, saturating_add};
use crate::domain::reservation::reservation_store::ReservationStore;
use crate::domain::utils::id::ReservationName;

/// Decides whether reservations fit under a per-slot and a venue-wide capacity ceiling.
///
/// Each request is sampled at instants `start, start + interval, ...` before its end. The
/// instants are anchored to the request's own start, not to a global grid, so the check is an
/// approximation of continuous interval capacity. At every instant the request must fit both:
/// - the **slot load**, the quantity of committed reservations active at that instant, and
/// - the **venue load**, the quantity of committed reservations overlapping `[instant, instant + interval)`.
///
/// The controller is not synchronized. Use
/// [`SharedAdmissionController`](crate::domain::admission::shared_admission_controller::SharedAdmissionController)
/// when several threads submit reservations.
#[derive(Debug, Clone, Default)]
pub struct AdmissionController {
    config: AdmissionConfig,
    committed: ReservationStore,
}

impl AdmissionController {
    pub fn new(config: AdmissionConfig) -> Self {
        AdmissionController { config, committed: ReservationStore::new() }
    }

    pub fn config(&self) -> &AdmissionConfig {
        &self.config
    }

    /// Commits `reservation` if it fits.
    ///
    /// # Returns
    /// `true` if the reservation was committed, `false` if it was rejected (state is unchanged).
    pub fn try_add(&mut self, reservation: Reservation) -> bool {
        self.admit(reservation).is_accepted()
    }

    /// Commits `reservation` if it fits and reports why it did not otherwise.
    pub fn admit(&mut self, reservation: Reservation) -> Admission {
        let admission = self.check(&reservation);

        match &admission {
            Admission::Accepted => {
                let summary = reservation.to_string();
                let id = self.committed.add(reservation);
                log::info!("Admitted reservation {} as {:?}.", summary, id);
            }
            Admission::Rejected(rejection) => {
                log::debug!("Rejected reservation {}: {}.", reservation, rejection);
            }
        }

        admission
    }

    /// Checks `reservation` against the committed state without committing it.
    ///
    /// Sampled instants are visited in chronological order and the first violation is returned.
    /// If both ceilings are exceeded at the same instant the slot ceiling is reported.
    pub fn check(&self, reservation: &Reservation) -> Admission {
        let quantity = reservation.get_quantity();

        for instant in self.sampled_instants(reservation) {
            let slot_load = self.slot_load_exact(instant);
            if slot_load + i128::from(quantity) > i128::from(self.config.get_slot_capacity()) {
                return Admission::Rejected(Rejection {
                    instant,
                    constraint: CapacityConstraint::Slot,
                    load: clamp_load(slot_load),
                    requested: quantity,
                    capacity: self.config.get_slot_capacity(),
                });
            }

            let venue_load = self.venue_load_exact(instant);
            if venue_load + i128::from(quantity) > i128::from(self.config.get_venue_capacity()) {
                return Admission::Rejected(Rejection {
                    instant,
                    constraint: CapacityConstraint::Venue,
                    load: clamp_load(venue_load),
                    requested: quantity,
                    capacity: self.config.get_venue_capacity(),
                });
            }
        }

        Admission::Accepted
    }

    /// Instants at which `reservation` is checked: its start and every slot interval after it,
    /// strictly before its end. Empty for zero or negative durations.
    pub fn sampled_instants(&self, reservation: &Reservation) -> impl Iterator<Item = DateTime<Utc>> + use<> {
        let end = reservation.get_end_time();
        let interval = self.config.get_slot_interval();

        std::iter::successors(Some(reservation.get_start_time()), move |instant| instant.checked_add_signed(interval))
            .take_while(move |instant| *instant < end)
    }

    /// Sum of the quantities of committed reservations active at `instant`, saturating at the `i64` range.
    pub fn slot_load(&self, instant: DateTime<Utc>) -> i64 {
        clamp_load(self.slot_load_exact(instant))
    }

    /// Sum of the quantities of committed reservations overlapping `[instant, instant + interval)`,
    /// saturating at the `i64` range.
    pub fn venue_load(&self, instant: DateTime<Utc>) -> i64 {
        clamp_load(self.venue_load_exact(instant))
    }

    // Sums of i64 quantities cannot leave the i128 range for any realistic number of reservations.
    fn slot_load_exact(&self, instant: DateTime<Utc>) -> i128 {
        self.committed.iter().filter(|r| r.is_active_at(instant)).map(|r| i128::from(r.get_quantity())).sum()
    }

    fn venue_load_exact(&self, instant: DateTime<Utc>) -> i128 {
        let window_end = saturating_add(instant, self.config.get_slot_interval());
        self.committed.iter().filter(|r| r.overlaps(instant, window_end)).map(|r| i128::from(r.get_quantity())).sum()
    }

    pub fn occupancy_at(&self, instant: DateTime<Utc>) -> Occupancy {
        Occupancy {
            instant,
            slot_load: self.slot_load(instant),
            slot_capacity: self.config.get_slot_capacity(),
            venue_load: self.venue_load(instant),
            venue_capacity: self.config.get_venue_capacity(),
        }
    }

    /// Committed reservations in admission order.
    pub fn committed(&self) -> impl Iterator<Item = &Reservation> + '_ {
        self.committed.iter()
    }

    pub fn get_by_name(&self, name: &ReservationName) -> Option<&Reservation> {
        self.committed.get_by_name(name)
    }

    pub fn len(&self) -> usize {
        self.committed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }
}

fn clamp_load(load: i128) -> i64 {
    i64::try_from(load).unwrap_or(if load < 0 { i64::MIN } else { i64::MAX })
}
