use slotmap::{SlotMap, new_key_type};
use std::collections::HashMap;

use crate::domain::reservation::reservation::Reservation;
use crate::domain::utils::id::ReservationName;

new_key_type! {
    pub struct ReservationId;
}

/// Append-only storage of committed reservations.
///
/// Reservations are never removed, so the `SlotMap` hands out slots in sequence and its
/// iteration follows insertion order.
#[derive(Debug, Clone, Default)]
pub struct ReservationStore {
    /// Reservation Storage.
    slots: SlotMap<ReservationId, Reservation>,

    /// Index lookup InternalKey (ReservationId) using the reservation name (ReservationName).
    name_index: HashMap<ReservationName, ReservationId>,
}

impl ReservationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds Reservation to ReservationStore.
    ///
    /// # Returns
    /// Returns the ReservationId (internal Key for ReservationStore).
    pub fn add(&mut self, reservation: Reservation) -> ReservationId {
        let name = reservation.get_name().clone();
        let key = self.slots.insert(reservation);

        if let Some(previous) = self.name_index.insert(name.clone(), key) {
            log::warn!("Reservation name {} is used more than once. Name lookup now resolves to the latest one ({:?} -> {:?}).", name, previous, key);
        }

        key
    }

    /// Get Reservation with the reservation name (ReservationName).
    ///
    /// # Returns
    /// Returns Some(Reservation) for the most recently added reservation with that name, else None.
    pub fn get_by_name(&self, name: &ReservationName) -> Option<&Reservation> {
        let key = self.name_index.get(name)?;
        self.slots.get(*key)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterates over all stored reservations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Reservation> + '_ {
        self.slots.values()
    }
}
