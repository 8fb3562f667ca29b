use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::admission::admission::{Admission, Occupancy};
use crate::domain::admission::admission_config::AdmissionConfig;
use crate::domain::admission::admission_controller::AdmissionController;
use crate::domain::reservation::reservation::Reservation;

/// Cloneable, thread-safe handle to one [`AdmissionController`].
///
/// The feasibility check and the commit of a reservation happen under the same lock, so two
/// concurrent requests can never both be admitted against the same stale state.
#[derive(Debug, Clone)]
pub struct SharedAdmissionController {
    inner: Arc<Mutex<AdmissionController>>,
}

impl SharedAdmissionController {
    pub fn new(config: AdmissionConfig) -> Self {
        Self::from(AdmissionController::new(config))
    }

    // The controller is never left half updated, a poisoned lock is safe to reuse.
    fn lock(&self) -> MutexGuard<'_, AdmissionController> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn try_add(&self, reservation: Reservation) -> bool {
        self.lock().try_add(reservation)
    }

    pub fn admit(&self, reservation: Reservation) -> Admission {
        self.lock().admit(reservation)
    }

    pub fn check(&self, reservation: &Reservation) -> Admission {
        self.lock().check(reservation)
    }

    pub fn occupancy_at(&self, instant: DateTime<Utc>) -> Occupancy {
        self.lock().occupancy_at(instant)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Copy of the committed reservations in admission order.
    pub fn committed_snapshot(&self) -> Vec<Reservation> {
        self.lock().committed().cloned().collect()
    }
}

impl From<AdmissionController> for SharedAdmissionController {
    fn from(controller: AdmissionController) -> Self {
        SharedAdmissionController { inner: Arc::new(Mutex::new(controller)) }
    }
}
