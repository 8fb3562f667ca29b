use chrono::{DateTime, Utc};
use std::fmt;

/// The ceiling that blocked an admission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapacityConstraint {
    /// Quantity active at the sampled instant.
    Slot,

    /// Quantity overlapping the sampling window starting at the instant.
    Venue,
}

impl fmt::Display for CapacityConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapacityConstraint::Slot => write!(f, "slot capacity"),
            CapacityConstraint::Venue => write!(f, "venue capacity"),
        }
    }
}

/// Details of the first sampled instant at which a reservation did not fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rejection {
    pub instant: DateTime<Utc>,
    pub constraint: CapacityConstraint,

    /// Load already committed for the constraint at `instant`.
    pub load: i64,

    /// Quantity of the rejected reservation.
    pub requested: i64,

    /// Ceiling of the constraint.
    pub capacity: i64,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} exceeded at {}: {} + {} > {}",
            self.constraint,
            self.instant.format("%Y-%m-%d %H:%M:%S"),
            self.load,
            self.requested,
            self.capacity
        )
    }
}

/// Outcome of an admission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Accepted,
    Rejected(Rejection),
}

impl Admission {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Admission::Accepted)
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Admission::Accepted => None,
            Admission::Rejected(rejection) => Some(rejection),
        }
    }
}

/// Loads around a single instant, with their ceilings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Occupancy {
    pub instant: DateTime<Utc>,
    pub slot_load: i64,
    pub slot_capacity: i64,
    pub venue_load: i64,
    pub venue_capacity: i64,
}

impl Occupancy {
    /// Ratio of slot load to slot capacity (0.0 if the capacity is 0).
    pub fn slot_utilization(&self) -> f64 {
        utilization(self.slot_load, self.slot_capacity)
    }

    /// Ratio of venue load to venue capacity (0.0 if the capacity is 0).
    pub fn venue_utilization(&self) -> f64 {
        utilization(self.venue_load, self.venue_capacity)
    }
}

fn utilization(load: i64, capacity: i64) -> f64 {
    if capacity > 0 { load as f64 / capacity as f64 } else { 0.0 }
}
