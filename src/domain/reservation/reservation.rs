use chrono::{DateTime, TimeDelta, Utc};
use std::fmt;

use crate::domain::utils::id::ReservationName;

/// A request for `quantity` units of venue capacity during `[start_time, start_time + duration)`.
///
/// Reservations are immutable once constructed. Neither the sign of `quantity` nor of `duration`
/// is checked, a zero or negative duration simply covers no instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    name: ReservationName,
    quantity: i64,
    start_time: DateTime<Utc>,
    duration: TimeDelta,
}

impl Reservation {
    /// Creates an unnamed reservation, a random name is generated for logging and lookups.
    pub fn new(quantity: i64, start_time: DateTime<Utc>, duration: TimeDelta) -> Self {
        Self::with_name(ReservationName::generate(), quantity, start_time, duration)
    }

    pub fn with_name(name: ReservationName, quantity: i64, start_time: DateTime<Utc>, duration: TimeDelta) -> Self {
        Reservation { name, quantity, start_time, duration }
    }

    pub fn get_name(&self) -> &ReservationName {
        &self.name
    }

    pub fn get_quantity(&self) -> i64 {
        self.quantity
    }

    pub fn get_start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub fn get_duration(&self) -> TimeDelta {
        self.duration
    }

    /// Exclusive end of the reservation, saturating at the bounds of the timestamp range.
    pub fn get_end_time(&self) -> DateTime<Utc> {
        saturating_add(self.start_time, self.duration)
    }

    /// Returns true if `instant` lies in `[start_time, end_time)`.
    pub fn is_active_at(&self, instant: DateTime<Utc>) -> bool {
        self.start_time <= instant && instant < self.get_end_time()
    }

    /// Returns true if the reservation intersects the half-open window `[window_start, window_end)`.
    pub fn overlaps(&self, window_start: DateTime<Utc>, window_end: DateTime<Utc>) -> bool {
        self.start_time < window_end && self.get_end_time() > window_start
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (quantity: {}, start: {}, duration: {} min)",
            self.name,
            self.quantity,
            self.start_time.format("%Y-%m-%d %H:%M:%S"),
            self.duration.num_minutes()
        )
    }
}

/// Adds `delta` to `time`, clamping to `DateTime::<Utc>::MIN_UTC` / `MAX_UTC` on overflow.
pub fn saturating_add(time: DateTime<Utc>, delta: TimeDelta) -> DateTime<Utc> {
    match time.checked_add_signed(delta) {
        Some(result) => result,
        None if delta < TimeDelta::zero() => DateTime::<Utc>::MIN_UTC,
        None => DateTime::<Utc>::MAX_UTC,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, hour, minute, 0).unwrap()
    }

    #[test]
    fn test_end_time_and_activity() {
        let reservation = Reservation::new(10, at(18, 0), TimeDelta::minutes(30));

        assert_eq!(reservation.get_end_time(), at(18, 30));
        assert!(reservation.is_active_at(at(18, 0)));
        assert!(reservation.is_active_at(at(18, 29)));
        // End is exclusive
        assert!(!reservation.is_active_at(at(18, 30)));
        assert!(!reservation.is_active_at(at(17, 59)));
    }

    #[test]
    fn test_overlap_is_half_open() {
        let reservation = Reservation::new(10, at(18, 0), TimeDelta::minutes(30));

        assert!(reservation.overlaps(at(17, 50), at(18, 5)));
        assert!(reservation.overlaps(at(18, 29), at(18, 44)));
        assert!(!reservation.overlaps(at(17, 45), at(18, 0)));
        assert!(!reservation.overlaps(at(18, 30), at(18, 45)));
    }

    #[test]
    fn test_degenerate_durations_cover_nothing() {
        let zero = Reservation::new(10, at(18, 0), TimeDelta::zero());
        let negative = Reservation::new(10, at(18, 0), TimeDelta::minutes(-30));

        assert!(!zero.is_active_at(at(18, 0)));
        assert!(!negative.is_active_at(at(17, 45)));
        assert!(!negative.overlaps(at(17, 30), at(18, 0)));
    }

    #[test]
    fn test_end_time_saturates() {
        let reservation = Reservation::new(1, DateTime::<Utc>::MAX_UTC, TimeDelta::minutes(15));
        assert_eq!(reservation.get_end_time(), DateTime::<Utc>::MAX_UTC);

        let reservation = Reservation::new(1, DateTime::<Utc>::MIN_UTC, TimeDelta::minutes(-15));
        assert_eq!(reservation.get_end_time(), DateTime::<Utc>::MIN_UTC);
    }
}
