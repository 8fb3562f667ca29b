use chrono::TimeDelta;

use crate::api::admission_config_dto::AdmissionConfigDto;
use crate::error::{Error, Result};

/// Maximum aggregate quantity active at a single sampled instant.
pub const SLOT_CAPACITY: i64 = 50;

/// Maximum aggregate quantity of all reservations overlapping one sampling window.
pub const VENUE_CAPACITY: i64 = 450;

/// Step between two sampled instants of a reservation, in minutes.
pub const SLOT_INTERVAL_MINUTES: i64 = 15;

/// Capacity policy of an [`AdmissionController`](crate::domain::admission::admission_controller::AdmissionController).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdmissionConfig {
    slot_capacity: i64,
    venue_capacity: i64,
    slot_interval: TimeDelta,
}

impl AdmissionConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    /// `Error::InvalidConfig` if `slot_interval` is not positive or a capacity is negative.
    pub fn new(slot_capacity: i64, venue_capacity: i64, slot_interval: TimeDelta) -> Result<Self> {
        if slot_interval <= TimeDelta::zero() {
            return Err(Error::InvalidConfig(format!("slot interval must be positive, got {} s", slot_interval.num_seconds())));
        }

        if slot_capacity < 0 {
            return Err(Error::InvalidConfig(format!("slot capacity must not be negative, got {}", slot_capacity)));
        }

        if venue_capacity < 0 {
            return Err(Error::InvalidConfig(format!("venue capacity must not be negative, got {}", venue_capacity)));
        }

        Ok(AdmissionConfig { slot_capacity, venue_capacity, slot_interval })
    }

    pub fn get_slot_capacity(&self) -> i64 {
        self.slot_capacity
    }

    pub fn get_venue_capacity(&self) -> i64 {
        self.venue_capacity
    }

    pub fn get_slot_interval(&self) -> TimeDelta {
        self.slot_interval
    }
}

impl Default for AdmissionConfig {
    fn default() -> Self {
        AdmissionConfig {
            slot_capacity: SLOT_CAPACITY,
            venue_capacity: VENUE_CAPACITY,
            slot_interval: TimeDelta::minutes(SLOT_INTERVAL_MINUTES),
        }
    }
}

impl TryFrom<AdmissionConfigDto> for AdmissionConfig {
    type Error = Error;

    fn try_from(dto: AdmissionConfigDto) -> Result<Self> {
        let slot_interval = TimeDelta::try_minutes(dto.slot_interval_minutes)
            .ok_or_else(|| Error::InvalidConfig(format!("slot interval of {} minutes is out of range", dto.slot_interval_minutes)))?;

        AdmissionConfig::new(dto.slot_capacity, dto.venue_capacity, slot_interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_policy_constants() {
        let config = AdmissionConfig::default();
        assert_eq!(config.get_slot_capacity(), 50);
        assert_eq!(config.get_venue_capacity(), 450);
        assert_eq!(config.get_slot_interval(), TimeDelta::minutes(15));
    }

    #[test]
    fn test_rejects_non_positive_interval() {
        assert!(matches!(AdmissionConfig::new(50, 450, TimeDelta::zero()), Err(Error::InvalidConfig(_))));
        assert!(matches!(AdmissionConfig::new(50, 450, TimeDelta::minutes(-15)), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_negative_capacities() {
        assert!(matches!(AdmissionConfig::new(-1, 450, TimeDelta::minutes(15)), Err(Error::InvalidConfig(_))));
        assert!(matches!(AdmissionConfig::new(50, -1, TimeDelta::minutes(15)), Err(Error::InvalidConfig(_))));
        assert!(AdmissionConfig::new(0, 0, TimeDelta::minutes(15)).is_ok());
    }

    #[test]
    fn test_from_dto_uses_defaults_for_missing_fields() {
        let dto: AdmissionConfigDto = serde_json::from_str(r#"{ "slotCapacity": 8 }"#).unwrap();
        let config = AdmissionConfig::try_from(dto).unwrap();

        assert_eq!(config.get_slot_capacity(), 8);
        assert_eq!(config.get_venue_capacity(), VENUE_CAPACITY);
        assert_eq!(config.get_slot_interval(), TimeDelta::minutes(SLOT_INTERVAL_MINUTES));
    }

    #[test]
    fn test_from_dto_rejects_out_of_range_interval() {
        let dto = AdmissionConfigDto { slot_interval_minutes: i64::MAX, ..AdmissionConfigDto::default() };
        assert!(matches!(AdmissionConfig::try_from(dto), Err(Error::InvalidConfig(_))));
    }
}
