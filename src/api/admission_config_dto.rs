use serde::{Deserialize, Serialize};

use crate::domain::admission::admission_config::{SLOT_CAPACITY, SLOT_INTERVAL_MINUTES, VENUE_CAPACITY};

/// On-disk form of the admission policy. Missing keys fall back to the policy defaults.
#[derive(Debug, Deserialize, Clone, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdmissionConfigDto {
    pub slot_capacity: i64,
    pub venue_capacity: i64,
    pub slot_interval_minutes: i64,
}

impl Default for AdmissionConfigDto {
    fn default() -> Self {
        AdmissionConfigDto { slot_capacity: SLOT_CAPACITY, venue_capacity: VENUE_CAPACITY, slot_interval_minutes: SLOT_INTERVAL_MINUTES }
    }
}
