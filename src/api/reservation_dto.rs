use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::reservation::reservation::Reservation;
use crate::domain::utils::id::ReservationName;
use crate::error::Error;

#[derive(Debug, Deserialize, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDto {
    #[serde(default)]
    pub name: Option<String>,
    pub quantity: i64,
    /// RFC 3339 timestamp, e.g. `2025-06-01T19:00:00Z`.
    pub start_time: DateTime<Utc>,
    pub duration_minutes: i64,
}

#[derive(Debug, Deserialize, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequestsDto {
    pub reservations: Vec<ReservationDto>,
}

impl TryFrom<ReservationDto> for Reservation {
    type Error = Error;

    fn try_from(dto: ReservationDto) -> Result<Self, Self::Error> {
        let name = match dto.name {
            Some(name) => ReservationName::new(name),
            None => ReservationName::generate(),
        };

        let duration = TimeDelta::try_minutes(dto.duration_minutes).ok_or_else(|| Error::InvalidReservation {
            name: name.to_string(),
            reason: format!("duration of {} minutes is out of range", dto.duration_minutes),
        })?;

        Ok(Reservation::with_name(name, dto.quantity, dto.start_time, duration))
    }
}
