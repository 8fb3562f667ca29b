use std::path::Path;

use crate::api::admission_config_dto::AdmissionConfigDto;
use crate::api::reservation_dto::ReservationRequestsDto;
use crate::domain::admission::admission_config::AdmissionConfig;
use crate::domain::admission::admission_controller::AdmissionController;
use crate::domain::reservation::reservation::Reservation;
use crate::error::Result;
use crate::loader::parser::parse_json_file;

pub mod api;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;

/// Builds an empty `AdmissionController` from an admission configuration JSON file.
pub fn load_admission_controller(file_path: impl AsRef<Path>) -> Result<AdmissionController> {
    let file_path = file_path.as_ref();

    let config_dto: AdmissionConfigDto = parse_json_file(file_path)?;
    log::info!("Admission configuration '{}' parsed successfully.", file_path.display());

    let config = AdmissionConfig::try_from(config_dto)?;
    log::info!(
        "Admission policy: slot capacity {}, venue capacity {}, slot interval {} min.",
        config.get_slot_capacity(),
        config.get_venue_capacity(),
        config.get_slot_interval().num_minutes()
    );

    Ok(AdmissionController::new(config))
}

/// Reads a batch of reservation requests, keeping the order of the file.
pub fn load_reservations(file_path: impl AsRef<Path>) -> Result<Vec<Reservation>> {
    let file_path = file_path.as_ref();

    let requests_dto: ReservationRequestsDto = parse_json_file(file_path)?;
    let reservations = requests_dto.reservations.into_iter().map(Reservation::try_from).collect::<Result<Vec<_>>>()?;
    log::info!("Loaded {} reservation requests from '{}'.", reservations.len(), file_path.display());

    Ok(reservations)
}
