pub mod admission_config_dto;
pub mod reservation_dto;
