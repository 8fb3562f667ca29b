pub mod admission;
pub mod admission_config;
pub mod admission_controller;
pub mod shared_admission_controller;
