pub mod admission;
pub mod reservation;
pub mod utils;
