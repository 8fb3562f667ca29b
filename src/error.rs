use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found or could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("Invalid admission configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid reservation request '{name}': {reason}")]
    InvalidReservation { name: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
