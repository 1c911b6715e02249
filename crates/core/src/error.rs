//! Error types for BookMyBox

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BookMyBoxError {
    #[error("Configuration error: {0}")]
    Config(String),
    
    #[error("Storage error: {0}")]
    Storage(String),
    
    /// Credentials did not match a known account. Carries the message shown to the user.
    #[error("{0}")]
    InvalidCredentials(String),
    
    #[error("Stored session is unreadable: {0}")]
    CorruptSession(String),
    
    #[error("Payment error: {0}")]
    Payment(String),
    
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<serde_json::Error> for BookMyBoxError {
    fn from(e: serde_json::Error) -> Self {
        BookMyBoxError::InvalidData(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BookMyBoxError>;
