//! Error types for value construction

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("Invalid length: expected {expected} bytes, found {found} bytes")]
    InvalidLength { expected: usize, found: usize },

    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),
}

impl AddressError {
    /// Check if the input was well-formed but decoded to the wrong size
    pub fn is_length_error(&self) -> bool {
        matches!(self, AddressError::InvalidLength { .. })
    }
}

pub type Result<T> = std::result::Result<T, AddressError>;
