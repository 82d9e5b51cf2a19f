//! Derivation error types

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeriveError {
    #[error("Too many seeds: {count} provided, at most {max} allowed")]
    TooManySeeds { count: usize, max: usize },

    /// `index` is the seed's position; always 0 for `create_with_seed`
    #[error("Seed {index} is {len} bytes, at most {max} allowed")]
    SeedTooLong { index: usize, len: usize, max: usize },

    #[error("Derived address lies on the ed25519 curve")]
    InvalidSeeds,

    #[error("No bump seed produces an off-curve address")]
    NoValidBump,

    #[error("Owner ends with the program derived address marker")]
    IllegalOwner,
}

impl DeriveError {
    /// Check if this error only rules out the current bump candidate
    pub fn is_bump_miss(&self) -> bool {
        matches!(self, DeriveError::InvalidSeeds)
    }
}

pub type Result<T> = std::result::Result<T, DeriveError>;
