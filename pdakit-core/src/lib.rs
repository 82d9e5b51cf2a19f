//! # pdakit core types
//!
//! Fixed-size value types for a blockchain runtime's account model.
//!
//! ## Key Types
//! - [`Hash`]: 32-byte content digest
//! - [`Pubkey`]: 32-byte account address
//! - [`ByteInput`]: the shapes a value can be constructed from (base58 text,
//!   raw bytes, numeric array, or nothing)
//! - [`Instruction`] / [`Instructions`]: opaque instruction records and their
//!   ordered, append-only collection
//!
//! `Hash` and `Pubkey` share a representation but are distinct types; nothing
//! converts one into the other implicitly.

pub mod error;
pub mod input;
pub mod hash;
pub mod pubkey;
pub mod instruction;

pub use error::{AddressError, Result};
pub use input::ByteInput;
pub use hash::Hash;
pub use pubkey::Pubkey;
pub use instruction::{AccountMeta, Instruction, Instructions};

/// Number of bytes in a [`Hash`]
pub const HASH_BYTES: usize = 32;

/// Number of bytes in a [`Pubkey`]
pub const PUBKEY_BYTES: usize = 32;

/// Maximum length in bytes of a single derivation seed
pub const MAX_SEED_LEN: usize = 32;

/// Maximum number of seeds in a program address derivation
pub const MAX_SEEDS: usize = 16;

/// Domain separation tag appended to every program address preimage
pub const PDA_MARKER: &[u8; 21] = b"ProgramDerivedAddress";
