//! # pdakit address derivation
//!
//! Deterministic addresses for accounts that have no secret key.
//!
//! ## Components
//! - [`hasher`]: SHA-256 with an appended domain separation tag
//! - [`curve`]: Edwards25519 membership test
//! - [`pda`]: program derived address creation and bump search
//!
//! ## Example
//!
//! ```rust
//! use pdakit_core::Pubkey;
//! use pdakit_derive::{create_program_address, find_program_address, is_on_curve};
//!
//! let program_id: Pubkey = "BPFLoaderUpgradeab1e11111111111111111111111".parse().unwrap();
//! let (vault, bump) = find_program_address(&[b"vault"], &program_id).unwrap();
//!
//! assert!(!is_on_curve(&vault));
//! assert_eq!(create_program_address(&[b"vault", &[bump]], &program_id), Ok(vault));
//! ```

pub mod error;
pub mod hasher;
pub mod curve;
pub mod pda;

pub use error::{DeriveError, Result};
pub use hasher::{domain_hash, extend_and_hash, hash, hashv, Hasher};
pub use curve::{bytes_are_curve_point, is_on_curve, CurveCheck, Ed25519};
pub use pda::{check_seeds, create_program_address, create_with_seed, find_program_address, Deriver};
pub use pdakit_core::{MAX_SEEDS, MAX_SEED_LEN, PDA_MARKER};
