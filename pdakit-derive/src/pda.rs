//! # Program Derived Addresses
//!
//! A program derived address (PDA) is computed from a program id and a list
//! of seeds and is guaranteed to lie off the ed25519 curve, so no secret key
//! can sign for it.
//!
//! ## Derivation
//!
//! ```text
//! candidate = sha256(seed_0 || ... || seed_n || program_id || "ProgramDerivedAddress")
//! ```
//!
//! `create_program_address` rejects an on-curve candidate. `find_program_address`
//! appends a one-byte bump seed, trying 255 down to 0, and returns the first
//! bump whose candidate is off curve. The scan order and the marker bytes are
//! part of the address format and must not change.

use crate::curve::{CurveCheck, Ed25519};
use crate::error::{DeriveError, Result};
use crate::hasher::domain_hash;
use pdakit_core::{Pubkey, MAX_SEEDS, MAX_SEED_LEN, PDA_MARKER};

/// Address derivation over a pluggable curve check.
///
/// The free functions in this module use `Deriver<Ed25519>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Deriver<C = Ed25519> {
    curve: C,
}

impl<C: CurveCheck> Deriver<C> {
    pub fn new(curve: C) -> Self {
        Self { curve }
    }

    /// Derive an off-curve address from `seeds` and `program_id`.
    ///
    /// # Errors
    /// - `TooManySeeds` if more than [`MAX_SEEDS`] seeds are given
    /// - `SeedTooLong` if any seed exceeds [`MAX_SEED_LEN`] bytes
    /// - `InvalidSeeds` if the resulting address is on the curve
    pub fn create_program_address(&self, seeds: &[&[u8]], program_id: &Pubkey) -> Result<Pubkey> {
        check_seeds(seeds)?;

        let mut parts: Vec<&[u8]> = Vec::with_capacity(seeds.len() + 1);
        parts.extend_from_slice(seeds);
        parts.push(program_id.as_ref());
        let digest = domain_hash(&parts, PDA_MARKER);

        if self.curve.is_curve_point(&digest) {
            return Err(DeriveError::InvalidSeeds);
        }
        Ok(Pubkey::new_from_array(digest))
    }

    /// Search bump seeds from 255 downward for the first off-curve address.
    ///
    /// # Returns
    /// The address and the bump that produced it.
    ///
    /// # Errors
    /// - `TooManySeeds` if `seeds` leaves no room for the bump seed
    /// - `SeedTooLong` if any seed exceeds [`MAX_SEED_LEN`] bytes
    /// - `NoValidBump` if every bump yields an on-curve address
    pub fn find_program_address(&self, seeds: &[&[u8]], program_id: &Pubkey) -> Result<(Pubkey, u8)> {
        for bump in (0..=u8::MAX).rev() {
            let bump_seed = [bump];
            let mut candidate: Vec<&[u8]> = Vec::with_capacity(seeds.len() + 1);
            candidate.extend_from_slice(seeds);
            candidate.push(&bump_seed);

            match self.create_program_address(&candidate, program_id) {
                Ok(address) => {
                    tracing::debug!(
                        "found program address {} for {} with bump {} after {} attempts",
                        address,
                        program_id,
                        bump,
                        u16::from(u8::MAX - bump) + 1
                    );
                    return Ok((address, bump));
                }
                Err(err) if err.is_bump_miss() => {
                    tracing::trace!("bump {} for {} is on curve", bump, program_id);
                }
                Err(err) => return Err(err),
            }
        }

        tracing::warn!("no bump produces an off-curve address for {}", program_id);
        Err(DeriveError::NoValidBump)
    }

    /// Derive an address from a base address, a text seed and an owner.
    ///
    /// `sha256(base || seed || owner)` with no curve check; the result may or
    /// may not have a secret key.
    ///
    /// # Errors
    /// - `SeedTooLong` if `seed` exceeds [`MAX_SEED_LEN`] bytes
    /// - `IllegalOwner` if `owner` ends with the PDA marker
    pub fn create_with_seed(&self, base: &Pubkey, seed: &str, owner: &Pubkey) -> Result<Pubkey> {
        if seed.len() > MAX_SEED_LEN {
            return Err(DeriveError::SeedTooLong {
                index: 0,
                len: seed.len(),
                max: MAX_SEED_LEN,
            });
        }

        if owner.as_ref().ends_with(PDA_MARKER) {
            return Err(DeriveError::IllegalOwner);
        }

        let digest = domain_hash(&[base.as_ref(), seed.as_bytes(), owner.as_ref()], b"");
        Ok(Pubkey::new_from_array(digest))
    }

    pub fn is_on_curve(&self, pubkey: &Pubkey) -> bool {
        self.curve.is_curve_point(pubkey.as_array())
    }
}

/// Validate seed count and lengths without hashing
pub fn check_seeds(seeds: &[&[u8]]) -> Result<()> {
    if seeds.len() > MAX_SEEDS {
        return Err(DeriveError::TooManySeeds {
            count: seeds.len(),
            max: MAX_SEEDS,
        });
    }
    for (index, seed) in seeds.iter().enumerate() {
        if seed.len() > MAX_SEED_LEN {
            return Err(DeriveError::SeedTooLong {
                index,
                len: seed.len(),
                max: MAX_SEED_LEN,
            });
        }
    }
    Ok(())
}

pub fn create_program_address(seeds: &[&[u8]], program_id: &Pubkey) -> Result<Pubkey> {
    Deriver::<Ed25519>::default().create_program_address(seeds, program_id)
}

pub fn find_program_address(seeds: &[&[u8]], program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    Deriver::<Ed25519>::default().find_program_address(seeds, program_id)
}

pub fn create_with_seed(base: &Pubkey, seed: &str, owner: &Pubkey) -> Result<Pubkey> {
    Deriver::<Ed25519>::default().create_with_seed(base, seed, owner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::is_on_curve;

    fn loader() -> Pubkey {
        "BPFLoaderUpgradeab1e11111111111111111111111".parse().unwrap()
    }

    fn addr(text: &str) -> Pubkey {
        text.parse().unwrap()
    }

    /// Treats every value as a curve point
    struct AllOnCurve;

    impl CurveCheck for AllOnCurve {
        fn is_curve_point(&self, _bytes: &[u8; 32]) -> bool {
            true
        }
    }

    /// Treats only values whose first byte is even as curve points
    struct EvenFirstByte;

    impl CurveCheck for EvenFirstByte {
        fn is_curve_point(&self, bytes: &[u8; 32]) -> bool {
            bytes[0] % 2 == 0
        }
    }

    #[test]
    fn test_create_program_address_vectors() {
        let program_id = loader();
        let public_key = addr("SeedPubey1111111111111111111111111111111111");

        assert_eq!(
            create_program_address(&[b"", &[1]], &program_id),
            Ok(addr("BwqrghZA2htAcqq8dzP1WDAhTXYTYWj7CHxF5j7TDBAe"))
        );
        assert_eq!(
            create_program_address(&["☉".as_bytes(), &[0]], &program_id),
            Ok(addr("13yWmRpaTR4r5nAktwLqMpRNr28tnVUZw26rTvPSSB19"))
        );
        assert_eq!(
            create_program_address(&[b"Talking", b"Squirrels"], &program_id),
            Ok(addr("2fnQrngrQT4SeLcdToJAD96phoEjNL2man2kfRLCASVk"))
        );
        assert_eq!(
            create_program_address(&[public_key.as_ref(), &[1]], &program_id),
            Ok(addr("976ymqVnfE32QFe6NfGDctSvVa36LWnvYxhU6G2232YL"))
        );
        assert_ne!(
            create_program_address(&[b"Talking", b"Squirrels"], &program_id),
            create_program_address(&[b"Talking"], &program_id)
        );
    }

    #[test]
    fn test_create_program_address_on_curve() {
        assert_eq!(
            create_program_address(&[b"x1"], &loader()),
            Err(DeriveError::InvalidSeeds)
        );
    }

    #[test]
    fn test_seed_bounds() {
        let program_id = loader();
        let max_seed = [0u8; MAX_SEED_LEN];
        let too_long = [0u8; MAX_SEED_LEN + 1];

        assert_eq!(
            create_program_address(&[&too_long], &program_id),
            Err(DeriveError::SeedTooLong { index: 0, len: 33, max: 32 })
        );
        assert_eq!(
            create_program_address(&[b"short", &too_long], &program_id),
            Err(DeriveError::SeedTooLong { index: 1, len: 33, max: 32 })
        );

        let exceeded: Vec<&[u8]> = vec![&b"a"[..]; MAX_SEEDS + 1];
        assert_eq!(
            create_program_address(&exceeded, &program_id),
            Err(DeriveError::TooManySeeds { count: 17, max: 16 })
        );

        let seeds: Vec<[u8; 32]> = (0..MAX_SEEDS as u8).map(|i| [i; 32]).collect();
        let refs: Vec<&[u8]> = seeds.iter().map(|s| s.as_slice()).collect();
        assert_eq!(
            create_program_address(&refs, &program_id),
            Ok(addr("Es7S5gvey7znAVU5P9whX7NipnNzkY5qySYvqnYKPoXo"))
        );
        assert_eq!(check_seeds(&[&max_seed]), Ok(()));
    }

    #[test]
    fn test_bounds_checked_before_curve() {
        // Bound violations are reported even when every candidate would be on curve
        let deriver = Deriver::new(AllOnCurve);
        let too_long = [0u8; 33];
        assert!(matches!(
            deriver.create_program_address(&[&too_long], &loader()),
            Err(DeriveError::SeedTooLong { .. })
        ));
    }

    #[test]
    fn test_no_seeds() {
        let program_id = loader();
        let first = create_program_address(&[], &program_id);
        let second = create_program_address(&[], &program_id);
        assert_eq!(first, second);
    }

    #[test]
    fn test_find_program_address_vault() {
        let (address, bump) = find_program_address(&[b"vault"], &loader()).unwrap();
        assert_eq!(address, addr("HbSEsJZ7N5uN1mEBaVuFVMXDARHcq4e4AmPoWDQbgrzq"));
        assert_eq!(bump, 254);
    }

    #[test]
    fn test_find_program_address_skips_on_curve_bumps() {
        let program_id = loader();
        let (address, bump) = find_program_address(&[b"seed14"], &program_id).unwrap();
        assert_eq!(address, addr("5XsaJdjAx9oKsRUUivmzQq3gpdd8uXfHien9qBUhpaHp"));
        assert_eq!(bump, 252);

        for skipped in [255u8, 254, 253] {
            assert_eq!(
                create_program_address(&[b"seed14", &[skipped]], &program_id),
                Err(DeriveError::InvalidSeeds)
            );
        }
        assert_eq!(
            create_program_address(&[b"seed14", &[bump]], &program_id),
            Ok(address)
        );
    }

    #[test]
    fn test_find_program_address_max_seeds() {
        let seeds: Vec<&[u8]> = vec![&b"a"[..]; MAX_SEEDS];
        assert_eq!(
            find_program_address(&seeds, &loader()),
            Err(DeriveError::TooManySeeds { count: 17, max: 16 })
        );

        let seeds: Vec<&[u8]> = vec![&b"a"[..]; MAX_SEEDS - 1];
        assert!(find_program_address(&seeds, &loader()).is_ok());
    }

    #[test]
    fn test_find_program_address_exhausted() {
        let deriver = Deriver::new(AllOnCurve);
        assert_eq!(
            deriver.find_program_address(&[b"vault"], &loader()),
            Err(DeriveError::NoValidBump)
        );
        assert_eq!(
            deriver.create_program_address(&[b"vault", &[255]], &loader()),
            Err(DeriveError::InvalidSeeds)
        );
    }

    #[test]
    fn test_find_with_custom_curve_check() {
        let deriver = Deriver::new(EvenFirstByte);
        let (address, bump) = deriver.find_program_address(&[b"vault"], &loader()).unwrap();
        assert_eq!(address.as_ref()[0] % 2, 1);
        for higher in (bump as u16 + 1)..=255 {
            let rejected = deriver.create_program_address(&[b"vault", &[higher as u8]], &loader());
            assert_eq!(rejected, Err(DeriveError::InvalidSeeds));
        }
    }

    #[test]
    fn test_create_with_seed() {
        let base = Pubkey::default();
        let owner = Pubkey::default();
        assert_eq!(
            create_with_seed(&base, "limber chicken: 4/45", &owner),
            Ok(addr("9h1HyLCW5dZnBVap8C5egQ9Z6pHyjsh5MNy83iPqqRuq"))
        );
    }

    #[test]
    fn test_create_with_seed_no_curve_check() {
        // Same inputs through a check that rejects everything still succeed
        let deriver = Deriver::new(AllOnCurve);
        let base = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        assert_eq!(
            deriver.create_with_seed(&base, "seed", &owner),
            create_with_seed(&base, "seed", &owner)
        );
    }

    #[test]
    fn test_create_with_seed_bounds() {
        let base = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let exact = "x".repeat(MAX_SEED_LEN);
        assert!(create_with_seed(&base, &exact, &owner).is_ok());

        let long = "x".repeat(MAX_SEED_LEN + 1);
        assert_eq!(
            create_with_seed(&base, &long, &owner),
            Err(DeriveError::SeedTooLong { index: 0, len: 33, max: 32 })
        );

        // Length is measured in UTF-8 bytes: 11 three-byte characters
        let wide = "☉".repeat(11);
        assert!(matches!(
            create_with_seed(&base, &wide, &owner),
            Err(DeriveError::SeedTooLong { len: 33, .. })
        ));
    }

    #[test]
    fn test_create_with_seed_illegal_owner() {
        let mut bytes = [1u8; 32];
        bytes[32 - PDA_MARKER.len()..].copy_from_slice(PDA_MARKER);
        let owner = Pubkey::new_from_array(bytes);
        assert_eq!(
            create_with_seed(&Pubkey::new_unique(), "seed", &owner),
            Err(DeriveError::IllegalOwner)
        );
    }

    #[test]
    fn test_derived_addresses_off_curve() {
        let program_id = loader();
        for i in 0u32..64 {
            let seed = i.to_le_bytes();
            let (address, _) = find_program_address(&[&seed], &program_id).unwrap();
            assert!(!is_on_curve(&address));
            assert!(!Deriver::<Ed25519>::default().is_on_curve(&address));
        }
    }
}
