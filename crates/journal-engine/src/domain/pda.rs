//! # Program-Derived Addresses
//!
//! Deterministic account addressing. An entry's address is a pure function of
//! its seeds (`title`, `owner`) and the program identity, and is guaranteed
//! to sit outside the Ed25519 keyspace: no keypair can ever sign for it, so
//! only the program controls the account that lives there.
//!
//! ## Derivation
//!
//! For bump `b` counting down from 255, the candidate address is
//!
//! ```text
//! SHA-256(seed_0 || seed_1 || ... || [b] || program_id || "ProgramDerivedAddress")
//! ```
//!
//! and the first candidate that does NOT decompress as an Ed25519 point wins.
//! Roughly half of all digests decompress, so the search failing all 256
//! bumps has probability ~2^-256 - it is still an explicit error, never a
//! panic.

use super::entities::Pubkey;
use super::errors::JournalError;
use sha2::{Digest, Sha256};

/// Maximum length of a single derivation seed, in bytes.
///
/// `title` is a seed, so titles are capped at 32 bytes.
pub const MAX_SEED_LEN: usize = 32;

/// Domain separator appended to every candidate digest.
const PDA_MARKER: &[u8] = b"ProgramDerivedAddress";

/// Derive the account address for an entry from `(title, owner)`.
///
/// Pure and deterministic: the same pair always yields the same address and
/// bump. Callers should not persist the bump beyond a session; it is cheap
/// to recompute and revalidating it here is what keeps lookups honest.
pub fn derive_entry_address(title: &str, owner: &Pubkey) -> Result<(Pubkey, u8), JournalError> {
    derive_address(&[title.as_bytes(), owner.as_ref()], &super::PROGRAM_ID)
}

/// Derive a program address from arbitrary seeds.
///
/// Fails with [`JournalError::SeedTooLong`] if any seed exceeds
/// [`MAX_SEED_LEN`], and with [`JournalError::DerivationExhausted`] if every
/// bump lands on-curve.
pub fn derive_address(
    seeds: &[&[u8]],
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), JournalError> {
    for seed in seeds {
        if seed.len() > MAX_SEED_LEN {
            return Err(JournalError::SeedTooLong {
                len: seed.len(),
                max: MAX_SEED_LEN,
            });
        }
    }

    for bump in (0..=255u8).rev() {
        let mut hasher = Sha256::new();
        for seed in seeds {
            hasher.update(seed);
        }
        hasher.update([bump]);
        hasher.update(program_id.as_ref());
        hasher.update(PDA_MARKER);
        let candidate: [u8; 32] = hasher.finalize().into();

        if !is_on_curve(&candidate) {
            return Ok((Pubkey::new(candidate), bump));
        }
    }

    Err(JournalError::DerivationExhausted)
}

/// Whether 32 bytes decompress as a valid Ed25519 point.
///
/// On-curve candidates are rejected during derivation: an on-curve address
/// could coincide with a real keypair, which would let its holder forge
/// writes to the account.
fn is_on_curve(bytes: &[u8; 32]) -> bool {
    ed25519_dalek::VerifyingKey::from_bytes(bytes).is_ok()
}
