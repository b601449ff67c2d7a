//! # Domain Entities
//!
//! Core data structures for the journal ledger.
//!
//! ## Type Decisions
//!
//! - `Pubkey` is a 32-byte newtype rather than a raw alias: derived addresses
//!   and caller identities share the same keyspace, and the newtype carries
//!   the hex rendering and map-key derives both need.
//! - `Lamports = u64` - deposit accounting never goes negative; debits and
//!   credits are checked moves between balance entries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Deposit accounting unit. Storage deposits and payer balances are lamports.
pub type Lamports = u64;

/// Byte width of the account discriminator tag.
pub const DISCRIMINATOR_LEN: usize = 8;

/// Byte offset of the owner field inside an encoded record.
/// The owner filter used by [`list_by_owner`](crate::ports::inbound::JournalApi::list_by_owner)
/// matches raw bytes at this offset.
pub const OWNER_OFFSET: usize = DISCRIMINATOR_LEN;

/// Largest data size the ledger will allocate for a single account (10 MiB).
pub const MAX_ACCOUNT_DATA_LEN: usize = 10 * 1024 * 1024;

/// Fixed identity of the journal program. Salts every address derivation so
/// records of other collections can never collide with journal entries.
pub const PROGRAM_ID: Pubkey = Pubkey::new(*b"journal-engine::program-id::v1\0\0");

/// A 32-byte public-key identifier.
///
/// Used both for caller identities (keypair-held) and derived account
/// addresses (program-held, off-curve).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pubkey([u8; 32]);

impl Pubkey {
    /// Wrap raw key bytes.
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Borrow the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Generate a fresh random identity. Test and demo convenience; real
    /// callers bring their own keypair-derived identity.
    pub fn new_unique() -> Self {
        Self(rand::random())
    }
}

impl AsRef<[u8]> for Pubkey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Short form keeps log lines and assertion diffs readable.
        write!(f, "Pubkey({}..)", hex::encode(&self.0[..8]))
    }
}

/// One journal entry as decoded from its account.
///
/// ## Fields
///
/// - `owner`: creator identity. Immutable; authorizes update and delete.
/// - `title`: immutable after creation - it is an address-derivation seed,
///   so changing it would move the record to a different address.
/// - `message`: the only mutable field.
///
/// The discriminator tag is part of the encoded form, not of this struct;
/// [`codec::decode`](crate::domain::codec::decode) strips it after checking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntryState {
    pub owner: Pubkey,
    pub title: String,
    pub message: String,
}

impl JournalEntryState {
    /// Create a new entry record.
    pub fn new(owner: Pubkey, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            owner,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// An allocated ledger account as the storage port hands it back.
///
/// `deposit` is the lamport amount held against the allocation; it is
/// refunded in full when the account closes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountRecord {
    pub data: Vec<u8>,
    pub deposit: Lamports,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pubkey_display_is_hex() {
        let key = Pubkey::new([0xAB; 32]);
        assert_eq!(key.to_string(), "ab".repeat(32));
    }

    #[test]
    fn test_pubkey_new_unique_differs() {
        assert_ne!(Pubkey::new_unique(), Pubkey::new_unique());
    }

    #[test]
    fn test_owner_offset_follows_discriminator() {
        assert_eq!(OWNER_OFFSET, DISCRIMINATOR_LEN);
    }
}
