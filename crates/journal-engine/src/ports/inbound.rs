//! # Inbound Port (Driving API)
//!
//! The public surface of the journal engine. Implementations must be
//! thread-safe (`Send + Sync`).

use crate::domain::{JournalEntryState, JournalError, Lamports, Pubkey};

/// Journal lifecycle and query API.
///
/// Every mutating operation is implicitly scoped to the invoking identity
/// passed as `owner`: it funds deposits, and it must match the stored owner
/// for `update` and `delete`. Each call is a single synchronous unit of
/// work - nothing is retried internally, and a failed call leaves the
/// targeted account exactly as it was.
pub trait JournalApi: Send + Sync {
    /// Create the entry for `(title, owner)` and return its derived address.
    ///
    /// Fails with `AlreadyExists` if an account already occupies the derived
    /// address, and with `TooLarge` if the encoded record would exceed the
    /// ledger's maximum account size. The storage deposit is debited from
    /// `owner`.
    fn create(&self, owner: &Pubkey, title: &str, message: &str) -> Result<Pubkey, JournalError>;

    /// Replace the message of an existing entry, resizing its account if the
    /// new encoded length differs.
    ///
    /// Fails with `NotFound` if absent and `Unauthorized` if the stored
    /// owner is not `owner`. Growing debits `owner` for the deposit
    /// difference; shrinking refunds it. Title and stored owner never change.
    fn update(&self, owner: &Pubkey, title: &str, message: &str) -> Result<(), JournalError>;

    /// Destroy the entry and close its account, returning the refunded
    /// deposit.
    ///
    /// Fails with `NotFound` if absent and `Unauthorized` on owner mismatch.
    /// After a successful delete, reads at the address behave as absent and
    /// the address is free for a future `create` with the same pair.
    fn delete(&self, owner: &Pubkey, title: &str) -> Result<Lamports, JournalError>;

    /// Read the entry at the address derived from `(title, owner)`.
    ///
    /// `NotFound` when no account exists there; decode failures on a live
    /// foreign account surface as `WrongAccountType`/`Truncated`, which keeps
    /// "deleted" distinguishable from "not ours".
    fn fetch(&self, title: &str, owner: &Pubkey) -> Result<JournalEntryState, JournalError>;

    /// Enumerate every entry belonging to `owner`.
    ///
    /// A fresh scan per call, filtering raw account bytes on the owner
    /// identifier at the fixed offset after the discriminator. Ordering is
    /// whatever the backend enumerates; no pagination.
    fn list_by_owner(&self, owner: &Pubkey) -> Result<Vec<JournalEntryState>, JournalError>;
}
