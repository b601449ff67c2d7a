//! # Journal Service
//!
//! Application service implementing the [`JournalApi`] inbound port over an
//! injected [`LedgerStore`] backend.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`JournalApi`)
//! - Drives the outbound port (`LedgerStore`) for all account access
//! - Delegates address derivation and byte codec work to the domain layer
//!
//! Every operation validates fully before its first mutating backend call,
//! so a failure never leaves a half-applied entry behind. The backend
//! serializes conflicting commits per address; the service holds no locks
//! and never retries.

use crate::domain::codec;
use crate::domain::{
    derive_entry_address, JournalEntryState, JournalError, Lamports, Pubkey, OWNER_OFFSET,
};
use crate::ports::inbound::JournalApi;
use crate::ports::outbound::{LedgerError, LedgerStore, MemcmpFilter};

/// Journal lifecycle engine and query layer.
pub struct JournalService<L: LedgerStore> {
    ledger: L,
}

impl<L: LedgerStore> JournalService<L> {
    /// Create a service over the given ledger backend.
    pub fn new(ledger: L) -> Self {
        Self { ledger }
    }

    /// Borrow the underlying ledger. Lets callers fund identities and
    /// inspect balances through the same backend the service commits to.
    pub fn ledger(&self) -> &L {
        &self.ledger
    }
}

impl<L: LedgerStore> JournalApi for JournalService<L> {
    fn create(&self, owner: &Pubkey, title: &str, message: &str) -> Result<Pubkey, JournalError> {
        let (address, bump) = derive_entry_address(title, owner)?;
        let state = JournalEntryState::new(*owner, title, message);
        let data = codec::encode(&state)?;

        self.ledger
            .create_account(&address, owner, data)
            .map_err(|err| match err {
                LedgerError::AccountInUse { .. } => JournalError::AlreadyExists { address },
                LedgerError::InsufficientFunds {
                    required,
                    available,
                } => JournalError::InsufficientFunds {
                    required,
                    available,
                },
                other => other.into(),
            })?;

        tracing::info!(
            "[journal] 📓 Created entry \"{}\" at {} (bump {})",
            title,
            address,
            bump
        );
        Ok(address)
    }

    fn update(&self, owner: &Pubkey, title: &str, message: &str) -> Result<(), JournalError> {
        let (address, _) = derive_entry_address(title, owner)?;
        let account = self
            .ledger
            .get(&address)?
            .ok_or(JournalError::NotFound { address })?;
        let stored = codec::decode(&account.data)?;
        if stored.owner != *owner {
            return Err(JournalError::Unauthorized {
                expected: stored.owner,
                actual: *owner,
            });
        }

        // Title and owner are carried over from the stored record; only the
        // message changes.
        let next = JournalEntryState::new(stored.owner, stored.title, message);
        let data = codec::encode(&next)?;
        let old_len = account.data.len();
        let new_len = data.len();

        // Resize, deposit settlement, and rewrite land in one backend
        // commit, so no reader ever sees a half-rewritten record.
        self.ledger
            .write_account(&address, owner, data)
            .map_err(|err| match err {
                LedgerError::InsufficientFunds {
                    required,
                    available,
                } => JournalError::InsufficientFunds {
                    required,
                    available,
                },
                other => other.into(),
            })?;

        if new_len != old_len {
            tracing::debug!(
                "[journal] Resized {} from {} to {} bytes",
                address,
                old_len,
                new_len
            );
        }

        tracing::info!("[journal] ✏️ Updated entry \"{}\" at {}", next.title, address);
        Ok(())
    }

    fn delete(&self, owner: &Pubkey, title: &str) -> Result<Lamports, JournalError> {
        let (address, _) = derive_entry_address(title, owner)?;
        let account = self
            .ledger
            .get(&address)?
            .ok_or(JournalError::NotFound { address })?;
        let stored = codec::decode(&account.data)?;
        if stored.owner != *owner {
            return Err(JournalError::Unauthorized {
                expected: stored.owner,
                actual: *owner,
            });
        }

        let refunded = self.ledger.close_account(&address, owner)?;
        tracing::info!(
            "[journal] 🗑️ Deleted entry \"{}\" at {}, refunded {} lamports",
            title,
            address,
            refunded
        );
        Ok(refunded)
    }

    fn fetch(&self, title: &str, owner: &Pubkey) -> Result<JournalEntryState, JournalError> {
        let (address, _) = derive_entry_address(title, owner)?;
        let account = self
            .ledger
            .get(&address)?
            .ok_or(JournalError::NotFound { address })?;
        codec::decode(&account.data)
    }

    fn list_by_owner(&self, owner: &Pubkey) -> Result<Vec<JournalEntryState>, JournalError> {
        let filter = MemcmpFilter::new(OWNER_OFFSET, owner.as_ref().to_vec());
        let hits = self.ledger.scan(&filter)?;

        let mut entries = Vec::with_capacity(hits.len());
        for (address, data) in hits {
            match codec::decode(&data) {
                Ok(state) => entries.push(state),
                // Owner bytes matched but the record is not ours; skip it
                // rather than interpreting foreign data.
                Err(err) => {
                    tracing::debug!("[journal] Skipping non-entry account {}: {}", address, err);
                }
            }
        }
        Ok(entries)
    }
}
