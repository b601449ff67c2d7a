//! # Outbound Port (Storage Capability)
//!
//! The ledger abstraction the engine is injected with. The engine never
//! reaches for a global account table; any backend that honors this
//! contract - the in-memory adapter, a file store, a real database - can
//! stand behind it.
//!
//! ## Atomicity contract
//!
//! Every method commits atomically per address: a call either fully applies
//! (state change plus any deposit movement) or leaves the ledger untouched.
//! Conflicting calls against the same address are serialized by the backend;
//! the engine adds no locking of its own and never retries. A backend over a
//! store without that guarantee must supply it itself.

use crate::domain::{AccountRecord, Lamports, Pubkey};
use thiserror::Error;

/// Errors surfaced by a ledger backend.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("account {address} is already in use")]
    AccountInUse { address: Pubkey },

    #[error("account {address} does not exist")]
    AccountMissing { address: Pubkey },

    #[error("insufficient funds: required {required} lamports, available {available}")]
    InsufficientFunds {
        required: Lamports,
        available: Lamports,
    },

    #[error("ledger lock poisoned")]
    LockPoisoned,
}

/// Exact-match predicate over raw account bytes at a fixed offset.
#[derive(Clone, Debug)]
pub struct MemcmpFilter {
    pub offset: usize,
    pub bytes: Vec<u8>,
}

impl MemcmpFilter {
    pub fn new(offset: usize, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            offset,
            bytes: bytes.into(),
        }
    }

    /// Whether `data` carries exactly `self.bytes` at `self.offset`.
    pub fn matches(&self, data: &[u8]) -> bool {
        data.get(self.offset..self.offset + self.bytes.len())
            .is_some_and(|window| window == self.bytes)
    }
}

/// Address-keyed account store with deposit accounting.
pub trait LedgerStore: Send + Sync {
    /// Read the account at `address`, if any.
    fn get(&self, address: &Pubkey) -> Result<Option<AccountRecord>, LedgerError>;

    /// Allocate a new account holding `data`, funded by `payer`.
    ///
    /// The deposit for `data.len()` bytes is debited from `payer` in the
    /// same commit. Fails with `AccountInUse` if the address is occupied and
    /// `InsufficientFunds` if `payer` cannot cover the deposit.
    fn create_account(
        &self,
        address: &Pubkey,
        payer: &Pubkey,
        data: Vec<u8>,
    ) -> Result<(), LedgerError>;

    /// Change the allocated size of an existing account.
    ///
    /// Growing debits `payer` for the deposit difference; shrinking refunds
    /// it. Grown regions read as zero until rewritten.
    fn resize_account(
        &self,
        address: &Pubkey,
        payer: &Pubkey,
        new_len: usize,
    ) -> Result<(), LedgerError>;

    /// Replace the data of an existing account, resizing its allocation to
    /// `data.len()` in the same commit.
    ///
    /// The deposit delta is settled against `payer` exactly as in
    /// [`resize_account`](Self::resize_account). Because resize, deposit
    /// settlement, and rewrite land in one commit, no reader can observe a
    /// zero-padded or truncated record at the address.
    fn write_account(
        &self,
        address: &Pubkey,
        payer: &Pubkey,
        data: Vec<u8>,
    ) -> Result<(), LedgerError>;

    /// Destroy the account and refund its entire deposit to `refund_to`.
    ///
    /// Returns the refunded amount. The address is free for reuse afterward.
    fn close_account(&self, address: &Pubkey, refund_to: &Pubkey) -> Result<Lamports, LedgerError>;

    /// Enumerate accounts whose raw data matches `filter`.
    ///
    /// A consistent-at-some-instant snapshot; ordering is unspecified.
    fn scan(&self, filter: &MemcmpFilter) -> Result<Vec<(Pubkey, Vec<u8>)>, LedgerError>;

    /// Current lamport balance of an identity.
    fn balance_of(&self, who: &Pubkey) -> Result<Lamports, LedgerError>;

    /// Add lamports to an identity's balance. Test-harness faucet; a real
    /// backend would fund identities out of band.
    fn credit(&self, who: &Pubkey, amount: Lamports) -> Result<(), LedgerError>;
}
