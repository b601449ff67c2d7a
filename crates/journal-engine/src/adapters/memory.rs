//! # In-Memory Ledger
//!
//! Reference implementation of [`LedgerStore`] for tests and local use.
//!
//! A single `RwLock` guards the whole account and balance table, so every
//! mutating call is one exclusive critical section - strictly stronger than
//! the per-address atomicity the port requires. Poisoned locks surface as
//! `LockPoisoned` rather than panicking.

use crate::domain::{AccountRecord, Lamports, Pubkey};
use crate::ports::outbound::{LedgerError, LedgerStore, MemcmpFilter};
use std::collections::HashMap;
use std::sync::RwLock;

/// Flat per-account metadata overhead charged in addition to data bytes.
pub const ACCOUNT_STORAGE_OVERHEAD: u64 = 128;

/// Deposit price per byte, in lamports.
pub const DEPOSIT_PER_BYTE: Lamports = 6_960;

/// Deposit held against an account with `data_len` bytes of data.
///
/// Refunded in full on close; resize settles only the difference.
pub fn required_deposit(data_len: usize) -> Lamports {
    (ACCOUNT_STORAGE_OVERHEAD + data_len as u64) * DEPOSIT_PER_BYTE
}

#[derive(Default)]
struct LedgerInner {
    accounts: HashMap<Pubkey, AccountRecord>,
    balances: HashMap<Pubkey, Lamports>,
}

impl LedgerInner {
    fn debit(&mut self, who: &Pubkey, amount: Lamports) -> Result<(), LedgerError> {
        let balance = self.balances.entry(*who).or_insert(0);
        if *balance < amount {
            return Err(LedgerError::InsufficientFunds {
                required: amount,
                available: *balance,
            });
        }
        *balance -= amount;
        Ok(())
    }

    fn credit(&mut self, who: &Pubkey, amount: Lamports) {
        *self.balances.entry(*who).or_insert(0) += amount;
    }
}

/// In-memory [`LedgerStore`] backend.
#[derive(Default)]
pub struct InMemoryLedger {
    inner: RwLock<LedgerInner>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live accounts. Test observability.
    pub fn account_count(&self) -> usize {
        self.inner.read().map(|i| i.accounts.len()).unwrap_or(0)
    }
}

impl LedgerStore for InMemoryLedger {
    fn get(&self, address: &Pubkey) -> Result<Option<AccountRecord>, LedgerError> {
        let inner = self.inner.read().map_err(|_| LedgerError::LockPoisoned)?;
        Ok(inner.accounts.get(address).cloned())
    }

    fn create_account(
        &self,
        address: &Pubkey,
        payer: &Pubkey,
        data: Vec<u8>,
    ) -> Result<(), LedgerError> {
        let mut inner = self.inner.write().map_err(|_| LedgerError::LockPoisoned)?;
        if inner.accounts.contains_key(address) {
            return Err(LedgerError::AccountInUse { address: *address });
        }
        let deposit = required_deposit(data.len());
        inner.debit(payer, deposit)?;
        inner.accounts.insert(*address, AccountRecord { data, deposit });
        Ok(())
    }

    fn resize_account(
        &self,
        address: &Pubkey,
        payer: &Pubkey,
        new_len: usize,
    ) -> Result<(), LedgerError> {
        let mut inner = self.inner.write().map_err(|_| LedgerError::LockPoisoned)?;
        let old_deposit = match inner.accounts.get(address) {
            Some(account) => account.deposit,
            None => return Err(LedgerError::AccountMissing { address: *address }),
        };

        // Settle the deposit delta before touching the allocation so a
        // failed debit leaves the account untouched.
        let new_deposit = required_deposit(new_len);
        if new_deposit > old_deposit {
            inner.debit(payer, new_deposit - old_deposit)?;
        } else {
            inner.credit(payer, old_deposit - new_deposit);
        }

        let account = inner
            .accounts
            .get_mut(address)
            .expect("account existed under the same lock");
        account.data.resize(new_len, 0);
        account.deposit = new_deposit;
        Ok(())
    }

    fn write_account(
        &self,
        address: &Pubkey,
        payer: &Pubkey,
        data: Vec<u8>,
    ) -> Result<(), LedgerError> {
        let mut inner = self.inner.write().map_err(|_| LedgerError::LockPoisoned)?;
        let old_deposit = match inner.accounts.get(address) {
            Some(account) => account.deposit,
            None => return Err(LedgerError::AccountMissing { address: *address }),
        };

        // Settle the deposit delta first so a failed debit leaves the
        // account untouched; the rewrite below cannot fail.
        let new_deposit = required_deposit(data.len());
        if new_deposit > old_deposit {
            inner.debit(payer, new_deposit - old_deposit)?;
        } else {
            inner.credit(payer, old_deposit - new_deposit);
        }

        let account = inner
            .accounts
            .get_mut(address)
            .expect("account existed under the same lock");
        account.data = data;
        account.deposit = new_deposit;
        Ok(())
    }

    fn close_account(&self, address: &Pubkey, refund_to: &Pubkey) -> Result<Lamports, LedgerError> {
        let mut inner = self.inner.write().map_err(|_| LedgerError::LockPoisoned)?;
        let account = inner
            .accounts
            .remove(address)
            .ok_or(LedgerError::AccountMissing { address: *address })?;
        inner.credit(refund_to, account.deposit);
        Ok(account.deposit)
    }

    fn scan(&self, filter: &MemcmpFilter) -> Result<Vec<(Pubkey, Vec<u8>)>, LedgerError> {
        let inner = self.inner.read().map_err(|_| LedgerError::LockPoisoned)?;
        Ok(inner
            .accounts
            .iter()
            .filter(|(_, account)| filter.matches(&account.data))
            .map(|(address, account)| (*address, account.data.clone()))
            .collect())
    }

    fn balance_of(&self, who: &Pubkey) -> Result<Lamports, LedgerError> {
        let inner = self.inner.read().map_err(|_| LedgerError::LockPoisoned)?;
        Ok(inner.balances.get(who).copied().unwrap_or(0))
    }

    fn credit(&self, who: &Pubkey, amount: Lamports) -> Result<(), LedgerError> {
        let mut inner = self.inner.write().map_err(|_| LedgerError::LockPoisoned)?;
        inner.credit(who, amount);
        Ok(())
    }
}
