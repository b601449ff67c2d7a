use super::{Lamports, Pubkey};
use crate::ports::outbound::LedgerError;
use thiserror::Error;

/// Errors surfaced by journal operations.
///
/// All are terminal: nothing is retried internally, and no operation leaves
/// a partial effect behind when it fails.
#[derive(Debug, Error)]
pub enum JournalError {
    #[error("an entry already exists at {address}")]
    AlreadyExists { address: Pubkey },

    #[error("no entry exists at {address}")]
    NotFound { address: Pubkey },

    #[error("entry is owned by {expected}, not {actual}")]
    Unauthorized { expected: Pubkey, actual: Pubkey },

    #[error("encoded entry is {size} bytes, max account size is {max}")]
    TooLarge { size: usize, max: usize },

    #[error("account data does not carry the journal entry discriminator")]
    WrongAccountType,

    #[error("account data truncated: needed {needed} more bytes, {remaining} remain")]
    Truncated { needed: usize, remaining: usize },

    #[error("account data carries {extra} bytes past the end of the record")]
    TrailingBytes { extra: usize },

    #[error("{field} is not valid UTF-8")]
    InvalidUtf8 { field: &'static str },

    #[error("derivation seed is {len} bytes, max is {max}")]
    SeedTooLong { len: usize, max: usize },

    #[error("no valid bump found for the given seeds")]
    DerivationExhausted,

    #[error("insufficient funds: required {required} lamports, available {available}")]
    InsufficientFunds {
        required: Lamports,
        available: Lamports,
    },

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
