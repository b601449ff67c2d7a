//! # journal-engine
//!
//! Account lifecycle engine for per-user journal entries on a ledger.
//!
//! ## Role in System
//!
//! - **Deterministic addressing**: every entry lives at a program-derived
//!   address computed from `(title, owner)` - no registry, no lookup table.
//! - **Ownership-gated lifecycle**: create, update, and delete enforce that
//!   only the recorded owner mutates or destroys an entry.
//! - **Deposit-accounted storage**: allocations hold a lamport deposit
//!   proportional to size, settled on resize and refunded in full on close.
//!
//! ## Layout
//!
//! ```text
//! domain/    entities, byte codec, address derivation, error taxonomy
//! ports/     inbound JournalApi + outbound LedgerStore capability
//! adapters/  in-memory ledger backend
//! service    JournalService wiring the ports together
//! ```
//!
//! The ledger is an injected capability: the engine works against any
//! backend whose commits are atomic per address. See
//! [`ports::outbound::LedgerStore`] for the contract.
//!
//! ## Example
//!
//! ```
//! use journal_engine::adapters::InMemoryLedger;
//! use journal_engine::domain::Pubkey;
//! use journal_engine::ports::{JournalApi, LedgerStore};
//! use journal_engine::service::JournalService;
//!
//! let service = JournalService::new(InMemoryLedger::new());
//! let owner = Pubkey::new_unique();
//! service.ledger().credit(&owner, 10_000_000_000).unwrap();
//!
//! service.create(&owner, "My First Entry", "This is the message body.").unwrap();
//! let entry = service.fetch("My First Entry", &owner).unwrap();
//! assert_eq!(entry.message, "This is the message body.");
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::InMemoryLedger;
pub use domain::{JournalEntryState, JournalError, Lamports, Pubkey};
pub use ports::{JournalApi, LedgerError, LedgerStore, MemcmpFilter};
pub use service::JournalService;
