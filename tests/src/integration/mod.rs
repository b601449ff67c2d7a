pub mod lifecycle;
pub mod queries;

use journal_engine::adapters::InMemoryLedger;
use journal_engine::domain::{Lamports, Pubkey};
use journal_engine::ports::LedgerStore;
use journal_engine::service::JournalService;

/// Default faucet amount for test identities; covers dozens of entries.
pub const FAUCET: Lamports = 10_000_000_000;

/// Fresh service over an empty in-memory ledger, with logging wired up.
pub fn harness() -> JournalService<InMemoryLedger> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
    JournalService::new(InMemoryLedger::new())
}

/// A funded caller identity on the given service's ledger.
pub fn funded_identity(service: &JournalService<InMemoryLedger>) -> Pubkey {
    let who = Pubkey::new_unique();
    service.ledger().credit(&who, FAUCET).unwrap();
    who
}
