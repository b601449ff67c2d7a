pub mod inbound;
pub mod outbound;

pub use inbound::JournalApi;
pub use outbound::{LedgerError, LedgerStore, MemcmpFilter};
