pub mod codec;
pub mod entities;
pub mod errors;
pub mod pda;

pub use entities::*;
pub use errors::*;
pub use pda::{derive_address, derive_entry_address, MAX_SEED_LEN};
