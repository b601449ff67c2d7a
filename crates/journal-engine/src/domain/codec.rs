//! # Entry Codec
//!
//! The on-ledger byte layout of a journal entry and its encode/decode pair.
//!
//! ## Layout
//!
//! ```text
//! [discriminator: 8][owner: 32][title: u32 LE len + UTF-8][message: u32 LE len + UTF-8]
//! ```
//!
//! Both directions fail closed. Encoding rejects records larger than the
//! maximum account size, which also keeps every length within the u32
//! prefix. Decoding checks the discriminator before anything else, validates
//! every length prefix against the remaining bytes, and rejects bytes past
//! the end of the record. `decode(encode(s)) == s` for every encodable
//! state.

use super::entities::{JournalEntryState, Pubkey, DISCRIMINATOR_LEN, MAX_ACCOUNT_DATA_LEN};
use super::errors::JournalError;
use sha2::{Digest, Sha256};
use std::sync::OnceLock;

/// The 8-byte tag written at the front of every journal entry account.
///
/// First 8 bytes of `SHA-256("account:JournalEntryState")`. Computed once
/// and cached; the value is stable for the life of the record type name.
pub fn entry_discriminator() -> &'static [u8; DISCRIMINATOR_LEN] {
    static TAG: OnceLock<[u8; DISCRIMINATOR_LEN]> = OnceLock::new();
    TAG.get_or_init(|| {
        let digest = Sha256::digest(b"account:JournalEntryState");
        let mut tag = [0u8; DISCRIMINATOR_LEN];
        tag.copy_from_slice(&digest[..DISCRIMINATOR_LEN]);
        tag
    })
}

/// Exact encoded size of an entry with the given title and message.
///
/// Used by the lifecycle engine to size allocations and resizes before
/// committing anything to the ledger.
pub fn encoded_len(title: &str, message: &str) -> usize {
    DISCRIMINATOR_LEN + 32 + 4 + title.len() + 4 + message.len()
}

/// Serialize an entry to its account byte form.
///
/// Fails with [`JournalError::TooLarge`] when the encoded record would
/// exceed [`MAX_ACCOUNT_DATA_LEN`]; nothing past that bound is ever emitted.
pub fn encode(state: &JournalEntryState) -> Result<Vec<u8>, JournalError> {
    let size = encoded_len(&state.title, &state.message);
    if size > MAX_ACCOUNT_DATA_LEN {
        return Err(JournalError::TooLarge {
            size,
            max: MAX_ACCOUNT_DATA_LEN,
        });
    }

    let mut out = Vec::with_capacity(size);
    out.extend_from_slice(entry_discriminator());
    out.extend_from_slice(state.owner.as_ref());
    write_string(&mut out, &state.title);
    write_string(&mut out, &state.message);
    Ok(out)
}

/// Deserialize an entry from account bytes.
///
/// Fails with [`JournalError::WrongAccountType`] before parsing anything if
/// the leading tag is absent or wrong, so foreign account data is rejected
/// without being interpreted.
pub fn decode(data: &[u8]) -> Result<JournalEntryState, JournalError> {
    if data.len() < DISCRIMINATOR_LEN || &data[..DISCRIMINATOR_LEN] != entry_discriminator() {
        return Err(JournalError::WrongAccountType);
    }
    let mut rest = &data[DISCRIMINATOR_LEN..];

    let owner_bytes = take(&mut rest, 32)?;
    let mut owner = [0u8; 32];
    owner.copy_from_slice(owner_bytes);

    let title = read_string(&mut rest, "title")?;
    let message = read_string(&mut rest, "message")?;

    if !rest.is_empty() {
        return Err(JournalError::TrailingBytes { extra: rest.len() });
    }

    Ok(JournalEntryState {
        owner: Pubkey::new(owner),
        title,
        message,
    })
}

fn write_string(out: &mut Vec<u8>, value: &str) {
    // The size bound in `encode` keeps every field well inside u32 range,
    // so the cast cannot truncate.
    out.extend_from_slice(&(value.len() as u32).to_le_bytes());
    out.extend_from_slice(value.as_bytes());
}

fn read_string(rest: &mut &[u8], field: &'static str) -> Result<String, JournalError> {
    let mut len_bytes = [0u8; 4];
    len_bytes.copy_from_slice(take(rest, 4)?);
    let len = u32::from_le_bytes(len_bytes) as usize;
    let bytes = take(rest, len)?;
    String::from_utf8(bytes.to_vec()).map_err(|_| JournalError::InvalidUtf8 { field })
}

fn take<'a>(rest: &mut &'a [u8], n: usize) -> Result<&'a [u8], JournalError> {
    if rest.len() < n {
        return Err(JournalError::Truncated {
            needed: n - rest.len(),
            remaining: rest.len(),
        });
    }
    let (head, tail) = rest.split_at(n);
    *rest = tail;
    Ok(head)
}
