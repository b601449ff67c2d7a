//! # Journal Ledger Test Suite
//!
//! Unified test crate for end-to-end scenarios against the engine with its
//! in-memory ledger backend.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── lifecycle.rs   # create / update / delete flows
//!     └── queries.rs     # owner-filtered enumeration
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p journal-tests
//! ```

#![allow(dead_code)]

pub mod integration;
