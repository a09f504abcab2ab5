// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Persistent key-value storage for the session token.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::StoreError;

/// Storage keys as constants.
pub mod keys {
    pub const AUTH_TOKEN: &str = "@auth_token";
    /// RFC3339 expiry of `AUTH_TOKEN`
    pub const AUTH_TOKEN_EXPIRY: &str = "@auth_token_expiry";
}

/// Durable string key-value storage.
///
/// Implementations serialize individual reads and writes; there are no
/// multi-key transactions.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
