// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session token lifecycle.
//!
//! The token and its expiry live in two store keys that are written together,
//! read together and deleted together. Expiry is lazy: a stale token stays in
//! storage until the next read notices it and deletes both keys.
//!
//! Storage failures never propagate. They are logged and read as
//! "not authenticated".
//!
//! All methods are synchronous and may block on the backing store (file I/O
//! for [`crate::store::FileStore`]). From async code, call them through
//! `tokio::task::spawn_blocking` as `UserService::login_user` does.

use crate::store::{keys, KeyValueStore};
use crate::time_utils::{format_utc_rfc3339, parse_utc_rfc3339, Clock, SystemClock};
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;

/// How long a freshly issued token is considered valid.
pub const TOKEN_VALIDITY_HOURS: i64 = 24;

/// Auth session manager over a persistent store.
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
}

impl AuthService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    /// Use a custom time source (simulated clocks in tests).
    pub fn with_clock(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Persist `token` with an expiry of now + 24h.
    ///
    /// If either write fails the error is logged and whatever was already
    /// written stays in place.
    pub fn set_token(&self, token: &str) {
        let expires_at = self.clock.now() + Duration::hours(TOKEN_VALIDITY_HOURS);

        if let Err(e) = self.store.set(keys::AUTH_TOKEN, token) {
            tracing::error!(error = %e, "Failed to store session token");
            return;
        }
        if let Err(e) = self
            .store
            .set(keys::AUTH_TOKEN_EXPIRY, &format_utc_rfc3339(expires_at))
        {
            tracing::error!(error = %e, "Failed to store session token expiry");
            return;
        }

        tracing::debug!(expires_at = %expires_at, "Session token stored");
    }

    /// The current token, or `None` if missing, expired or unreadable.
    pub fn get_token(&self) -> Option<String> {
        self.valid_session().map(|(token, _)| token)
    }

    /// Expiry of the current token, if one is valid.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.valid_session().map(|(_, expires_at)| expires_at)
    }

    /// Delete both keys. Idempotent.
    pub fn remove_token(&self) {
        for key in [keys::AUTH_TOKEN, keys::AUTH_TOKEN_EXPIRY] {
            if let Err(e) = self.store.remove(key) {
                tracing::error!(error = %e, key, "Failed to remove session key");
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.get_token().is_some()
    }

    fn valid_session(&self) -> Option<(String, DateTime<Utc>)> {
        let token = self.read(keys::AUTH_TOKEN)?;
        let raw_expiry = self.read(keys::AUTH_TOKEN_EXPIRY)?;

        let Some(expires_at) = parse_utc_rfc3339(&raw_expiry) else {
            tracing::warn!(expiry = %raw_expiry, "Unparseable session expiry, discarding session");
            self.remove_token();
            return None;
        };

        if expires_at <= self.clock.now() {
            tracing::info!(expires_at = %expires_at, "Session token expired");
            self.remove_token();
            return None;
        }

        Some((token, expires_at))
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!(error = %e, key, "Failed to read session key");
                None
            }
        }
    }
}
