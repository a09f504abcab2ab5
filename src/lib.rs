// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Recipy client: typed access to the Recipy API gateway
//!
//! This crate wraps the gateway's recipe, comment, like and user endpoints
//! and keeps the login session token in a small persistent store.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;
pub mod time_utils;

use config::Config;
use error::ApiError;
use services::{AuthService, GatewayClient, RecipeService, UserService};
use std::sync::Arc;
use store::{FileStore, KeyValueStore};

/// Everything a caller needs, sharing one HTTP client and one session.
///
/// Cheap to clone; pass it (or the individual services) to whatever
/// issues requests.
#[derive(Clone)]
pub struct RecipyClient {
    pub config: Config,
    pub session: AuthService,
    pub recipes: RecipeService,
    pub users: UserService,
}

impl RecipyClient {
    /// Build the client with the session kept in `store`.
    pub fn new(config: Config, store: Arc<dyn KeyValueStore>) -> Result<Self, ApiError> {
        let gateway = GatewayClient::new(&config.api_gateway_url, config.request_timeout)?;
        let session = AuthService::new(store);

        Ok(Self {
            recipes: RecipeService::new(gateway.clone()),
            users: UserService::new(gateway, session.clone()),
            session,
            config,
        })
    }

    /// Build the client with the session file from `config`.
    pub fn from_config(config: Config) -> Result<Self, ApiError> {
        let store = Arc::new(FileStore::new(config.session_file.clone()));
        Self::new(config, store)
    }
}
