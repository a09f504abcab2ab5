// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Registration, login and logout.
//!
//! Rejections from the gateway are expected outcomes and come back as
//! [`AuthOutcome::Rejected`]. Only transport failures are `Err`.

use crate::error::ApiError;
use crate::models::user::first_validation_message;
use crate::models::{AuthOutcome, Credentials, NewUser};
use crate::services::gateway::{error_field, GatewayClient};
use crate::services::AuthService;
use serde_json::Value;
use validator::Validate;

const REGISTER_PATH: &str = "/user/register";
const LOGIN_PATH: &str = "/user/login";

const REGISTER_FAILED: &str = "Registration failed";
const LOGIN_FAILED: &str = "Login failed";

#[derive(Clone)]
pub struct UserService {
    gateway: GatewayClient,
    session: AuthService,
}

impl UserService {
    pub fn new(gateway: GatewayClient, session: AuthService) -> Self {
        Self { gateway, session }
    }

    /// Register a new account. Success requires a `message` in the response.
    pub async fn register_user(&self, user: &NewUser) -> Result<AuthOutcome, ApiError> {
        if let Err(errors) = user.validate() {
            return Ok(AuthOutcome::rejected(first_validation_message(&errors)));
        }

        let (status, value) = self
            .gateway
            .send_raw(self.gateway.post(REGISTER_PATH, None).json(user))
            .await?;

        let outcome = match rejection(status, &value) {
            Some(message) => AuthOutcome::rejected(message),
            None if has_string(&value, "message") => AuthOutcome::Success,
            None => AuthOutcome::rejected(REGISTER_FAILED),
        };

        match &outcome {
            AuthOutcome::Success => tracing::info!(username = %user.username, "User registered"),
            AuthOutcome::Rejected { message } => {
                tracing::warn!(username = %user.username, error = %message, "Registration rejected")
            }
        }
        Ok(outcome)
    }

    /// Log in and persist the returned token in the session.
    ///
    /// A rejected login leaves any existing session untouched.
    pub async fn login_user(&self, credentials: &Credentials) -> Result<AuthOutcome, ApiError> {
        if let Err(errors) = credentials.validate() {
            return Ok(AuthOutcome::rejected(first_validation_message(&errors)));
        }

        let (status, value) = self
            .gateway
            .send_raw(self.gateway.post(LOGIN_PATH, None).json(credentials))
            .await?;

        if let Some(message) = rejection(status, &value) {
            tracing::warn!(username = %credentials.username, error = %message, "Login rejected");
            return Ok(AuthOutcome::rejected(message));
        }

        match value.get("token").and_then(Value::as_str) {
            Some(token) if !token.is_empty() => {
                self.persist_token(token.to_string()).await;
                tracing::info!(username = %credentials.username, "User logged in");
                Ok(AuthOutcome::Success)
            }
            _ => {
                tracing::warn!(username = %credentials.username, "Login response carried no token");
                Ok(AuthOutcome::rejected(LOGIN_FAILED))
            }
        }
    }

    /// Store the token on the blocking pool; the session store does file I/O.
    async fn persist_token(&self, token: String) {
        let session = self.session.clone();
        if let Err(e) = tokio::task::spawn_blocking(move || session.set_token(&token)).await {
            tracing::error!(error = %e, "Session token write task failed");
        }
    }

    /// Blocking: clears the session store synchronously.
    pub fn logout_user(&self) {
        self.session.remove_token();
        tracing::info!("User logged out");
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn session(&self) -> &AuthService {
        &self.session
    }
}

/// Message for a failed status or an explicit `error` field.
fn rejection(status: reqwest::StatusCode, value: &Value) -> Option<String> {
    if let Some(message) = error_field(value) {
        return Some(message);
    }
    if status.is_success() {
        return None;
    }
    if let Some(message) = value.get("message").and_then(Value::as_str) {
        return Some(message.to_string());
    }
    Some(match value {
        Value::String(text) if !text.trim().is_empty() => text.trim().to_string(),
        _ => format!("Error {}", status.as_u16()),
    })
}

fn has_string(value: &Value, field: &str) -> bool {
    value.get(field).and_then(Value::as_str).is_some()
}
