// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP plumbing shared by the recipe and user services.
//!
//! Handles:
//! - Base URL validation and path joining
//! - Optional bearer authentication
//! - Mapping non-2xx statuses and `error` bodies to [`ApiError::Remote`]

use crate::config::normalize_base_url;
use crate::error::ApiError;
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// Low-level client for the API gateway.
#[derive(Clone)]
pub struct GatewayClient {
    http: reqwest::Client,
    base_url: String,
}

impl GatewayClient {
    /// Create a client for `base_url`. Fails if the URL is blank.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = normalize_base_url(base_url, "API_GATEWAY_URL")?;
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a gateway path (which must start with `/`).
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn get(&self, path: &str, token: Option<&str>) -> RequestBuilder {
        with_bearer(self.http.get(self.url(path)), token)
    }

    pub(crate) fn post(&self, path: &str, token: Option<&str>) -> RequestBuilder {
        with_bearer(self.http.post(self.url(path)), token)
    }

    /// Send a request and decode a JSON body of type `T`.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let (status, value) = self.send_checked(request).await?;
        decode(status, value)
    }

    /// Send a request and return the raw JSON body after status checks.
    ///
    /// A 2xx body whose top-level object carries an `error` field is
    /// reported as [`ApiError::Remote`] with the original status.
    pub(crate) async fn send_checked(
        &self,
        request: RequestBuilder,
    ) -> Result<(StatusCode, Value), ApiError> {
        let (status, value) = self.send_raw(request).await?;

        if !status.is_success() {
            let message = remote_message(status, &value);
            tracing::warn!(status = status.as_u16(), error = %message, "Gateway request failed");
            return Err(ApiError::Remote {
                status: status.as_u16(),
                message,
            });
        }

        if let Some(message) = error_field(&value) {
            tracing::warn!(status = status.as_u16(), error = %message, "Gateway reported error");
            return Err(ApiError::Remote {
                status: status.as_u16(),
                message,
            });
        }

        Ok((status, value))
    }

    /// Send a request and return status plus body without judging either.
    ///
    /// Non-JSON bodies come back as a JSON string; empty bodies as `null`.
    pub(crate) async fn send_raw(
        &self,
        request: RequestBuilder,
    ) -> Result<(StatusCode, Value), ApiError> {
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(status = status.as_u16(), url = %response.url().path(), "Gateway response");

        let text = response.text().await?;
        let value = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };

        Ok((status, value))
    }
}

fn with_bearer(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => request.bearer_auth(token),
        None => request,
    }
}

/// Decode a checked JSON body into `T`.
pub(crate) fn decode<T: DeserializeOwned>(status: StatusCode, value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode {
        status: status.as_u16(),
        message: e.to_string(),
    })
}

/// `error` field of a JSON object body, if it is set to something truthy.
///
/// `null`, `false`, `0` and blank strings mean "no error".
pub(crate) fn error_field(value: &Value) -> Option<String> {
    match value.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Best human-readable message for a failed response.
fn remote_message(status: StatusCode, value: &Value) -> String {
    if let Some(message) = error_field(value) {
        return message;
    }
    if let Some(Value::String(message)) = value.get("message") {
        return message.clone();
    }
    match value {
        Value::String(text) if !text.trim().is_empty() => text.trim().to_string(),
        _ => status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16())),
    }
}
