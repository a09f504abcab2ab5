// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_SESSION_FILE: &str = ".recipy/session.json";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the API gateway (no trailing slash)
    pub api_gateway_url: String,
    /// Where the session token is persisted
    pub session_file: PathBuf,
    /// Per-request timeout
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `API_GATEWAY_URL` is required and must not be blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let api_gateway_url =
            env::var("API_GATEWAY_URL").map_err(|_| ConfigError::Missing("API_GATEWAY_URL"))?;

        let request_timeout = match env::var("RECIPY_REQUEST_TIMEOUT_SECS") {
            Ok(raw) => Duration::from_secs(raw.trim().parse().map_err(|_| {
                ConfigError::Invalid {
                    var: "RECIPY_REQUEST_TIMEOUT_SECS",
                    value: raw.clone(),
                }
            })?),
            Err(_) => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        Ok(Self {
            api_gateway_url: normalize_base_url(&api_gateway_url, "API_GATEWAY_URL")?,
            session_file: env::var("RECIPY_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_SESSION_FILE)),
            request_timeout,
        })
    }

    /// Config pointing at a local gateway, for tests only.
    pub fn test_default() -> Self {
        Self {
            api_gateway_url: "http://127.0.0.1:3030".to_string(),
            session_file: PathBuf::from("target/test-session.json"),
            request_timeout: Duration::from_secs(5),
        }
    }
}

/// Trim whitespace and trailing slashes, rejecting an empty result.
pub fn normalize_base_url(raw: &str, var: &'static str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::Empty(var));
    }
    Ok(trimmed.to_string())
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Environment variable {0} must not be empty")]
    Empty(&'static str),

    #[error("Invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}
