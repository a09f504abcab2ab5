// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types shared by the gateway client and services.

use crate::config::ConfigError;

/// Errors surfaced by the API client façade.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Gateway returned {status}: {message}")]
    Remote { status: u16, message: String },

    #[error("Unexpected response body ({status}): {message}")]
    Decode { status: u16, message: String },
}

impl ApiError {
    /// HTTP status attached to the error, if the request reached the gateway.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Remote { status, .. } | ApiError::Decode { status, .. } => Some(*status),
            ApiError::Configuration(_) | ApiError::Transport(_) => None,
        }
    }

    /// True when the gateway rejected the bearer token (or its absence).
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            ApiError::Remote {
                status: 401 | 403,
                ..
            }
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Remote { status: 404, .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

/// Errors from the persistent key-value store backing the session.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt storage file: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("Storage lock poisoned")]
    Poisoned,
}

/// Result type alias for façade calls.
pub type Result<T> = std::result::Result<T, ApiError>;
