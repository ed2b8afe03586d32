// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with a single exit-code policy.

use crate::config::ConfigError;

/// Application error type returned by every stage of a run.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Transport error: {message}")]
    Transport { message: String, timeout: bool },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("API error: HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Chart render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Process exit code for this error. Every failure aborts the run.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Build a transport error from a reqwest failure, keeping the timeout flag.
    pub fn transport(context: &str, err: reqwest::Error) -> Self {
        AppError::Transport {
            message: format!("{}: {}", context, err),
            timeout: err.is_timeout(),
        }
    }

    /// True for transport failures caused by the client timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, AppError::Transport { timeout: true, .. })
    }
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AppError>;
