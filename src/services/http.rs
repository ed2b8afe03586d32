// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared HTTP client construction and response handling.

use crate::error::AppError;
use anyhow::Context;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Build the single HTTP client used for every call in a run.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("failed building HTTP client")?;
    Ok(client)
}

/// Check the status, read the whole body, then decode it as JSON.
///
/// Body read failures are transport errors; a body that does not decode
/// is a decode error.
pub(crate) async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
    what: &str,
) -> Result<T, AppError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| AppError::transport(&format!("reading {} response", what), e))?;

    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), what, "Request rejected");
        return Err(AppError::Api {
            status: status.as_u16(),
            body,
        });
    }

    serde_json::from_str(&body)
        .map_err(|e| AppError::Decode(format!("{} response: {}", what, e)))
}
