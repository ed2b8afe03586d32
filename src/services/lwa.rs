// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login with Amazon (LWA) token client.
//!
//! Exchanges a long-lived refresh token for a short-lived access token
//! using the OAuth2 `refresh_token` grant. One call per run, no retry.

use crate::error::AppError;
use crate::models::{AccessToken, Credentials};
use crate::services::http::read_json;

/// LWA OAuth client.
#[derive(Clone)]
pub struct LwaClient {
    http: reqwest::Client,
    token_url: String,
}

impl LwaClient {
    /// Create a client for the given token endpoint.
    pub fn new(http: reqwest::Client, token_url: impl Into<String>) -> Self {
        Self {
            http,
            token_url: token_url.into(),
        }
    }

    /// Form fields for the refresh-token grant.
    pub fn grant_form(credentials: &Credentials) -> [(&'static str, &str); 4] {
        [
            ("grant_type", "refresh_token"),
            ("client_id", credentials.client_id.as_str()),
            ("client_secret", credentials.client_secret.as_str()),
            ("refresh_token", credentials.refresh_token.as_str()),
        ]
    }

    /// Exchange the refresh token for an access token.
    ///
    /// POST {token_url}
    /// Content-Type: application/x-www-form-urlencoded
    pub async fn exchange_refresh_token(
        &self,
        credentials: &Credentials,
    ) -> Result<AccessToken, AppError> {
        tracing::debug!(url = %self.token_url, "Requesting LWA access token");

        let response = self
            .http
            .post(&self.token_url)
            .form(&Self::grant_form(credentials))
            .send()
            .await
            .map_err(|e| AppError::transport("LWA token request failed", e))?;

        let token: AccessToken = read_json(response, "LWA token").await?;

        tracing::info!(
            token_type = %token.token_type,
            expires_in = token.expires_in,
            "LWA access token acquired"
        );
        Ok(token)
    }
}
