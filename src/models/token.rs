//! OAuth credential and token models for LWA.

use serde::{Deserialize, Serialize};

/// Client credentials used for the refresh-token grant.
#[derive(Clone)]
pub struct Credentials {
    /// LWA client ID
    pub client_id: String,
    /// LWA client secret
    pub client_secret: String,
    /// Long-lived refresh token
    pub refresh_token: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}

/// Token response from the LWA token endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    /// Bearer token for SMAPI calls
    pub access_token: String,
    /// Lifetime in seconds (not tracked; a run never outlives it)
    pub expires_in: i64,
    /// Usually "bearer"
    pub token_type: String,
    /// Rotated refresh token
    pub refresh_token: String,
}

impl AccessToken {
    /// Short prefix of the access token, safe for console output.
    pub fn masked(&self) -> String {
        let prefix: String = self.access_token.chars().take(8).collect();
        if prefix.len() < self.access_token.len() {
            format!("{}…", prefix)
        } else {
            "…".to_string()
        }
    }
}
