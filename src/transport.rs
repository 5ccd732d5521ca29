use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::profile::Profile;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {}{}", .status.as_u16(), .detail.as_deref().map(|d| format!(": {}", d)).unwrap_or_default())]
    Status {
        status: StatusCode,
        detail: Option<String>,
    },

    #[error("backend rejected profile: {0}")]
    Rejected(String),

    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// Body returned by the collection endpoint.
#[derive(Debug, Deserialize)]
pub struct SaveResponse {
    // Error replies carry only `error` (and sometimes `missing`).
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
    pub error: Option<String>,
}

/// Sends profile records to the collection endpoint. One POST per call, no
/// retries; no timeout beyond the client default.
pub struct Transport {
    client: reqwest::Client,
    endpoint: String,
}

impl Transport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Transport {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// POST the record as JSON. Returns the backend's message on success.
    pub async fn send(&self, profile: &Profile) -> Result<Option<String>, SaveError> {
        if profile.name.is_none() || profile.headline.is_none() || profile.url.is_none() {
            warn!("Profile is missing name, headline or url; backend may reject it");
        }

        info!("Sending profile to {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .json(profile)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let parsed = serde_json::from_str::<SaveResponse>(&body);

        if !status.is_success() {
            let detail = parsed.ok().and_then(|r| r.error.or(r.message));
            warn!("Save failed with HTTP {}", status);
            return Err(SaveError::Status { status, detail });
        }

        let result = parsed.map_err(|e| SaveError::Decode(e.to_string()))?;
        if !result.success {
            let reason = result
                .error
                .or(result.message)
                .unwrap_or_else(|| "no reason given".to_string());
            warn!("Backend rejected profile: {}", reason);
            return Err(SaveError::Rejected(reason));
        }

        info!("Profile saved: {}", result.message.as_deref().unwrap_or("ok"));
        Ok(result.message)
    }
}

// ── Tests ──
