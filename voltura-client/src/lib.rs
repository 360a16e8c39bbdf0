//! Typed client for the customization endpoints.
//!
//! One attempt per call, no retry or backoff; a failed save or load is
//! reported to the caller, who decides whether to try again.

use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;
use voltura_catalog::StoredCustomization;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Missing, empty, or rejected credentials. Distinguished so callers can
    /// prompt for sign-in instead of showing a generic failure.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The server answered with a non-auth error status.
    #[error("request failed: {0}")]
    Failed(String),

    /// The request never produced a response.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct LoadResponse {
    customization: Option<StoredCustomization>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

pub struct PersistenceClient {
    http: reqwest::Client,
    base_url: String,
}

impl PersistenceClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Persist a customization under the authenticated user's key,
    /// overwriting whatever was there.
    pub async fn save(
        &self,
        token: &str,
        customization: &StoredCustomization,
    ) -> Result<(), ClientError> {
        if token.trim().is_empty() {
            return Err(ClientError::Unauthorized(
                "Authorization required".to_string(),
            ));
        }

        let url = format!("{}/save-customization", self.base_url);
        debug!("Saving customization for {} to {}", customization.car_id, url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .json(customization)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized(error_message(response).await)),
            _ => Err(ClientError::Failed(error_message(response).await)),
        }
    }

    /// Fetch the authenticated user's saved customization, if any.
    pub async fn load(&self, token: &str) -> Result<Option<StoredCustomization>, ClientError> {
        if token.trim().is_empty() {
            return Err(ClientError::Unauthorized(
                "Authorization required".to_string(),
            ));
        }

        let url = format!("{}/get-customization", self.base_url);
        debug!("Loading customization from {}", url);

        let response = self.http.get(&url).bearer_auth(token).send().await?;

        match response.status() {
            status if status.is_success() => {
                let body: LoadResponse = response.json().await?;
                Ok(body.customization)
            }
            StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized(error_message(response).await)),
            _ => Err(ClientError::Failed(error_message(response).await)),
        }
    }
}

/// Best-effort extraction of the server's `{"error": ...}` body; falls back
/// to the status line when the body is missing or unparseable.
async fn error_message(response: reqwest::Response) -> String {
    let status = response.status();
    match response.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => format!("request failed with status {}", status),
    }
}
