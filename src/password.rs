//! # Password Suggestions
//!
//! Suggested WiFi passwords come from an external service. The service is
//! reached through the [`PasswordSource`] trait so callers and tests can
//! swap it out.
//!
//! A failed call is reported once; there are no retries.

use async_trait::async_trait;
use std::time::Duration;

use crate::error::CardError;

/// How hard the suggested password should be to guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasswordStrength {
    #[default]
    Simple,
    Strong,
}

impl PasswordStrength {
    pub fn from_flag(strong: bool) -> Self {
        if strong { Self::Strong } else { Self::Simple }
    }

    /// Path segment used by the HTTP service.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Strong => "strong",
        }
    }
}

/// A fallible source of suggested passwords.
#[async_trait]
pub trait PasswordSource: Send + Sync {
    async fn generate(&self, strength: PasswordStrength) -> Result<String, CardError>;
}

/// Plain-text HTTP password service (`GET <base>/simple`, `GET <base>/strong`).
pub struct HttpPasswordSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPasswordSource {
    pub fn new(base_url: impl Into<String>) -> Result<Self, CardError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("cardpress/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| CardError::PasswordService(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Endpoint URL for `strength`.
    pub fn url_for(&self, strength: PasswordStrength) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), strength.as_str())
    }
}

#[async_trait]
impl PasswordSource for HttpPasswordSource {
    async fn generate(&self, strength: PasswordStrength) -> Result<String, CardError> {
        let url = self.url_for(strength);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CardError::PasswordService(format!("request to {} failed: {}", url, e)))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(CardError::PasswordService(format!(
                "{} returned {}",
                url, status
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| CardError::PasswordService(format!("reading body failed: {}", e)))?;
        Ok(body.trim().to_string())
    }
}
