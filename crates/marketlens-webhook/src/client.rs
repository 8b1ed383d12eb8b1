//! HTTP client for the strategy-generation webhook.
//!
//! Wraps `reqwest` with a long request timeout and maps transport outcomes
//! onto [`SubmitError`] variants. Only HTTP 200 counts as success.

use std::time::{Duration, Instant};

use marketlens_core::{BusinessProfile, ConfigError, ReportPayload};
use reqwest::{Client, StatusCode, Url};

use crate::error::SubmitError;

/// Time allowed to establish the TCP/TLS connection. Failing here means the
/// webhook is unreachable, whatever the request timeout.
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Client for a single webhook endpoint.
pub struct WebhookClient {
    client: Client,
    url: Url,
    timeout_secs: u64,
}

impl WebhookClient {
    /// Creates a client that POSTs to `url`.
    ///
    /// # Errors
    ///
    /// - [`SubmitError::Configuration`] if `url` does not parse.
    /// - [`SubmitError::Http`] if the underlying `reqwest::Client` cannot be
    ///   constructed.
    pub fn new(url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, SubmitError> {
        Self::with_connect_timeout(url, timeout_secs, CONNECT_TIMEOUT_SECS, user_agent)
    }

    fn with_connect_timeout(
        url: &str,
        timeout_secs: u64,
        connect_timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, SubmitError> {
        let url = Url::parse(url.trim()).map_err(|e| ConfigError::WebhookNotConfigured {
            reason: format!("'{url}' is not a valid URL: {e}"),
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            url,
            timeout_secs,
        })
    }

    #[must_use]
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    /// Posts the profile envelope and parses the strategy payload.
    ///
    /// The call blocks for up to the configured timeout and is never retried.
    ///
    /// # Errors
    ///
    /// - [`SubmitError::Timeout`] if no response arrives in time.
    /// - [`SubmitError::Unreachable`] if the connection cannot be established,
    ///   including when the connect timeout elapses.
    /// - [`SubmitError::UpstreamStatus`] on any status other than 200.
    /// - [`SubmitError::ResponseParse`] if the 200 body is not a JSON object.
    /// - [`SubmitError::Http`] for any other transport failure.
    pub async fn post_profile(
        &self,
        profile: &BusinessProfile,
    ) -> Result<ReportPayload, SubmitError> {
        let started = Instant::now();
        tracing::info!(
            business_type = profile.business_type(),
            location = profile.location(),
            strategy_mode = %profile.strategy_mode(),
            "submitting business profile to webhook"
        );

        let response = self
            .client
            .post(self.url.clone())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(&profile.envelope())
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        if status != StatusCode::OK {
            tracing::warn!(status = status.as_u16(), elapsed_ms, "webhook returned non-200 status");
            return Err(SubmitError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| self.transport_error(e))?;
        let payload = ReportPayload::from_json_str(&body).map_err(|source| {
            tracing::warn!(error = %source, elapsed_ms, "webhook body is not a strategy payload");
            SubmitError::ResponseParse {
                raw: body.trim().to_string(),
                source,
            }
        })?;

        tracing::info!(
            elapsed_ms,
            phases = payload.report().strategy_summary.len(),
            budget_categories = payload.report().budget_allocation.len(),
            "strategy report received"
        );
        Ok(payload)
    }

    fn transport_error(&self, err: reqwest::Error) -> SubmitError {
        if err.is_connect() {
            tracing::warn!(error = %err, "could not connect to webhook");
            SubmitError::Unreachable(err)
        } else if err.is_timeout() {
            tracing::warn!(timeout_secs = self.timeout_secs, "webhook request timed out");
            SubmitError::Timeout {
                timeout_secs: self.timeout_secs,
            }
        } else {
            tracing::warn!(error = %err, "webhook request failed");
            SubmitError::Http(err)
        }
    }
}
