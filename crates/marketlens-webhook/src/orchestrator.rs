//! One submission cycle: validate, check configuration, POST, keep the result.

use marketlens_core::{AppConfig, BusinessProfile, ProfileDraft, ReportCycle};

use crate::client::WebhookClient;
use crate::error::SubmitError;

/// A validated profile paired with a client for a configured webhook. Nothing
/// has been sent yet.
pub struct PreparedSubmission {
    profile: BusinessProfile,
    client: WebhookClient,
}

impl PreparedSubmission {
    #[must_use]
    pub fn profile(&self) -> &BusinessProfile {
        &self.profile
    }
}

/// Drives submissions and holds the most recent successful [`ReportCycle`].
///
/// The held cycle is replaced wholesale by each successful submission and
/// left untouched by a failed one.
pub struct Orchestrator {
    config: AppConfig,
    current: Option<ReportCycle>,
}

impl Orchestrator {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            current: None,
        }
    }

    /// The pair produced by the last successful submission, if any.
    #[must_use]
    pub fn current(&self) -> Option<&ReportCycle> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn into_current(self) -> Option<ReportCycle> {
        self.current
    }

    /// Validate a draft and resolve the webhook without touching the network.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Validation`] for an incomplete draft and
    /// [`SubmitError::Configuration`] when no usable webhook URL is set.
    pub fn prepare(&self, draft: ProfileDraft) -> Result<PreparedSubmission, SubmitError> {
        let profile = draft.validate()?;
        let url = self.config.webhook_url()?;
        let client = WebhookClient::new(
            url,
            self.config.request_timeout_secs,
            &self.config.user_agent,
        )?;
        Ok(PreparedSubmission { profile, client })
    }

    /// Submit a draft and, on success, replace the held cycle.
    ///
    /// Validation and the configuration check both run before any network
    /// activity.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Validation`] or [`SubmitError::Configuration`]
    /// without contacting the webhook, or any transport error from
    /// [`WebhookClient::post_profile`].
    pub async fn submit(&mut self, draft: ProfileDraft) -> Result<&ReportCycle, SubmitError> {
        let prepared = self.prepare(draft)?;
        self.send(prepared).await
    }

    /// POST a prepared submission and, on success, replace the held cycle.
    ///
    /// # Errors
    ///
    /// Any transport error from [`WebhookClient::post_profile`]; the held
    /// cycle is left untouched.
    pub async fn send(
        &mut self,
        prepared: PreparedSubmission,
    ) -> Result<&ReportCycle, SubmitError> {
        let PreparedSubmission { profile, client } = prepared;
        let payload = client.post_profile(&profile).await?;
        tracing::debug!(
            replaced_previous = self.current.is_some(),
            "storing report cycle"
        );
        Ok(self.current.insert(ReportCycle::new(profile, payload)))
    }
}
