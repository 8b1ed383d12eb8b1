use std::path::PathBuf;

use crate::ConfigError;

/// Request timeout when `MARKETLENS_REQUEST_TIMEOUT_SECS` is unset. The
/// upstream runs an LLM pipeline and regularly takes minutes.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 180;

/// Placeholder shipped in sample configuration; treated the same as an unset URL.
pub const PLACEHOLDER_WEBHOOK_URL: &str = "https://hook.us2.make.com/your_webhook_here";

#[derive(Clone)]
pub struct AppConfig {
    pub webhook_url: Option<String>,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub output_dir: PathBuf,
    pub log_level: String,
}

impl AppConfig {
    /// Returns the configured webhook URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::WebhookNotConfigured`] when the URL is unset,
    /// blank, or still the sample placeholder.
    pub fn webhook_url(&self) -> Result<&str, ConfigError> {
        let url = self
            .webhook_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or_else(|| ConfigError::WebhookNotConfigured {
                reason: "set MARKETLENS_WEBHOOK_URL to your scenario's webhook address".to_string(),
            })?;

        if url == PLACEHOLDER_WEBHOOK_URL {
            return Err(ConfigError::WebhookNotConfigured {
                reason: "MARKETLENS_WEBHOOK_URL still holds the placeholder value; replace it with your actual webhook URL".to_string(),
            });
        }

        Ok(url)
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field(
                "webhook_url",
                &self.webhook_url.as_ref().map(|_| "[redacted]"),
            )
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("output_dir", &self.output_dir)
            .field("log_level", &self.log_level)
            .finish()
    }
}
