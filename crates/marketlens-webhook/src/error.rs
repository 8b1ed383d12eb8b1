use marketlens_core::{ConfigError, PayloadError, ValidationError};
use thiserror::Error;

/// Every way a submission can end without a report. `Display` is the
/// user-facing message; [`SubmitError::hint`] adds a follow-up suggestion.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// A required field was empty; the webhook was not contacted.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The webhook URL is unset, blank, or still the placeholder.
    #[error("{0}")]
    Configuration(#[from] ConfigError),

    #[error("request timeout: the webhook took longer than {timeout_secs}s to respond")]
    Timeout { timeout_secs: u64 },

    #[error("connection error: could not reach the webhook")]
    Unreachable(#[source] reqwest::Error),

    #[error("webhook returned error {status}")]
    UpstreamStatus { status: u16 },

    /// HTTP 200 whose body is not a JSON object. `raw` is the trimmed body.
    #[error("webhook returned an unreadable response: {source}")]
    ResponseParse {
        raw: String,
        #[source]
        source: PayloadError,
    },

    /// Any other transport failure.
    #[error("unexpected error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Stable classification of [`SubmitError`], for logs and matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitErrorKind {
    Validation,
    Configuration,
    Timeout,
    Unreachable,
    UpstreamStatus,
    ResponseParse,
    Other,
}

impl SubmitError {
    #[must_use]
    pub fn kind(&self) -> SubmitErrorKind {
        match self {
            SubmitError::Validation(_) => SubmitErrorKind::Validation,
            SubmitError::Configuration(_) => SubmitErrorKind::Configuration,
            SubmitError::Timeout { .. } => SubmitErrorKind::Timeout,
            SubmitError::Unreachable(_) => SubmitErrorKind::Unreachable,
            SubmitError::UpstreamStatus { .. } => SubmitErrorKind::UpstreamStatus,
            SubmitError::ResponseParse { .. } => SubmitErrorKind::ResponseParse,
            SubmitError::Http(_) => SubmitErrorKind::Other,
        }
    }

    /// Follow-up suggestion shown under the error message, if any.
    #[must_use]
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            SubmitError::Configuration(ConfigError::InvalidEnvVar { .. }) => {
                Some("correct the named variable in your environment or .env file")
            }
            SubmitError::Configuration(ConfigError::WebhookNotConfigured { .. }) => {
                Some("update MARKETLENS_WEBHOOK_URL (or your .env file) with your actual webhook URL")
            }
            SubmitError::UpstreamStatus { .. } => {
                Some("check that your webhook scenario is active and properly configured")
            }
            SubmitError::ResponseParse { .. } => {
                Some("make sure the scenario's webhook response returns the strategy JSON")
            }
            SubmitError::Timeout { .. } | SubmitError::Unreachable(_) | SubmitError::Http(_) => {
                Some("no report was generated; please try again")
            }
            SubmitError::Validation(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_passes_through() {
        let err = SubmitError::from(ValidationError::MissingFields(vec!["location"]));
        assert_eq!(
            err.to_string(),
            "please fill in all mandatory fields (missing: location)"
        );
        assert_eq!(err.kind(), SubmitErrorKind::Validation);
        assert!(err.hint().is_none());
    }

    #[test]
    fn upstream_status_message_includes_code_and_hint() {
        let err = SubmitError::UpstreamStatus { status: 503 };
        assert_eq!(err.to_string(), "webhook returned error 503");
        assert!(err.hint().unwrap().contains("scenario is active"));
    }

    #[test]
    fn invalid_env_var_hint_points_at_the_variable() {
        let err = SubmitError::from(ConfigError::InvalidEnvVar {
            var: "MARKETLENS_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "invalid digit found in string".to_string(),
        });
        assert_eq!(err.kind(), SubmitErrorKind::Configuration);
        assert!(err.to_string().contains("MARKETLENS_REQUEST_TIMEOUT_SECS"));
        assert!(err.hint().unwrap().contains("environment or .env"));
    }

    #[test]
    fn timeout_message_includes_budget() {
        let err = SubmitError::Timeout { timeout_secs: 180 };
        assert!(err.to_string().contains("180s"));
        assert_eq!(err.kind(), SubmitErrorKind::Timeout);
    }
}
