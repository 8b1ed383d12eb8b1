//! Domain model and configuration shared by the MarketLens crates.
//!
//! A [`ProfileDraft`] is validated into an immutable [`BusinessProfile`],
//! submitted to the strategy webhook, and paired with the coerced
//! [`StrategyReport`] it produced as a [`ReportCycle`].

pub mod app_config;
pub mod config;
pub mod cycle;
pub mod profile;
pub mod strategy;

use thiserror::Error;

pub use app_config::{AppConfig, DEFAULT_REQUEST_TIMEOUT_SECS, PLACEHOLDER_WEBHOOK_URL};
pub use config::{load_app_config, load_app_config_from_env};
pub use cycle::{PayloadError, ReportCycle, ReportPayload};
pub use profile::{BusinessProfile, ProfileDraft, StrategyMode, WebhookEnvelope};
pub use strategy::{BudgetShare, StrategyReport, Swot, SwotQuadrant};

#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("webhook URL is not configured: {reason}")]
    WebhookNotConfigured { reason: String },
}

/// Rejections raised before a profile is allowed anywhere near the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("please fill in all mandatory fields (missing: {})", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("marketing budget must be a positive amount")]
    NonPositiveBudget,

    #[error("unknown strategy mode '{0}'; expected one of: Balanced, Aggressive Growth, Low Budget, Creative Marketing")]
    UnknownStrategyMode(String),
}
