//! Submission path to the strategy webhook.
//!
//! [`Orchestrator`] validates a draft, checks configuration, POSTs the
//! profile envelope through [`WebhookClient`], and keeps the latest
//! successful [`marketlens_core::ReportCycle`].

pub mod client;
pub mod error;
pub mod orchestrator;

pub use client::{WebhookClient, CONNECT_TIMEOUT_SECS};
pub use error::{SubmitError, SubmitErrorKind};
pub use orchestrator::{Orchestrator, PreparedSubmission};
