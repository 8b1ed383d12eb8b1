//! The profile/report pair produced by one successful submission.

use serde_json::Value;
use thiserror::Error;

use crate::profile::BusinessProfile;
use crate::strategy::StrategyReport;

/// Why a webhook body could not be accepted as a strategy payload.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("response is not valid JSON: {0}")]
    NotJson(#[source] serde_json::Error),

    #[error("response JSON is {0}, expected an object")]
    NotAnObject(&'static str),
}

/// The verbatim upstream JSON alongside its coerced, typed view.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportPayload {
    raw: Value,
    report: StrategyReport,
}

impl ReportPayload {
    /// Accept a parsed JSON value as a payload.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::NotAnObject`] if the top-level value is not a
    /// JSON object.
    pub fn from_value(raw: Value) -> Result<Self, PayloadError> {
        if !raw.is_object() {
            return Err(PayloadError::NotAnObject(json_kind(&raw)));
        }
        let report = StrategyReport::from_value(&raw);
        Ok(Self { raw, report })
    }

    /// Parse a response body. Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::NotJson`] if the body does not parse, or
    /// [`PayloadError::NotAnObject`] if it is not a JSON object.
    pub fn from_json_str(body: &str) -> Result<Self, PayloadError> {
        let raw: Value = serde_json::from_str(body.trim()).map_err(PayloadError::NotJson)?;
        Self::from_value(raw)
    }

    #[must_use]
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    #[must_use]
    pub fn report(&self) -> &StrategyReport {
        &self.report
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A profile paired with the report it produced. Exports always compute
/// amounts against this profile's budget.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportCycle {
    profile: BusinessProfile,
    payload: ReportPayload,
}

impl ReportCycle {
    #[must_use]
    pub fn new(profile: BusinessProfile, payload: ReportPayload) -> Self {
        Self { profile, payload }
    }

    #[must_use]
    pub fn profile(&self) -> &BusinessProfile {
        &self.profile
    }

    #[must_use]
    pub fn payload(&self) -> &ReportPayload {
        &self.payload
    }

    #[must_use]
    pub fn report(&self) -> &StrategyReport {
        self.payload.report()
    }
}
