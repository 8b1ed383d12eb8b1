//! Business profile intake: raw form input, validation, and the webhook envelope.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Strategy bias forwarded to the webhook. Not interpreted locally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrategyMode {
    #[default]
    #[serde(rename = "Balanced")]
    Balanced,
    #[serde(rename = "Aggressive Growth")]
    AggressiveGrowth,
    #[serde(rename = "Low Budget")]
    LowBudget,
    #[serde(rename = "Creative Marketing")]
    CreativeMarketing,
}

impl StrategyMode {
    pub const ALL: [StrategyMode; 4] = [
        StrategyMode::Balanced,
        StrategyMode::AggressiveGrowth,
        StrategyMode::LowBudget,
        StrategyMode::CreativeMarketing,
    ];

    /// Human label, identical to the wire value.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            StrategyMode::Balanced => "Balanced",
            StrategyMode::AggressiveGrowth => "Aggressive Growth",
            StrategyMode::LowBudget => "Low Budget",
            StrategyMode::CreativeMarketing => "Creative Marketing",
        }
    }
}

impl std::fmt::Display for StrategyMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StrategyMode {
    type Err = ValidationError;

    /// Accepts the human labels case-insensitively, plus kebab/snake case
    /// (`aggressive-growth`, `low_budget`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_lowercase().replace(['-', '_'], " ");
        let collapsed = normalised.split_whitespace().collect::<Vec<_>>().join(" ");

        Self::ALL
            .into_iter()
            .find(|mode| mode.label().to_lowercase() == collapsed)
            .ok_or_else(|| ValidationError::UnknownStrategyMode(s.to_string()))
    }
}

/// Raw, unvalidated form input.
#[derive(Debug, Clone, Default)]
pub struct ProfileDraft {
    pub name: String,
    pub business_type: String,
    pub location: String,
    pub target_audience: String,
    pub budget: u64,
    pub strategy_mode: StrategyMode,
    pub more_details: Option<String>,
}

impl ProfileDraft {
    /// Validate the draft into an immutable [`BusinessProfile`].
    ///
    /// Required text fields are trimmed before the emptiness check and stored
    /// trimmed. Every missing field is listed in a single error.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MissingFields`] if any of name, business type,
    ///   location, or target audience is empty.
    /// - [`ValidationError::NonPositiveBudget`] if the budget is zero.
    pub fn validate(self) -> Result<BusinessProfile, ValidationError> {
        let required = [
            ("business name", &self.name),
            ("business type", &self.business_type),
            ("location", &self.location),
            ("target audience", &self.target_audience),
        ];
        let missing: Vec<&'static str> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(label, _)| *label)
            .collect();

        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        if self.budget == 0 {
            return Err(ValidationError::NonPositiveBudget);
        }

        let more_details = self
            .more_details
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        Ok(BusinessProfile {
            name: self.name.trim().to_string(),
            business_type: self.business_type.trim().to_string(),
            location: self.location.trim().to_string(),
            target_audience: self.target_audience.trim().to_string(),
            budget: self.budget,
            strategy_mode: self.strategy_mode,
            more_details,
        })
    }
}

/// A validated business profile. Only constructible through
/// [`ProfileDraft::validate`], and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessProfile {
    name: String,
    business_type: String,
    location: String,
    target_audience: String,
    budget: u64,
    strategy_mode: StrategyMode,
    more_details: Option<String>,
}

impl BusinessProfile {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn business_type(&self) -> &str {
        &self.business_type
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub fn target_audience(&self) -> &str {
        &self.target_audience
    }

    /// Marketing budget in whole PKR.
    #[must_use]
    pub fn budget(&self) -> u64 {
        self.budget
    }

    #[must_use]
    pub fn strategy_mode(&self) -> StrategyMode {
        self.strategy_mode
    }

    #[must_use]
    pub fn more_details(&self) -> Option<&str> {
        self.more_details.as_deref()
    }

    /// The JSON body posted to the webhook.
    #[must_use]
    pub fn envelope(&self) -> WebhookEnvelope<'_> {
        WebhookEnvelope {
            business_profile: WireProfile {
                business_name: &self.name,
                business_type: &self.business_type,
                location: &self.location,
                target_audience: &self.target_audience,
                budget: self.budget,
                strategy_mode: self.strategy_mode,
                more_details: self.more_details.as_deref().unwrap_or(""),
            },
        }
    }
}

/// `{"business_profile": {...}}` request body.
#[derive(Debug, Serialize)]
pub struct WebhookEnvelope<'a> {
    business_profile: WireProfile<'a>,
}

#[derive(Debug, Serialize)]
struct WireProfile<'a> {
    business_name: &'a str,
    business_type: &'a str,
    location: &'a str,
    target_audience: &'a str,
    budget: u64,
    strategy_mode: StrategyMode,
    more_details: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme_draft() -> ProfileDraft {
        ProfileDraft {
            name: "Acme".to_string(),
            business_type: "Shoes".to_string(),
            location: "Lahore".to_string(),
            target_audience: "18-35".to_string(),
            budget: 50_000,
            strategy_mode: StrategyMode::Balanced,
            more_details: None,
        }
    }

    #[test]
    fn valid_draft_produces_profile() {
        let profile = acme_draft().validate().expect("draft should validate");
        assert_eq!(profile.name(), "Acme");
        assert_eq!(profile.budget(), 50_000);
        assert_eq!(profile.strategy_mode(), StrategyMode::Balanced);
        assert!(profile.more_details().is_none());
    }

    #[test]
    fn each_required_field_is_enforced() {
        let blankers: [fn(&mut ProfileDraft); 4] = [
            |d| d.name.clear(),
            |d| d.business_type.clear(),
            |d| d.location = "   ".to_string(),
            |d| d.target_audience.clear(),
        ];
        for blank in blankers {
            let mut draft = acme_draft();
            blank(&mut draft);
            let err = draft.validate().unwrap_err();
            assert!(
                matches!(err, ValidationError::MissingFields(ref f) if f.len() == 1),
                "expected a single missing field, got: {err:?}"
            );
        }
    }

    #[test]
    fn all_missing_fields_reported_in_one_error() {
        let draft = ProfileDraft {
            budget: 1000,
            ..ProfileDraft::default()
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingFields(vec![
                "business name",
                "business type",
                "location",
                "target audience"
            ])
        );
        assert!(err.to_string().starts_with("please fill in all mandatory fields"));
    }

    #[test]
    fn zero_budget_rejected() {
        let mut draft = acme_draft();
        draft.budget = 0;
        assert_eq!(draft.validate().unwrap_err(), ValidationError::NonPositiveBudget);
    }

    #[test]
    fn fields_are_trimmed_and_blank_details_dropped() {
        let mut draft = acme_draft();
        draft.name = "  Acme  ".to_string();
        draft.more_details = Some("   ".to_string());
        let profile = draft.validate().unwrap();
        assert_eq!(profile.name(), "Acme");
        assert!(profile.more_details().is_none());
    }

    #[test]
    fn envelope_matches_wire_shape() {
        let mut draft = acme_draft();
        draft.strategy_mode = StrategyMode::AggressiveGrowth;
        let profile = draft.validate().unwrap();
        let value = serde_json::to_value(profile.envelope()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "business_profile": {
                    "business_name": "Acme",
                    "business_type": "Shoes",
                    "location": "Lahore",
                    "target_audience": "18-35",
                    "budget": 50000,
                    "strategy_mode": "Aggressive Growth",
                    "more_details": ""
                }
            })
        );
    }

    #[test]
    fn strategy_mode_parses_labels_and_kebab_case() {
        assert_eq!("Balanced".parse::<StrategyMode>().unwrap(), StrategyMode::Balanced);
        assert_eq!(
            "aggressive-growth".parse::<StrategyMode>().unwrap(),
            StrategyMode::AggressiveGrowth
        );
        assert_eq!("LOW BUDGET".parse::<StrategyMode>().unwrap(), StrategyMode::LowBudget);
        assert_eq!(
            "creative_marketing".parse::<StrategyMode>().unwrap(),
            StrategyMode::CreativeMarketing
        );
    }

    #[test]
    fn strategy_mode_rejects_unknown() {
        let err = "yolo".parse::<StrategyMode>().unwrap_err();
        assert!(matches!(err, ValidationError::UnknownStrategyMode(ref s) if s == "yolo"));
    }
}
