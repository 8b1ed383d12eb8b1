//! Typed view over the webhook's strategy payload.
//!
//! The upstream JSON is produced by an LLM pipeline and is treated as
//! untrusted: any field may be missing or wrongly typed. [`StrategyReport::from_value`]
//! coerces it once, so the render path never touches raw JSON.

use serde_json::Value;

pub const KEY_DIFFERENTIATOR: &str = "Key_Differentiator_Idea";
pub const STRATEGY_SUMMARY: &str = "Strategy_Summary";
pub const BUDGET_ALLOCATION: &str = "Budget_Allocation_PKR";
pub const SWOT_ANALYSIS: &str = "SWOT_Analysis";

const NOT_AVAILABLE: &str = "N/A";

/// One category of the budget split. `percentage` is taken as given: values
/// are not guaranteed to sum to 100 and are never normalised.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetShare {
    pub category: String,
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwotQuadrant {
    Strengths,
    Weaknesses,
    Opportunities,
    Threats,
}

impl SwotQuadrant {
    pub const ALL: [SwotQuadrant; 4] = [
        SwotQuadrant::Strengths,
        SwotQuadrant::Weaknesses,
        SwotQuadrant::Opportunities,
        SwotQuadrant::Threats,
    ];

    /// Heading used both as the wire key and the display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SwotQuadrant::Strengths => "Strengths",
            SwotQuadrant::Weaknesses => "Weaknesses",
            SwotQuadrant::Opportunities => "Opportunities",
            SwotQuadrant::Threats => "Threats",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Swot {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub opportunities: Vec<String>,
    pub threats: Vec<String>,
}

impl Swot {
    #[must_use]
    pub fn items(&self, quadrant: SwotQuadrant) -> &[String] {
        match quadrant {
            SwotQuadrant::Strengths => &self.strengths,
            SwotQuadrant::Weaknesses => &self.weaknesses,
            SwotQuadrant::Opportunities => &self.opportunities,
            SwotQuadrant::Threats => &self.threats,
        }
    }

    /// Quadrants in fixed display order, paired with their items.
    pub fn quadrants(&self) -> impl Iterator<Item = (SwotQuadrant, &[String])> + '_ {
        SwotQuadrant::ALL
            .into_iter()
            .map(move |q| (q, self.items(q)))
    }

    fn from_value(value: Option<&Value>) -> Self {
        let Some(value) = value.filter(|v| !v.is_null()) else {
            return Self::default();
        };
        let Some(map) = value.as_object() else {
            tracing::warn!(field = SWOT_ANALYSIS, "expected an object; ignoring");
            return Self::default();
        };

        let list = |q: SwotQuadrant| string_list(map.get(q.label()), q.label());
        Self {
            strengths: list(SwotQuadrant::Strengths),
            weaknesses: list(SwotQuadrant::Weaknesses),
            opportunities: list(SwotQuadrant::Opportunities),
            threats: list(SwotQuadrant::Threats),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StrategyReport {
    pub key_differentiator: String,
    pub strategy_summary: Vec<String>,
    pub budget_allocation: Vec<BudgetShare>,
    pub swot: Swot,
}

impl Default for StrategyReport {
    fn default() -> Self {
        Self {
            key_differentiator: NOT_AVAILABLE.to_string(),
            strategy_summary: Vec::new(),
            budget_allocation: Vec::new(),
            swot: Swot::default(),
        }
    }
}

impl StrategyReport {
    /// Coerce an upstream payload into a report. Never fails: anything
    /// unusable degrades to its empty default.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let Some(map) = value.as_object() else {
            tracing::warn!("strategy payload is not a JSON object; using empty report");
            return Self::default();
        };

        let key_differentiator = match map.get(KEY_DIFFERENTIATOR) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            None | Some(Value::Null) => NOT_AVAILABLE.to_string(),
            Some(_) => {
                tracing::warn!(field = KEY_DIFFERENTIATOR, "expected a string; ignoring");
                NOT_AVAILABLE.to_string()
            }
        };

        Self {
            key_differentiator,
            strategy_summary: string_list(map.get(STRATEGY_SUMMARY), STRATEGY_SUMMARY),
            budget_allocation: budget_shares(map.get(BUDGET_ALLOCATION)),
            swot: Swot::from_value(map.get(SWOT_ANALYSIS)),
        }
    }
}

/// Collect a JSON array of strings. Scalars are stringified; nested values
/// are dropped.
fn string_list(value: Option<&Value>, field: &str) -> Vec<String> {
    let Some(value) = value.filter(|v| !v.is_null()) else {
        return Vec::new();
    };
    let Some(items) = value.as_array() else {
        tracing::warn!(field, "expected an array; ignoring");
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => {
                tracing::warn!(field, "dropping non-scalar list entry");
                None
            }
        })
        .collect()
}

/// Collect `category -> percentage` pairs in insertion order. Numeric strings
/// are accepted; anything else, including `NaN` and infinities, is dropped.
fn budget_shares(value: Option<&Value>) -> Vec<BudgetShare> {
    let Some(value) = value.filter(|v| !v.is_null()) else {
        return Vec::new();
    };
    let Some(map) = value.as_object() else {
        tracing::warn!(field = BUDGET_ALLOCATION, "expected an object; ignoring");
        return Vec::new();
    };

    map.iter()
        .filter_map(|(category, raw)| {
            let percentage = match raw {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => s.trim().trim_end_matches('%').trim().parse::<f64>().ok(),
                _ => None,
            }
            .filter(|p| p.is_finite());
            if percentage.is_none() {
                tracing::warn!(
                    field = BUDGET_ALLOCATION,
                    category = %category,
                    "dropping non-numeric percentage"
                );
            }
            percentage.map(|percentage| BudgetShare {
                category: category.clone(),
                percentage,
            })
        })
        .collect()
}
