//! Downloadable exports: the verbatim JSON report and the plain-text
//! executive summary.

use marketlens_core::{BusinessProfile, ReportCycle};
use regex::Regex;

use crate::error::RenderError;
use crate::table::{budget_rows, group_thousands};

/// The upstream payload, pretty-printed with two-space indentation.
///
/// Key order and non-ASCII text are preserved, so parsing the output yields
/// the same structure the webhook returned.
///
/// # Errors
///
/// Returns [`RenderError::Serialize`] if serialization fails.
pub fn json_export(cycle: &ReportCycle) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(cycle.payload().raw())?)
}

/// Plain-text executive summary for the paired profile and report.
///
/// An empty SWOT quadrant keeps its header with no bullet lines.
#[must_use]
pub fn executive_summary(cycle: &ReportCycle) -> String {
    let profile = cycle.profile();
    let report = cycle.report();

    let phases = report
        .strategy_summary
        .iter()
        .enumerate()
        .map(|(i, phase)| format!("{}. {phase}", i + 1))
        .collect::<Vec<_>>()
        .join("\n");

    let allocation = budget_rows(cycle)
        .into_iter()
        .map(|row| format!("{}: {} ({})", row.category, row.percentage, row.amount))
        .collect::<Vec<_>>()
        .join("\n");

    let mut out = format!(
        "\nMARKETLENS STRATEGY REPORT\n\
         ==========================\n\
         \n\
         Business: {name}\n\
         Type: {business_type}\n\
         Location: {location}\n\
         Target Audience: {audience}\n\
         Budget: PKR {budget}\n\
         Strategy Mode: {mode}\n\
         \n\
         KEY INSIGHTS:\n\
         -------------\n\
         Key Differentiator: {differentiator}\n\
         \n\
         90-DAY STRATEGY:\n\
         ----------------\n\
         {phases}\n\
         \n\
         BUDGET ALLOCATION:\n\
         -----------------\n\
         {allocation}\n\
         \n\
         SWOT ANALYSIS:\n\
         ---------------\n",
        name = profile.name(),
        business_type = profile.business_type(),
        location = profile.location(),
        audience = profile.target_audience(),
        budget = group_thousands(&profile.budget().to_string()),
        mode = profile.strategy_mode(),
        differentiator = report.key_differentiator,
    );

    let quadrants = report
        .swot
        .quadrants()
        .map(|(quadrant, items)| {
            let bullets = items
                .iter()
                .map(|item| format!("- {item}"))
                .collect::<Vec<_>>()
                .join("\n");
            format!("{}:\n{bullets}", quadrant.label())
        })
        .collect::<Vec<_>>()
        .join("\n\n");
    out.push_str(&quadrants);
    out.push('\n');
    out
}

/// File names for the artifacts of one report cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactNames {
    pub report_json: String,
    pub executive_summary: String,
    pub charts_json: String,
}

impl ArtifactNames {
    #[must_use]
    pub fn for_profile(profile: &BusinessProfile) -> Self {
        let stem = file_stem(profile.name());
        Self {
            report_json: format!("{stem}_MarketLens_Report.json"),
            executive_summary: format!("{stem}_Executive_Summary.txt"),
            charts_json: format!("{stem}_Charts.json"),
        }
    }
}

/// Replace characters that are not allowed in file names with `_`.
fn file_stem(name: &str) -> String {
    let re = Regex::new(r#"[/\\:*?"<>|\x00-\x1f]"#).expect("valid file name regex");
    re.replace_all(name, "_").into_owned()
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
