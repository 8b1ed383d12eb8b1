//! Sectioned rendering of a report cycle.
//!
//! Each visual block is built on its own; a failing builder becomes an
//! inline [`Section::Warning`] and the remaining sections still render.

use marketlens_core::ReportCycle;
use serde_json::{Map, Value};

use crate::builders::{budget_pie, strategy_timeline, swot_quadrant};
use crate::chart::ChartSpec;
use crate::error::RenderError;
use crate::table::{budget_rows, BudgetRow};

pub const NO_BUDGET_DATA: &str = "No budget allocation data available in the response.";

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Add the SWOT quadrant chart, which is off by default.
    pub include_swot_chart: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    Chart { id: &'static str, chart: ChartSpec },
    BudgetTable(Vec<BudgetRow>),
    Warning(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderedReport {
    pub sections: Vec<Section>,
}

impl RenderedReport {
    pub fn charts(&self) -> impl Iterator<Item = (&'static str, &ChartSpec)> {
        self.sections.iter().filter_map(|s| match s {
            Section::Chart { id, chart } => Some((*id, chart)),
            _ => None,
        })
    }

    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().filter_map(|s| match s {
            Section::Warning(msg) => Some(msg.as_str()),
            _ => None,
        })
    }

    #[must_use]
    pub fn budget_table(&self) -> Option<&[BudgetRow]> {
        self.sections.iter().find_map(|s| match s {
            Section::BudgetTable(rows) => Some(rows.as_slice()),
            _ => None,
        })
    }

    /// All successfully built charts as one pretty JSON object keyed by id.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Serialize`] if a chart cannot be serialized.
    pub fn chart_bundle(&self) -> Result<String, RenderError> {
        let mut bundle = Map::new();
        for (id, chart) in self.charts() {
            bundle.insert(id.to_string(), serde_json::to_value(chart)?);
        }
        Ok(serde_json::to_string_pretty(&Value::Object(bundle))?)
    }
}

/// Build one chart section, degrading a failure to a warning.
fn chart_section(
    id: &'static str,
    what: &str,
    built: Result<ChartSpec, RenderError>,
) -> Section {
    match built {
        Ok(chart) => Section::Chart { id, chart },
        Err(e) => {
            tracing::warn!(chart = id, error = %e, "chart builder failed; rendering warning instead");
            Section::Warning(format!("Could not generate {what}: {e}"))
        }
    }
}

/// Render every section of the report for the paired profile.
#[must_use]
pub fn render_report(cycle: &ReportCycle, options: &RenderOptions) -> RenderedReport {
    let report = cycle.report();
    let mut sections = Vec::new();

    if !report.strategy_summary.is_empty() {
        sections.push(chart_section(
            "strategy_timeline",
            "timeline visualization",
            Ok(strategy_timeline(&report.strategy_summary)),
        ));
    }

    if report.budget_allocation.is_empty() {
        sections.push(Section::Warning(NO_BUDGET_DATA.to_string()));
    } else {
        sections.push(chart_section(
            "budget_allocation",
            "budget chart",
            budget_pie(&report.budget_allocation),
        ));
        sections.push(Section::BudgetTable(budget_rows(cycle)));
    }

    if options.include_swot_chart {
        sections.push(chart_section(
            "swot_matrix",
            "SWOT chart",
            Ok(swot_quadrant(&report.swot)),
        ));
    }

    RenderedReport { sections }
}
