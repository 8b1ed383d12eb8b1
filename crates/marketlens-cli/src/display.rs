//! Terminal rendering of a report cycle.

use std::fmt::Write as _;

use marketlens_core::{BusinessProfile, ReportCycle};
use marketlens_report::chart::TimelineChart;
use marketlens_report::{BudgetRow, ChartSpec, RenderedReport, Section};

const RULE_WIDTH: usize = 60;

/// Summary of what is being submitted, shown while the webhook works.
pub(crate) fn format_processing_card(profile: &BusinessProfile) -> String {
    format!(
        "Processing strategy for {}\n  {} in {}\n  Target: {}\n  Mode: {}",
        profile.name(),
        profile.business_type(),
        profile.location(),
        profile.target_audience(),
        profile.strategy_mode(),
    )
}

/// Full text view: header, roadmap, rendered sections in order, then SWOT.
pub(crate) fn format_report(cycle: &ReportCycle, rendered: &RenderedReport) -> String {
    let profile = cycle.profile();
    let report = cycle.report();
    let mut out = String::new();

    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    let _ = writeln!(out, "MarketLens Strategy: {}", profile.name());
    let _ = writeln!(
        out,
        "{} in {} | {} | {}",
        profile.business_type(),
        profile.location(),
        profile.target_audience(),
        profile.strategy_mode()
    );
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));

    heading(&mut out, "Strategic Roadmap");
    let _ = writeln!(out, "Key Differentiator: {}", report.key_differentiator);
    if report.strategy_summary.is_empty() {
        let _ = writeln!(out, "No strategy phases returned.");
    }
    for (i, phase) in report.strategy_summary.iter().enumerate() {
        let _ = writeln!(out, "{}. {phase}", i + 1);
    }

    for section in &rendered.sections {
        match section {
            Section::Chart {
                chart: ChartSpec::Timeline(timeline),
                ..
            } => write_timeline(&mut out, timeline),
            Section::BudgetTable(rows) => write_budget_table(&mut out, rows),
            Section::Warning(msg) => {
                let _ = writeln!(out, "\nwarning: {msg}");
            }
            Section::Chart { .. } => {}
        }
    }

    heading(&mut out, "SWOT Analysis");
    for (quadrant, items) in report.swot.quadrants() {
        let _ = writeln!(out, "[{}]", quadrant.label());
        if items.is_empty() {
            let _ = writeln!(out, "  No data available");
        }
        for item in items {
            let _ = writeln!(out, "  - {item}");
        }
    }

    out
}

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{title}\n{}", "-".repeat(title.len()));
}

fn write_timeline(out: &mut String, timeline: &TimelineChart) {
    heading(out, "90-Day Timeline");
    for bar in &timeline.bars {
        let _ = writeln!(
            out,
            "{:<9} day {:>3}-{:<3} {}",
            bar.phase, bar.start, bar.end, bar.description
        );
    }
}

fn write_budget_table(out: &mut String, rows: &[BudgetRow]) {
    heading(out, "Budget Breakdown");
    let _ = writeln!(out, "{:<24} {:>10} {:>16}", "CATEGORY", "SHARE", "AMOUNT");
    for row in rows {
        let _ = writeln!(
            out,
            "{:<24} {:>10} {:>16}",
            row.category, row.percentage, row.amount
        );
    }
}
