use std::path::{Path, PathBuf};

use anyhow::Context;
use marketlens_core::ReportCycle;
use marketlens_report::{executive_summary, json_export, ArtifactNames, RenderedReport};

/// Paths of the files written for one report cycle.
#[derive(Debug)]
pub(crate) struct WrittenArtifacts {
    pub(crate) report_json: PathBuf,
    pub(crate) executive_summary: PathBuf,
    pub(crate) charts_json: Option<PathBuf>,
}

impl WrittenArtifacts {
    pub(crate) fn paths(&self) -> impl Iterator<Item = &Path> {
        [
            Some(&self.report_json),
            Some(&self.executive_summary),
            self.charts_json.as_ref(),
        ]
        .into_iter()
        .flatten()
        .map(PathBuf::as_path)
    }
}

/// Write the JSON report, the executive summary and, when any chart was
/// built, the chart bundle into `dir`.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or any file cannot be
/// serialized or written.
pub(crate) fn write_artifacts(
    dir: &Path,
    cycle: &ReportCycle,
    rendered: &RenderedReport,
) -> anyhow::Result<WrittenArtifacts> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    let names = ArtifactNames::for_profile(cycle.profile());

    let report_json = dir.join(&names.report_json);
    write_file(&report_json, &json_export(cycle)?)?;

    let summary = dir.join(&names.executive_summary);
    write_file(&summary, &executive_summary(cycle))?;

    let charts_json = if rendered.charts().next().is_some() {
        let path = dir.join(&names.charts_json);
        write_file(&path, &rendered.chart_bundle()?)?;
        Some(path)
    } else {
        None
    };

    Ok(WrittenArtifacts {
        report_json,
        executive_summary: summary,
        charts_json,
    })
}

fn write_file(path: &Path, contents: &str) -> anyhow::Result<()> {
    std::fs::write(path, contents)
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "wrote artifact");
    Ok(())
}

#[cfg(test)]
mod tests {
    use marketlens_core::{ProfileDraft, ReportPayload, StrategyMode};
    use marketlens_report::{render_report, RenderOptions};
    use serde_json::json;

    use super::*;

    fn cycle(payload: serde_json::Value) -> ReportCycle {
        let profile = ProfileDraft {
            name: "Acme".to_string(),
            business_type: "Shoes".to_string(),
            location: "Lahore".to_string(),
            target_audience: "18-35".to_string(),
            budget: 50_000,
            strategy_mode: StrategyMode::Balanced,
            more_details: None,
        }
        .validate()
        .expect("fixture profile is valid");
        ReportCycle::new(profile, ReportPayload::from_value(payload).unwrap())
    }

    #[test]
    fn writes_all_three_files() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("exports");
        let cycle = cycle(json!({
            "Strategy_Summary": ["Launch"],
            "Budget_Allocation_PKR": {"Ads": 100}
        }));
        let rendered = render_report(&cycle, &RenderOptions::default());

        let written = write_artifacts(&out, &cycle, &rendered).unwrap();

        assert_eq!(written.report_json, out.join("Acme_MarketLens_Report.json"));
        let saved: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&written.report_json).unwrap())
                .unwrap();
        assert_eq!(&saved, cycle.payload().raw());

        let summary = std::fs::read_to_string(&written.executive_summary).unwrap();
        assert!(summary.contains("Ads: 100% (PKR 50,000)"));

        let charts = written.charts_json.as_ref().expect("charts written");
        assert!(charts.ends_with("Acme_Charts.json"));
        assert_eq!(written.paths().count(), 3);
    }

    #[test]
    fn skips_chart_bundle_without_charts() {
        let tmp = tempfile::tempdir().unwrap();
        let cycle = cycle(json!({}));
        let rendered = render_report(&cycle, &RenderOptions::default());

        let written = write_artifacts(tmp.path(), &cycle, &rendered).unwrap();

        assert!(written.charts_json.is_none());
        assert!(!tmp.path().join("Acme_Charts.json").exists());
        assert_eq!(written.paths().count(), 2);
    }
}
