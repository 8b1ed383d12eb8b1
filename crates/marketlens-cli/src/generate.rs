use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use marketlens_core::{AppConfig, ConfigError, ProfileDraft, ReportCycle, ReportPayload};
use marketlens_report::{render_report, RenderOptions};
use marketlens_webhook::{Orchestrator, SubmitError};

use crate::artifacts::write_artifacts;
use crate::display::{format_processing_card, format_report};
use crate::OutputArgs;

/// Submit a profile to the webhook and present the returned strategy.
///
/// Validation, configuration and transport failures are reported to the user
/// and turn into a failing exit code; no artifact is written for them.
///
/// # Errors
///
/// Returns an error if the request body cannot be serialized or an artifact
/// cannot be written. Artifacts are written one by one, so a failed write can
/// leave the earlier files in place.
pub(crate) async fn run_generate(
    config: Result<AppConfig, ConfigError>,
    draft: ProfileDraft,
    output: &OutputArgs,
    dry_run: bool,
) -> anyhow::Result<ExitCode> {
    if dry_run {
        let profile = match draft.validate() {
            Ok(profile) => profile,
            Err(e) => return Ok(report_failure(&SubmitError::from(e))),
        };
        println!("{}", serde_json::to_string_pretty(&profile.envelope())?);
        return Ok(ExitCode::SUCCESS);
    }

    let config = match config {
        Ok(config) => config,
        Err(e) => return Ok(report_failure(&SubmitError::from(e))),
    };
    let out_dir = resolve_out_dir(&config, output);

    let mut orchestrator = Orchestrator::new(config);
    let prepared = match orchestrator.prepare(draft) {
        Ok(prepared) => prepared,
        Err(e) => return Ok(report_failure(&e)),
    };

    println!("{}", format_processing_card(prepared.profile()));

    let cycle = match orchestrator.send(prepared).await {
        Ok(cycle) => cycle,
        Err(e) => return Ok(report_failure(&e)),
    };

    println!("Strategy generated successfully.");
    present(cycle, &out_dir, output.swot_chart)?;
    Ok(ExitCode::SUCCESS)
}

/// Re-render a saved webhook response against the given profile.
///
/// # Errors
///
/// Returns an error if the report file cannot be read or is not a JSON
/// object, or if an artifact cannot be written.
pub(crate) fn run_render(
    config: Result<&AppConfig, &ConfigError>,
    report_path: &Path,
    draft: ProfileDraft,
    output: &OutputArgs,
) -> anyhow::Result<ExitCode> {
    let config = match config {
        Ok(config) => config,
        Err(e) => return Ok(report_failure(&SubmitError::from(e.clone()))),
    };
    let profile = match draft.validate() {
        Ok(profile) => profile,
        Err(e) => return Ok(report_failure(&SubmitError::from(e))),
    };

    let body = std::fs::read_to_string(report_path)
        .with_context(|| format!("failed to read report file {}", report_path.display()))?;
    let payload = ReportPayload::from_json_str(&body)
        .with_context(|| format!("failed to parse report file {}", report_path.display()))?;

    let out_dir = resolve_out_dir(config, output);
    present(&ReportCycle::new(profile, payload), &out_dir, output.swot_chart)?;
    Ok(ExitCode::SUCCESS)
}

/// Print whether the configuration loads and a usable webhook URL is set.
pub(crate) fn run_check(config: Result<&AppConfig, &ConfigError>) -> ExitCode {
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            println!("{:<18} invalid", "config:");
            return report_failure(&SubmitError::from(e.clone()));
        }
    };

    println!("{:<18} {}s", "request timeout:", config.request_timeout_secs);
    println!("{:<18} {}", "output dir:", config.output_dir.display());
    match config.webhook_url() {
        Ok(_) => {
            println!("{:<18} configured (URL redacted)", "webhook:");
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{:<18} not configured", "webhook:");
            report_failure(&SubmitError::from(e))
        }
    }
}

fn resolve_out_dir(config: &AppConfig, output: &OutputArgs) -> PathBuf {
    output
        .out_dir
        .clone()
        .unwrap_or_else(|| config.output_dir.clone())
}

fn present(cycle: &ReportCycle, out_dir: &Path, include_swot_chart: bool) -> anyhow::Result<()> {
    let rendered = render_report(cycle, &RenderOptions { include_swot_chart });
    print!("{}", format_report(cycle, &rendered));

    let written = write_artifacts(out_dir, cycle, &rendered)?;
    println!();
    println!("Exports:");
    for path in written.paths() {
        println!("  {}", path.display());
    }
    Ok(())
}

fn report_failure(err: &SubmitError) -> ExitCode {
    tracing::warn!(kind = ?err.kind(), "command failed");
    eprintln!("error: {err}");
    if let Some(hint) = err.hint() {
        eprintln!("hint: {hint}");
    }
    ExitCode::FAILURE
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod tests;
