mod artifacts;
mod display;
mod generate;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use marketlens_core::{ProfileDraft, StrategyMode};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "marketlens")]
#[command(about = "MarketLens: AI marketing strategy reports from your business profile")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Submit a business profile and render the returned strategy
    Generate {
        #[command(flatten)]
        profile: ProfileArgs,
        #[command(flatten)]
        output: OutputArgs,
        /// Print the request body without contacting the webhook
        #[arg(long)]
        dry_run: bool,
    },
    /// Re-render a previously saved webhook response for a profile
    Render {
        /// Path to a saved strategy report JSON file
        #[arg(long)]
        report: PathBuf,
        #[command(flatten)]
        profile: ProfileArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Show whether the webhook is configured
    Check,
}

/// Business profile form fields.
#[derive(Debug, Args)]
struct ProfileArgs {
    /// Business name (e.g., PerfumeVerse)
    #[arg(long)]
    name: String,
    /// Product or service type (e.g., Perfumes, Electronics)
    #[arg(long)]
    business_type: String,
    /// Target market or city (e.g., Karachi)
    #[arg(long)]
    location: String,
    /// Target audience (e.g., "18-45 Male, Students")
    #[arg(long)]
    target_audience: String,
    /// Marketing budget in PKR
    #[arg(long, default_value = "100000")]
    budget: u64,
    /// Balanced, Aggressive Growth, Low Budget, or Creative Marketing
    #[arg(long, default_value = "Balanced")]
    strategy_mode: StrategyMode,
    /// Additional details for the strategy
    #[arg(long)]
    more_details: Option<String>,
}

impl ProfileArgs {
    fn into_draft(self) -> ProfileDraft {
        ProfileDraft {
            name: self.name,
            business_type: self.business_type,
            location: self.location,
            target_audience: self.target_audience,
            budget: self.budget,
            strategy_mode: self.strategy_mode,
            more_details: self.more_details,
        }
    }
}

#[derive(Debug, Args)]
struct OutputArgs {
    /// Directory for exported files (defaults to MARKETLENS_OUTPUT_DIR)
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// Include the SWOT quadrant chart in the chart export
    #[arg(long)]
    swot_chart: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // A bad config is reported by the command itself, with a hint.
    let config = marketlens_core::load_app_config();
    let log_level = config.as_ref().map_or("info", |c| c.log_level.as_str());
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Generate {
            profile,
            output,
            dry_run,
        } => generate::run_generate(config, profile.into_draft(), &output, dry_run).await,
        Commands::Render {
            report,
            profile,
            output,
        } => generate::run_render(config.as_ref(), &report, profile.into_draft(), &output),
        Commands::Check => Ok(generate::run_check(config.as_ref())),
    }
}
