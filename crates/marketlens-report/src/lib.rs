//! Charts, tables, and exports rendered from a [`marketlens_core::ReportCycle`].
//!
//! Chart builders are pure functions producing serializable [`ChartSpec`]
//! values. [`render_report`] assembles them into independent sections so one
//! failing visual degrades to a warning instead of aborting the report.

pub mod builders;
pub mod chart;
pub mod error;
pub mod export;
pub mod render;
pub mod table;

pub use builders::{budget_pie, price_comparison_bar, strategy_timeline, swot_quadrant};
pub use chart::ChartSpec;
pub use error::RenderError;
pub use export::{executive_summary, json_export, ArtifactNames};
pub use render::{render_report, RenderOptions, RenderedReport, Section};
pub use table::{budget_rows, BudgetRow};
