//! Serializable chart specifications.
//!
//! The vocabulary mirrors common plotting front-ends (donut, bar, timeline,
//! annotated quadrant) so a spec can be handed to any renderer as JSON.

use serde::Serialize;

pub const BACKGROUND_COLOR: &str = "#F8FAFC";
pub const FONT_COLOR: &str = "#9AA6B2";

/// Slice colours, cycled when there are more categories than entries.
pub const PIE_PALETTE: [&str; 5] = ["#9AA6B2", "#BCCCDC", "#D9EAFD", "#6C757D", "#ADB5BD"];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartSpec {
    Donut(DonutChart),
    Bar(BarChart),
    Timeline(TimelineChart),
    Quadrant(QuadrantChart),
}

impl ChartSpec {
    /// Number of plotted marks (slices, bars, or annotations).
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            ChartSpec::Donut(c) => c.slices.len(),
            ChartSpec::Bar(c) => c.bars.len(),
            ChartSpec::Timeline(c) => c.bars.len(),
            ChartSpec::Quadrant(c) => c.annotations.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Margin {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub height: u32,
    pub margin: Margin,
    pub show_legend: bool,
    pub plot_bgcolor: String,
    pub paper_bgcolor: String,
    pub font_color: String,
}

impl Layout {
    #[must_use]
    pub fn new(height: u32, margin: Margin, show_legend: bool) -> Self {
        Self {
            title: None,
            height,
            margin,
            show_legend,
            plot_bgcolor: BACKGROUND_COLOR.to_string(),
            paper_bgcolor: BACKGROUND_COLOR.to_string(),
            font_color: FONT_COLOR.to_string(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    pub label: String,
    pub value: f64,
    pub color: String,
}

/// Ring chart; `hole` is the inner radius as a fraction of the outer one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DonutChart {
    pub hole: f64,
    pub slices: Vec<Slice>,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<Bar>,
    pub layout: Layout,
}

/// A phase placed on an abstract day axis; `[start, end)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineBar {
    pub phase: String,
    pub start: u32,
    pub end: u32,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineChart {
    pub bars: Vec<TimelineBar>,
    pub layout: Layout,
}

/// Text marker positioned in paper coordinates (0..1 on both axes).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub quadrant: String,
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub bgcolor: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuadrantChart {
    pub annotations: Vec<Annotation>,
    pub layout: Layout,
}
