//! Pure mappings from report data to chart specifications.
//!
//! Every builder accepts empty input and returns an empty-but-valid chart.

use marketlens_core::{BudgetShare, Swot, SwotQuadrant};
use rust_decimal::Decimal;

use crate::chart::{
    Annotation, Bar, BarChart, ChartSpec, DonutChart, Layout, Margin, QuadrantChart, Slice,
    TimelineBar, TimelineChart, PIE_PALETTE,
};
use crate::error::RenderError;
use crate::table::format_pkr;

/// Width of each synthetic timeline block, in abstract days.
pub const PHASE_SPAN: u32 = 30;

/// Items shown per SWOT quadrant.
pub const SWOT_ITEMS_PER_QUADRANT: usize = 3;

fn tight_margin() -> Margin {
    Margin {
        top: 10,
        bottom: 10,
        left: 10,
        right: 10,
    }
}

/// Donut chart with one slice per category, in input order.
///
/// Values are the given percentages; an allocation summing to less than 100
/// is plotted as-is, not scaled up.
///
/// # Errors
///
/// Returns [`RenderError::InvalidPercentage`] for a negative or non-finite
/// percentage.
pub fn budget_pie(allocation: &[BudgetShare]) -> Result<ChartSpec, RenderError> {
    let slices = allocation
        .iter()
        .zip(PIE_PALETTE.iter().cycle())
        .map(|(share, color)| {
            if !share.percentage.is_finite() || share.percentage < 0.0 {
                return Err(RenderError::InvalidPercentage {
                    category: share.category.clone(),
                    value: share.percentage,
                });
            }
            Ok(Slice {
                label: share.category.clone(),
                value: share.percentage,
                color: (*color).to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ChartSpec::Donut(DonutChart {
        hole: 0.4,
        slices,
        layout: Layout::new(320, tight_margin(), true),
    }))
}

/// One block per phase: phase `i` spans `[30i, 30(i+1))`.
#[must_use]
pub fn strategy_timeline(phases: &[String]) -> ChartSpec {
    let bars = phases
        .iter()
        .zip(0u32..)
        .map(|(description, i)| TimelineBar {
            phase: format!("Phase {}", i + 1),
            start: i * PHASE_SPAN,
            end: (i + 1) * PHASE_SPAN,
            description: description.clone(),
        })
        .collect();

    ChartSpec::Timeline(TimelineChart {
        bars,
        layout: Layout::new(
            300,
            Margin {
                top: 30,
                bottom: 20,
                left: 20,
                right: 20,
            },
            false,
        ),
    })
}

/// Anchor `(x, top_y)`, marker colour and text prefix for each quadrant of
/// the 2×2 grid.
fn quadrant_placement(quadrant: SwotQuadrant) -> (f64, f64, &'static str, &'static str) {
    match quadrant {
        SwotQuadrant::Strengths => (0.75, 0.8, "rgba(40,167,69,0.2)", "💪"),
        SwotQuadrant::Weaknesses => (0.25, 0.8, "rgba(220,53,69,0.2)", "⚠️"),
        SwotQuadrant::Opportunities => (0.75, 0.2, "rgba(23,162,184,0.2)", "🚀"),
        SwotQuadrant::Threats => (0.25, 0.2, "rgba(255,193,7,0.2)", "🔴"),
    }
}

/// Up to three annotated markers per quadrant, stacked downward from the
/// quadrant's anchor in steps of 0.2.
#[must_use]
pub fn swot_quadrant(swot: &Swot) -> ChartSpec {
    let annotations = swot
        .quadrants()
        .flat_map(|(quadrant, items)| {
            let (x, top, bgcolor, marker) = quadrant_placement(quadrant);
            items
                .iter()
                .take(SWOT_ITEMS_PER_QUADRANT)
                .zip(0u32..)
                .map(move |(item, i)| Annotation {
                    quadrant: quadrant.label().to_string(),
                    text: format!("{marker} {item}"),
                    x,
                    y: top - f64::from(i) * 0.2,
                    bgcolor: bgcolor.to_string(),
                })
        })
        .collect();

    ChartSpec::Quadrant(QuadrantChart {
        annotations,
        layout: Layout::new(
            500,
            Margin {
                top: 50,
                bottom: 20,
                left: 20,
                right: 20,
            },
            false,
        )
        .with_title("SWOT Analysis Matrix"),
    })
}

/// One bar per price category; a missing price is plotted as zero.
#[must_use]
pub fn price_comparison_bar(prices: &[(String, Option<f64>)]) -> ChartSpec {
    let bars = prices
        .iter()
        .map(|(label, price)| {
            let value = price.filter(|p| p.is_finite()).unwrap_or(0.0);
            let text = Decimal::try_from(value)
                .map(format_pkr)
                .unwrap_or_else(|_| "PKR N/A".to_string());
            Bar {
                label: label.clone(),
                value,
                text,
            }
        })
        .collect();

    ChartSpec::Bar(BarChart {
        x_label: "Price Category".to_string(),
        y_label: "Average Price (PKR)".to_string(),
        bars,
        layout: Layout::new(320, tight_margin(), false),
    })
}
