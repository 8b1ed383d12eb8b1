//! Budget breakdown rows and currency formatting.

use marketlens_core::ReportCycle;
use rust_decimal::{Decimal, RoundingStrategy};

/// One row of the budget table, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetRow {
    pub category: String,
    /// e.g. `"60%"`.
    pub percentage: String,
    /// e.g. `"PKR 30,000"`, or `"PKR N/A"` when the amount overflows.
    pub amount: String,
    pub amount_value: Option<Decimal>,
}

/// Rows for every category, in payload order, priced against the budget of
/// the profile that produced the report.
#[must_use]
pub fn budget_rows(cycle: &ReportCycle) -> Vec<BudgetRow> {
    let budget = cycle.profile().budget();
    cycle
        .report()
        .budget_allocation
        .iter()
        .map(|share| {
            let amount_value = allocation_amount(budget, share.percentage);
            BudgetRow {
                category: share.category.clone(),
                percentage: format!("{}%", format_percentage(share.percentage)),
                amount: amount_value.map_or_else(|| "PKR N/A".to_string(), format_pkr),
                amount_value,
            }
        })
        .collect()
}

/// `budget * percentage / 100`, rounded half-to-even to whole rupees.
///
/// Returns `None` if the percentage is not representable or the product
/// overflows.
#[must_use]
pub fn allocation_amount(budget: u64, percentage: f64) -> Option<Decimal> {
    let pct = Decimal::try_from(percentage).ok()?;
    Decimal::from(budget)
        .checked_mul(pct)?
        .checked_div(Decimal::ONE_HUNDRED)
        .map(|amount| amount.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven))
}

/// Integral values print without a fraction (`60`), others as given (`33.5`).
#[must_use]
pub fn format_percentage(percentage: f64) -> String {
    if percentage.fract() == 0.0 && percentage.abs() < 1e15 {
        format!("{percentage:.0}")
    } else {
        percentage.to_string()
    }
}

/// `PKR 30,000`; the amount is rounded to whole rupees first.
#[must_use]
pub fn format_pkr(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);
    format!("PKR {}", group_thousands(&rounded.to_string()))
}

/// Insert `,` every three digits of an integer string, keeping any sign.
#[must_use]
pub fn group_thousands(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}")
}

#[cfg(test)]
mod tests {
    use marketlens_core::{ProfileDraft, ReportPayload, StrategyMode};

    use super::*;

    fn cycle(budget: u64, allocation: serde_json::Value) -> ReportCycle {
        let profile = ProfileDraft {
            name: "Acme".to_string(),
            business_type: "Shoes".to_string(),
            location: "Lahore".to_string(),
            target_audience: "18-35".to_string(),
            budget,
            strategy_mode: StrategyMode::Balanced,
            more_details: None,
        }
        .validate()
        .unwrap();
        let payload =
            ReportPayload::from_value(serde_json::json!({ "Budget_Allocation_PKR": allocation }))
                .unwrap();
        ReportCycle::new(profile, payload)
    }

    #[test]
    fn acme_rows_match_expected_table() {
        let rows = budget_rows(&cycle(50_000, serde_json::json!({"Ads": 60, "Content": 40})));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].category, "Ads");
        assert_eq!(rows[0].percentage, "60%");
        assert_eq!(rows[0].amount, "PKR 30,000");
        assert_eq!(rows[1].category, "Content");
        assert_eq!(rows[1].percentage, "40%");
        assert_eq!(rows[1].amount, "PKR 20,000");
    }

    #[test]
    fn full_allocation_amounts_sum_to_budget() {
        let rows = budget_rows(&cycle(
            100_000,
            serde_json::json!({"Ads": 33.3, "Content": 33.3, "Events": 33.4}),
        ));
        let total: Decimal = rows.iter().filter_map(|r| r.amount_value).sum();
        assert_eq!(total, Decimal::from(100_000));
    }

    #[test]
    fn fractional_percentage_keeps_fraction() {
        let rows = budget_rows(&cycle(10_000, serde_json::json!({"Ads": 12.5})));
        assert_eq!(rows[0].percentage, "12.5%");
        assert_eq!(rows[0].amount, "PKR 1,250");
    }

    #[test]
    fn amount_rounds_half_to_even() {
        // 1_001 * 50 / 100 = 500.5 -> 500
        assert_eq!(allocation_amount(1_001, 50.0), Some(Decimal::from(500)));
        // 1_003 * 50 / 100 = 501.5 -> 502
        assert_eq!(allocation_amount(1_003, 50.0), Some(Decimal::from(502)));
    }

    #[test]
    fn group_thousands_handles_short_long_and_negative() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("1234567"), "1,234,567");
        assert_eq!(group_thousands("-5000"), "-5,000");
    }

    #[test]
    fn format_pkr_groups_and_rounds() {
        assert_eq!(format_pkr(Decimal::new(12_345_675, 2)), "PKR 123,457");
    }

    #[test]
    fn format_percentage_integral_and_fractional() {
        assert_eq!(format_percentage(60.0), "60");
        assert_eq!(format_percentage(33.3), "33.3");
    }
}
