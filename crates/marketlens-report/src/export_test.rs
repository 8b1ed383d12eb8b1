use marketlens_core::{ProfileDraft, ReportPayload, StrategyMode};
use serde_json::json;

use super::*;

fn profile(name: &str, budget: u64) -> BusinessProfile {
    ProfileDraft {
        name: name.to_string(),
        business_type: "Shoes".to_string(),
        location: "Lahore".to_string(),
        target_audience: "18-35".to_string(),
        budget,
        strategy_mode: StrategyMode::Balanced,
        more_details: None,
    }
    .validate()
    .expect("fixture profile is valid")
}

fn acme_payload() -> serde_json::Value {
    json!({
        "Key_Differentiator_Idea": "Eco packaging",
        "Strategy_Summary": ["Launch", "Scale"],
        "Budget_Allocation_PKR": {"Ads": 60, "Content": 40},
        "SWOT_Analysis": {
            "Strengths": ["Brand"],
            "Weaknesses": [],
            "Opportunities": [],
            "Threats": []
        }
    })
}

fn acme_cycle() -> ReportCycle {
    ReportCycle::new(
        profile("Acme", 50_000),
        ReportPayload::from_value(acme_payload()).unwrap(),
    )
}

#[test]
fn acme_summary_matches_template() {
    let summary = executive_summary(&acme_cycle());
    let expected = "
MARKETLENS STRATEGY REPORT
==========================

Business: Acme
Type: Shoes
Location: Lahore
Target Audience: 18-35
Budget: PKR 50,000
Strategy Mode: Balanced

KEY INSIGHTS:
-------------
Key Differentiator: Eco packaging

90-DAY STRATEGY:
----------------
1. Launch
2. Scale

BUDGET ALLOCATION:
-----------------
Ads: 60% (PKR 30,000)
Content: 40% (PKR 20,000)

SWOT ANALYSIS:
---------------
Strengths:
- Brand

Weaknesses:


Opportunities:


Threats:

";
    assert_eq!(summary, expected);
}

#[test]
fn empty_quadrant_keeps_header_without_bullets() {
    let summary = executive_summary(&acme_cycle());
    let weaknesses = summary
        .split("Weaknesses:\n")
        .nth(1)
        .expect("Weaknesses header present");
    let section = weaknesses.split("Opportunities:").next().unwrap();
    assert!(!section.contains("- "), "unexpected bullet in: {section:?}");
    assert!(summary.contains("Threats:\n"));
}

#[test]
fn summary_of_empty_report_uses_defaults() {
    let cycle = ReportCycle::new(
        profile("Acme", 50_000),
        ReportPayload::from_value(json!({})).unwrap(),
    );
    let summary = executive_summary(&cycle);
    assert!(summary.contains("Key Differentiator: N/A\n"));
    assert!(summary.contains("90-DAY STRATEGY:\n----------------\n\n\nBUDGET ALLOCATION:"));
    for header in ["Strengths:", "Weaknesses:", "Opportunities:", "Threats:"] {
        assert!(summary.contains(header), "missing {header}");
    }
}

#[test]
fn summary_prices_against_paired_profile_budget() {
    let cycle = ReportCycle::new(
        profile("Acme", 80_000),
        ReportPayload::from_value(acme_payload()).unwrap(),
    );
    let summary = executive_summary(&cycle);
    assert!(summary.contains("Budget: PKR 80,000\n"));
    assert!(summary.contains("Ads: 60% (PKR 48,000)\n"));
}

#[test]
fn json_export_round_trips() {
    let cycle = acme_cycle();
    let exported = json_export(&cycle).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&exported).unwrap();
    assert_eq!(&parsed, cycle.payload().raw());

    let reparsed = ReportPayload::from_value(parsed).unwrap();
    assert_eq!(reparsed.report(), cycle.report());
}

#[test]
fn json_export_is_pretty_and_preserves_key_order() {
    let exported = json_export(&acme_cycle()).unwrap();
    assert!(exported.starts_with("{\n  \"Key_Differentiator_Idea\""));
    let ads = exported.find("\"Ads\"").unwrap();
    let content = exported.find("\"Content\"").unwrap();
    assert!(ads < content);
}

#[test]
fn json_export_keeps_non_ascii_text() {
    let cycle = ReportCycle::new(
        profile("Acme", 50_000),
        ReportPayload::from_value(json!({"Key_Differentiator_Idea": "خوشبو café"})).unwrap(),
    );
    let exported = json_export(&cycle).unwrap();
    assert!(exported.contains("خوشبو café"));
    assert!(!exported.contains("\\u"));
}

#[test]
fn artifact_names_follow_business_name() {
    let names = ArtifactNames::for_profile(&profile("Acme", 50_000));
    assert_eq!(names.report_json, "Acme_MarketLens_Report.json");
    assert_eq!(names.executive_summary, "Acme_Executive_Summary.txt");
    assert_eq!(names.charts_json, "Acme_Charts.json");
}

#[test]
fn artifact_names_replace_path_separators() {
    let names = ArtifactNames::for_profile(&profile("Shoes/Bags: \"Best\"", 50_000));
    assert_eq!(names.report_json, "Shoes_Bags_ _Best__MarketLens_Report.json");
}
