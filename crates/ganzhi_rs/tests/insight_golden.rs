//! Hexagram insight scores against a fixed chart.
//!
//! The 2024-02-10 male chart scores Wood 3.2, Fire 2.0, Earth 1.6,
//! Metal 1.0, Water 0.2 with a Jia (Wood) day master, so Water and Metal
//! are favorable and Wood and Fire unfavorable.

use ganzhi_rs::{
    Alignment, ChartBalance, Element, Gender, ProfileConfig, ProfileRequest, Stem,
    combine_chart_and_hexagram, compute_profile,
};
use ganzhi_yijing::{Trigram, from_trigrams};
use pretty_assertions::assert_eq;
use serde_json::json;

fn balance() -> ChartBalance {
    let req = ProfileRequest::new("2024-02-10T04:00:00Z", Gender::Male);
    let p = compute_profile(&req, &ProfileConfig::default()).unwrap();
    ChartBalance::from_vector(Stem::Jia, &p.elements.vector, 2)
}

// ---------------------------------------------------------------------------
// Chart side
// ---------------------------------------------------------------------------

#[test]
fn favorable_and_unfavorable_sets() {
    let b = balance();
    assert_eq!(b.day_master, Stem::Jia);
    assert_eq!(b.favorable, vec![Element::Water, Element::Metal]);
    assert_eq!(b.unfavorable, vec![Element::Wood, Element::Fire]);
}

// ---------------------------------------------------------------------------
// Scores
// ---------------------------------------------------------------------------

#[test]
fn doubled_qian_in_a_wood_year_clamps_to_100() {
    // 50 + 40 (Metal favorable) + 15 (doubled) + 10 (Jia year) = 115.
    let hex = from_trigrams(Trigram::Qian, Trigram::Qian);
    let i = combine_chart_and_hexagram(&balance(), hex, 2024);
    assert_eq!(i.year_pillar.display_label, "甲辰 (Jia-Chen)");
    assert_eq!(i.hexagram_element, Element::Metal);
    assert_eq!(i.support_score, 100);
    assert_eq!(i.alignment, Alignment::High);
    assert_eq!(i.rationale.len(), 3);
}

#[test]
fn doubled_li_sits_on_the_moderate_threshold() {
    // 50 - 30 (Fire unfavorable) + 15 (doubled) + 10 (Yi year) = 45.
    let hex = from_trigrams(Trigram::Li, Trigram::Li);
    let i = combine_chart_and_hexagram(&balance(), hex, 2025);
    assert_eq!(i.year_pillar.display_label, "乙巳 (Yi-Si)");
    assert_eq!(i.support_score, 45);
    assert_eq!(i.alignment, Alignment::Moderate);
}

#[test]
fn fire_over_water_in_a_fire_year_is_low() {
    // Wei Ji: 50 - 30 = 20, Bing is Fire.
    let hex = from_trigrams(Trigram::Kan, Trigram::Li);
    assert_eq!(hex.number(), 64);
    let i = combine_chart_and_hexagram(&balance(), hex, 2026);
    assert_eq!(i.support_score, 20);
    assert_eq!(i.alignment, Alignment::Low);
    assert_eq!(i.rationale.len(), 1);
}

#[test]
fn water_over_thunder_is_high() {
    // Zhun: 50 + 40 = 90.
    let hex = from_trigrams(Trigram::Zhen, Trigram::Kan);
    assert_eq!(hex.number(), 3);
    let i = combine_chart_and_hexagram(&balance(), hex, 2026);
    assert_eq!(i.hexagram_element, Element::Water);
    assert_eq!(i.support_score, 90);
    assert_eq!(i.alignment, Alignment::High);
}

#[test]
fn neutral_earth_cases() {
    // Doubled Kun: 50 + 15 = 65; Ding is Fire.
    let kun = from_trigrams(Trigram::Kun, Trigram::Kun);
    let i = combine_chart_and_hexagram(&balance(), kun, 2027);
    assert_eq!(i.support_score, 65);
    assert_eq!(i.alignment, Alignment::Moderate);

    // Meng: mountain over water, no signal at all.
    let meng = from_trigrams(Trigram::Kan, Trigram::Gen);
    assert_eq!(meng.number(), 4);
    let i = combine_chart_and_hexagram(&balance(), meng, 2028);
    assert_eq!(i.year_pillar.display_label, "戊申 (Wu-Shen)");
    assert_eq!(i.support_score, 50);
    assert!(i.rationale.is_empty());
}

// ---------------------------------------------------------------------------
// JSON shape
// ---------------------------------------------------------------------------

#[test]
fn insight_json_keys() {
    let hex = from_trigrams(Trigram::Qian, Trigram::Qian);
    let v = serde_json::to_value(combine_chart_and_hexagram(&balance(), hex, 2024)).unwrap();
    assert_eq!(v["year"], json!(2024));
    assert_eq!(v["supportScore"], json!(100));
    assert_eq!(v["alignment"], json!("high"));
    assert_eq!(v["yearPillar"]["cycleIndex"], json!(40));
    assert!(v["rationale"].is_array());
}
