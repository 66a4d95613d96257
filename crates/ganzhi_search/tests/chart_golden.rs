//! Golden charts computed from birth instants end to end.

use chrono::{TimeZone, Utc};
use ganzhi_search::{SolarTerm, chart_for_birth};
use ganzhi_time::{BirthTime, DayBoundary};
use pretty_assertions::assert_eq;

fn birth(y: i32, mo: u32, d: u32, h: u32, mi: u32, tz: i32, rule: DayBoundary) -> BirthTime {
    BirthTime::new(Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap(), tz, rule).unwrap()
}

#[test]
fn chart_2024_02_10_beijing_noon() {
    let info = chart_for_birth(&birth(2024, 2, 10, 4, 0, 480, DayBoundary::ZiHour)).unwrap();
    assert_eq!(info.chart.to_string(), "甲辰 丙寅 甲辰 庚午");
    assert_eq!(info.effective_year, 2024);
    assert_eq!(info.solar_month, 1);
    assert_eq!(info.month_jie.term, SolarTerm::StartOfSpring);
}

#[test]
fn chart_1984_02_02_before_start_of_spring() {
    let info = chart_for_birth(&birth(1984, 2, 2, 12, 0, 0, DayBoundary::Midnight)).unwrap();
    assert_eq!(info.chart.to_string(), "癸亥 乙丑 丙寅 甲午");
    assert_eq!(info.effective_year, 1983);
}

#[test]
fn chart_2000_01_01_morning_in_zi_month() {
    let info = chart_for_birth(&birth(2000, 1, 1, 0, 30, 480, DayBoundary::ZiHour)).unwrap();
    assert_eq!(info.chart.to_string(), "己卯 丙子 戊午 丙辰");
    assert_eq!(info.solar_month, 11);
}

#[test]
fn zi_hour_rollover_changes_day_pillar() {
    // 23:30 local on 2024-02-10.
    let zi = chart_for_birth(&birth(2024, 2, 10, 15, 30, 480, DayBoundary::ZiHour)).unwrap();
    assert_eq!(zi.chart.day.jiazi.chinese(), "乙巳");
    assert_eq!(zi.chart.hour.jiazi.chinese(), "丙子");

    let mid = chart_for_birth(&birth(2024, 2, 10, 15, 30, 480, DayBoundary::Midnight)).unwrap();
    assert_eq!(mid.chart.day.jiazi.chinese(), "甲辰");
    assert_eq!(mid.chart.hour.jiazi.chinese(), "甲子");

    // Year and month come from the UTC instant and do not move.
    assert_eq!(zi.chart.year, mid.chart.year);
    assert_eq!(zi.chart.month, mid.chart.month);
}

#[test]
fn year_flips_exactly_at_start_of_spring() {
    let before = chart_for_birth(&birth(2024, 2, 4, 8, 0, 0, DayBoundary::Midnight)).unwrap();
    let after = chart_for_birth(&birth(2024, 2, 4, 9, 0, 0, DayBoundary::Midnight)).unwrap();
    assert_eq!(before.chart.year.jiazi.chinese(), "癸卯");
    assert_eq!(after.chart.year.jiazi.chinese(), "甲辰");
    assert_eq!(before.solar_month, 12);
    assert_eq!(after.solar_month, 1);
}

#[test]
fn chart_total_element_weight_is_eight() {
    let info = chart_for_birth(&birth(1990, 7, 15, 6, 45, 120, DayBoundary::Midnight)).unwrap();
    let v = ganzhi_base::score_chart(&info.chart);
    assert!((v.total() - 8.0).abs() < 1e-9);
}
