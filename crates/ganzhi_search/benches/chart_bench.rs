use chrono::{TimeZone, Utc};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ganzhi_base::Gender;
use ganzhi_search::{
    SolarTerm, chart_for_birth, jie_at_or_before, luck_cycles_for_birth, solar_term_event,
    solar_terms_for_year,
};
use ganzhi_time::{BirthTime, DayBoundary};

fn solar_term_bench(c: &mut Criterion) {
    let instant = Utc.with_ymd_and_hms(2024, 2, 10, 4, 0, 0).unwrap();

    let mut group = c.benchmark_group("solar_terms");
    group.bench_function("single_term", |b| {
        b.iter(|| solar_term_event(black_box(2024), SolarTerm::StartOfSpring))
    });
    group.bench_function("full_year", |b| b.iter(|| solar_terms_for_year(black_box(2024))));
    group.bench_function("jie_at_or_before", |b| {
        b.iter(|| jie_at_or_before(black_box(&instant)))
    });
    group.finish();
}

fn chart_bench(c: &mut Criterion) {
    let birth = BirthTime::new(
        Utc.with_ymd_and_hms(2024, 2, 10, 4, 0, 0).unwrap(),
        480,
        DayBoundary::ZiHour,
    )
    .unwrap();

    let mut group = c.benchmark_group("chart");
    group.bench_function("chart_for_birth", |b| {
        b.iter(|| chart_for_birth(black_box(&birth)))
    });
    group.bench_function("luck_cycles_for_birth", |b| {
        b.iter(|| luck_cycles_for_birth(black_box(&birth), Gender::Male, 8))
    });
    group.finish();
}

criterion_group!(benches, solar_term_bench, chart_bench);
criterion_main!(benches);
