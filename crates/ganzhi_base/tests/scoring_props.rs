//! Property tests for the sexagenary table and element scoring.

use ganzhi_base::{
    ALL_BRANCHES, ALL_STEMS, Chart, ElementVector, JiaZi, balance_index, pillar_contribution,
    pillar_from_index, score_chart,
};
use proptest::prelude::*;

fn arb_chart() -> impl Strategy<Value = Chart> {
    (0i64..60, 0i64..60, 0i64..60, 0i64..60).prop_map(|(y, m, d, h)| {
        Chart::new(
            pillar_from_index(y),
            pillar_from_index(m),
            pillar_from_index(d),
            pillar_from_index(h),
        )
    })
}

fn arb_vector() -> impl Strategy<Value = ElementVector> {
    prop::array::uniform5(0.0f64..10.0).prop_map(ElementVector::from_array)
}

proptest! {
    #[test]
    fn pillar_from_index_has_period_sixty(i in -1_000_000i64..1_000_000) {
        prop_assert_eq!(pillar_from_index(i), pillar_from_index(i + 60));
    }

    #[test]
    fn cycle_index_matches_reduced_index(i in -1_000_000i64..1_000_000) {
        prop_assert_eq!(i64::from(pillar_from_index(i).cycle_index()), i.rem_euclid(60));
    }

    #[test]
    fn raw_total_is_sum_of_pillars(chart in arb_chart()) {
        let v = score_chart(&chart);
        let parts: f64 = chart.pillars().iter().map(|p| pillar_contribution(p).total()).sum();
        prop_assert!((v.total() - parts).abs() < 1e-9);
        prop_assert!((v.total() - 8.0).abs() < 1e-9);
    }

    #[test]
    fn normalized_sums_to_one_or_zero(v in arb_vector()) {
        let n = v.normalized();
        if v.total() > 0.0 {
            prop_assert!((n.total() - 1.0).abs() < 1e-9);
        } else {
            prop_assert_eq!(n, ElementVector::ZERO);
        }
    }

    #[test]
    fn balance_stays_in_range(v in arb_vector()) {
        let b = balance_index(&v);
        prop_assert!((0.0..=100.0).contains(&b), "balance {b}");
    }

    #[test]
    fn balance_falls_moving_away_from_uniform(
        target in arb_vector(),
        t1 in 0.0f64..1.0,
        t2 in 0.0f64..1.0,
    ) {
        prop_assume!(target.total() > 0.0);
        let (near, far) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
        let p = target.normalized().to_array();
        let mix = |t: f64| ElementVector::from_array(std::array::from_fn(|i| (1.0 - t) * 0.2 + t * p[i]));
        prop_assert!(balance_index(&mix(near)) + 1e-9 >= balance_index(&mix(far)));
    }
}

#[test]
fn new_accepts_exactly_the_cycle_pairs() {
    let mut accepted = Vec::new();
    for s in ALL_STEMS {
        for b in ALL_BRANCHES {
            if let Some(p) = JiaZi::new(s, b) {
                accepted.push(p.cycle_index());
            }
        }
    }
    accepted.sort_unstable();
    assert_eq!(accepted, (0..60).collect::<Vec<u8>>());
}
