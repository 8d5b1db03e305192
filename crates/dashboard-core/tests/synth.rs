// File: crates/dashboard-core/tests/synth.rs
// Purpose: Synthetic walk and scatter generation with pinned random sources.

use dashboard_core::{scatter_cloud, synthesize_monthly_series, RandomSource, RngSource, Sequence};

#[test]
fn zero_variance_walk_is_flat() {
    let mut rng = Sequence::constant(0.0);
    let data = synthesize_monthly_series(1000.0, 0.0, 5, &mut rng).unwrap();
    assert_eq!(data, vec![1000.0; 5]);
}

#[test]
fn pivot_draw_keeps_walk_flat_and_bias_is_upward() {
    let mut flat = Sequence::constant(0.4);
    assert_eq!(synthesize_monthly_series(500.0, 100.0, 3, &mut flat).unwrap(), vec![500.0; 3]);

    // Draws of 0.9 add 0.5 * variance each month.
    let mut up = Sequence::constant(0.9);
    assert_eq!(synthesize_monthly_series(100.0, 10.0, 3, &mut up).unwrap(), vec![105.0, 110.0, 115.0]);

    // Draws of 0 subtract 0.4 * variance.
    let mut down = Sequence::constant(0.0);
    assert_eq!(synthesize_monthly_series(100.0, 10.0, 2, &mut down).unwrap(), vec![96.0, 92.0]);
}

#[test]
fn recorded_values_are_rounded_but_running_value_is_not() {
    // +0.3 per step: 10.3, 10.6, 10.9 -> 10, 11, 11
    let mut rng = Sequence::constant(0.7);
    let data = synthesize_monthly_series(10.0, 1.0, 3, &mut rng).unwrap();
    assert_eq!(data, vec![10.0, 11.0, 11.0]);
}

#[test]
fn halves_round_toward_positive_infinity() {
    // A 0.4 draw keeps the walk on -2.5.
    let mut rng = Sequence::constant(0.4);
    let data = synthesize_monthly_series(-2.5, 10.0, 2, &mut rng).unwrap();
    assert_eq!(data, vec![-2.0, -2.0]);
}

#[test]
fn sequence_cycles_values() {
    let mut seq = Sequence::new(vec![0.1, 0.2]);
    let draws: Vec<f64> = (0..5).map(|_| seq.next_unit()).collect();
    assert_eq!(draws, vec![0.1, 0.2, 0.1, 0.2, 0.1]);
    assert_eq!(Sequence::default().next_unit(), 0.0);
}

#[test]
fn seeded_rng_is_reproducible_and_in_unit_range() {
    let a = synthesize_monthly_series(1_200_000.0, 150_000.0, 24, &mut RngSource::seeded(7)).unwrap();
    let b = synthesize_monthly_series(1_200_000.0, 150_000.0, 24, &mut RngSource::seeded(7)).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.len(), 24);

    let mut rng = RngSource::seeded(99);
    for _ in 0..1000 {
        let u = rng.next_unit();
        assert!((0.0..1.0).contains(&u));
    }
}

#[test]
fn zero_months_and_invalid_inputs() {
    let mut rng = Sequence::constant(0.5);
    assert!(synthesize_monthly_series(1.0, 1.0, 0, &mut rng).unwrap().is_empty());
    assert!(synthesize_monthly_series(f64::NAN, 1.0, 3, &mut rng).is_err());
    assert!(synthesize_monthly_series(1.0, f64::INFINITY, 3, &mut rng).is_err());
}

#[test]
fn scatter_cloud_spreads_around_base() {
    let mut rng = Sequence::new(vec![0.0, 0.5, 1.0]);
    let pts = scatter_cloud(8000.0, 0.4, 3, &mut rng).unwrap();
    assert_eq!(pts, vec![6400.0, 8000.0, 9600.0]);
    assert!(scatter_cloud(1.0, f64::NAN, 1, &mut rng).is_err());
}
