//! The hit-and-miss RMS error falls as `n^(−½)`.

mod common;

use numerics_kernels::stochastic::{
    run_error_scaling, scaling_exponent, MonteCarloParams, DEFAULT_POINT_COUNTS,
};

fn reference_run() -> Vec<numerics_kernels::stochastic::ErrorSample> {
    common::init_tracing();
    let params = MonteCarloParams::builder().seed(42).build().unwrap();
    run_error_scaling(&params).unwrap()
}

#[test]
fn test_quadrupling_points_halves_error() {
    let samples = reference_run();
    assert_eq!(samples.len(), DEFAULT_POINT_COUNTS.len());

    // Counts double each entry, so i and i + 2 differ by a factor of four
    let ratios: Vec<f64> = samples
        .windows(3)
        .map(|w| w[0].rms_error / w[2].rms_error)
        .collect();
    for (pair, ratio) in samples.windows(3).zip(&ratios) {
        assert!(
            (ratio - 2.0).abs() <= 0.4,
            "RMS({}) / RMS({}) = {}",
            pair[0].n_points,
            pair[2].n_points,
            ratio
        );
    }

    let log_mean = ratios.iter().map(|r| r.ln()).sum::<f64>() / ratios.len() as f64;
    let mean_ratio = log_mean.exp();
    assert!(
        (mean_ratio - 2.0).abs() < 0.2,
        "geometric mean ratio = {}",
        mean_ratio
    );
}

#[test]
fn test_log_log_slope_is_minus_half() {
    let samples = reference_run();
    let slope = scaling_exponent(&samples).unwrap();
    assert!((slope + 0.5).abs() < 0.08, "slope = {}", slope);
}

#[test]
fn test_errors_decrease_overall() {
    let samples = reference_run();
    let first = samples[0].rms_error;
    let last = samples[samples.len() - 1].rms_error;
    // 51200 / 25 = 2048 points, so about a factor of 45
    assert!(first / last > 25.0, "{} vs {}", first, last);
}
