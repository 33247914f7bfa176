//! Hit-and-miss estimation of π and the `1/√n` error law.
//!
//! Uniform points are cast on the unit square and counted when they fall in
//! the quarter disk `x² + y² ≤ 1`, whose area is π/4. Each hit is a
//! Bernoulli trial, so by the central limit theorem the RMS error of the
//! estimate falls as `n^(−½)`.

use numerics_core::math::{log_log_slope, rms_deviation};
use numerics_core::rng::KernelRng;
use numerics_core::types::{require_at_least, KernelError, KernelResult};
use std::f64::consts::PI;

/// Point counts of the reference scaling run.
pub const DEFAULT_POINT_COUNTS: [usize; 12] = [
    25, 50, 100, 200, 400, 800, 1600, 3200, 6400, 12800, 25600, 51200,
];

/// Repeated estimates per point count.
pub const DEFAULT_TRIALS: usize = 80;

/// Settings for an error-scaling run.
///
/// # Examples
///
/// ```
/// use numerics_kernels::stochastic::MonteCarloParams;
///
/// let params = MonteCarloParams::builder()
///     .point_counts(vec![100, 400, 1600])
///     .trials(20)
///     .seed(7)
///     .build()
///     .unwrap();
/// assert_eq!(params.trials(), 20);
/// assert_eq!(params.seed(), Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MonteCarloParams {
    point_counts: Vec<usize>,
    trials: usize,
    seed: Option<u64>,
}

impl Default for MonteCarloParams {
    fn default() -> Self {
        Self {
            point_counts: DEFAULT_POINT_COUNTS.to_vec(),
            trials: DEFAULT_TRIALS,
            seed: None,
        }
    }
}

impl MonteCarloParams {
    /// Creates a builder starting from the defaults.
    #[inline]
    pub fn builder() -> MonteCarloParamsBuilder {
        MonteCarloParamsBuilder::default()
    }

    /// Point counts to evaluate.
    #[inline]
    pub fn point_counts(&self) -> &[usize] {
        &self.point_counts
    }

    /// Estimates per point count.
    #[inline]
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Random source for this run: seeded when a seed is set, otherwise
    /// drawn from entropy.
    pub fn rng(&self) -> KernelRng {
        match self.seed {
            Some(seed) => KernelRng::from_seed(seed),
            None => KernelRng::from_entropy(),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if:
    /// - `point_counts` is empty or contains a zero
    /// - `trials` is 0
    pub fn validate(&self) -> KernelResult<()> {
        if self.point_counts.is_empty() {
            return Err(KernelError::invalid("point_counts", "must not be empty"));
        }
        if self.point_counts.contains(&0) {
            return Err(KernelError::invalid("point_counts", "must all be positive"));
        }
        require_at_least("trials", self.trials, 1)?;
        Ok(())
    }
}

/// Builder for [`MonteCarloParams`].
#[derive(Debug, Clone, Default)]
pub struct MonteCarloParamsBuilder {
    point_counts: Option<Vec<usize>>,
    trials: Option<usize>,
    seed: Option<u64>,
}

impl MonteCarloParamsBuilder {
    /// Sets the point counts.
    #[inline]
    pub fn point_counts(mut self, point_counts: Vec<usize>) -> Self {
        self.point_counts = Some(point_counts);
        self
    }

    /// Sets the number of estimates per point count.
    #[inline]
    pub fn trials(mut self, trials: usize) -> Self {
        self.trials = Some(trials);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds and validates the parameters; unset fields take their defaults.
    ///
    /// # Errors
    /// See [`MonteCarloParams::validate`].
    pub fn build(self) -> KernelResult<MonteCarloParams> {
        let defaults = MonteCarloParams::default();
        let params = MonteCarloParams {
            point_counts: self.point_counts.unwrap_or(defaults.point_counts),
            trials: self.trials.unwrap_or(defaults.trials),
            seed: self.seed,
        };
        params.validate()?;
        Ok(params)
    }
}

/// Casts `n_points` uniform points on `[0, 1)²` and counts those with
/// `x² + y² ≤ 1`.
pub fn quarter_disk_hits(n_points: usize, rng: &mut KernelRng) -> usize {
    let mut xs = vec![0.0; n_points];
    let mut ys = vec![0.0; n_points];
    rng.fill_uniform(&mut xs);
    rng.fill_uniform(&mut ys);
    xs.iter()
        .zip(&ys)
        .filter(|&(&x, &y)| x * x + y * y <= 1.0)
        .count()
}

/// `4 · hits / n_points`.
///
/// # Errors
/// `InvalidParameter` when `n_points == 0`.
///
/// # Examples
///
/// ```
/// use numerics_core::rng::KernelRng;
/// use numerics_kernels::stochastic::estimate_pi;
///
/// let mut rng = KernelRng::from_seed(42);
/// let pi = estimate_pi(100_000, &mut rng).unwrap();
/// assert!((pi - std::f64::consts::PI).abs() < 0.05);
/// ```
pub fn estimate_pi(n_points: usize, rng: &mut KernelRng) -> KernelResult<f64> {
    require_at_least("n_points", n_points, 1)?;
    let hits = quarter_disk_hits(n_points, rng);
    Ok(4.0 * hits as f64 / n_points as f64)
}

/// RMS deviation from π over `trials` independent estimates.
///
/// # Errors
/// `InvalidParameter` when `n_points` or `trials` is zero.
pub fn measure_rms_error(n_points: usize, trials: usize, rng: &mut KernelRng) -> KernelResult<f64> {
    require_at_least("n_points", n_points, 1)?;
    require_at_least("trials", trials, 1)?;
    let estimates = (0..trials)
        .map(|_| estimate_pi(n_points, rng))
        .collect::<KernelResult<Vec<f64>>>()?;
    rms_deviation(&estimates, PI)
}

/// RMS error at one point count.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorSample {
    /// Points cast per estimate.
    pub n_points: usize,
    /// RMS deviation from π.
    pub rms_error: f64,
}

/// [`measure_rms_error`] at each point count, drawing from one stream.
///
/// # Errors
/// `InvalidParameter` for a zero point count or zero trials.
pub fn error_scaling(
    point_counts: &[usize],
    trials: usize,
    rng: &mut KernelRng,
) -> KernelResult<Vec<ErrorSample>> {
    point_counts
        .iter()
        .map(|&n_points| {
            let rms_error = measure_rms_error(n_points, trials, rng)?;
            tracing::trace!(n_points, rms_error, "monte carlo rms error");
            Ok(ErrorSample {
                n_points,
                rms_error,
            })
        })
        .collect()
}

/// Log-log slope of RMS error against point count; about `−½`.
///
/// # Errors
/// `EmptyInput` with fewer than two samples; `InvalidParameter` when an
/// error is zero, which happens when every trial hits π exactly.
pub fn scaling_exponent(samples: &[ErrorSample]) -> KernelResult<f64> {
    let xs: Vec<f64> = samples.iter().map(|s| s.n_points as f64).collect();
    let ys: Vec<f64> = samples.iter().map(|s| s.rms_error).collect();
    log_log_slope(&xs, &ys)
}

/// Runs the full scaling experiment described by `params`.
///
/// # Errors
/// See [`MonteCarloParams::validate`].
pub fn run_error_scaling(params: &MonteCarloParams) -> KernelResult<Vec<ErrorSample>> {
    params.validate()?;
    let mut rng = params.rng();
    tracing::debug!(
        seed = rng.seed(),
        trials = params.trials,
        counts = params.point_counts.len(),
        "running monte carlo error scaling"
    );
    error_scaling(&params.point_counts, params.trials, &mut rng)
}
