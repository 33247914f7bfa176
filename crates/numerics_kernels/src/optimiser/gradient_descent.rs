//! Fixed-step gradient descent on a smooth 2-D field.

use numerics_core::math::{iterate_until, Step, Termination};
use numerics_core::traits::GradientField2;
use numerics_core::types::{require_at_least, require_positive, KernelResult, Point2};
use num_traits::Float;

/// Starting point of the reference Rosenbrock runs.
pub const ROSENBROCK_START: (f64, f64) = (0.2, 1.0);

/// Learning rate, budget and stopping threshold.
///
/// The learning rate is used exactly as given: it is never clamped or
/// adapted, so a badly chosen `gamma` shows up in the trajectory.
///
/// # Examples
///
/// ```
/// use numerics_kernels::optimiser::GradientDescentParams;
///
/// let params = GradientDescentParams::new(0.002_f64)
///     .unwrap()
///     .with_max_iterations(500)
///     .unwrap();
/// assert_eq!(params.max_iterations(), 500);
/// assert!(GradientDescentParams::new(0.0_f64).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(default, bound(deserialize = "T: Float + serde::Deserialize<'de>"))
)]
pub struct GradientDescentParams<T> {
    gamma: T,
    max_iterations: usize,
    tolerance: T,
}

impl<T: Float> Default for GradientDescentParams<T> {
    /// The well-chosen rate with 10 000 steps and a `1e-10` threshold.
    fn default() -> Self {
        Self {
            gamma: T::from(GammaRegime::WellChosen.gamma()).unwrap(),
            max_iterations: 10_000,
            tolerance: T::from(1e-10).unwrap(),
        }
    }
}

impl<T: Float> GradientDescentParams<T> {
    /// Creates parameters with learning rate `gamma` and default budget.
    ///
    /// # Errors
    /// `InvalidParameter` when `gamma` is not finite and positive.
    pub fn new(gamma: T) -> KernelResult<Self> {
        let params = Self {
            gamma,
            ..Self::default()
        };
        params.validate()?;
        Ok(params)
    }

    /// Replaces the iteration budget.
    ///
    /// # Errors
    /// `InvalidParameter` when `max_iterations == 0`.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> KernelResult<Self> {
        self.max_iterations = require_at_least("max_iterations", max_iterations, 1)?;
        Ok(self)
    }

    /// Replaces the threshold on `|f(r_new) − f(r_old)|`.
    ///
    /// # Errors
    /// `InvalidParameter` when `tolerance` is not finite and positive.
    pub fn with_tolerance(mut self, tolerance: T) -> KernelResult<Self> {
        self.tolerance = require_positive("tolerance", tolerance)?;
        Ok(self)
    }

    /// Checks every field.
    pub fn validate(&self) -> KernelResult<()> {
        require_positive("gamma", self.gamma)?;
        require_at_least("max_iterations", self.max_iterations, 1)?;
        require_positive("tolerance", self.tolerance)?;
        Ok(())
    }

    /// Learning rate.
    pub fn gamma(&self) -> T {
        self.gamma
    }

    /// Iteration budget.
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Stopping threshold on the change in `f`.
    pub fn tolerance(&self) -> T {
        self.tolerance
    }
}

/// The three learning rates of the Rosenbrock comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GammaRegime {
    /// `7e-7`: monotone but crawls.
    TooSmall,
    /// `0.003`: overshoots across the valley.
    TooLarge,
    /// `0.002`: reaches the minimum.
    WellChosen,
}

impl GammaRegime {
    /// All regimes in plotting order.
    pub const ALL: [GammaRegime; 3] = [Self::TooSmall, Self::TooLarge, Self::WellChosen];

    /// Representative learning rate.
    pub fn gamma(self) -> f64 {
        match self {
            Self::TooSmall => 7e-7,
            Self::TooLarge => 0.003,
            Self::WellChosen => 0.002,
        }
    }
}

/// Path and objective history of one descent.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DescentResult<T> {
    /// Start point followed by every accepted iterate.
    pub trajectory: Vec<Point2<T>>,
    /// `f` at each trajectory point.
    pub values: Vec<T>,
    /// Steps taken.
    pub iterations: usize,
    /// Why the descent stopped.
    pub termination: Termination,
}

impl<T: Float> DescentResult<T> {
    /// Last accepted point.
    pub fn final_point(&self) -> Point2<T> {
        // The trajectory always holds at least the start point
        self.trajectory[self.trajectory.len() - 1]
    }

    /// `f` at the last accepted point.
    pub fn final_value(&self) -> T {
        self.values[self.values.len() - 1]
    }

    /// True when `f` never increased along the path.
    pub fn is_monotone_decreasing(&self) -> bool {
        self.values.windows(2).all(|pair| pair[1] <= pair[0])
    }
}

/// Minimises `f` from `start` with `r ← r − γ∇f(r)`.
///
/// Stops when `|f(r_new) − f(r_old)| < tolerance`, when the budget runs out,
/// or when an iterate stops being finite. In the last case the bad iterate is
/// dropped and the result ends with [`Termination::Degenerate`].
///
/// # Errors
/// `InvalidParameter` if `params` fails validation, e.g. a zero or negative
/// `gamma` loaded from a config file. No path is produced in that case.
///
/// # Examples
///
/// ```
/// use numerics_core::types::Point2;
/// use numerics_core::traits::WithGradient;
/// use numerics_kernels::optimiser::{gradient_descent, GradientDescentParams};
///
/// // Bowl centred on (1, −2)
/// let bowl = WithGradient::new(
///     |x: f64, y: f64| (x - 1.0).powi(2) + (y + 2.0).powi(2),
///     |x: f64, y: f64| (2.0 * (x - 1.0), 2.0 * (y + 2.0)),
/// );
/// let params = GradientDescentParams::new(0.1).unwrap();
/// let result = gradient_descent(&bowl, Point2::new(0.0, 0.0), &params).unwrap();
/// assert!(result.final_point().distance_to(Point2::new(1.0, -2.0)) < 1e-4);
/// ```
pub fn gradient_descent<T, F>(
    f: &F,
    start: Point2<T>,
    params: &GradientDescentParams<T>,
) -> KernelResult<DescentResult<T>>
where
    T: Float,
    F: GradientField2<T>,
{
    params.validate()?;
    let mut trajectory = vec![start];
    let mut values = vec![f.evaluate(start.x, start.y)];
    let gamma = params.gamma;

    let outcome = iterate_until((start, values[0]), params.max_iterations, |&(r, f_before)| {
        let (gx, gy) = f.gradient(r.x, r.y);
        let next = Point2::new(r.x - gamma * gx, r.y - gamma * gy);
        if !next.is_finite() {
            tracing::warn!(
                gamma = gamma.to_f64().unwrap_or(f64::NAN),
                x = r.x.to_f64().unwrap_or(f64::NAN),
                y = r.y.to_f64().unwrap_or(f64::NAN),
                "gradient descent diverged"
            );
            return Step::Degenerate((r, f_before));
        }
        let f_after = f.evaluate(next.x, next.y);
        trajectory.push(next);
        values.push(f_after);
        if (f_after - f_before).abs() < params.tolerance {
            Step::Converged((next, f_after))
        } else {
            Step::Continue((next, f_after))
        }
    });

    if outcome.termination == Termination::BudgetExhausted {
        tracing::debug!(
            gamma = gamma.to_f64().unwrap_or(f64::NAN),
            iterations = outcome.iterations,
            "gradient descent budget exhausted"
        );
    }

    Ok(DescentResult {
        trajectory,
        values,
        iterations: outcome.iterations,
        termination: outcome.termination,
    })
}
