//! Newton–Raphson iteration over the complex plane.

use numerics_core::math::{iterate_until, IterationOutcome, Step};
use numerics_core::traits::ComplexFunction;
use numerics_core::types::{require_at_least, require_positive, KernelError, KernelResult};
use num_complex::Complex64;

/// Iteration budget, convergence threshold and degeneracy guard.
///
/// # Examples
///
/// ```
/// use numerics_kernels::solvers::NewtonParams;
///
/// let params = NewtonParams::default();
/// assert_eq!(params.max_iterations(), 35);
/// assert_eq!(params.tolerance(), 1e-5);
/// assert!(NewtonParams::new(0, 1e-5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NewtonParams {
    max_iterations: usize,
    tolerance: f64,
    derivative_floor: f64,
}

impl Default for NewtonParams {
    fn default() -> Self {
        Self {
            max_iterations: 35,
            tolerance: 1e-5,
            derivative_floor: 1e-300,
        }
    }
}

impl NewtonParams {
    /// Creates parameters with the default derivative floor.
    ///
    /// # Errors
    /// `InvalidParameter` when `max_iterations == 0` or `tolerance` is not
    /// finite and positive.
    pub fn new(max_iterations: usize, tolerance: f64) -> KernelResult<Self> {
        let params = Self {
            max_iterations,
            tolerance,
            ..Self::default()
        };
        params.validate()?;
        Ok(params)
    }

    /// Replaces the magnitude below which `f'(z)` counts as zero.
    ///
    /// # Errors
    /// `InvalidParameter` when `floor` is negative or not finite.
    pub fn with_derivative_floor(mut self, floor: f64) -> KernelResult<Self> {
        self.derivative_floor = floor;
        self.validate()?;
        Ok(self)
    }

    /// Checks every field.
    pub fn validate(&self) -> KernelResult<()> {
        require_at_least("max_iterations", self.max_iterations, 1)?;
        require_positive("tolerance", self.tolerance)?;
        if !(self.derivative_floor.is_finite() && self.derivative_floor >= 0.0) {
            return Err(KernelError::invalid(
                "derivative_floor",
                "must be finite and non-negative",
            ));
        }
        Ok(())
    }

    /// Iteration budget.
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Threshold on `|f(z)|`.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Magnitude below which the derivative is treated as zero.
    pub fn derivative_floor(&self) -> f64 {
        self.derivative_floor
    }
}

/// Iterates `z ← z − f(z)/f'(z)` from `z0`.
///
/// Stops as soon as `|f(z)| < tolerance` after an update. A derivative below
/// the floor, a non-finite derivative or a non-finite update ends the run
/// with [`Termination::Degenerate`](numerics_core::math::Termination::Degenerate)
/// and the last good iterate; the budget running out ends it with
/// `BudgetExhausted`. Neither is an error.
///
/// # Errors
/// `InvalidParameter` if `params` fails validation, e.g. `max_iterations = 0`
/// loaded from a config file.
///
/// # Examples
///
/// ```
/// use num_complex::Complex64;
/// use numerics_core::functions::UnityRoots;
/// use numerics_kernels::solvers::{newton_raphson, NewtonParams};
///
/// let f = UnityRoots::default();
/// let outcome = newton_raphson(&f, Complex64::new(0.1, 1.2), &NewtonParams::default()).unwrap();
/// assert!(outcome.converged());
/// assert!((outcome.state - Complex64::i()).norm() < 1e-5);
/// ```
pub fn newton_raphson<F: ComplexFunction>(
    f: &F,
    z0: Complex64,
    params: &NewtonParams,
) -> KernelResult<IterationOutcome<Complex64>> {
    params.validate()?;
    Ok(iterate_until(z0, params.max_iterations, |&z| {
        let slope = f.derivative(z);
        if !slope.is_finite() || slope.norm() < params.derivative_floor {
            tracing::trace!(re = z.re, im = z.im, "derivative vanishes");
            return Step::Degenerate(z);
        }
        let next = z - f.evaluate(z) / slope;
        if !next.is_finite() {
            tracing::trace!(re = z.re, im = z.im, "newton update not finite");
            return Step::Degenerate(z);
        }
        if f.evaluate(next).norm() < params.tolerance {
            Step::Converged(next)
        } else {
            Step::Continue(next)
        }
    }))
}
