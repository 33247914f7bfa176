//! Backward-difference differentiation.
//!
//! The estimate `(f(x) − f(x − dx)) / dx` carries two competing errors:
//! truncation, `O(dx)` and governed by the curvature of `f`, and
//! cancellation, roughly `ε·|f| / dx`, which explodes as `dx` approaches
//! machine epsilon. Their sum is minimised near `dx ≈ √ε`.
//! [`derivative_error_profile`] evaluates the same sample array at several
//! step sizes so that trade-off can be shown side by side.

use numerics_core::math::{absolute_errors, max_abs};
use numerics_core::traits::{Differentiable, ScalarFunction};
use numerics_core::types::{require_finite, require_nonzero, KernelResult};
use num_traits::Float;

/// Step size for the backward difference.
///
/// # Examples
///
/// ```
/// use numerics_kernels::calculus::DifferenceParams;
///
/// let params = DifferenceParams::new(1e-7_f64).unwrap();
/// assert_eq!(params.dx(), 1e-7);
/// assert!(DifferenceParams::new(0.0_f64).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(default, bound(deserialize = "T: Float + serde::Deserialize<'de>"))
)]
pub struct DifferenceParams<T> {
    dx: T,
}

impl<T: Float> Default for DifferenceParams<T> {
    /// The well-chosen step of the reference comparison, `1e-7`.
    fn default() -> Self {
        Self {
            dx: T::from(StepRegime::WellChosen.dx()).unwrap(),
        }
    }
}

impl<T: Float> DifferenceParams<T> {
    /// Creates parameters with step `dx`.
    ///
    /// A negative step is accepted and turns the scheme into a forward
    /// difference.
    ///
    /// # Errors
    /// `InvalidParameter` when `dx` is zero or not finite.
    pub fn new(dx: T) -> KernelResult<Self> {
        Ok(Self {
            dx: require_nonzero("dx", dx)?,
        })
    }

    /// Step `√ε` that balances truncation against cancellation for a
    /// function whose value and curvature are of order one.
    pub fn balanced() -> Self {
        Self {
            dx: T::epsilon().sqrt(),
        }
    }

    /// Step size.
    #[inline]
    pub fn dx(&self) -> T {
        self.dx
    }

    /// Re-checks the step, e.g. after deserialisation.
    pub fn validate(&self) -> KernelResult<()> {
        require_nonzero("dx", self.dx).map(|_| ())
    }
}

/// The three step-size regimes of the classic comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepRegime {
    /// `dx = 1e-14`: cancellation dominates and the error is erratic.
    TooSmall,
    /// `dx = 1e-2`: truncation dominates.
    TooLarge,
    /// `dx = 1e-7`: both errors are small.
    WellChosen,
}

impl StepRegime {
    /// All regimes in plotting order.
    pub const ALL: [StepRegime; 3] = [Self::TooSmall, Self::TooLarge, Self::WellChosen];

    /// Representative step size.
    pub fn dx(self) -> f64 {
        match self {
            Self::TooSmall => 1e-14,
            Self::TooLarge => 1e-2,
            Self::WellChosen => 1e-7,
        }
    }
}

/// `(f(x) − f(x − dx)) / dx` at a single point.
///
/// # Errors
/// `InvalidParameter` when `dx` is zero or not finite.
///
/// # Examples
///
/// ```
/// use numerics_kernels::calculus::backward_difference;
///
/// let slope = backward_difference(&|x: f64| x * x, 3.0, 1e-3).unwrap();
/// assert!((slope - 6.0).abs() < 2e-3);
/// ```
pub fn backward_difference<T, F>(f: &F, x: T, dx: T) -> KernelResult<T>
where
    T: Float,
    F: ScalarFunction<T>,
{
    let dx = require_nonzero("dx", dx)?;
    Ok(difference_quotient(f, x, dx))
}

#[inline]
fn difference_quotient<T: Float, F: ScalarFunction<T>>(f: &F, x: T, dx: T) -> T {
    (f.evaluate(x) - f.evaluate(x - dx)) / dx
}

/// Backward difference at every point of a sample array.
///
/// # Errors
/// `InvalidParameter` when the step is invalid; no partial result is
/// produced.
pub fn backward_difference_samples<T, F>(
    f: &F,
    xs: &[T],
    params: &DifferenceParams<T>,
) -> KernelResult<Vec<T>>
where
    T: Float,
    F: ScalarFunction<T>,
{
    params.validate()?;
    Ok(xs
        .iter()
        .map(|&x| difference_quotient(f, x, params.dx))
        .collect())
}

/// Error of the backward difference at one step size.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivativeErrorCurve<T> {
    /// Step size used.
    pub dx: T,
    /// Estimated derivative at each sample.
    pub estimates: Vec<T>,
    /// `estimate − f'(x)` at each sample.
    pub errors: Vec<T>,
    /// Largest absolute error across the samples.
    pub max_abs_error: T,
}

/// Evaluates the backward difference at each step in `dxs` and measures it
/// against the analytical derivative.
///
/// # Errors
/// `InvalidParameter` if any step is zero or not finite, or a sample is not
/// finite.
///
/// # Examples
///
/// ```
/// use numerics_core::functions::Cosine;
/// use numerics_core::math::linspace;
/// use numerics_kernels::calculus::derivative_error_profile;
///
/// let xs = linspace(-1.0_f64, 1.0, 21);
/// let curves = derivative_error_profile(&Cosine, &xs, &[1e-2, 1e-7]).unwrap();
/// assert!(curves[1].max_abs_error < curves[0].max_abs_error);
/// ```
pub fn derivative_error_profile<T, F>(
    f: &F,
    xs: &[T],
    dxs: &[T],
) -> KernelResult<Vec<DerivativeErrorCurve<T>>>
where
    T: Float,
    F: Differentiable<T>,
{
    for &x in xs {
        require_finite("sample", x)?;
    }
    let exact: Vec<T> = xs.iter().map(|&x| f.derivative(x)).collect();

    dxs.iter()
        .map(|&dx| {
            let params = DifferenceParams::new(dx)?;
            let estimates = backward_difference_samples(f, xs, &params)?;
            let errors = absolute_errors(&estimates, &exact);
            let max_abs_error = max_abs(&errors);
            tracing::trace!(
                dx = dx.to_f64().unwrap_or(f64::NAN),
                max_abs_error = max_abs_error.to_f64().unwrap_or(f64::NAN),
                "backward difference error"
            );
            Ok(DerivativeErrorCurve {
                dx,
                estimates,
                errors,
                max_abs_error,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use numerics_core::functions::Cosine;
    use numerics_core::math::linspace;
    use numerics_core::types::KernelError;

    // ========================================
    // Parameter Validation
    // ========================================

    #[test]
    fn test_zero_step_rejected() {
        match DifferenceParams::new(0.0_f64) {
            Err(KernelError::InvalidParameter { name, .. }) => assert_eq!(name, "dx"),
            other => panic!("Expected InvalidParameter, got {:?}", other),
        }
        assert!(backward_difference(&|x: f64| x, 1.0, 0.0).is_err());
        assert!(DifferenceParams::new(f64::NAN).is_err());
    }

    #[test]
    fn test_balanced_step_near_sqrt_epsilon() {
        let params = DifferenceParams::<f64>::balanced();
        assert_relative_eq!(params.dx(), 1.4901161193847656e-8);
    }

    // ========================================
    // Accuracy
    // ========================================

    #[test]
    fn test_linear_function_exact() {
        let f = |x: f64| 3.0 * x - 1.0;
        let slope = backward_difference(&f, 2.0, 0.5).unwrap();
        assert_relative_eq!(slope, 3.0, max_relative = 1e-14);
    }

    #[test]
    fn test_truncation_error_first_order() {
        // f'' = 2 so the truncation error is exactly dx
        let f = |x: f64| x * x;
        let slope = backward_difference(&f, 1.0, 0.01).unwrap();
        assert_relative_eq!(slope - 2.0, -0.01, max_relative = 1e-8);
    }

    #[test]
    fn test_negative_step_is_forward_difference() {
        let f = |x: f64| x * x;
        let slope = backward_difference(&f, 1.0, -0.01).unwrap();
        assert_relative_eq!(slope - 2.0, 0.01, max_relative = 1e-8);
    }

    #[test]
    fn test_u_shaped_error_for_cosine() {
        let xs = linspace(-2.0 * std::f64::consts::PI, 2.0 * std::f64::consts::PI, 100);
        let dxs: Vec<f64> = StepRegime::ALL.iter().map(|r| r.dx()).collect();
        let curves = derivative_error_profile(&Cosine, &xs, &dxs).unwrap();

        let too_small = curves[0].max_abs_error;
        let too_large = curves[1].max_abs_error;
        let well_chosen = curves[2].max_abs_error;

        assert!(well_chosen < too_large, "{} vs {}", well_chosen, too_large);
        assert!(well_chosen < too_small, "{} vs {}", well_chosen, too_small);
        assert_eq!(curves[2].errors.len(), 100);
    }

    #[test]
    fn test_profile_rejects_zero_step() {
        let xs = [0.0_f64, 1.0];
        assert!(derivative_error_profile(&Cosine, &xs, &[1e-3, 0.0]).is_err());
    }

    #[test]
    fn test_f32_samples() {
        let xs = [0.5_f32, 1.0];
        let params = DifferenceParams::new(1e-3_f32).unwrap();
        let slopes = backward_difference_samples(&Cosine, &xs, &params).unwrap();
        assert!((slopes[0] + 0.5_f32.sin()).abs() < 1e-2);
    }
}
