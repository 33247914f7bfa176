//! Euler against Heun on exponential decay, measured against `y0·e^(−t/τ)`.

use super::{solve, OdeMethod, OdeParams};
use numerics_core::functions::ExponentialDecay;
use numerics_core::math::relative_errors;
use numerics_core::types::KernelResult;
use num_traits::Float;

/// Half-life of the reference decay chain (hours).
pub const DEFAULT_HALF_LIFE: f64 = 20.8;

/// Start time of each panel, `0, dt, …, t1 − dt`.
pub fn timebase<T: Float>(params: &OdeParams<T>) -> Vec<T> {
    params.timebase()
}

/// Both integrators and the closed form on a shared time base.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MethodComparison<T> {
    /// Time of each history entry.
    pub timebase: Vec<T>,
    /// `y0·exp(−t/τ)`.
    pub analytic: Vec<T>,
    /// Euler history.
    pub euler: Vec<T>,
    /// Heun history.
    pub heun: Vec<T>,
    /// `|euler − analytic| / |analytic|`.
    pub euler_error: Vec<T>,
    /// `|heun − analytic| / |analytic|`.
    pub heun_error: Vec<T>,
}

impl<T: Float> MethodComparison<T> {
    /// History produced by `method`.
    pub fn history(&self, method: OdeMethod) -> &[T] {
        match method {
            OdeMethod::Euler => &self.euler,
            OdeMethod::Heun => &self.heun,
        }
    }

    /// Relative error of `method` at each time.
    pub fn errors(&self, method: OdeMethod) -> &[T] {
        match method {
            OdeMethod::Euler => &self.euler_error,
            OdeMethod::Heun => &self.heun_error,
        }
    }

    /// Relative error of `method` at the last time point.
    pub fn final_error(&self, method: OdeMethod) -> T {
        self.errors(method).last().copied().unwrap_or_else(T::zero)
    }
}

/// Runs both integrators on `decay` and measures them against the closed form.
///
/// # Errors
/// `InvalidParameter` if `params` fails validation.
///
/// # Examples
///
/// ```
/// use numerics_core::functions::ExponentialDecay;
/// use numerics_kernels::ode::{compare_methods, OdeMethod, OdeParams};
///
/// let decay = ExponentialDecay::from_half_life(20.8_f64).unwrap();
/// let cmp = compare_methods(&decay, &OdeParams::default()).unwrap();
/// assert!(cmp.final_error(OdeMethod::Heun) < cmp.final_error(OdeMethod::Euler));
/// ```
pub fn compare_methods<T: Float>(
    decay: &ExponentialDecay<T>,
    params: &OdeParams<T>,
) -> KernelResult<MethodComparison<T>> {
    let euler = solve(OdeMethod::Euler, decay, params)?;
    let heun = solve(OdeMethod::Heun, decay, params)?;
    let timebase = timebase(params);
    let analytic: Vec<T> = timebase
        .iter()
        .map(|&t| decay.analytic(params.y0(), t))
        .collect();
    let euler_error = relative_errors(&euler, &analytic);
    let heun_error = relative_errors(&heun, &analytic);

    Ok(MethodComparison {
        timebase,
        analytic,
        euler,
        heun,
        euler_error,
        heun_error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_decay() -> ExponentialDecay<f64> {
        ExponentialDecay::from_half_life(DEFAULT_HALF_LIFE).unwrap()
    }

    #[test]
    fn test_default_timebase() {
        let t = timebase(&OdeParams::<f64>::default());
        assert_eq!(t.len(), 15);
        assert_eq!(t[0], 0.0);
        assert_relative_eq!(t[14], 56.0);
    }

    #[test]
    fn test_heun_beats_euler_at_every_step() {
        let cmp = compare_methods(&reference_decay(), &OdeParams::default()).unwrap();
        assert_eq!(cmp.euler_error[0], 0.0);
        assert_eq!(cmp.heun_error[0], 0.0);
        for i in 1..cmp.timebase.len() {
            assert!(
                cmp.heun_error[i] < cmp.euler_error[i],
                "t = {}: heun {} vs euler {}",
                cmp.timebase[i],
                cmp.heun_error[i],
                cmp.euler_error[i]
            );
        }
    }

    #[test]
    fn test_errors_shrink_with_more_panels() {
        let decay = reference_decay();
        let coarse = compare_methods(&decay, &OdeParams::new(1200.0, 60.0, 15).unwrap()).unwrap();
        let fine = compare_methods(&decay, &OdeParams::new(1200.0, 60.0, 150).unwrap()).unwrap();
        for method in OdeMethod::ALL {
            assert!(fine.final_error(method) < coarse.final_error(method));
        }
    }

    #[test]
    fn test_single_precision_history() {
        let decay = ExponentialDecay::from_half_life(20.8_f32).unwrap();
        let cmp = compare_methods(&decay, &OdeParams::default()).unwrap();
        assert_eq!(cmp.history(OdeMethod::Euler).len(), 15);
        assert!(cmp.final_error(OdeMethod::Heun) < cmp.final_error(OdeMethod::Euler));
        assert!(cmp.heun.iter().all(|y| y.is_finite() && *y > 0.0));
    }
}
