//! Error measures against analytical references.

use crate::types::{KernelError, KernelResult};
use num_traits::Float;

/// Pointwise `estimate − reference`.
///
/// Extra elements of the longer slice are ignored.
pub fn absolute_errors<T: Float>(estimates: &[T], reference: &[T]) -> Vec<T> {
    estimates
        .iter()
        .zip(reference)
        .map(|(&e, &r)| e - r)
        .collect()
}

/// `|estimate − reference| / |reference|`.
///
/// A zero reference yields `inf` (or `NaN` when the estimate is also zero),
/// which is what a log-scale error plot expects.
#[inline]
pub fn relative_error<T: Float>(estimate: T, reference: T) -> T {
    ((estimate - reference) / reference).abs()
}

/// Pointwise [`relative_error`].
pub fn relative_errors<T: Float>(estimates: &[T], reference: &[T]) -> Vec<T> {
    estimates
        .iter()
        .zip(reference)
        .map(|(&e, &r)| relative_error(e, r))
        .collect()
}

/// Largest absolute value, ignoring NaN. Empty input yields zero.
pub fn max_abs<T: Float>(values: &[T]) -> T {
    values
        .iter()
        .filter(|v| !v.is_nan())
        .fold(T::zero(), |acc, &v| acc.max(v.abs()))
}

/// Root-mean-square deviation of `values` from `reference`.
///
/// # Errors
/// `EmptyInput` when `values` is empty.
///
/// # Examples
/// ```
/// use numerics_core::math::rms_deviation;
///
/// let rms = rms_deviation(&[1.0_f64, 3.0], 2.0).unwrap();
/// assert_eq!(rms, 1.0);
/// ```
pub fn rms_deviation<T: Float>(values: &[T], reference: T) -> KernelResult<T> {
    if values.is_empty() {
        return Err(KernelError::EmptyInput("values for rms deviation"));
    }
    let sum_sq = values.iter().fold(T::zero(), |acc, &v| {
        let d = v - reference;
        acc + d * d
    });
    Ok((sum_sq / T::from(values.len()).unwrap()).sqrt())
}

/// Least-squares slope of `ln y` against `ln x`.
///
/// # Errors
/// `EmptyInput` with fewer than two pairs; `InvalidParameter` when any value
/// is not strictly positive or every `x` is identical.
///
/// # Examples
/// ```
/// use numerics_core::math::log_log_slope;
///
/// let xs = [1.0_f64, 4.0, 16.0];
/// let ys = [1.0_f64, 0.5, 0.25];
/// assert!((log_log_slope(&xs, &ys).unwrap() + 0.5).abs() < 1e-12);
/// ```
pub fn log_log_slope(xs: &[f64], ys: &[f64]) -> KernelResult<f64> {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return Err(KernelError::EmptyInput("at least two points for a slope"));
    }
    if xs[..n].iter().chain(&ys[..n]).any(|&v| !(v > 0.0) || !v.is_finite()) {
        return Err(KernelError::invalid(
            "samples",
            "log-log fit needs finite positive values",
        ));
    }
    let lx: Vec<f64> = xs[..n].iter().map(|x| x.ln()).collect();
    let ly: Vec<f64> = ys[..n].iter().map(|y| y.ln()).collect();
    let mean_x = lx.iter().sum::<f64>() / n as f64;
    let mean_y = ly.iter().sum::<f64>() / n as f64;
    let (sxy, sxx) = lx
        .iter()
        .zip(&ly)
        .fold((0.0, 0.0), |(sxy, sxx), (&x, &y)| {
            (sxy + (x - mean_x) * (y - mean_y), sxx + (x - mean_x) * (x - mean_x))
        });
    if sxx == 0.0 {
        return Err(KernelError::invalid("samples", "x values must not all coincide"));
    }
    Ok(sxy / sxx)
}
