//! Composite Simpson's rule over equal panels.
//!
//! Each panel `[a, b]` contributes `(b − a)/6 · (f(a) + 4 f((a+b)/2) + f(b))`.
//! Contributions are accumulated left to right in the working precision with
//! no compensated summation: past roughly a thousand panels the round-off of
//! that running sum becomes comparable to the truncation error, and the
//! error-versus-panels curve flattens or turns upward. That floor is part of
//! what [`simpson_error_scan`] is meant to show.

use numerics_core::math::relative_error;
use numerics_core::traits::{Antiderivative, ScalarFunction};
use numerics_core::types::{require_at_least, require_finite, KernelError, KernelResult};
use num_traits::Float;

/// Panel counts of the reference error scan.
pub const DEFAULT_PANEL_COUNTS: [usize; 9] = [4, 8, 16, 32, 64, 128, 256, 512, 1024];

/// Interval and panel count for Simpson integration.
///
/// # Examples
///
/// ```
/// use numerics_kernels::calculus::SimpsonParams;
///
/// let params = SimpsonParams::new(0.0_f64, 2.0, 8).unwrap();
/// assert_eq!(params.panel_width(), 0.25);
/// assert!(SimpsonParams::new(1.0_f64, 1.0, 8).is_err());
/// assert!(SimpsonParams::new(0.0_f64, 1.0, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(default, bound(deserialize = "T: Float + serde::Deserialize<'de>"))
)]
pub struct SimpsonParams<T> {
    x0: T,
    x1: T,
    n_panels: usize,
}

impl<T: Float> Default for SimpsonParams<T> {
    /// `[0, 2]` with 1024 panels.
    fn default() -> Self {
        Self {
            x0: T::zero(),
            x1: T::from(2.0).unwrap(),
            n_panels: 1024,
        }
    }
}

impl<T: Float> SimpsonParams<T> {
    /// Creates parameters for `[x0, x1]` split into `n_panels` panels.
    ///
    /// # Errors
    /// `InvalidParameter` when `n_panels == 0`, a bound is not finite, or
    /// `x1 <= x0` (the panel width must be positive).
    pub fn new(x0: T, x1: T, n_panels: usize) -> KernelResult<Self> {
        let params = Self { x0, x1, n_panels };
        params.validate()?;
        Ok(params)
    }

    /// Checks the interval and panel count.
    pub fn validate(&self) -> KernelResult<()> {
        require_finite("x0", self.x0)?;
        require_finite("x1", self.x1)?;
        require_at_least("n_panels", self.n_panels, 1)?;
        if self.x1 <= self.x0 {
            return Err(KernelError::invalid(
                "interval",
                "x1 must exceed x0 (zero-length or reversed interval)",
            ));
        }
        Ok(())
    }

    /// Lower bound.
    pub fn x0(&self) -> T {
        self.x0
    }

    /// Upper bound.
    pub fn x1(&self) -> T {
        self.x1
    }

    /// Number of panels.
    pub fn n_panels(&self) -> usize {
        self.n_panels
    }

    /// `(x1 − x0) / n_panels`.
    pub fn panel_width(&self) -> T {
        (self.x1 - self.x0) / T::from(self.n_panels).unwrap()
    }

    /// Same interval with a different panel count.
    pub fn with_panels(&self, n_panels: usize) -> KernelResult<Self> {
        Self::new(self.x0, self.x1, n_panels)
    }
}

/// Integrates `f` over `[x0, x1]` with `n_panels` Simpson panels.
///
/// # Errors
/// See [`SimpsonParams::new`].
///
/// # Examples
///
/// ```
/// use numerics_kernels::calculus::integrate_simpson;
///
/// // Exact for cubics
/// let area = integrate_simpson(&|x: f64| x * x * x, 0.0, 2.0, 1).unwrap();
/// assert!((area - 4.0).abs() < 1e-12);
/// ```
pub fn integrate_simpson<T, F>(f: &F, x0: T, x1: T, n_panels: usize) -> KernelResult<T>
where
    T: Float,
    F: ScalarFunction<T>,
{
    integrate(f, &SimpsonParams::new(x0, x1, n_panels)?)
}

/// Integrates `f` with the given parameters.
///
/// # Errors
/// `InvalidParameter` if the parameters fail validation.
pub fn integrate<T, F>(f: &F, params: &SimpsonParams<T>) -> KernelResult<T>
where
    T: Float,
    F: ScalarFunction<T>,
{
    params.validate()?;
    let width = params.panel_width();
    let two = T::from(2.0).unwrap();
    let four = T::from(4.0).unwrap();
    let six = T::from(6.0).unwrap();

    let mut area = T::zero();
    for i in 0..params.n_panels {
        let a = params.x0 + T::from(i).unwrap() * width;
        let b = a + width;
        let weighted = f.evaluate(a) + four * f.evaluate((a + b) / two) + f.evaluate(b);
        area = area + (b - a) / six * weighted;
    }
    Ok(area)
}

/// Simpson estimate at one panel count against the closed form.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadratureError<T> {
    /// Panels used.
    pub n_panels: usize,
    /// Simpson estimate.
    pub estimate: T,
    /// `F(x1) − F(x0)`.
    pub reference: T,
    /// `|estimate − reference| / |reference|`.
    pub relative_error: T,
}

/// Integrates at each panel count and measures the relative error against
/// the antiderivative.
///
/// # Errors
/// `InvalidParameter` for an invalid interval or a zero panel count.
///
/// # Examples
///
/// ```
/// use numerics_core::functions::QuadraticSine;
/// use numerics_kernels::calculus::simpson_error_scan;
///
/// let scan = simpson_error_scan(&QuadraticSine, 0.0_f64, 2.0, &[4, 64]).unwrap();
/// assert!(scan[1].relative_error < scan[0].relative_error);
/// ```
pub fn simpson_error_scan<T, F>(
    f: &F,
    x0: T,
    x1: T,
    panel_counts: &[usize],
) -> KernelResult<Vec<QuadratureError<T>>>
where
    T: Float,
    F: Antiderivative<T>,
{
    let reference = f.definite_integral(x0, x1);
    panel_counts
        .iter()
        .map(|&n_panels| {
            let estimate = integrate_simpson(f, x0, x1, n_panels)?;
            Ok(QuadratureError {
                n_panels,
                estimate,
                reference,
                relative_error: relative_error(estimate, reference),
            })
        })
        .collect()
}
