//! Single-variable reference functions.

use crate::traits::{Antiderivative, Autonomous, Differentiable, ScalarFunction};
use crate::types::{require_positive, KernelResult};
use num_traits::Float;

/// `f(x) = cos x`, `f'(x) = −sin x`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cosine;

impl<T: Float> ScalarFunction<T> for Cosine {
    #[inline]
    fn evaluate(&self, x: T) -> T {
        x.cos()
    }
}

impl<T: Float> Differentiable<T> for Cosine {
    #[inline]
    fn derivative(&self, x: T) -> T {
        -x.sin()
    }
}

/// `f(x) = x² sin x` with `F(x) = 2x sin x + (2 − x²) cos x`.
///
/// # Examples
/// ```
/// use numerics_core::functions::QuadraticSine;
/// use numerics_core::traits::Antiderivative;
///
/// let exact = QuadraticSine.definite_integral(0.0_f64, 2.0);
/// assert!((exact - 2.4694834).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuadraticSine;

impl<T: Float> ScalarFunction<T> for QuadraticSine {
    #[inline]
    fn evaluate(&self, x: T) -> T {
        x * x * x.sin()
    }
}

impl<T: Float> Antiderivative<T> for QuadraticSine {
    #[inline]
    fn antiderivative(&self, x: T) -> T {
        let two = T::from(2.0).unwrap();
        two * x * x.sin() + (two - x * x) * x.cos()
    }
}

/// Radioactive decay `dy/dt = −y/τ`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExponentialDecay<T> {
    /// Mean lifetime τ.
    pub tau: T,
}

impl<T: Float> ExponentialDecay<T> {
    /// Creates a decay law from its mean lifetime.
    ///
    /// # Errors
    /// `InvalidParameter` unless `tau` is finite and positive.
    pub fn new(tau: T) -> KernelResult<Self> {
        Ok(Self {
            tau: require_positive("tau", tau)?,
        })
    }

    /// Creates a decay law from its half-life, `τ = t½ / ln 2`.
    ///
    /// # Examples
    /// ```
    /// use numerics_core::functions::ExponentialDecay;
    ///
    /// let decay = ExponentialDecay::from_half_life(20.8_f64).unwrap();
    /// assert!((decay.analytic(1200.0, 20.8) - 600.0).abs() < 1e-9);
    /// ```
    pub fn from_half_life(half_life: T) -> KernelResult<Self> {
        let half_life = require_positive("half_life", half_life)?;
        Ok(Self {
            tau: half_life / T::from(std::f64::consts::LN_2).unwrap(),
        })
    }

    /// Half-life `τ ln 2`.
    pub fn half_life(&self) -> T {
        self.tau * T::from(std::f64::consts::LN_2).unwrap()
    }

    /// Closed-form solution `y₀ e^{−t/τ}`.
    #[inline]
    pub fn analytic(&self, y0: T, t: T) -> T {
        y0 * (-t / self.tau).exp()
    }
}

impl<T: Float> Autonomous<T> for ExponentialDecay<T> {
    #[inline]
    fn rate(&self, y: T) -> T {
        -y / self.tau
    }
}
