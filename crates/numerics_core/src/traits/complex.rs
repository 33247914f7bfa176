//! Complex-valued function capability.

use num_complex::Complex64;

/// A holomorphic function with a known derivative.
pub trait ComplexFunction {
    /// Evaluates `f(z)`.
    fn evaluate(&self, z: Complex64) -> Complex64;

    /// Evaluates `f'(z)`.
    fn derivative(&self, z: Complex64) -> Complex64;
}

/// Pairs a complex closure with its derivative closure.
///
/// # Examples
/// ```
/// use num_complex::Complex64;
/// use numerics_core::traits::{ComplexFunction, ComplexWithDerivative};
///
/// let square = ComplexWithDerivative::new(|z: Complex64| z * z, |z: Complex64| 2.0 * z);
/// let i = Complex64::i();
/// assert_eq!(square.evaluate(i), Complex64::new(-1.0, 0.0));
/// assert_eq!(square.derivative(i), Complex64::new(0.0, 2.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ComplexWithDerivative<F, D> {
    f: F,
    df: D,
}

impl<F, D> ComplexWithDerivative<F, D> {
    /// Wraps `f` and its derivative `df`.
    pub fn new(f: F, df: D) -> Self {
        Self { f, df }
    }
}

impl<F, D> ComplexFunction for ComplexWithDerivative<F, D>
where
    F: Fn(Complex64) -> Complex64,
    D: Fn(Complex64) -> Complex64,
{
    #[inline]
    fn evaluate(&self, z: Complex64) -> Complex64 {
        (self.f)(z)
    }

    #[inline]
    fn derivative(&self, z: Complex64) -> Complex64 {
        (self.df)(z)
    }
}
