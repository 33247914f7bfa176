//! Complex reference polynomial.

use crate::traits::ComplexFunction;
use crate::types::{KernelError, KernelResult};
use num_complex::Complex64;

/// `f(z) = zⁿ − 1`, whose roots are the n-th roots of unity.
///
/// # Examples
/// ```
/// use num_complex::Complex64;
/// use numerics_core::functions::UnityRoots;
/// use numerics_core::traits::ComplexFunction;
///
/// let quartic = UnityRoots::default();
/// assert_eq!(quartic.order(), 4);
/// for root in quartic.roots() {
///     assert!(quartic.evaluate(root).norm() < 1e-12);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "UnityRootsRepr"))]
pub struct UnityRoots {
    order: u32,
}

/// Unchecked wire form of [`UnityRoots`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UnityRootsRepr {
    order: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<UnityRootsRepr> for UnityRoots {
    type Error = KernelError;

    fn try_from(repr: UnityRootsRepr) -> KernelResult<Self> {
        Self::with_order(repr.order)
    }
}

impl Default for UnityRoots {
    fn default() -> Self {
        Self { order: 4 }
    }
}

impl UnityRoots {
    /// Creates `zⁿ − 1`; orders below 1 are raised to 1.
    pub fn new(order: u32) -> Self {
        Self {
            order: order.max(1),
        }
    }

    /// Creates `zⁿ − 1` with exactly the given degree.
    ///
    /// # Errors
    /// `InvalidParameter` when `order == 0`.
    pub fn with_order(order: u32) -> KernelResult<Self> {
        if order == 0 {
            return Err(KernelError::invalid("order", "must be at least 1"));
        }
        Ok(Self { order })
    }

    /// Polynomial degree `n`.
    pub fn order(&self) -> u32 {
        self.order
    }

    /// The n roots `e^{2πik/n}`, k = 0..n, in counter-clockwise order.
    pub fn roots(&self) -> Vec<Complex64> {
        let n = self.order as f64;
        (0..self.order)
            .map(|k| Complex64::from_polar(1.0, std::f64::consts::TAU * k as f64 / n))
            .collect()
    }
}

impl ComplexFunction for UnityRoots {
    #[inline]
    fn evaluate(&self, z: Complex64) -> Complex64 {
        z.powu(self.order) - Complex64::new(1.0, 0.0)
    }

    #[inline]
    fn derivative(&self, z: Complex64) -> Complex64 {
        z.powu(self.order - 1) * self.order as f64
    }
}
