//! Planar reference fields.

use crate::traits::{GradientField2, ScalarField2};
use crate::types::Point2;
use num_traits::Float;

/// Rosenbrock's banana function `(a − x)² + b (y − x²)²`.
///
/// The global minimum sits at `(a, a²)` at the bottom of a long curved
/// valley, which makes the step multiplier of gradient descent critical.
///
/// # Examples
/// ```
/// use numerics_core::functions::Rosenbrock;
/// use numerics_core::traits::{GradientField2, ScalarField2};
///
/// let f = Rosenbrock::<f64>::default();
/// assert_eq!(f.evaluate(1.0, 1.0), 0.0);
/// assert_eq!(f.gradient(1.0, 1.0), (0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rosenbrock<T> {
    /// Location parameter `a`.
    pub a: T,
    /// Valley steepness `b`.
    pub b: T,
}

impl<T: Float> Default for Rosenbrock<T> {
    /// The classic `a = 1`, `b = 100`.
    fn default() -> Self {
        Self {
            a: T::one(),
            b: T::from(100.0).unwrap(),
        }
    }
}

impl<T: Float> Rosenbrock<T> {
    /// Location of the global minimum.
    pub fn minimum(&self) -> Point2<T> {
        Point2::new(self.a, self.a * self.a)
    }
}

impl<T: Float> ScalarField2<T> for Rosenbrock<T> {
    #[inline]
    fn evaluate(&self, x: T, y: T) -> T {
        let u = self.a - x;
        let v = y - x * x;
        u * u + self.b * v * v
    }
}

impl<T: Float> GradientField2<T> for Rosenbrock<T> {
    #[inline]
    fn gradient(&self, x: T, y: T) -> (T, T) {
        let two = T::from(2.0).unwrap();
        let df_dx = two * (two * self.b * x * x * x - two * self.b * x * y + x - self.a);
        let df_dy = two * self.b * (y - x * x);
        (df_dx, df_dy)
    }
}

/// Energy density `peak − x² − y²`, maximal at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Paraboloid<T> {
    /// Value at the origin.
    pub peak: T,
}

impl<T: Float> Default for Paraboloid<T> {
    fn default() -> Self {
        Self {
            peak: T::from(2000.0).unwrap(),
        }
    }
}

impl<T: Float> Paraboloid<T> {
    /// Location of the maximum.
    pub fn maximum(&self) -> Point2<T> {
        Point2::new(T::zero(), T::zero())
    }
}

impl<T: Float> ScalarField2<T> for Paraboloid<T> {
    #[inline]
    fn evaluate(&self, x: T, y: T) -> T {
        self.peak - x * x - y * y
    }
}

impl<T: Float> GradientField2<T> for Paraboloid<T> {
    #[inline]
    fn gradient(&self, x: T, y: T) -> (T, T) {
        let two = T::from(2.0).unwrap();
        (-two * x, -two * y)
    }
}
