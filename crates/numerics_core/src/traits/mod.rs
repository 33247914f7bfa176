//! Capability traits for the functions the kernels operate on.
//!
//! Every kernel is written against one of these traits instead of a
//! hard-wired expression, so the same routine can be exercised with the
//! reference problems in [`crate::functions`] or with ad-hoc closures:
//!
//! | Trait | Capability | Used by |
//! |-------|------------|---------|
//! | [`ScalarFunction`] | `f(x)` | differentiation, quadrature |
//! | [`Differentiable`] | `f(x)`, `f'(x)` | derivative error profiles |
//! | [`Antiderivative`] | `f(x)`, `F(x)` | quadrature error scans |
//! | [`Autonomous`] | `dy/dt = f(y)` | ODE integrators |
//! | [`ScalarField2`] | `f(x, y)` | chemotaxis sensing |
//! | [`GradientField2`] | `f(x, y)`, `∇f(x, y)` | gradient descent |
//! | [`ComplexFunction`] | `f(z)`, `f'(z)` | Newton–Raphson |
//!
//! Closures get the single-capability traits through blanket impls. Pairs of
//! closures are promoted to the richer traits with the adapters
//! [`WithDerivative`], [`WithAntiderivative`], [`WithGradient`] and
//! [`ComplexWithDerivative`].

/// Generic floating-point trait used across the workspace.
///
/// # Examples
/// ```
/// use numerics_core::traits::Float;
///
/// fn decay<T: Float>(y: T, tau: T) -> T {
///     -y / tau
/// }
///
/// assert_eq!(decay(3.0_f64, 1.5), -2.0);
/// ```
pub use num_traits::Float;

mod complex;
mod function;

pub use complex::{ComplexFunction, ComplexWithDerivative};
pub use function::{
    Antiderivative, Autonomous, Differentiable, GradientField2, ScalarField2, ScalarFunction,
    WithAntiderivative, WithDerivative, WithGradient,
};
