//! Reference problems with closed-form answers.
//!
//! Each kernel measures its error against one of these:
//!
//! - [`Cosine`]: `cos x` with derivative `−sin x` (differentiation)
//! - [`QuadraticSine`]: `x² sin x` with its antiderivative (quadrature)
//! - [`ExponentialDecay`]: `dy/dt = −y/τ` with `y₀ e^{−t/τ}` (ODE integration)
//! - [`UnityRoots`]: `zⁿ − 1` (Newton–Raphson basins)
//! - [`Rosenbrock`]: the banana function (gradient descent)
//! - [`Paraboloid`]: a radially decreasing energy density (chemotaxis)

mod bivariate;
mod complex;
mod univariate;

pub use bivariate::{Paraboloid, Rosenbrock};
pub use complex::UnityRoots;
pub use univariate::{Cosine, ExponentialDecay, QuadraticSine};
