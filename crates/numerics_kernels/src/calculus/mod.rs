//! Differentiation and integration on sample arrays.
//!
//! - [`backward_difference`] and [`derivative_error_profile`]: finite
//!   differences and the step-size trade-off
//! - [`integrate_simpson`] and [`simpson_error_scan`]: composite Simpson's
//!   rule and its error against the closed-form integral
//!
//! ## Examples
//!
//! ```
//! use numerics_core::functions::QuadraticSine;
//! use numerics_core::traits::Antiderivative;
//! use numerics_kernels::calculus::integrate_simpson;
//!
//! let exact = QuadraticSine.definite_integral(0.0_f64, 2.0);
//! let area = integrate_simpson(&QuadraticSine, 0.0, 2.0, 1024).unwrap();
//! assert!(((area - exact) / exact).abs() < 1e-6);
//! ```

mod differentiation;
mod quadrature;

pub use differentiation::{
    backward_difference, backward_difference_samples, derivative_error_profile,
    DerivativeErrorCurve, DifferenceParams, StepRegime,
};
pub use quadrature::{
    integrate, integrate_simpson, simpson_error_scan, QuadratureError, SimpsonParams,
    DEFAULT_PANEL_COUNTS,
};
