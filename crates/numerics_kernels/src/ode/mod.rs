//! Explicit fixed-step integrators for autonomous scalar ODEs.
//!
//! - [`OdeMethod::Euler`]: first order
//! - [`OdeMethod::Heun`]: second order (explicit trapezoid)
//!
//! [`compare_methods`] pits both against the closed-form solution of an
//! exponential decay.

mod comparison;
mod integrators;
mod params;

pub use comparison::{compare_methods, timebase, MethodComparison, DEFAULT_HALF_LIFE};
pub use integrators::{solve, solve_euler, solve_heun, OdeMethod};
pub use params::OdeParams;
