//! Gradient-based minimisation.
//!
//! [`gradient_descent`] takes a fixed learning rate and reports the whole
//! path, so the effect of a rate that is too small or too large can be seen
//! rather than hidden by step-size control.

mod gradient_descent;

pub use gradient_descent::{
    gradient_descent, DescentResult, GammaRegime, GradientDescentParams, ROSENBROCK_START,
};
