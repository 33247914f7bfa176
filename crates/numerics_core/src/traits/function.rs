//! Real-valued function capabilities.

use num_traits::Float;

/// A real function of one variable.
pub trait ScalarFunction<T: Float> {
    /// Evaluates `f(x)`.
    fn evaluate(&self, x: T) -> T;
}

impl<T: Float, F: Fn(T) -> T> ScalarFunction<T> for F {
    #[inline]
    fn evaluate(&self, x: T) -> T {
        self(x)
    }
}

/// A function with a known analytical derivative.
pub trait Differentiable<T: Float>: ScalarFunction<T> {
    /// Evaluates `f'(x)`.
    fn derivative(&self, x: T) -> T;
}

/// A function with a known indefinite integral.
pub trait Antiderivative<T: Float>: ScalarFunction<T> {
    /// Evaluates `F(x)` with `F' = f`.
    fn antiderivative(&self, x: T) -> T;

    /// Closed-form definite integral over `[a, b]`.
    #[inline]
    fn definite_integral(&self, a: T, b: T) -> T {
        self.antiderivative(b) - self.antiderivative(a)
    }
}

/// Right-hand side of an autonomous first-order ODE `dy/dt = f(y)`.
pub trait Autonomous<T: Float> {
    /// Evaluates `dy/dt` at state `y`.
    fn rate(&self, y: T) -> T;
}

impl<T: Float, F: Fn(T) -> T> Autonomous<T> for F {
    #[inline]
    fn rate(&self, y: T) -> T {
        self(y)
    }
}

/// A real scalar field over the plane.
pub trait ScalarField2<T: Float> {
    /// Evaluates `f(x, y)`.
    fn evaluate(&self, x: T, y: T) -> T;
}

impl<T: Float, F: Fn(T, T) -> T> ScalarField2<T> for F {
    #[inline]
    fn evaluate(&self, x: T, y: T) -> T {
        self(x, y)
    }
}

/// A planar scalar field with a known analytical gradient.
pub trait GradientField2<T: Float>: ScalarField2<T> {
    /// Evaluates `(∂f/∂x, ∂f/∂y)`.
    fn gradient(&self, x: T, y: T) -> (T, T);
}

/// Pairs a function closure with its derivative closure.
///
/// # Examples
/// ```
/// use numerics_core::traits::{Differentiable, ScalarFunction, WithDerivative};
///
/// let square = WithDerivative::new(|x: f64| x * x, |x: f64| 2.0 * x);
/// assert_eq!(square.evaluate(3.0), 9.0);
/// assert_eq!(square.derivative(3.0), 6.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WithDerivative<F, D> {
    f: F,
    df: D,
}

impl<F, D> WithDerivative<F, D> {
    /// Wraps `f` and its derivative `df`.
    pub fn new(f: F, df: D) -> Self {
        Self { f, df }
    }
}

impl<T: Float, F: Fn(T) -> T, D: Fn(T) -> T> ScalarFunction<T> for WithDerivative<F, D> {
    #[inline]
    fn evaluate(&self, x: T) -> T {
        (self.f)(x)
    }
}

impl<T: Float, F: Fn(T) -> T, D: Fn(T) -> T> Differentiable<T> for WithDerivative<F, D> {
    #[inline]
    fn derivative(&self, x: T) -> T {
        (self.df)(x)
    }
}

/// Pairs a function closure with its antiderivative closure.
#[derive(Debug, Clone, Copy)]
pub struct WithAntiderivative<F, A> {
    f: F,
    antiderivative: A,
}

impl<F, A> WithAntiderivative<F, A> {
    /// Wraps `f` and an antiderivative `F`.
    pub fn new(f: F, antiderivative: A) -> Self {
        Self { f, antiderivative }
    }
}

impl<T: Float, F: Fn(T) -> T, A: Fn(T) -> T> ScalarFunction<T> for WithAntiderivative<F, A> {
    #[inline]
    fn evaluate(&self, x: T) -> T {
        (self.f)(x)
    }
}

impl<T: Float, F: Fn(T) -> T, A: Fn(T) -> T> Antiderivative<T> for WithAntiderivative<F, A> {
    #[inline]
    fn antiderivative(&self, x: T) -> T {
        (self.antiderivative)(x)
    }
}

/// Pairs a planar field closure with its gradient closure.
///
/// # Examples
/// ```
/// use numerics_core::traits::{GradientField2, ScalarField2, WithGradient};
///
/// let bowl = WithGradient::new(
///     |x: f64, y: f64| x * x + y * y,
///     |x: f64, y: f64| (2.0 * x, 2.0 * y),
/// );
/// assert_eq!(bowl.evaluate(1.0, 2.0), 5.0);
/// assert_eq!(bowl.gradient(1.0, 2.0), (2.0, 4.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WithGradient<F, G> {
    f: F,
    grad: G,
}

impl<F, G> WithGradient<F, G> {
    /// Wraps `f` and its gradient `grad`.
    pub fn new(f: F, grad: G) -> Self {
        Self { f, grad }
    }
}

impl<T: Float, F: Fn(T, T) -> T, G: Fn(T, T) -> (T, T)> ScalarField2<T> for WithGradient<F, G> {
    #[inline]
    fn evaluate(&self, x: T, y: T) -> T {
        (self.f)(x, y)
    }
}

impl<T: Float, F: Fn(T, T) -> T, G: Fn(T, T) -> (T, T)> GradientField2<T>
    for WithGradient<F, G>
{
    #[inline]
    fn gradient(&self, x: T, y: T) -> (T, T) {
        (self.grad)(x, y)
    }
}
