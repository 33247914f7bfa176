//! Integration tests for module exports.
//!
//! Verify that public modules and types are reachable via absolute paths and
//! compose the way the kernels use them.

use approx::assert_relative_eq;

/// Capability traits accept closures and adapters alike.
#[test]
fn test_traits_module_exports() {
    use numerics_core::traits::{
        Antiderivative, Autonomous, Differentiable, Float, GradientField2, ScalarField2,
        ScalarFunction, WithAntiderivative, WithDerivative, WithGradient,
    };

    fn generic_eval<T: Float, F: ScalarFunction<T>>(f: &F, x: T) -> T {
        f.evaluate(x)
    }
    assert_eq!(generic_eval(&|x: f64| 2.0 * x, 3.0), 6.0);

    let square = WithDerivative::new(|x: f64| x * x, |x: f64| 2.0 * x);
    assert_eq!(square.derivative(3.0), 6.0);

    let line = WithAntiderivative::new(|_x: f64| 1.0, |x: f64| x);
    assert_eq!(line.definite_integral(2.0, 5.0), 3.0);

    let decay = |y: f64| -y;
    assert_eq!(decay.rate(2.0), -2.0);

    let bowl = WithGradient::new(
        |x: f64, y: f64| x * x + y * y,
        |x: f64, y: f64| (2.0 * x, 2.0 * y),
    );
    assert_eq!(bowl.evaluate(1.0, 2.0), 5.0);
    assert_eq!(bowl.gradient(1.0, 2.0), (2.0, 4.0));
}

/// Reference problems expose their closed forms.
#[test]
fn test_functions_module_exports() {
    use numerics_core::functions::{
        Cosine, ExponentialDecay, Paraboloid, QuadraticSine, Rosenbrock, UnityRoots,
    };
    use numerics_core::traits::{Antiderivative, Differentiable, GradientField2, ScalarField2};

    assert_eq!(Cosine.derivative(0.0_f64), 0.0);
    assert_relative_eq!(
        QuadraticSine.definite_integral(0.0_f64, 2.0),
        2.469483380397012,
        max_relative = 1e-12
    );

    let decay = ExponentialDecay::from_half_life(20.8_f64).unwrap();
    assert_relative_eq!(decay.analytic(1200.0, 20.8), 600.0, max_relative = 1e-12);

    let rosenbrock = Rosenbrock::<f64>::default();
    let minimum = rosenbrock.minimum();
    assert_eq!(rosenbrock.evaluate(minimum.x, minimum.y), 0.0);
    assert_eq!(rosenbrock.gradient(1.0, 1.0), (0.0, 0.0));

    let field = Paraboloid::<f64>::default();
    assert_eq!(field.evaluate(30.0, 20.0), 700.0);

    assert_eq!(UnityRoots::default().roots().len(), 4);
}

/// Math helpers are usable together.
#[test]
fn test_math_module_exports() {
    use numerics_core::math::{
        arange, iterate_until, linspace, log_log_slope, max_abs, relative_error, rms_deviation,
        Grid2, ShiftRegister, Step, Termination,
    };

    let xs = linspace(0.0_f64, 1.0, 5);
    assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    assert_eq!(arange(0.0_f64, 1.0, 0.25).unwrap().len(), 4);
    assert_eq!(max_abs(&[-3.0_f64, 2.0]), 3.0);
    assert_relative_eq!(relative_error(1.1_f64, 1.0), 0.1, max_relative = 1e-12);
    assert_eq!(rms_deviation(&[2.0_f64], 2.0).unwrap(), 0.0);
    assert!(log_log_slope(&[1.0], &[1.0]).is_err());

    let mut register = ShiftRegister::filled(3, 0.0_f64).unwrap();
    register.push(6.0);
    assert_eq!(register.span(), Some(6.0));

    let outcome = iterate_until(0_u32, 5, |&n| Step::Continue(n + 1));
    assert_eq!(outcome.state, 5);
    assert_eq!(outcome.termination, Termination::BudgetExhausted);

    let grid = Grid2::newton_zoom();
    assert_eq!(grid.len(), 90_000);
    assert_eq!(grid.extent(), (1.4, 1.8, 1.4, 1.8));
}

/// Seeded generators and error types.
#[test]
fn test_rng_and_types_exports() {
    use numerics_core::rng::KernelRng;
    use numerics_core::types::{KernelError, KernelResult, Point2};

    let mut a = KernelRng::from_seed(7);
    let mut b = KernelRng::from_seed(7);
    let mut buffer = [0.0; 4];
    a.fill_uniform(&mut buffer);
    for &u in &buffer {
        assert_eq!(u, b.gen_uniform());
    }

    fn fails() -> KernelResult<()> {
        Err(KernelError::invalid("dt", "must be positive"))
    }
    assert_eq!(fails().unwrap_err().parameter(), Some("dt"));

    let p = Point2::new(0.0_f64, 0.0).advance(std::f64::consts::FRAC_PI_2, 2.0);
    assert_relative_eq!(p.y, 2.0);
}
