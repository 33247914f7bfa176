//! Euler and Heun fixed-step integrators.

use super::OdeParams;
use numerics_core::traits::Autonomous;
use numerics_core::types::KernelResult;
use num_traits::Float;

/// Explicit one-step scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OdeMethod {
    /// `y ← y + f(y)·dt`; first order.
    Euler,
    /// `k0 = f(y)`, `k1 = f(y + k0·dt)`, `y ← y + dt/2·(k0 + k1)`; second order.
    Heun,
}

impl OdeMethod {
    /// Both schemes.
    pub const ALL: [OdeMethod; 2] = [Self::Euler, Self::Heun];

    /// Global order of accuracy.
    pub fn order(self) -> u32 {
        match self {
            Self::Euler => 1,
            Self::Heun => 2,
        }
    }

    /// Advances `y` by one step of size `dt`.
    #[inline]
    pub fn step<T: Float, F: Autonomous<T>>(self, f: &F, y: T, dt: T) -> T {
        match self {
            Self::Euler => y + f.rate(y) * dt,
            Self::Heun => {
                let k0 = f.rate(y);
                let k1 = f.rate(y + k0 * dt);
                y + dt / T::from(2.0).unwrap() * (k0 + k1)
            }
        }
    }
}

/// Integrates `dy/dt = f(y)` and returns the history, index 0 being `y0`.
///
/// # Errors
/// `InvalidParameter` if `params` fails validation.
///
/// # Examples
///
/// ```
/// use numerics_kernels::ode::{solve, OdeMethod, OdeParams};
///
/// let params = OdeParams::new(1.0_f64, 1.0, 4).unwrap();
/// let history = solve(OdeMethod::Euler, &|y: f64| -y, &params).unwrap();
/// assert_eq!(history, vec![1.0, 0.75, 0.5625, 0.421875]);
/// ```
pub fn solve<T, F>(method: OdeMethod, f: &F, params: &OdeParams<T>) -> KernelResult<Vec<T>>
where
    T: Float,
    F: Autonomous<T>,
{
    params.validate()?;
    let dt = params.dt();
    let mut history = Vec::with_capacity(params.n_panels());
    let mut y = params.y0();
    history.push(y);
    for _ in 1..params.n_panels() {
        y = method.step(f, y, dt);
        history.push(y);
    }
    if let Some(last) = history.last() {
        if !last.is_finite() {
            tracing::warn!(?method, n_panels = params.n_panels(), "integration blew up");
        }
    }
    Ok(history)
}

/// Euler's method from `y0` over `[0, t1)` in `n_panels` panels.
///
/// # Errors
/// See [`OdeParams::new`].
pub fn solve_euler<T, F>(f: &F, y0: T, t1: T, n_panels: usize) -> KernelResult<Vec<T>>
where
    T: Float,
    F: Autonomous<T>,
{
    solve(OdeMethod::Euler, f, &OdeParams::new(y0, t1, n_panels)?)
}

/// Heun's method from `y0` over `[0, t1)` in `n_panels` panels.
///
/// # Errors
/// See [`OdeParams::new`].
pub fn solve_heun<T, F>(f: &F, y0: T, t1: T, n_panels: usize) -> KernelResult<Vec<T>>
where
    T: Float,
    F: Autonomous<T>,
{
    solve(OdeMethod::Heun, f, &OdeParams::new(y0, t1, n_panels)?)
}
