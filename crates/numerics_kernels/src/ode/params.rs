//! Time grid and initial condition for the fixed-step integrators.

use numerics_core::types::{require_at_least, require_finite, require_positive, KernelResult};
use num_traits::Float;

/// Initial value, horizon and panel count.
///
/// The integrators cover `0 ≤ t < t1` on `n_panels` points spaced
/// `dt = t1 / n_panels`, so the history holds `y(0), y(dt), …, y(t1 − dt)`.
///
/// # Examples
///
/// ```
/// use numerics_kernels::ode::OdeParams;
///
/// let params = OdeParams::new(1200.0_f64, 60.0, 15).unwrap();
/// assert_eq!(params.dt(), 4.0);
/// assert_eq!(params.timebase().len(), 15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(default, bound(deserialize = "T: Float + serde::Deserialize<'de>"))
)]
pub struct OdeParams<T> {
    y0: T,
    t1: T,
    n_panels: usize,
}

impl<T: Float> Default for OdeParams<T> {
    /// 1200 nuclei over 60 hours in 15 panels.
    fn default() -> Self {
        Self {
            y0: T::from(1200.0).unwrap(),
            t1: T::from(60.0).unwrap(),
            n_panels: 15,
        }
    }
}

impl<T: Float> OdeParams<T> {
    /// Creates validated parameters.
    ///
    /// # Errors
    /// `InvalidParameter` when `n_panels == 0`, `t1` is not positive, or
    /// `y0` is not finite.
    pub fn new(y0: T, t1: T, n_panels: usize) -> KernelResult<Self> {
        let params = Self { y0, t1, n_panels };
        params.validate()?;
        Ok(params)
    }

    /// Checks every field.
    pub fn validate(&self) -> KernelResult<()> {
        require_finite("y0", self.y0)?;
        require_positive("t1", self.t1)?;
        require_at_least("n_panels", self.n_panels, 1)?;
        Ok(())
    }

    /// Initial condition.
    pub fn y0(&self) -> T {
        self.y0
    }

    /// End of the time range (exclusive).
    pub fn t1(&self) -> T {
        self.t1
    }

    /// Number of panels, which is also the history length.
    pub fn n_panels(&self) -> usize {
        self.n_panels
    }

    /// Same horizon with a different panel count.
    pub fn with_panels(&self, n_panels: usize) -> KernelResult<Self> {
        Self::new(self.y0, self.t1, n_panels)
    }

    /// Step `t1 / n_panels`.
    pub fn dt(&self) -> T {
        self.t1 / T::from(self.n_panels).unwrap()
    }

    /// Start time of each panel, `i · dt`.
    pub fn timebase(&self) -> Vec<T> {
        let dt = self.dt();
        (0..self.n_panels)
            .map(|i| T::from(i).unwrap() * dt)
            .collect()
    }
}
