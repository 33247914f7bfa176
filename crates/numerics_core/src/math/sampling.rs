//! Sample arrays and grids of starting points.

use crate::types::{require_finite, require_positive, KernelError, KernelResult, Point2};
use num_traits::Float;

/// `n` evenly spaced values from `start` to `end`, both ends included.
///
/// `n == 1` yields `[start]`; `n == 0` yields an empty vector.
///
/// # Examples
/// ```
/// use numerics_core::math::linspace;
///
/// let xs = linspace(0.0_f64, 1.0, 5);
/// assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace<T: Float>(start: T, end: T, n: usize) -> Vec<T> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / T::from(n - 1).unwrap();
            (0..n)
                .map(|i| {
                    if i == n - 1 {
                        end
                    } else {
                        start + T::from(i).unwrap() * step
                    }
                })
                .collect()
        }
    }
}

/// Values `start, start + step, …` strictly below `end`.
///
/// # Errors
/// `InvalidParameter` if `step` is not finite and positive or a bound is not
/// finite.
///
/// # Examples
/// ```
/// use numerics_core::math::arange;
///
/// let ts = arange(0.0_f64, 60.0, 4.0).unwrap();
/// assert_eq!(ts.len(), 15);
/// assert_eq!(ts[14], 56.0);
/// ```
pub fn arange<T: Float>(start: T, end: T, step: T) -> KernelResult<Vec<T>> {
    let start = require_finite("start", start)?;
    let end = require_finite("end", end)?;
    let step = require_positive("step", step)?;
    if end <= start {
        return Ok(Vec::new());
    }
    let count = ((end - start) / step).ceil().to_usize().unwrap_or(0);
    Ok((0..count)
        .map(|i| start + T::from(i).unwrap() * step)
        .filter(|&v| v < end)
        .collect())
}

/// Rectangular grid of starting points over `[x0, x1) × [y0, y1)`.
///
/// Points are laid out row-major: row `iy` holds every x at the `iy`-th y.
///
/// # Examples
/// ```
/// use numerics_core::math::Grid2;
///
/// let grid = Grid2::new((-2.0, 2.0), (-2.0, 2.0), 4).unwrap();
/// assert_eq!(grid.x_axis(), vec![-2.0, -1.0, 0.0, 1.0]);
/// assert_eq!(grid.len(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid2 {
    x_range: (f64, f64),
    y_range: (f64, f64),
    n_points: usize,
}

impl Grid2 {
    /// Creates a grid with `n_points` samples per axis.
    ///
    /// # Errors
    /// `InvalidParameter` for an empty or non-finite range or zero points.
    pub fn new(x_range: (f64, f64), y_range: (f64, f64), n_points: usize) -> KernelResult<Self> {
        for (name, (lo, hi)) in [("x_range", x_range), ("y_range", y_range)] {
            if !(lo.is_finite() && hi.is_finite()) {
                return Err(KernelError::invalid(name, "bounds must be finite"));
            }
            if hi <= lo {
                return Err(KernelError::invalid(
                    name,
                    format!("upper bound {} must exceed lower bound {}", hi, lo),
                ));
            }
        }
        if n_points == 0 {
            return Err(KernelError::invalid("n_points", "must be at least 1"));
        }
        Ok(Self {
            x_range,
            y_range,
            n_points,
        })
    }

    /// `[−2, 2)²` at 300 points per axis: the whole basin picture.
    pub fn newton_overview() -> Self {
        Self {
            x_range: (-2.0, 2.0),
            y_range: (-2.0, 2.0),
            n_points: 300,
        }
    }

    /// `[1.4, 1.8)²` at 300 points per axis: a ×100 zoom on a fractal boundary.
    pub fn newton_zoom() -> Self {
        Self {
            x_range: (1.4, 1.8),
            y_range: (1.4, 1.8),
            n_points: 300,
        }
    }

    /// Samples per axis.
    pub fn n_points(&self) -> usize {
        self.n_points
    }

    /// Total number of points.
    pub fn len(&self) -> usize {
        self.n_points * self.n_points
    }

    /// Always false; a grid has at least one point.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// `(x0, x1, y0, y1)` as an image extent.
    pub fn extent(&self) -> (f64, f64, f64, f64) {
        (self.x_range.0, self.x_range.1, self.y_range.0, self.y_range.1)
    }

    fn axis((lo, hi): (f64, f64), n: usize) -> Vec<f64> {
        let step = (hi - lo) / n as f64;
        (0..n).map(|i| lo + i as f64 * step).collect()
    }

    /// Sample positions along x.
    pub fn x_axis(&self) -> Vec<f64> {
        Self::axis(self.x_range, self.n_points)
    }

    /// Sample positions along y.
    pub fn y_axis(&self) -> Vec<f64> {
        Self::axis(self.y_range, self.n_points)
    }

    /// All points in row-major order.
    pub fn points(&self) -> Vec<Point2<f64>> {
        let xs = self.x_axis();
        self.y_axis()
            .into_iter()
            .flat_map(|y| xs.iter().map(move |&x| Point2::new(x, y)))
            .collect()
    }
}
