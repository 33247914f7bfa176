//! Basin-of-attraction classification for Newton's method on `zⁿ − 1`.
//!
//! Sectors are half-open with the lower edge inclusive and centred on the
//! roots of unity: sector `k` covers `[(k − ½)·w, (k + ½)·w)` with
//! `w = 2π/n`, read modulo 2π. Angles come from `atan2` and lie in
//! `(−π, π]` (a negative-zero imaginary part yields `−π`, which wraps onto
//! the same sector as `π`). Every finite non-zero point therefore lands in
//! exactly one sector; the origin and non-finite points land in the
//! sentinel basin `n`.

use super::{newton_raphson, NewtonParams};
use numerics_core::functions::UnityRoots;
use numerics_core::math::{Grid2, Termination};
use numerics_core::traits::ComplexFunction;
use numerics_core::types::{KernelError, KernelResult};
use num_complex::Complex64;
use std::f64::consts::TAU;

/// Maps a final iterate to a basin index by its argument.
///
/// # Examples
///
/// ```
/// use num_complex::Complex64;
/// use numerics_kernels::solvers::BasinClassifier;
///
/// let classifier = BasinClassifier::default();
/// assert_eq!(classifier.classify(Complex64::new(0.0, 2.0)), 1);
/// assert_eq!(classifier.classify(Complex64::new(-3.0, 0.0)), 2);
/// assert_eq!(classifier.classify(Complex64::new(0.0, 0.0)), classifier.sentinel());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "ClassifierRepr"))]
pub struct BasinClassifier {
    order: u32,
}

/// Unchecked wire form of [`BasinClassifier`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct ClassifierRepr {
    order: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<ClassifierRepr> for BasinClassifier {
    type Error = KernelError;

    fn try_from(repr: ClassifierRepr) -> KernelResult<Self> {
        Self::with_order(repr.order)
    }
}

impl Default for BasinClassifier {
    /// Four sectors for the quartic.
    fn default() -> Self {
        Self { order: 4 }
    }
}

impl From<&UnityRoots> for BasinClassifier {
    fn from(f: &UnityRoots) -> Self {
        Self::new(f.order())
    }
}

impl BasinClassifier {
    /// Creates a classifier with `order` sectors; orders below 1 are raised to 1.
    pub fn new(order: u32) -> Self {
        Self {
            order: order.max(1),
        }
    }

    /// Creates a classifier with exactly `order` sectors.
    ///
    /// # Errors
    /// `InvalidParameter` when `order == 0`.
    pub fn with_order(order: u32) -> KernelResult<Self> {
        if order == 0 {
            return Err(KernelError::invalid("order", "must be at least 1"));
        }
        Ok(Self { order })
    }

    /// Number of sectors.
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Index reserved for points that fit no sector.
    pub fn sentinel(&self) -> usize {
        self.order as usize
    }

    /// Sector containing the angle `theta` (radians, any range).
    pub fn sector_of_angle(&self, theta: f64) -> usize {
        if !theta.is_finite() {
            return self.sentinel();
        }
        let width = TAU / f64::from(self.order);
        let sector = ((theta + 0.5 * width) / width).floor() as i64;
        sector.rem_euclid(i64::from(self.order)) as usize
    }

    /// Basin of `z`, or the sentinel for zero and non-finite points.
    pub fn classify(&self, z: Complex64) -> usize {
        if !z.is_finite() || (z.re == 0.0 && z.im == 0.0) {
            return self.sentinel();
        }
        self.sector_of_angle(z.arg())
    }
}

/// Outcome of one Newton run from a single starting point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BasinResult {
    /// Basin index, `0..order`, or the sentinel.
    pub basin: usize,
    /// Newton steps taken.
    pub iterations: usize,
    /// Why the iteration stopped.
    pub termination: Termination,
    /// Final iterate.
    pub root: Complex64,
}

/// Runs Newton from `z0` and classifies where it ends.
///
/// A run that exhausts its budget is still classified by the angle of its
/// last iterate. A degenerate run always maps to the sentinel.
///
/// # Errors
/// `InvalidParameter` if `params` fails validation.
pub fn find_basin<F: ComplexFunction>(
    f: &F,
    z0: Complex64,
    params: &NewtonParams,
    classifier: &BasinClassifier,
) -> KernelResult<BasinResult> {
    let outcome = newton_raphson(f, z0, params)?;
    let basin = match outcome.termination {
        Termination::Degenerate => classifier.sentinel(),
        Termination::Converged => classifier.classify(outcome.state),
        Termination::BudgetExhausted => {
            tracing::debug!(
                re = z0.re,
                im = z0.im,
                iterations = outcome.iterations,
                "newton did not converge"
            );
            classifier.classify(outcome.state)
        }
    };
    Ok(BasinResult {
        basin,
        iterations: outcome.iterations,
        termination: outcome.termination,
        root: outcome.state,
    })
}

/// Basin and convergence-time images over a grid of starting points.
///
/// Both images are row-major with `n_points` rows (y ascending) of
/// `n_points` columns (x ascending), matching an image drawn with its
/// origin at the lower left.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BasinMap {
    /// Samples per axis.
    pub n_points: usize,
    /// `(x0, x1, y0, y1)` of the scanned region.
    pub extent: (f64, f64, f64, f64),
    /// Basin index per start.
    pub basins: Vec<usize>,
    /// Newton steps per start.
    pub iterations: Vec<usize>,
}

impl BasinMap {
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.n_points && col < self.n_points).then(|| row * self.n_points + col)
    }

    /// Basin at grid row `row` (y) and column `col` (x).
    pub fn basin_at(&self, row: usize, col: usize) -> Option<usize> {
        self.index(row, col).map(|i| self.basins[i])
    }

    /// Convergence time at grid row `row` (y) and column `col` (x).
    pub fn iterations_at(&self, row: usize, col: usize) -> Option<usize> {
        self.index(row, col).map(|i| self.iterations[i])
    }

    /// Number of starts per basin, the sentinel included as the last entry.
    pub fn counts(&self, classifier: &BasinClassifier) -> Vec<usize> {
        let mut counts = vec![0; classifier.sentinel() + 1];
        for &basin in &self.basins {
            if let Some(slot) = counts.get_mut(basin) {
                *slot += 1;
            }
        }
        counts
    }
}

/// Classifies every point of `grid` as a Newton starting value.
///
/// # Errors
/// `InvalidParameter` if `params` fails validation.
///
/// # Examples
///
/// ```
/// use numerics_core::functions::UnityRoots;
/// use numerics_core::math::Grid2;
/// use numerics_kernels::solvers::{scan_basins, BasinClassifier, NewtonParams};
///
/// let grid = Grid2::new((-2.0, 2.0), (-2.0, 2.0), 20).unwrap();
/// let classifier = BasinClassifier::default();
/// let f = UnityRoots::default();
/// let map = scan_basins(&f, &grid, &NewtonParams::default(), &classifier).unwrap();
/// assert_eq!(map.basins.len(), 400);
/// ```
pub fn scan_basins<F: ComplexFunction>(
    f: &F,
    grid: &Grid2,
    params: &NewtonParams,
    classifier: &BasinClassifier,
) -> KernelResult<BasinMap> {
    params.validate()?;
    let points = grid.points();
    let mut basins = Vec::with_capacity(points.len());
    let mut iterations = Vec::with_capacity(points.len());
    for p in points {
        let z0 = Complex64::new(p.x, p.y);
        let result = find_basin(f, z0, params, classifier)?;
        basins.push(result.basin);
        iterations.push(result.iterations);
    }
    Ok(BasinMap {
        n_points: grid.n_points(),
        extent: grid.extent(),
        basins,
        iterations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    // ========================================
    // Sector Boundaries
    // ========================================

    #[test]
    fn test_sector_edges_lower_inclusive() {
        let c = BasinClassifier::default();
        assert_eq!(c.sector_of_angle(0.0), 0);
        assert_eq!(c.sector_of_angle(-FRAC_PI_4), 0);
        assert_eq!(c.sector_of_angle(FRAC_PI_4), 1);
        assert_eq!(c.sector_of_angle(3.0 * FRAC_PI_4), 2);
        assert_eq!(c.sector_of_angle(-3.0 * FRAC_PI_4), 3);
    }

    #[test]
    fn test_negative_real_axis_both_signs_of_zero() {
        let c = BasinClassifier::default();
        assert_eq!(c.sector_of_angle(PI), 2);
        assert_eq!(c.sector_of_angle(-PI), 2);
        assert_eq!(c.classify(Complex64::new(-1.0, 0.0)), 2);
        assert_eq!(c.classify(Complex64::new(-1.0, -0.0)), 2);
    }

    #[test]
    fn test_sentinel_cases() {
        let c = BasinClassifier::default();
        assert_eq!(c.sentinel(), 4);
        assert_eq!(c.classify(Complex64::new(0.0, 0.0)), 4);
        assert_eq!(c.classify(Complex64::new(-0.0, -0.0)), 4);
        assert_eq!(c.classify(Complex64::new(f64::NAN, 1.0)), 4);
        assert_eq!(c.classify(Complex64::new(f64::INFINITY, 0.0)), 4);
        assert_eq!(c.sector_of_angle(f64::NAN), 4);
    }

    #[test]
    fn test_cubic_classifier() {
        let c = BasinClassifier::from(&UnityRoots::new(3));
        assert_eq!(c.sentinel(), 3);
        for (k, root) in UnityRoots::new(3).roots().into_iter().enumerate() {
            assert_eq!(c.classify(root), k);
        }
    }

    proptest! {
        #[test]
        fn prop_sector_interior_maps_to_its_root(
            k in 0usize..4,
            offset in -0.49f64..0.49,
            radius in 1e-3f64..1e3,
        ) {
            let c = BasinClassifier::default();
            let theta = (k as f64 + offset) * FRAC_PI_2;
            let z = Complex64::from_polar(radius, theta);
            prop_assert_eq!(c.classify(z), k);
        }

        #[test]
        fn prop_every_finite_point_classified(re in -1e3f64..1e3, im in -1e3f64..1e3) {
            let c = BasinClassifier::default();
            let basin = c.classify(Complex64::new(re, im));
            if re == 0.0 && im == 0.0 {
                prop_assert_eq!(basin, 4);
            } else {
                prop_assert!(basin < 4);
            }
        }
    }

    // ========================================
    // Newton Basins
    // ========================================

    #[test]
    fn test_starts_near_each_root() {
        let f = UnityRoots::default();
        let params = NewtonParams::default();
        let c = BasinClassifier::default();
        for (k, root) in f.roots().into_iter().enumerate() {
            let z0 = root * 1.2 + Complex64::new(0.03, -0.02);
            let result = find_basin(&f, z0, &params, &c).unwrap();
            assert_eq!(result.basin, k, "start {}", z0);
            assert_eq!(result.termination, Termination::Converged);
            assert!((result.root - root).norm() < 1e-4);
        }
    }

    #[test]
    fn test_origin_maps_to_sentinel() {
        let result = find_basin(
            &UnityRoots::default(),
            Complex64::new(0.0, 0.0),
            &NewtonParams::default(),
            &BasinClassifier::default(),
        )
        .unwrap();
        assert_eq!(result.basin, 4);
        assert_eq!(result.termination, Termination::Degenerate);
    }

    #[test]
    fn test_scan_layout_is_row_major() {
        // Axis samples are −2, −1, 0, 1 on both axes
        let grid = Grid2::new((-2.0, 2.0), (-2.0, 2.0), 4).unwrap();
        let c = BasinClassifier::default();
        let params = NewtonParams::default();
        let map = scan_basins(&UnityRoots::default(), &grid, &params, &c).unwrap();

        assert_eq!(map.basin_at(2, 2), Some(4)); // 0
        assert_eq!(map.basin_at(2, 3), Some(0)); // 1
        assert_eq!(map.basin_at(3, 2), Some(1)); // i
        assert_eq!(map.basin_at(2, 1), Some(2)); // −1
        assert_eq!(map.basin_at(1, 2), Some(3)); // −i
        assert_eq!(map.iterations_at(2, 3), Some(1));
        assert_eq!(map.basin_at(4, 0), None);
        assert_eq!(map.counts(&c).iter().sum::<usize>(), 16);
        assert_eq!(map.extent, (-2.0, 2.0, -2.0, 2.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_scan_rejects_invalid_params() {
        let grid = Grid2::new((0.0, 1.0), (0.0, 1.0), 2).unwrap();
        let bad: NewtonParams = toml::from_str("max_iterations = 0").unwrap();
        let f = UnityRoots::default();
        let c = BasinClassifier::default();
        assert!(scan_basins(&f, &grid, &bad, &c).is_err());
        assert!(find_basin(&f, Complex64::new(1.0, 1.0), &bad, &c).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialised_classifier_rejects_zero_order() {
        assert!(toml::from_str::<BasinClassifier>("order = 0").is_err());

        let c: BasinClassifier = toml::from_str("order = 3").unwrap();
        assert_eq!(c.sentinel(), 3);
        assert_eq!(c.classify(Complex64::new(1.0, 0.0)), 0);

        let rendered = toml::to_string(&c).unwrap();
        assert_eq!(toml::from_str::<BasinClassifier>(&rendered).unwrap(), c);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialised_polynomial_rejects_zero_order() {
        assert!(toml::from_str::<UnityRoots>("order = 0").is_err());

        let f: UnityRoots = toml::from_str("order = 3").unwrap();
        let c = BasinClassifier::from(&f);
        let params = NewtonParams::default();
        let result = find_basin(&f, Complex64::new(-0.6, 0.9), &params, &c).unwrap();
        assert_eq!(result.basin, 1);
    }

    #[test]
    fn test_with_order_is_strict() {
        assert!(BasinClassifier::with_order(0).is_err());
        assert_eq!(BasinClassifier::with_order(5).unwrap().order(), 5);
        assert_eq!(BasinClassifier::new(0).order(), 1);
    }
}
