//! Planar point type used by trajectories and grids.

use num_traits::Float;

/// A point in the plane.
///
/// # Examples
/// ```
/// use numerics_core::types::Point2;
///
/// let p = Point2::new(3.0_f64, 4.0);
/// assert_eq!(p.norm(), 5.0);
/// assert_eq!(p.distance_to(Point2::new(3.0, 0.0)), 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2<T> {
    /// Horizontal coordinate.
    pub x: T,
    /// Vertical coordinate.
    pub y: T,
}

impl<T: Float> Point2<T> {
    /// Creates a point from its coordinates.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Euclidean norm.
    #[inline]
    pub fn norm(self) -> T {
        self.x.hypot(self.y)
    }

    /// Squared distance to `other`.
    #[inline]
    pub fn squared_distance_to(self, other: Self) -> T {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance_to(self, other: Self) -> T {
        self.squared_distance_to(other).sqrt()
    }

    /// True when both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Moves the point by `length` along `heading` (radians).
    #[inline]
    pub fn advance(self, heading: T, length: T) -> Self {
        Self {
            x: self.x + length * heading.cos(),
            y: self.y + length * heading.sin(),
        }
    }
}

impl<T> From<(T, T)> for Point2<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}
