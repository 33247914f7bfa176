//! Core value and error types.
//!
//! This module provides:
//! - `error`: [`KernelError`] and the validation helpers every kernel uses
//! - `point`: [`Point2`], the element type of planar trajectories
//!
//! # Re-exports
//!
//! [`KernelError`], [`KernelResult`] and [`Point2`] are re-exported at this
//! module level for convenience.

pub mod error;
pub mod point;

pub use error::{
    require_at_least, require_finite, require_nonzero, require_positive, KernelError,
    KernelResult,
};
pub use point::Point2;
