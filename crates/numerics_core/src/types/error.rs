//! Error types for structured error handling.
//!
//! Only parameter validation is fatal. Non-convergence and numerical
//! degeneracy are reported through [`Termination`](crate::math::Termination)
//! and sentinel values, never through this type.

use thiserror::Error;

/// Errors raised when a kernel cannot start because its inputs are invalid.
///
/// # Variants
/// - `InvalidParameter`: A step size, count or bound outside its valid domain
/// - `EmptyInput`: A metric or driver was handed an empty sequence
///
/// # Examples
/// ```
/// use numerics_core::types::KernelError;
///
/// let err = KernelError::invalid("dx", "must be non-zero");
/// assert_eq!(format!("{}", err), "Invalid parameter 'dx': must be non-zero");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// Parameter outside its valid domain.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the violated constraint.
        reason: String,
    },

    /// An input sequence was empty where at least one element is required.
    #[error("Empty input: {0}")]
    EmptyInput(&'static str),
}

impl KernelError {
    /// Shorthand for [`KernelError::InvalidParameter`].
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        tracing::debug!(parameter = name, %reason, "rejected kernel parameter");
        Self::InvalidParameter { name, reason }
    }

    /// Name of the offending parameter, if any.
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            Self::InvalidParameter { name, .. } => Some(name),
            Self::EmptyInput(_) => None,
        }
    }
}

/// Result alias used throughout the kernels.
pub type KernelResult<T> = Result<T, KernelError>;

/// Ensures `value` is finite and strictly positive.
pub fn require_positive<T: num_traits::Float>(name: &'static str, value: T) -> KernelResult<T> {
    if !value.is_finite() {
        return Err(KernelError::invalid(name, "must be finite"));
    }
    if value <= T::zero() {
        return Err(KernelError::invalid(name, "must be positive"));
    }
    Ok(value)
}

/// Ensures `value` is finite and non-zero.
pub fn require_nonzero<T: num_traits::Float>(name: &'static str, value: T) -> KernelResult<T> {
    if !value.is_finite() {
        return Err(KernelError::invalid(name, "must be finite"));
    }
    if value == T::zero() {
        return Err(KernelError::invalid(name, "must be non-zero"));
    }
    Ok(value)
}

/// Ensures `value` is finite.
pub fn require_finite<T: num_traits::Float>(name: &'static str, value: T) -> KernelResult<T> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(KernelError::invalid(name, "must be finite"))
    }
}

/// Ensures a count is at least `min`.
pub fn require_at_least(name: &'static str, value: usize, min: usize) -> KernelResult<usize> {
    if value < min {
        return Err(KernelError::invalid(
            name,
            format!("must be at least {}, got {}", min, value),
        ));
    }
    Ok(value)
}
