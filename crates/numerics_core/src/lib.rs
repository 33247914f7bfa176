//! # numerics_core: Foundation for the Numerics Kernels
//!
//! ## Foundation Layer Role
//!
//! numerics_core is the bottom layer of the workspace, providing:
//! - Capability traits for the functions kernels operate on (`traits`)
//! - Reference problems with closed-form answers (`functions`)
//! - Shift register, bounded iteration, sampling and error metrics (`math`)
//! - Seeded randomness (`rng`)
//! - Error and point types (`types`)
//!
//! It depends on no other workspace crate.
//!
//! ## Usage Examples
//!
//! ```rust
//! use numerics_core::functions::Cosine;
//! use numerics_core::math::{iterate_until, linspace, Step};
//! use numerics_core::traits::Differentiable;
//!
//! let xs = linspace(0.0_f64, 1.0, 11);
//! let slopes: Vec<f64> = xs.iter().map(|&x| Cosine.derivative(x)).collect();
//! assert_eq!(slopes[0], 0.0);
//!
//! let outcome = iterate_until(1.0_f64, 50, |&x| {
//!     let next = 0.5 * (x + 2.0 / x);
//!     if (next - x).abs() < 1e-12 { Step::Converged(next) } else { Step::Continue(next) }
//! });
//! assert!(outcome.converged());
//! assert!((outcome.state - std::f64::consts::SQRT_2).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialisation for points, reference problems and iteration outcomes

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod functions;
pub mod math;
pub mod rng;
pub mod traits;
pub mod types;
