//! # numerics_kernels: Numerical Kernels with Error Measurement
//!
//! ## Kernel Layer Role
//!
//! numerics_kernels sits on top of `numerics_core` and provides seven
//! independent kernels, each paired with a driver that measures it against an
//! analytical reference:
//! - Backward-difference differentiation (`calculus`)
//! - Composite Simpson quadrature (`calculus`)
//! - Euler and Heun ODE integration (`ode`)
//! - Newton–Raphson root finding with basin classification (`solvers`)
//! - Fixed-rate gradient descent (`optimiser`)
//! - Monte Carlo estimation of π (`stochastic::monte_carlo`)
//! - Run-and-tumble chemotaxis walks (`stochastic::chemotaxis`)
//!
//! Kernels return plain numeric data. Invalid parameters are rejected with
//! [`KernelError`](numerics_core::types::KernelError); non-convergence and
//! numerical degeneracy are reported in the result, never raised.
//!
//! ## Usage Examples
//!
//! ```rust
//! use numerics_core::functions::{ExponentialDecay, QuadraticSine};
//! use numerics_kernels::calculus::simpson_error_scan;
//! use numerics_kernels::ode::{compare_methods, OdeMethod, OdeParams};
//!
//! let scan = simpson_error_scan(&QuadraticSine, 0.0_f64, 2.0, &[16, 1024]).unwrap();
//! assert!(scan[1].relative_error < 1e-6);
//!
//! let decay = ExponentialDecay::from_half_life(20.8_f64).unwrap();
//! let cmp = compare_methods(&decay, &OdeParams::default()).unwrap();
//! assert!(cmp.final_error(OdeMethod::Heun) < cmp.final_error(OdeMethod::Euler));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Serialisable parameter structs and the TOML-loadable
//!   `config::SuiteConfig`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod calculus;
#[cfg(feature = "serde")]
pub mod config;
pub mod ode;
pub mod optimiser;
pub mod solvers;
pub mod stochastic;
