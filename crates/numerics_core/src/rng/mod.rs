//! # Random Number Generation
//!
//! Seeded randomness for the stochastic kernels (Monte Carlo estimation,
//! tumble decisions and headings of the random walk).
//!
//! Every stochastic kernel takes a `&mut KernelRng` instead of reaching for a
//! global generator, so a run is fully determined by its seed and independent
//! runs never share state.
//!
//! ```rust
//! use numerics_core::rng::KernelRng;
//!
//! let mut rng = KernelRng::from_seed(12345);
//! let u = rng.gen_uniform();
//! assert!((0.0..1.0).contains(&u));
//!
//! let theta = rng.gen_angle();
//! assert!((0.0..std::f64::consts::TAU).contains(&theta));
//! ```

mod prng;

pub use prng::KernelRng;
