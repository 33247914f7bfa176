//! Seeded stochastic kernels.
//!
//! Every function here draws from a caller-supplied
//! [`KernelRng`](numerics_core::rng::KernelRng), so a run is reproducible
//! from its seed.
//!
//! - [`monte_carlo`]: hit-and-miss estimation of π and its error scaling
//! - [`chemotaxis`]: run-and-tumble walkers biased by a gradient sensor

pub mod chemotaxis;
pub mod monte_carlo;

pub use chemotaxis::{
    simulate_ensemble, simulate_walk, ChemotaxisParams, ChemotaxisParamsBuilder, Ensemble,
    WalkStep, WalkTrace, Walker, DEFAULT_WALKERS,
};
pub use monte_carlo::{
    error_scaling, estimate_pi, measure_rms_error, quarter_disk_hits, run_error_scaling,
    scaling_exponent, ErrorSample, MonteCarloParams, MonteCarloParamsBuilder,
    DEFAULT_POINT_COUNTS, DEFAULT_TRIALS,
};
