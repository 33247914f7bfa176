//! Numerical building blocks shared by the kernels.
//!
//! - [`ShiftRegister`]: fixed-capacity FIFO with push/evict semantics
//! - [`iterate_until`]: bounded iteration returning an explicit [`Termination`]
//! - [`linspace`], [`arange`], [`Grid2`]: sample arrays and starting grids
//! - [`metrics`]: error measures against analytical references

mod iterate;
pub mod metrics;
mod ring_buffer;
mod sampling;

pub use iterate::{iterate_until, IterationOutcome, Step, Termination};
pub use metrics::{
    absolute_errors, log_log_slope, max_abs, relative_error, relative_errors, rms_deviation,
};
pub use ring_buffer::ShiftRegister;
pub use sampling::{arange, linspace, Grid2};
