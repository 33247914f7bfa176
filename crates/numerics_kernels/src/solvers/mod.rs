//! Complex root finding.
//!
//! - [`newton_raphson`]: bounded Newton iteration with an explicit stopping reason
//! - [`BasinClassifier`], [`find_basin`], [`scan_basins`]: basins of attraction
//!   of the roots of `zⁿ − 1` and the matching convergence-time image

mod basins;
mod newton;

pub use basins::{find_basin, scan_basins, BasinClassifier, BasinMap, BasinResult};
pub use newton::{newton_raphson, NewtonParams};
