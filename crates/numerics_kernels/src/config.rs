//! Aggregated kernel parameters loadable from TOML.
//!
//! Every section is optional and falls back to its `Default`. After parsing,
//! each section is validated so a bad knob is reported with the section it
//! came from.
//!
//! ```toml
//! [quadrature]
//! x0 = 0.0
//! x1 = 2.0
//! n_panels = 256
//!
//! [newton]
//! max_iterations = 50
//!
//! [monte_carlo]
//! trials = 40
//! seed = 42
//! ```

use crate::calculus::{DifferenceParams, SimpsonParams};
use crate::ode::OdeParams;
use crate::optimiser::GradientDescentParams;
use crate::solvers::NewtonParams;
use crate::stochastic::{ChemotaxisParams, MonteCarloParams};
use numerics_core::types::KernelError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a [`SuiteConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid TOML or does not match the schema.
    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be rendered as TOML.
    #[error("Failed to serialise TOML: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The configuration file could not be read.
    #[error("Configuration file error: {0}")]
    File(String),

    /// A section parsed but holds an out-of-domain value.
    #[error("Invalid [{section}] section: {source}")]
    Invalid {
        /// Section name.
        section: &'static str,
        /// Underlying validation failure.
        source: KernelError,
    },
}

/// Parameters for every kernel in one document.
///
/// # Examples
///
/// ```
/// use numerics_kernels::config::SuiteConfig;
///
/// let config = SuiteConfig::from_toml_str("[ode]\nn_panels = 30\n").unwrap();
/// assert_eq!(config.ode.n_panels(), 30);
/// assert_eq!(config.newton.max_iterations(), 35);
///
/// assert!(SuiteConfig::from_toml_str("[quadrature]\nn_panels = 0\n").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuiteConfig {
    /// Backward-difference step.
    pub differentiation: DifferenceParams<f64>,
    /// Simpson interval and panels.
    pub quadrature: SimpsonParams<f64>,
    /// Decay-chain integration grid.
    pub ode: OdeParams<f64>,
    /// Newton budget and tolerance.
    pub newton: NewtonParams,
    /// Gradient-descent rate and budget.
    pub descent: GradientDescentParams<f64>,
    /// Error-scaling run.
    pub monte_carlo: MonteCarloParams,
    /// Walker physics.
    pub chemotaxis: ChemotaxisParams,
}

impl SuiteConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    /// `Parse` for malformed TOML, `Invalid` for an out-of-domain value.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SuiteConfig = toml::from_str(content)?;
        config.validate()?;
        tracing::debug!("loaded suite configuration");
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    /// `File` when the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::File(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Validates every section.
    ///
    /// # Errors
    /// `Invalid` naming the first section that fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks: [(&'static str, Result<(), KernelError>); 7] = [
            ("differentiation", self.differentiation.validate()),
            ("quadrature", self.quadrature.validate()),
            ("ode", self.ode.validate()),
            ("newton", self.newton.validate()),
            ("descent", self.descent.validate()),
            ("monte_carlo", self.monte_carlo.validate()),
            ("chemotaxis", self.chemotaxis.validate()),
        ];
        for (section, check) in checks {
            check.map_err(|source| ConfigError::Invalid { section, source })?;
        }
        Ok(())
    }

    /// Renders the configuration as TOML.
    ///
    /// # Errors
    /// `Serialize` if a value has no TOML representation.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }
}
