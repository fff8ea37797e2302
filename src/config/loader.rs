//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configurations from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{
    BracketsConfig, ContributionRates, JurisdictionMetadata, PayrollConfig, RatesConfig, TaxBracket,
};

/// Loads and provides access to payroll configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides access to the validated [`PayrollConfig`].
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/dz/
/// ├── jurisdiction.yaml # Jurisdiction metadata
/// ├── rates.yaml        # Minimum wage and contribution rates
/// └── brackets.yaml     # Progressive tax bracket schedule
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/dz").unwrap();
/// println!("Minimum wage: {}", loader.config().smig());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/dz")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The bracket schedule violates a structural invariant
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/dz")?;
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load jurisdiction.yaml
        let metadata_path = path.join("jurisdiction.yaml");
        let metadata = Self::load_yaml::<JurisdictionMetadata>(&metadata_path)?;

        // Load rates.yaml
        let rates_path = path.join("rates.yaml");
        let rates = Self::load_yaml::<RatesConfig>(&rates_path)?;

        // Load brackets.yaml
        let brackets_path = path.join("brackets.yaml");
        let brackets = Self::load_yaml::<BracketsConfig>(&brackets_path)?;

        let config =
            PayrollConfig::new(metadata, rates.smig, rates.contributions, brackets.brackets)?;

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the jurisdiction metadata.
    pub fn metadata(&self) -> &JurisdictionMetadata {
        self.config.metadata()
    }

    /// Returns the statutory minimum-wage floor.
    pub fn smig(&self) -> Decimal {
        self.config.smig()
    }

    /// Returns the mandatory contribution rates.
    pub fn contributions(&self) -> ContributionRates {
        self.config.contributions()
    }

    /// Returns the validated tax bracket schedule.
    pub fn brackets(&self) -> &[TaxBracket] {
        self.config.brackets()
    }
}
