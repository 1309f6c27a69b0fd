use crate::config::types::TruthFinderConfig;
use crate::config::validator::ConfigValidatorImpl;
use crate::error::{AnalysisError, Result};
use crate::traits::ConfigValidator;
use std::path::Path;

/// Configuration loader trait
pub trait ConfigLoader {
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<TruthFinderConfig>;
    fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<TruthFinderConfig>;
}

/// Default configuration loader implementation
pub struct DefaultConfigLoader;

impl ConfigLoader for DefaultConfigLoader {
    /// Load configuration from a truthfinder.toml file
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<TruthFinderConfig> {
        let content = std::fs::read_to_string(&path).map_err(|_| AnalysisError::ConfigNotFound {
            path: path.as_ref().to_path_buf(),
        })?;

        let config: TruthFinderConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration and check it before use
    fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<TruthFinderConfig> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(AnalysisError::ConfigNotFound {
                path: path_ref.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path_ref).map_err(AnalysisError::Io)?;

        let config: TruthFinderConfig = toml::from_str(&content).map_err(|e| {
            AnalysisError::invalid_config(format!(
                "Failed to parse TOML in {}: {}",
                path_ref.display(),
                e
            ))
        })?;

        ConfigValidatorImpl::new().validate_with_context(&config, path_ref)?;
        Ok(config)
    }
}

impl TruthFinderConfig {
    /// Load configuration from a truthfinder.toml file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        DefaultConfigLoader::load_from_file(path)
    }

    /// Load configuration with validation and file context in errors
    pub fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<Self> {
        DefaultConfigLoader::load_with_validation(path)
    }

    /// Load the file if it exists, otherwise fall back to built-in defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load_with_validation(path)
        } else {
            tracing::debug!(path = %path.as_ref().display(), "config file absent, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        ConfigValidatorImpl::new().validate(self)
    }
}
