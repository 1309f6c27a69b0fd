use crate::config::types::TruthFinderConfig;
use crate::error::{AnalysisError, Result};
use crate::traits::ConfigValidator;
use std::path::Path;

/// Configuration validator implementation
pub struct ConfigValidatorImpl;

impl ConfigValidator for ConfigValidatorImpl {
    type Config = TruthFinderConfig;

    fn validate(&self, config: &TruthFinderConfig) -> Result<()> {
        self.validate_with_context(config, "configuration")
    }
}

impl ConfigValidatorImpl {
    /// Create a new validator
    pub fn new() -> Self {
        Self
    }

    /// Validation with the config source named in error messages
    pub fn validate_with_context<P: AsRef<Path>>(
        &self,
        config: &TruthFinderConfig,
        config_path: P,
    ) -> Result<()> {
        let source = config_path.as_ref().to_string_lossy();

        config.endpoint_url().map_err(|e| match e {
            AnalysisError::InvalidConfig { message } => {
                AnalysisError::invalid_config(format!("{} in {}", message, source))
            }
            other => other,
        })?;

        if config.timeout_seconds() == 0 {
            return Err(AnalysisError::invalid_config(format!(
                "timeout_seconds must be greater than zero in {}",
                source
            )));
        }

        if !config.health_path().starts_with('/') {
            return Err(AnalysisError::invalid_config(format!(
                "health_path '{}' must start with '/' in {}",
                config.health_path(),
                source
            )));
        }

        for name in config.headers().keys() {
            if reqwest::header::HeaderName::from_bytes(name.as_bytes()).is_err() {
                return Err(AnalysisError::invalid_config(format!(
                    "Invalid header name '{}' in {}",
                    name, source
                )));
            }
        }

        Ok(())
    }
}

impl Default for ConfigValidatorImpl {
    fn default() -> Self {
        Self::new()
    }
}
