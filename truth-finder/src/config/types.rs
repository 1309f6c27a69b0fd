use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use url::Url;

/// Configuration file looked up when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "truthfinder.toml";

/// Analysis endpoint used when neither the file nor the command line sets one
pub const DEFAULT_ENDPOINT: &str = "https://truthfinderai-backend.onrender.com";

const DEFAULT_HEALTH_PATH: &str = "/health";
const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TruthFinderConfig {
    /// Analysis service settings
    pub service: Option<ServiceConfig>,
}

/// Analysis service connection settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// URL that analysis requests are POSTed to
    pub endpoint: Option<String>,
    /// Path of the health probe, resolved against the endpoint's origin
    pub health_path: Option<String>,
    /// Request timeout in seconds, enforced by the transport
    pub timeout_seconds: Option<u64>,
    /// Extra headers sent with every request
    pub headers: Option<HashMap<String, String>>,
}

impl TruthFinderConfig {
    /// Replace the configured endpoint, keeping every other setting
    pub fn with_endpoint<S: Into<String>>(mut self, endpoint: S) -> Self {
        self.service
            .get_or_insert_with(ServiceConfig::default)
            .endpoint = Some(endpoint.into());
        self
    }

    pub fn endpoint(&self) -> &str {
        self.service
            .as_ref()
            .and_then(|s| s.endpoint.as_deref())
            .unwrap_or(DEFAULT_ENDPOINT)
    }

    pub fn health_path(&self) -> &str {
        self.service
            .as_ref()
            .and_then(|s| s.health_path.as_deref())
            .unwrap_or(DEFAULT_HEALTH_PATH)
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.service
            .as_ref()
            .and_then(|s| s.timeout_seconds)
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    pub fn headers(&self) -> HashMap<String, String> {
        self.service
            .as_ref()
            .and_then(|s| s.headers.clone())
            .unwrap_or_default()
    }

    /// Parsed analysis endpoint
    pub fn endpoint_url(&self) -> Result<Url> {
        let endpoint = self.endpoint();
        let url = Url::parse(endpoint).map_err(|e| {
            AnalysisError::invalid_config(format!("Invalid endpoint '{}': {}", endpoint, e))
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(AnalysisError::invalid_config(format!(
                "Unsupported endpoint scheme '{}' in '{}'. Use http or https",
                other, endpoint
            ))),
        }
    }

    /// Health probe URL: the health path joined onto the endpoint
    pub fn health_url(&self) -> Result<Url> {
        let base = self.endpoint_url()?;
        base.join(self.health_path()).map_err(|e| {
            AnalysisError::invalid_config(format!(
                "Invalid health path '{}': {}",
                self.health_path(),
                e
            ))
        })
    }
}
