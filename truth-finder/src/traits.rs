use crate::error::Result;
use crate::types::{AnalysisRequest, HealthStatus, ServiceResponse};
use std::future::Future;

/// Transport to the remote analysis service
pub trait AnalysisService: Send + Sync {
    /// Send one analysis request and capture whatever the service answered.
    ///
    /// Any HTTP status is a successful call here; `Err` means no response was
    /// obtained at all.
    fn analyze(
        &self,
        request: &AnalysisRequest,
    ) -> impl Future<Output = Result<ServiceResponse>> + Send;

    /// Probe the service's health endpoint
    fn health(&self) -> impl Future<Output = HealthStatus> + Send;
}

/// Trait for configuration validation
pub trait ConfigValidator: Send + Sync {
    type Config;

    /// Validate configuration
    fn validate(&self, config: &Self::Config) -> Result<()>;
}
