//! TruthFinder - article trustworthiness analysis client
//!
//! Submits an article URL to a remote analysis service, tracks the request
//! through a single state slot, and classifies the returned scores for
//! presentation.

// Core modules
pub mod config;
pub mod error;
pub mod traits;
pub mod types;

// Main functionality modules
pub mod classify;
pub mod controller;
pub mod http;
pub mod renderers;

pub mod testing;

// Re-export main types for convenience
pub use classify::{
    score_width_percent, sensationalism_tier, trust_tier, SensationalismTier, Severity,
    TrustIcon, TrustTier,
};
pub use config::{ServiceConfig, TruthFinderConfig};
pub use controller::{RequestController, RequestState};
pub use error::{AnalysisError, Result};
pub use http::AnalysisClientImpl;
pub use renderers::{CliRenderer, JsonRenderer, OutputRenderer};
pub use traits::AnalysisService;
pub use types::{AnalysisRequest, AnalysisResult, HealthStatus, ManipulativeTechnique};

/// Controller wired to the reqwest-backed client
pub type DefaultRequestController = RequestController<AnalysisClientImpl>;

/// Build a controller for the configured analysis service
pub fn build_controller(config: &TruthFinderConfig) -> Result<DefaultRequestController> {
    let client = AnalysisClientImpl::new(config)?;
    Ok(RequestController::new(client))
}

/// Analyze a single URL with the given configuration and return the final state
pub async fn analyze_url(config: &TruthFinderConfig, url: &str) -> Result<RequestState> {
    let controller = build_controller(config)?;
    Ok(controller.submit(url).await)
}

/// Probe the configured service's health endpoint
pub async fn check_health(config: &TruthFinderConfig) -> Result<HealthStatus> {
    let client = AnalysisClientImpl::new(config)?;
    Ok(client.health().await)
}
