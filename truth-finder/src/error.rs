use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for truth-finder operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Message shown when the submitted URL is blank
pub const INVALID_URL_MESSAGE: &str = "Please enter a valid URL";

/// Message shown when the service rejects a request without explaining why
pub const SERVICE_FALLBACK_MESSAGE: &str = "Failed to analyze article";

/// Message shown when the service could not be reached at all
pub const TRANSPORT_MESSAGE: &str =
    "Failed to connect to the analysis service. Make sure the backend is running.";

/// Error types for analysis requests and their configuration
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Invalid URL: input is empty")]
    InvalidUrl,

    #[error(
        "Analysis service returned {status}: {}",
        .message.as_deref().unwrap_or("no error message")
    )]
    Service {
        status: u16,
        message: Option<String>,
    },

    #[error("Transport failure: {reason}")]
    Transport { reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl AnalysisError {
    /// Create a new service error from a non-2xx status and optional service message
    pub fn service(status: u16, message: Option<String>) -> Self {
        Self::Service { status, message }
    }

    /// Create a new transport error
    pub fn transport<S: Into<String>>(reason: S) -> Self {
        Self::Transport {
            reason: reason.into(),
        }
    }

    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Whether this error was raised before any network activity
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidUrl)
    }

    /// The message a user sees for this error.
    ///
    /// Validation and transport failures carry fixed wording; service failures
    /// surface the service's own text when it provided one.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidUrl => INVALID_URL_MESSAGE.to_string(),
            Self::Service { message, .. } => message
                .clone()
                .unwrap_or_else(|| SERVICE_FALLBACK_MESSAGE.to_string()),
            Self::Transport { .. } => TRANSPORT_MESSAGE.to_string(),
            Self::ConfigNotFound { path } => {
                format!("Configuration file not found at: {}", path.display())
            }
            other => other.to_string(),
        }
    }
}
