use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};

/// Payload posted to the analysis service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub url: String,
}

impl AnalysisRequest {
    /// Build a request from raw user input, trimming surrounding whitespace.
    ///
    /// Blank input is rejected locally so no call is ever made for it.
    pub fn from_input(raw_url: &str) -> Result<Self> {
        let url = raw_url.trim();
        if url.is_empty() {
            return Err(AnalysisError::InvalidUrl);
        }
        Ok(Self {
            url: url.to_string(),
        })
    }
}

/// A rhetorical or framing pattern the service detected in the article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManipulativeTechnique {
    #[serde(default)]
    pub technique: String,
    #[serde(default)]
    pub explanation: String,
}

/// Analysis report returned by the service on success
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub trust_score: f64,
    pub sensationalism_score: f64,
    #[serde(default)]
    pub final_verdict: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone_analysis: Option<String>,
    /// Absent in the payload is treated the same as an empty list
    #[serde(default, deserialize_with = "null_as_empty")]
    pub manipulative_techniques: Vec<ManipulativeTechnique>,
}

fn null_as_empty<'de, D>(
    deserializer: D,
) -> std::result::Result<Vec<ManipulativeTechnique>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<ManipulativeTechnique>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body the service sends alongside a non-2xx status
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceErrorBody {
    pub error: Option<String>,
}

impl ServiceErrorBody {
    /// Extract the service's error text, if the body is JSON with a string `error` field
    pub fn message_from(body: &str) -> Option<String> {
        serde_json::from_str::<serde_json::Value>(body)
            .ok()?
            .get("error")?
            .as_str()
            .filter(|message| !message.is_empty())
            .map(str::to_string)
    }
}

/// Raw response data captured from the analysis service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceResponse {
    pub status: u16,
    pub body: String,
    pub url: String,
    pub curl_command: String,
}

impl ServiceResponse {
    /// Create a new service response
    pub fn new(status: u16, body: String, url: String, curl_command: String) -> Self {
        Self {
            status,
            body,
            url,
            curl_command,
        }
    }

    /// Check if the response indicates success (2xx status code)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Interpret the response as the outcome of an analysis request
    pub fn into_result(self) -> Result<AnalysisResult> {
        if self.is_success() {
            serde_json::from_str(&self.body).map_err(|e| {
                AnalysisError::transport(format!(
                    "Service answered {} but the analysis payload was malformed: {}",
                    self.status, e
                ))
            })
        } else {
            Err(AnalysisError::service(
                self.status,
                ServiceErrorBody::message_from(&self.body),
            ))
        }
    }
}

/// Outcome of probing the service's health endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    Healthy,
    Unhealthy { status: u16, body: String },
    Unreachable { reason: String },
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy)
    }
}
