use crate::config::TruthFinderConfig;
use crate::error::{AnalysisError, Result};
use crate::traits::AnalysisService;
use crate::types::{AnalysisRequest, HealthStatus, ServiceResponse};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Request};
use std::time::Duration;
use url::Url;

/// reqwest-backed analysis service client
#[derive(Clone)]
pub struct AnalysisClientImpl {
    client: Client,
    endpoint: Url,
    health_url: Url,
}

impl AnalysisClientImpl {
    /// Create a new client from configuration
    pub fn new(config: &TruthFinderConfig) -> Result<Self> {
        let endpoint = config.endpoint_url()?;
        let health_url = config.health_url()?;

        let mut default_headers = HeaderMap::new();
        for (name, value) in config.headers() {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
                AnalysisError::invalid_config(format!("Invalid header name: {}", name))
            })?;
            let value = HeaderValue::from_str(&value).map_err(|_| {
                AnalysisError::invalid_config(format!("Invalid value for header {}", name))
            })?;
            default_headers.insert(name, value);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .default_headers(default_headers)
            .build()?;

        Ok(Self {
            client,
            endpoint,
            health_url,
        })
    }

    /// The URL analysis requests are sent to
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Build the POST carrying the request payload as JSON
    fn build_request(&self, request: &AnalysisRequest) -> Result<Request> {
        self.client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .build()
            .map_err(Into::into)
    }

    /// Convert a reqwest response into a ServiceResponse
    async fn convert_response(
        &self,
        response: reqwest::Response,
        curl_command: String,
    ) -> Result<ServiceResponse> {
        let status = response.status().as_u16();
        let url = response.url().to_string();

        let body = response
            .text()
            .await
            .map_err(|e| AnalysisError::transport(format!("Failed to read response body: {}", e)))?;

        Ok(ServiceResponse::new(status, body, url, curl_command))
    }

    /// Generate a curl command equivalent for the request
    pub fn generate_curl_command(&self, request: &Request) -> String {
        let mut result = String::from("curl");

        if request.method() != "GET" {
            result.push_str(" -X ");
            result.push_str(request.method().as_str());
        }

        for (name, value) in request.headers() {
            if let Ok(value_str) = value.to_str() {
                result.push_str(" -H '");
                result.push_str(name.as_str());
                result.push_str(": ");
                result.push_str(value_str);
                result.push('\'');
            }
        }

        if let Some(body) = request.body().and_then(|b| b.as_bytes()) {
            result.push_str(" -d '");
            result.push_str(&String::from_utf8_lossy(body));
            result.push('\'');
        }

        result.push_str(" '");
        result.push_str(request.url().as_str());
        result.push('\'');

        result
    }
}

impl AnalysisService for AnalysisClientImpl {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<ServiceResponse> {
        let http_request = self.build_request(request)?;
        let curl_command = self.generate_curl_command(&http_request);
        tracing::debug!(endpoint = %self.endpoint, %curl_command, "sending analysis request");

        let response = self.client.execute(http_request).await.map_err(|e| {
            tracing::warn!(endpoint = %self.endpoint, error = %e, "analysis request failed");
            AnalysisError::transport(format!("Request failed: {}", e))
        })?;

        let response = self.convert_response(response, curl_command).await?;
        tracing::debug!(
            status = response.status,
            bytes = response.body.len(),
            "analysis response received"
        );
        Ok(response)
    }

    async fn health(&self) -> HealthStatus {
        let response = match self.client.get(self.health_url.clone()).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(url = %self.health_url, error = %e, "health probe failed");
                return HealthStatus::Unreachable {
                    reason: e.to_string(),
                };
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                return HealthStatus::Unreachable {
                    reason: format!("Failed to read response body: {}", e),
                }
            }
        };

        let reported = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("status").and_then(|s| s.as_str()).map(str::to_string));

        if status.is_success() && reported.as_deref() == Some("healthy") {
            HealthStatus::Healthy
        } else {
            HealthStatus::Unhealthy {
                status: status.as_u16(),
                body,
            }
        }
    }
}
