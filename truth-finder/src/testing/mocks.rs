use crate::error::{AnalysisError, Result};
use crate::traits::AnalysisService;
use crate::types::{AnalysisRequest, HealthStatus, ServiceResponse};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;

/// Sample success payload returned when no response is scripted
pub const SAMPLE_RESULT_BODY: &str = r#"{
    "title": "Sample article",
    "summary": "A short summary",
    "toneAnalysis": "Measured",
    "sensationalismScore": 2,
    "manipulativeTechniques": [],
    "trustScore": 9,
    "finalVerdict": "Reliable"
}"#;

/// What the mock service does for a request
#[derive(Debug, Clone)]
pub enum MockOutcome {
    Respond { status: u16, body: String },
    TransportFailure(String),
}

/// Lets a test hold a mock request in flight until it chooses to release it
pub struct MockGate {
    entered: Notify,
    released: Notify,
}

impl MockGate {
    pub fn new() -> Self {
        Self {
            entered: Notify::new(),
            released: Notify::new(),
        }
    }

    /// Wait until the mock service has received a request
    pub async fn wait_until_entered(&self) {
        self.entered.notified().await;
    }

    /// Let the held request complete
    pub fn release(&self) {
        self.released.notify_one();
    }
}

impl Default for MockGate {
    fn default() -> Self {
        Self::new()
    }
}

/// Mock analysis service for testing
#[derive(Clone)]
pub struct MockAnalysisService {
    pub default_outcome: MockOutcome,
    pub outcomes: HashMap<String, MockOutcome>,
    pub delays: HashMap<String, Duration>,
    pub gate: Option<Arc<MockGate>>,
    pub health_status: HealthStatus,
    calls: Arc<Mutex<Vec<AnalysisRequest>>>,
}

impl MockAnalysisService {
    pub fn new() -> Self {
        Self {
            default_outcome: MockOutcome::Respond {
                status: 200,
                body: SAMPLE_RESULT_BODY.to_string(),
            },
            outcomes: HashMap::new(),
            delays: HashMap::new(),
            gate: None,
            health_status: HealthStatus::Healthy,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_response(mut self, status: u16, body: &str) -> Self {
        self.default_outcome = MockOutcome::Respond {
            status,
            body: body.to_string(),
        };
        self
    }

    pub fn with_response_for(mut self, url: &str, status: u16, body: &str) -> Self {
        self.outcomes.insert(
            url.to_string(),
            MockOutcome::Respond {
                status,
                body: body.to_string(),
            },
        );
        self
    }

    pub fn with_transport_failure(mut self, reason: &str) -> Self {
        self.default_outcome = MockOutcome::TransportFailure(reason.to_string());
        self
    }

    pub fn with_delay_for(mut self, url: &str, delay: Duration) -> Self {
        self.delays.insert(url.to_string(), delay);
        self
    }

    pub fn with_gate(mut self, gate: Arc<MockGate>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn with_health(mut self, status: HealthStatus) -> Self {
        self.health_status = status;
        self
    }

    /// Requests received so far, in arrival order
    pub fn calls(&self) -> Vec<AnalysisRequest> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls().len()
    }
}

impl Default for MockAnalysisService {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisService for MockAnalysisService {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<ServiceResponse> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(request.clone());
        }

        if let Some(gate) = &self.gate {
            gate.entered.notify_one();
            gate.released.notified().await;
        }

        if let Some(delay) = self.delays.get(&request.url) {
            tokio::time::sleep(*delay).await;
        }

        let outcome = self
            .outcomes
            .get(&request.url)
            .unwrap_or(&self.default_outcome);

        match outcome {
            MockOutcome::Respond { status, body } => Ok(ServiceResponse::new(
                *status,
                body.clone(),
                "http://mock.analysis/".to_string(),
                format!(
                    "curl -X POST 'http://mock.analysis/' -d '{{\"url\":\"{}\"}}'",
                    request.url
                ),
            )),
            MockOutcome::TransportFailure(reason) => Err(AnalysisError::transport(reason.clone())),
        }
    }

    async fn health(&self) -> HealthStatus {
        self.health_status.clone()
    }
}
