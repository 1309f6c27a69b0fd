//! Request lifecycle for article analysis
//!
//! A [`RequestController`] owns a single state slot. `submit` moves it through
//! `Loading` into either `Success` or `Error`; readers observe the slot through
//! [`RequestController::state`] or a watch receiver from
//! [`RequestController::subscribe`].
//!
//! Submissions are not serialised. Two overlapping `submit` calls each run to
//! completion and whichever finishes last overwrites the slot, regardless of
//! the order they were issued in.

use crate::error::AnalysisError;
use crate::traits::AnalysisService;
use crate::types::{AnalysisRequest, AnalysisResult};
use tokio::sync::watch;

/// Current state of the analysis request
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Error(String),
    Success(AnalysisResult),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Whether a request has finished, successfully or not
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Error(_) | Self::Success(_))
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            Self::Success(result) => Some(result),
            _ => None,
        }
    }
}

/// Drives analysis requests against a service and holds the latest outcome
pub struct RequestController<S> {
    service: S,
    state: watch::Sender<RequestState>,
}

impl<S: AnalysisService> RequestController<S> {
    /// Create a controller in the `Idle` state
    pub fn new(service: S) -> Self {
        let (state, _) = watch::channel(RequestState::Idle);
        Self { service, state }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> RequestState {
        self.state.borrow().clone()
    }

    /// Read-only view that is notified on every transition
    pub fn subscribe(&self) -> watch::Receiver<RequestState> {
        self.state.subscribe()
    }

    /// Access the underlying service
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Submit a URL for analysis.
    ///
    /// Blank input fails immediately without contacting the service. Otherwise
    /// the state becomes `Loading`, exactly one request is sent, and the
    /// outcome is written to the slot. The state written by this call is also
    /// returned, though a concurrent submission may already have replaced it.
    pub async fn submit(&self, raw_url: &str) -> RequestState {
        let request = match AnalysisRequest::from_input(raw_url) {
            Ok(request) => request,
            Err(err) => return self.fail(err),
        };

        tracing::info!(url = %request.url, "submitting article for analysis");
        self.transition(RequestState::Loading);

        let outcome = match self.service.analyze(&request).await {
            Ok(response) => response.into_result(),
            Err(err @ AnalysisError::Transport { .. }) => Err(err),
            Err(other) => Err(AnalysisError::transport(other.to_string())),
        };

        match outcome {
            Ok(result) => {
                tracing::info!(
                    url = %request.url,
                    trust_score = result.trust_score,
                    sensationalism_score = result.sensationalism_score,
                    "analysis succeeded"
                );
                self.transition(RequestState::Success(result))
            }
            Err(err) => self.fail(err),
        }
    }

    fn fail(&self, err: AnalysisError) -> RequestState {
        if err.is_validation() {
            tracing::debug!(error = %err, "rejected submission");
        } else {
            tracing::warn!(error = %err, "analysis failed");
        }
        self.transition(RequestState::Error(err.user_message()))
    }

    fn transition(&self, next: RequestState) -> RequestState {
        self.state.send_replace(next.clone());
        next
    }
}
