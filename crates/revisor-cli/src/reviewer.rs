//! Code reviewer tying a backend to the response normalizer

use tokio::sync::watch;
use tracing::{info, warn};

use revisor_core::{
    AnalysisBackend, AnalysisResult, Error, RequestStatus, Result, StatusBroadcaster, try_normalize,
};

/// Status error shown when the code to review is blank
pub const EMPTY_INPUT_MESSAGE: &str = "Introduza um código para análise";

/// Status error shown when the backend answered with something unusable
pub const PARSE_FAILURE_MESSAGE: &str = "Falha ao processar a resposta da análise";

/// Runs analyses against a backend and publishes request status
pub struct CodeReviewer {
    backend: Box<dyn AnalysisBackend>,
    status: StatusBroadcaster,
}

impl CodeReviewer {
    /// Create a new reviewer for the given backend
    pub fn new(backend: impl AnalysisBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
            status: StatusBroadcaster::new(),
        }
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Snapshot of the current request status
    pub fn status(&self) -> RequestStatus {
        self.status.current()
    }

    /// Watch status changes, e.g. to drive a progress indicator
    pub fn subscribe(&self) -> watch::Receiver<RequestStatus> {
        self.status.subscribe()
    }

    /// Analyze `code` for the `framework` label.
    ///
    /// Fails only for blank input. Transport failures and unusable responses
    /// yield [`AnalysisResult::fallback`] and leave a message in the status.
    pub async fn analyze(&self, code: &str, framework: &str) -> Result<AnalysisResult> {
        if code.trim().is_empty() {
            self.status.fail(EMPTY_INPUT_MESSAGE);
            return Err(Error::EmptyInput(EMPTY_INPUT_MESSAGE.to_string()));
        }

        self.status.begin();
        info!(backend = self.backend.name(), framework, "requesting analysis");

        let raw = match self.backend.request_analysis(code, framework).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "analysis request failed");
                self.status.fail(e.to_string());
                return Ok(AnalysisResult::fallback());
            }
        };

        match try_normalize(&raw) {
            Ok(analysis) => {
                self.status.finish();
                Ok(analysis)
            }
            Err(e) => {
                warn!(error = %e, "could not decode analysis response");
                self.status.fail(PARSE_FAILURE_MESSAGE);
                Ok(AnalysisResult::fallback())
            }
        }
    }
}
