//! Remote analysis endpoint client

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;
use url::Url;

use revisor_core::{AnalysisBackend, Error, Result};

use crate::config::EndpointConfig;

#[derive(Serialize)]
struct AnalyzeRequest<'a> {
    code: &'a str,
    framework: &'a str,
}

/// Client for a remote service that performs the analysis itself
pub struct EndpointClient {
    client: Client,
    analyze_url: Url,
}

impl EndpointClient {
    pub fn new(config: EndpointConfig) -> Result<Self> {
        let analyze_url = config.analyze_url()?;
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::Transport(e.to_string()))?;

        Ok(Self { client, analyze_url })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(EndpointConfig::from_env()?)
    }

    pub fn analyze_url(&self) -> &Url {
        &self.analyze_url
    }
}

#[async_trait]
impl AnalysisBackend for EndpointClient {
    async fn request_analysis(&self, code: &str, framework: &str) -> Result<String> {
        debug!(url = %self.analyze_url, framework, "posting code to analysis endpoint");

        let response = self
            .client
            .post(self.analyze_url.clone())
            .header("Accept", "application/json")
            .json(&AnalyzeRequest { code, framework })
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(Error::Transport(format!(
                "Analysis endpoint failed with status {}: {}",
                status, error_text
            )));
        }

        response
            .text()
            .await
            .map_err(|e| Error::Transport(e.to_string()))
    }

    fn name(&self) -> &str {
        "endpoint"
    }
}
