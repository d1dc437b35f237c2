//! Backends that produce raw analysis text for a piece of code

use async_trait::async_trait;
use tracing::debug;

use crate::llm::LlmProvider;
use crate::prompt::build_prompt;
use crate::Result;

/// A source of raw analysis responses.
///
/// Implementations return the response text untouched; turning it into an
/// [`crate::AnalysisResult`] is the normalizer's job. Any error returned here
/// is treated as a transport failure by the caller.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// Request an analysis of `code` for the `framework` label
    async fn request_analysis(&self, code: &str, framework: &str) -> Result<String>;

    /// Short name used in logs and the CLI
    fn name(&self) -> &str;
}

/// Backend that prompts a generative model directly
pub struct GenerativeBackend<L: LlmProvider> {
    llm: L,
}

impl<L: LlmProvider> GenerativeBackend<L> {
    pub fn new(llm: L) -> Self {
        Self { llm }
    }

    pub fn llm(&self) -> &L {
        &self.llm
    }
}

#[async_trait]
impl<L: LlmProvider> AnalysisBackend for GenerativeBackend<L> {
    async fn request_analysis(&self, code: &str, framework: &str) -> Result<String> {
        let prompt = build_prompt(code, framework);
        debug!(model = self.llm.model_id(), prompt_len = prompt.len(), "sending review prompt");

        let result = self.llm.generate(&prompt).await?;
        if let Some(tokens) = result.tokens_used {
            debug!(tokens, "generation finished");
        }
        Ok(result.text)
    }

    fn name(&self) -> &str {
        self.llm.model_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{GenerationConfig, GenerationResult};
    use crate::Error;
    use std::sync::Mutex;

    struct RecordingProvider {
        reply: std::result::Result<String, String>,
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl LlmProvider for RecordingProvider {
        async fn generate(&self, prompt: &str) -> Result<GenerationResult> {
            self.generate_with_config(prompt, &GenerationConfig::default()).await
        }

        async fn generate_with_config(
            &self,
            prompt: &str,
            config: &GenerationConfig,
        ) -> Result<GenerationResult> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.reply {
                Ok(text) => Ok(GenerationResult {
                    text: text.clone(),
                    model_id: config.model_id.clone(),
                    tokens_used: Some(10),
                }),
                Err(msg) => Err(Error::Transport(msg.clone())),
            }
        }

        fn model_id(&self) -> &str {
            "recording"
        }
    }

    #[tokio::test]
    async fn test_generative_backend_sends_prompt() {
        let backend = GenerativeBackend::new(RecordingProvider {
            reply: Ok("{\"quality\":\"ok\"}".to_string()),
            prompts: Mutex::new(Vec::new()),
        });

        let text = backend.request_analysis("let a = 1;", "typescript").await.unwrap();
        assert_eq!(text, "{\"quality\":\"ok\"}");
        assert_eq!(backend.name(), "recording");

        let prompts = backend.llm().prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0], build_prompt("let a = 1;", "typescript"));
    }

    #[tokio::test]
    async fn test_generative_backend_propagates_errors() {
        let backend = GenerativeBackend::new(RecordingProvider {
            reply: Err("connection reset".to_string()),
            prompts: Mutex::new(Vec::new()),
        });

        let err = backend.request_analysis("x", "java").await.unwrap_err();
        assert!(err.is_transport());
        assert_eq!(err.to_string(), "Transport error: connection reset");
    }
}
