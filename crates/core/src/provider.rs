//! Provider trait — the abstraction over inference backends.
//!
//! A CompletionProvider takes a finished prompt string and returns the
//! model's completion text. The prompt already carries its own structure
//! (FIM delimiters), so providers must send it verbatim — no chat
//! templates, no post-processing of the reply.
//!
//! Implementations: Ollama, plus any backend exposing a raw-prompt
//! generation endpoint.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ProviderError;

/// A raw-prompt completion request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// The model to use (e.g. "codellama:7b-code").
    pub model: String,

    /// The finished prompt, sent to the backend verbatim.
    pub prompt: String,

    /// Maximum tokens to generate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    /// Sampling temperature (0.0 = deterministic).
    #[serde(default)]
    pub temperature: f32,

    /// Stop sequences.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stop: Vec<String>,
}

impl CompletionRequest {
    /// Create a request with deterministic sampling and no generation cap.
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            max_tokens: None,
            temperature: 0.0,
            stop: Vec::new(),
        }
    }

    pub fn with_max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = Some(max);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_stop(mut self, stop: Vec<String>) -> Self {
        self.stop = stop;
        self
    }
}

/// The inference collaborator.
///
/// Synchronous from the engine's point of view: `complete` resolves with
/// the full completion text or an error. Failure policy (retries,
/// fallbacks) is the caller's concern.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// A human-readable name for this provider (e.g. "ollama").
    fn name(&self) -> &str;

    /// Send a finished prompt and return the completion text.
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> std::result::Result<String, ProviderError>;

    /// List available models for this provider.
    async fn list_models(&self) -> std::result::Result<Vec<String>, ProviderError> {
        Ok(Vec::new())
    }

    /// Health check — can we reach the provider?
    async fn health_check(&self) -> std::result::Result<bool, ProviderError> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_defaults_are_deterministic() {
        let req = CompletionRequest::new("codellama:7b-code", "<fim_middle>");
        assert_eq!(req.temperature, 0.0);
        assert!(req.max_tokens.is_none());
        assert!(req.stop.is_empty());
    }

    #[test]
    fn builder_methods_apply() {
        let req = CompletionRequest::new("m", "p")
            .with_max_tokens(64)
            .with_temperature(0.2)
            .with_stop(vec!["<filename>".into()]);
        assert_eq!(req.max_tokens, Some(64));
        assert!((req.temperature - 0.2).abs() < f32::EPSILON);
        assert_eq!(req.stop.len(), 1);
    }

    #[test]
    fn request_serialization_skips_empty_fields() {
        let json = serde_json::to_string(&CompletionRequest::new("m", "p")).unwrap();
        assert!(!json.contains("max_tokens"));
        assert!(!json.contains("stop"));
    }
}
