//! The completion orchestrator.

use std::sync::Arc;
use std::time::Duration;

use infill_core::{
    CompletionProvider, CompletionRequest, ContextItem, ContextQuery, ContextRanker,
    DocumentProvider, LanguageProvider, Position, Result,
};
use infill_prompt::{allocate, render};
use tracing::{debug, info};

/// Request-independent settings, supplied at construction — never read
/// from process-wide state.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Model id passed to the provider.
    pub model: String,
    /// Token ceiling for the assembled prompt.
    pub token_limit: usize,
    /// Wall-clock budget for context ranking.
    pub context_timeout: Duration,
    /// Cap on tokens the provider may generate, if any.
    pub max_tokens: Option<u32>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            model: "codellama:7b-code".into(),
            token_limit: 8192,
            context_timeout: Duration::from_millis(50),
            max_tokens: None,
        }
    }
}

/// Drives one completion request end to end.
///
/// Holds no per-request state: `complete` may be called concurrently from
/// any number of tasks. Dropping a `complete` future cancels the in-flight
/// provider call and releases the ranker stream.
pub struct CompletionEngine {
    documents: Arc<dyn DocumentProvider>,
    languages: Arc<dyn LanguageProvider>,
    ranker: Arc<dyn ContextRanker>,
    provider: Arc<dyn CompletionProvider>,
    config: EngineConfig,
}

impl CompletionEngine {
    pub fn new(
        documents: Arc<dyn DocumentProvider>,
        languages: Arc<dyn LanguageProvider>,
        ranker: Arc<dyn ContextRanker>,
        provider: Arc<dyn CompletionProvider>,
        config: EngineConfig,
    ) -> Self {
        Self {
            documents,
            languages,
            ranker,
            provider,
            config,
        }
    }

    /// Produce a completion for the cursor position in `path`.
    ///
    /// A document the provider cannot supply yields an empty completion
    /// rather than an error; provider failures propagate as-is.
    pub async fn complete(&self, path: &str, position: Position) -> Result<String> {
        let Some(prompt) = self.assemble(path, position).await? else {
            debug!(path, "No document content, returning empty completion");
            return Ok(String::new());
        };

        let mut request = CompletionRequest::new(&self.config.model, prompt);
        if let Some(max) = self.config.max_tokens {
            request = request.with_max_tokens(max);
        }

        let completion = self.provider.complete(request).await?;
        info!(completion_len = completion.len(), "Got completion");
        Ok(completion)
    }

    /// Build the budgeted prompt for a cursor position, or `None` when the
    /// document provider has no content for `path`.
    pub async fn assemble(&self, path: &str, position: Position) -> Result<Option<String>> {
        let Some(text) = self.documents.chars_by_path(path).await? else {
            return Ok(None);
        };

        let mut offset = self
            .documents
            .position_to_offset(position, &text)
            .min(text.len());
        while !text.is_char_boundary(offset) {
            offset -= 1;
        }
        info!(path, offset, "Executing completion");

        let (prefix, suffix) = text.split_at(offset);

        let context_items = self.collect_contexts(path, offset).await?;
        info!(count = context_items.len(), "Collected context items");

        let plan = allocate(self.config.token_limit, path, prefix, suffix, &context_items);
        let prompt = render(&plan);
        debug!(
            prompt_len = prompt.len(),
            contexts_kept = plan.context_items.len(),
            "Prompt assembled"
        );

        Ok(Some(prompt))
    }

    /// Drain the ranker until it finishes or the soft timeout elapses.
    ///
    /// The timeout is enforced here as a real deadline on the drain, not
    /// delegated to the ranker: whatever has arrived when it fires is the
    /// answer.
    async fn collect_contexts(&self, path: &str, offset: usize) -> Result<Vec<ContextItem>> {
        let query = ContextQuery {
            path: path.to_string(),
            offset,
            language: self.languages.language(path),
            soft_timeout: self.config.context_timeout,
        };
        let mut rx = self.ranker.contexts(query).await?;

        let deadline = tokio::time::Instant::now() + self.config.context_timeout;
        let mut items = Vec::new();
        loop {
            match tokio::time::timeout_at(deadline, rx.recv()).await {
                Ok(Some(item)) => items.push(item),
                Ok(None) => break,
                Err(_) => {
                    debug!(collected = items.len(), "Context ranking deadline elapsed");
                    break;
                }
            }
        }
        Ok(items)
    }
}
