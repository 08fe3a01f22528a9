//! Context ranking contract — cross-file snippets relevant to a completion.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::error::ContextError;
use crate::language::Language;

/// A ranked snippet from another file judged relevant to the completion.
///
/// Items are atomic for prompt budgeting: kept whole or dropped entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextItem {
    /// Workspace-relative path of the source file.
    pub path: String,
    /// The snippet content.
    pub content: String,
}

impl ContextItem {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// A single context query, scoped to one completion request.
#[derive(Debug, Clone)]
pub struct ContextQuery {
    /// Path of the file being completed.
    pub path: String,
    /// Byte offset of the cursor within that file.
    pub offset: usize,
    /// Language of the file, scoping which other files are considered.
    pub language: Language,
    /// Best-effort wall-clock budget; no items arrive past this deadline.
    pub soft_timeout: Duration,
}

/// The context-ranking collaborator.
///
/// Implementations emit items in relevance-descending order and stop at the
/// query's soft deadline. The stream is truncated by wall clock, not by
/// count, so callers must treat whatever arrives as the complete answer —
/// partial results are the expected outcome, not a failure.
#[async_trait]
pub trait ContextRanker: Send + Sync {
    async fn contexts(
        &self,
        query: ContextQuery,
    ) -> std::result::Result<mpsc::Receiver<ContextItem>, ContextError>;
}
