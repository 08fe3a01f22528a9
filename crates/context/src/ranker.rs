//! Identifier-overlap context ranking.
//!
//! Scores workspace files by the intersection-over-union of their
//! identifier sets against a window of text around the cursor, then emits
//! the best matches over a channel until the query's soft deadline. The
//! scan itself also honors the deadline, so a large tree yields whatever
//! was scored in time rather than blocking the caller.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Instant;

use async_trait::async_trait;
use infill_core::{ContextError, ContextItem, ContextQuery, ContextRanker};
use once_cell::sync::Lazy;
use regex::Regex;
use tokio::sync::mpsc;
use tracing::{debug, trace};
use walkdir::WalkDir;

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z_][A-Za-z0-9_]*").expect("identifier regex"));

/// Tuning knobs for [`OverlapRanker`].
#[derive(Debug, Clone)]
pub struct RankerConfig {
    /// Files larger than this are skipped entirely.
    pub max_file_bytes: u64,
    /// Characters around the cursor used as the query window.
    pub window_chars: usize,
    /// Upper bound on candidate files scored per query.
    pub pre_score_limit: usize,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: 256 * 1024,
            window_chars: 2048,
            pre_score_limit: 512,
        }
    }
}

/// The default context-ranking collaborator: a filesystem scan scored by
/// identifier-set intersection-over-union.
pub struct OverlapRanker {
    root: PathBuf,
    config: RankerConfig,
}

impl OverlapRanker {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            config: RankerConfig::default(),
        }
    }

    pub fn with_config(mut self, config: RankerConfig) -> Self {
        self.config = config;
        self
    }
}

#[async_trait]
impl ContextRanker for OverlapRanker {
    async fn contexts(
        &self,
        query: ContextQuery,
    ) -> std::result::Result<mpsc::Receiver<ContextItem>, ContextError> {
        let (tx, rx) = mpsc::channel(16);
        let root = self.root.clone();
        let config = self.config.clone();

        // The scan is blocking filesystem work; the deadline starts now,
        // not when the receiver is first polled.
        let deadline = Instant::now() + query.soft_timeout;
        tokio::task::spawn_blocking(move || {
            let scored = score_workspace(&root, &config, &query, deadline);
            for (_, item) in scored {
                if Instant::now() >= deadline {
                    break;
                }
                if tx.blocking_send(item).is_err() {
                    // Receiver dropped: the request was abandoned.
                    break;
                }
            }
        });

        Ok(rx)
    }
}

/// Score every candidate file under `root`, best first.
fn score_workspace(
    root: &Path,
    config: &RankerConfig,
    query: &ContextQuery,
    deadline: Instant,
) -> Vec<(f64, ContextItem)> {
    let Ok(anchor) = std::fs::read_to_string(root.join(&query.path)) else {
        trace!(path = %query.path, "Queried file unreadable, no context");
        return Vec::new();
    };
    let window = cursor_window(&anchor, query.offset.min(anchor.len()), config.window_chars);
    let query_ids = identifier_set(window);
    if query_ids.is_empty() {
        return Vec::new();
    }

    let mut scored = Vec::new();
    let mut candidates = 0;
    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_skipped(e.file_name().to_str().unwrap_or("")));

    for entry in walker {
        if Instant::now() >= deadline {
            debug!(scored = scored.len(), "Soft deadline hit during workspace scan");
            break;
        }
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                trace!(error = %e, "Skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let rel = match entry.path().strip_prefix(root) {
            Ok(r) => r.to_string_lossy().into_owned(),
            Err(_) => continue,
        };
        if rel == query.path {
            continue;
        }
        if language_matches(&rel, query) {
            if entry
                .metadata()
                .map(|m| m.len() > config.max_file_bytes)
                .unwrap_or(true)
            {
                continue;
            }
            if candidates >= config.pre_score_limit {
                debug!(limit = config.pre_score_limit, "Candidate cap reached");
                break;
            }
            candidates += 1;

            let Ok(content) = std::fs::read_to_string(entry.path()) else {
                continue;
            };
            let score = overlap_score(&query_ids, &identifier_set(&content));
            if score > 0.0 {
                scored.push((score, ContextItem::new(rel, content)));
            }
        }
    }

    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    scored
}

fn language_matches(rel_path: &str, query: &ContextQuery) -> bool {
    crate::workspace::language_of(rel_path) == query.language
}

/// Directories never worth scanning: hidden trees and build output.
fn is_skipped(name: &str) -> bool {
    name.starts_with('.')
        || matches!(
            name,
            "target" | "node_modules" | "build" | "dist" | "out" | "vendor" | "__pycache__"
        )
}

fn identifier_set(text: &str) -> HashSet<String> {
    IDENTIFIER
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Intersection-over-union of two identifier sets, in `[0, 1]`.
fn overlap_score(query: &HashSet<String>, candidate: &HashSet<String>) -> f64 {
    if query.is_empty() || candidate.is_empty() {
        return 0.0;
    }
    let intersection = query.intersection(candidate).count();
    let union = query.len() + candidate.len() - intersection;
    intersection as f64 / union as f64
}

/// A window of up to `window` characters centered on `offset`, widened to
/// char boundaries.
fn cursor_window(text: &str, offset: usize, window: usize) -> &str {
    let half = window / 2;
    let mut start = offset.saturating_sub(half);
    let mut end = (offset.saturating_add(half)).min(text.len());
    while start > 0 && !text.is_char_boundary(start) {
        start -= 1;
    }
    while end < text.len() && !text.is_char_boundary(end) {
        end += 1;
    }
    &text[start..end]
}
