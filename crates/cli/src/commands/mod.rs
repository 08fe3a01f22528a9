//! CLI subcommand implementations.

pub mod complete;
pub mod doctor;
pub mod prompt;

use std::sync::Arc;

use infill_config::AppConfig;
use infill_context::{FsWorkspace, OverlapRanker, RankerConfig};
use infill_core::Position;
use infill_engine::{CompletionEngine, EngineConfig};
use infill_providers::OllamaProvider;

use crate::CursorArgs;

/// Wire an engine from the loaded config plus per-invocation overrides.
pub(crate) fn build_engine(args: &CursorArgs, config: &AppConfig) -> CompletionEngine {
    let workspace = Arc::new(FsWorkspace::new(&args.workspace));
    let ranker = Arc::new(OverlapRanker::new(&args.workspace).with_config(RankerConfig {
        max_file_bytes: config.context.max_file_bytes,
        window_chars: config.context.window_chars,
        pre_score_limit: config.context.pre_score_limit,
    }));
    let provider = Arc::new(OllamaProvider::new(Some(config.provider.base_url.as_str())));

    let engine_config = EngineConfig {
        model: args.model.clone().unwrap_or_else(|| config.model.clone()),
        token_limit: args.token_limit.unwrap_or(config.token_limit),
        context_timeout: config.soft_timeout(),
        max_tokens: config.max_tokens,
    };

    CompletionEngine::new(workspace.clone(), workspace, ranker, provider, engine_config)
}

/// One-based CLI coordinates → zero-based engine position.
pub(crate) fn cursor_position(args: &CursorArgs) -> Position {
    Position::new(args.line.saturating_sub(1), args.column.saturating_sub(1))
}
