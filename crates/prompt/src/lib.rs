//! # Infill Prompt
//!
//! Token budgeting and prompt assembly — the core of the engine.
//!
//! Given a token ceiling and the candidate regions of a fill-in-the-middle
//! prompt, this crate decides how much of each region survives and
//! serializes the result into the final tagged string:
//!
//! 1. **Token counter** — a fixed characters-per-token heuristic; no
//!    dependency on the real model tokenizer
//! 2. **Budget allocator** — consumes regions highest-priority first
//!    (file path → prefix → suffix → ranked context items), truncating
//!    overflow away from the cursor
//! 3. **Serializer** — concatenates retained regions in a fixed structural
//!    order, independent of the priority order used for allocation
//!
//! # Determinism
//!
//! Allocation and serialization are pure functions over request-local
//! data: identical inputs always produce identical prompts, and there is
//! no failure mode — an impossible budget degrades to a tags-only prompt
//! rather than an error.

pub mod budget;
pub mod serialize;
pub mod tags;
pub mod token;

pub use budget::{PromptPlan, allocate};
pub use serialize::render;
pub use tags::FimTag;
pub use token::estimate_tokens;

use infill_core::ContextItem;

/// Allocate and serialize in one step.
pub fn build_prompt(
    token_limit: usize,
    file_path: &str,
    prefix: &str,
    suffix: &str,
    context_items: &[ContextItem],
) -> String {
    render(&allocate(token_limit, file_path, prefix, suffix, context_items))
}
