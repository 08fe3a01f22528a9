//! Priority-based token budgeting.
//!
//! Given a token ceiling, decides how much of each prompt region survives.
//! Regions are consumed highest-priority first: file path, then prefix,
//! then suffix, then ranked context items. Priority order is data (a
//! descriptor list), not control flow.
//!
//! Truncation always keeps the characters nearest the cursor: path and
//! prefix keep their tail, suffix keeps its head. Context items are atomic
//! — kept whole or dropped — and iteration stops at the first item that no
//! longer fits.

use infill_core::ContextItem;

use crate::serialize;
use crate::tags::FimTag;
use crate::token::estimate_tokens;

/// Which end of an overflowing region survives truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keep {
    /// Keep the last N characters.
    Tail,
    /// Keep the first N characters.
    Head,
}

/// The per-region text retained by [`allocate`], ready to serialize.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PromptPlan {
    pub file_path: String,
    pub prefix: String,
    pub suffix: String,
    pub context_items: Vec<ContextItem>,
}

/// The remaining token budget for one allocation pass.
///
/// Decremented monotonically; never goes negative.
#[derive(Debug)]
struct Budget(usize);

impl Budget {
    fn new(token_limit: usize) -> Self {
        Self(token_limit.saturating_sub(FimTag::overhead()))
    }

    fn is_exhausted(&self) -> bool {
        self.0 == 0
    }

    /// Keep the whole text if it fits, else the largest slice that does.
    ///
    /// Overflow drains the budget to zero: every later region is lower
    /// priority and degrades to empty.
    fn fit_or_truncate(&mut self, text: &str, keep: Keep) -> String {
        let tokens = estimate_tokens(text);
        if tokens <= self.0 {
            self.0 -= tokens;
            return text.to_string();
        }
        let chars_to_keep = self.0 * 4;
        self.0 = 0;
        match keep {
            Keep::Tail => tail_chars(text, chars_to_keep),
            Keep::Head => head_chars(text, chars_to_keep),
        }
    }

    /// Debit a whole item, or refuse it untouched.
    fn try_debit(&mut self, tokens: usize) -> bool {
        if tokens <= self.0 {
            self.0 -= tokens;
            true
        } else {
            false
        }
    }
}

/// Last `n` characters of `text`.
fn tail_chars(text: &str, n: usize) -> String {
    let total = text.chars().count();
    text.chars().skip(total.saturating_sub(n)).collect()
}

/// First `n` characters of `text`.
fn head_chars(text: &str, n: usize) -> String {
    text.chars().take(n).collect()
}

/// Decide how much of each region survives under `token_limit`.
///
/// Total and stateless: identical inputs yield identical plans, and a
/// limit at or below the tag overhead yields an all-empty plan rather
/// than an error.
pub fn allocate(
    token_limit: usize,
    file_path: &str,
    prefix: &str,
    suffix: &str,
    context_items: &[ContextItem],
) -> PromptPlan {
    let mut budget = Budget::new(token_limit);

    // Highest priority first. Tail-keeping regions preserve the characters
    // just before the cursor; the suffix keeps its head for the same reason.
    let regions = [
        (file_path, Keep::Tail),
        (prefix, Keep::Tail),
        (suffix, Keep::Head),
    ];
    let [file_path, prefix, suffix] = regions.map(|(text, keep)| budget.fit_or_truncate(text, keep));

    let mut kept_items = Vec::new();
    for item in context_items {
        if budget.is_exhausted() {
            break;
        }
        let tokens = estimate_tokens(&serialize::context_entry(item));
        if !budget.try_debit(tokens) {
            // Ranked order is authoritative: once one item no longer fits,
            // less relevant items are not considered either.
            break;
        }
        kept_items.push(item.clone());
    }

    PromptPlan {
        file_path,
        prefix,
        suffix,
        context_items: kept_items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(path: &str, content_len: usize) -> ContextItem {
        ContextItem::new(path, "x".repeat(content_len))
    }

    /// Token limit that leaves exactly `tokens` available after the tag
    /// overhead and the given file path.
    fn limit_leaving(tokens: usize, file_path: &str) -> usize {
        FimTag::overhead() + estimate_tokens(file_path) + tokens
    }

    #[test]
    fn generous_budget_keeps_everything_whole() {
        let prefix = "p".repeat(100);
        let suffix = "s".repeat(100);
        let plan = allocate(8192, "a.py", &prefix, &suffix, &[]);
        assert_eq!(plan.file_path, "a.py");
        assert_eq!(plan.prefix, prefix);
        assert_eq!(plan.suffix, suffix);
        assert!(plan.context_items.is_empty());
    }

    #[test]
    fn overflowing_path_keeps_tail() {
        // 8 tokens available for a 100-char path: keep the last 32 chars.
        let path: String = ('a'..='z').cycle().take(100).collect();
        let plan = allocate(FimTag::overhead() + 8, &path, "", "", &[]);
        assert_eq!(plan.file_path.len(), 32);
        assert!(path.ends_with(&plan.file_path));
        // Path overflow drains the budget: prefix and suffix degrade to empty.
        assert_eq!(plan.prefix, "");
        assert_eq!(plan.suffix, "");
    }

    #[test]
    fn overflowing_prefix_keeps_last_160_chars_of_40_token_budget() {
        let prefix: String = ('a'..='z').cycle().take(500).collect();
        let plan = allocate(limit_leaving(40, "a.py"), "a.py", &prefix, "", &[]);
        assert_eq!(plan.file_path, "a.py");
        assert_eq!(plan.prefix.len(), 160);
        assert_eq!(plan.prefix, prefix[500 - 160..]);
    }

    #[test]
    fn overflowing_suffix_keeps_head() {
        let suffix: String = ('a'..='z').cycle().take(500).collect();
        let plan = allocate(limit_leaving(10, "a.py"), "a.py", "", &suffix, &[]);
        assert_eq!(plan.suffix.len(), 36);
        assert!(suffix.starts_with(&plan.suffix));
    }

    #[test]
    fn limit_below_tag_overhead_degrades_to_empty_plan() {
        let plan = allocate(10, "a.py", "prefix", "suffix", &[item("b.py", 40)]);
        assert_eq!(plan, PromptPlan::default());
    }

    #[test]
    fn zero_limit_degrades_to_empty_plan() {
        let plan = allocate(0, "a.py", "prefix", "suffix", &[]);
        assert_eq!(plan, PromptPlan::default());
    }

    #[test]
    fn context_items_are_kept_in_rank_order() {
        let items = vec![item("first.py", 40), item("second.py", 40)];
        let plan = allocate(8192, "a.py", "", "", &items);
        assert_eq!(plan.context_items, items);
    }

    #[test]
    fn non_fitting_item_is_dropped_whole_not_truncated() {
        let items = vec![item("big.py", 10_000)];
        let plan = allocate(limit_leaving(20, "a.py"), "a.py", "", "", &items);
        assert!(plan.context_items.is_empty());
    }

    #[test]
    fn iteration_stops_at_first_misfit_without_lookahead() {
        // A fits, B does not, C would fit again — but ranking is
        // authoritative, so C must not be considered.
        let items = vec![item("a.py", 40), item("b.py", 10_000), item("c.py", 4)];
        let plan = allocate(limit_leaving(100, "main.py"), "main.py", "", "", &items);
        assert_eq!(plan.context_items.len(), 1);
        assert_eq!(plan.context_items[0].path, "a.py");
    }

    #[test]
    fn item_cost_counts_its_tag_path_and_newline() {
        // Content alone would fit; the tagged form must not.
        let it = ContextItem::new("somewhat/long/path.py", "y".repeat(36));
        let tagged_tokens = estimate_tokens(&serialize::context_entry(&it));
        let content_tokens = estimate_tokens(&it.content);
        assert!(tagged_tokens > content_tokens);

        // +2 covers the empty prefix and suffix, leaving exactly enough for
        // the bare content but not for the tagged form.
        let plan = allocate(
            limit_leaving(content_tokens + 2, "a.py"),
            "a.py",
            "",
            "",
            &[it],
        );
        assert!(plan.context_items.is_empty());
    }

    #[test]
    fn allocation_is_deterministic() {
        let items = vec![item("one.py", 33), item("two.py", 77)];
        let prefix = "p".repeat(301);
        let suffix = "s".repeat(99);
        let a = allocate(200, "src/deep/module.py", &prefix, &suffix, &items);
        let b = allocate(200, "src/deep/module.py", &prefix, &suffix, &items);
        assert_eq!(a, b);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        // 3 tokens available → keep the last 12 characters even when each
        // character is multi-byte.
        let path = "α".repeat(50);
        let plan = allocate(FimTag::overhead() + 3, &path, "", "", &[]);
        assert_eq!(plan.file_path.chars().count(), 12);
        assert!(path.ends_with(&plan.file_path));
    }
}
