//! Prompt serialization.
//!
//! Concatenates retained regions in the fixed structural order: ranked
//! context items first, each as `<filename>{path}\n{content}` with no other
//! separator, then the completed-file tail
//! `<filename>{path}<fim_prefix>{prefix}<fim_suffix>{suffix}<fim_middle>`.
//!
//! Structural order is independent of allocation priority: context items
//! rank lowest for budgeting but serialize first. All budget accounting
//! happened during allocation — nothing is recomputed or re-validated here.

use infill_core::ContextItem;

use crate::budget::PromptPlan;
use crate::tags::FimTag;

/// A single context item in its tagged wire form.
///
/// The allocator estimates item cost on exactly this rendering.
pub fn context_entry(item: &ContextItem) -> String {
    format!(
        "{}{}\n{}",
        FimTag::Filename.as_str(),
        item.path,
        item.content
    )
}

/// Serialize a plan into the final prompt string.
pub fn render(plan: &PromptPlan) -> String {
    let mut out = String::new();
    for item in &plan.context_items {
        out.push_str(&context_entry(item));
    }
    out.push_str(FimTag::Filename.as_str());
    out.push_str(&plan.file_path);
    out.push_str(FimTag::Prefix.as_str());
    out.push_str(&plan.prefix);
    out.push_str(FimTag::Suffix.as_str());
    out.push_str(&plan.suffix);
    out.push_str(FimTag::Middle.as_str());
    out
}
