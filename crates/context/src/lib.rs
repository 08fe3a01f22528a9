//! # Infill Context
//!
//! The default context-ranking collaborator and filesystem-backed document
//! providers.
//!
//! Ranking is best effort within a wall-clock budget: the ranker scores
//! same-language workspace files by identifier overlap with the code around
//! the cursor and emits the best matches until its soft deadline. Whatever
//! has been emitted when the deadline passes is the answer — consumers must
//! never assume completeness.

pub mod ranker;
pub mod workspace;

pub use ranker::{OverlapRanker, RankerConfig};
pub use workspace::{FsWorkspace, language_of};
