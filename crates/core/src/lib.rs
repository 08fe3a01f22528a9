//! # Infill Core
//!
//! Domain types, traits, and error definitions for the Infill code-completion
//! engine. This crate has **zero framework dependencies** — it defines the
//! collaborator contracts that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! Every external collaborator of a completion request is a trait here:
//! document access, language identification, context ranking, and the
//! inference backend. Implementations live in their respective crates. This
//! enables:
//! - Swapping implementations via configuration
//! - Easy testing with stub collaborators
//! - Clean dependency graph (all crates depend inward on core)

pub mod context;
pub mod document;
pub mod error;
pub mod language;
pub mod provider;

// Re-export key types at crate root for ergonomics
pub use context::{ContextItem, ContextQuery, ContextRanker};
pub use document::{DocumentProvider, Position};
pub use error::{ContextError, DocumentError, Error, ProviderError, Result};
pub use language::{Language, LanguageProvider};
pub use provider::{CompletionProvider, CompletionRequest};
