//! Language identification contract.
//!
//! The engine only uses the language to scope context queries — it never
//! interprets source text itself, so a plain identifier string is enough.

use serde::{Deserialize, Serialize};

/// An identifier for a programming language (`"rust"`, `"python"`, ...).
///
/// Identifiers are normalized to lowercase so providers and rankers agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Language(String);

impl Language {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into().to_lowercase())
    }

    /// The language used when nothing better is known.
    pub fn plain_text() -> Self {
        Self("plaintext".into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Determines the language of a document, used only to scope which files
/// the context ranker considers.
pub trait LanguageProvider: Send + Sync {
    fn language(&self, path: &str) -> Language;
}
