//! Filesystem-backed document and language providers.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use infill_core::{DocumentError, DocumentProvider, Language, LanguageProvider};

/// A read-only view of a source tree rooted at a directory.
///
/// Paths handed to the providers are resolved against the root; absolute
/// paths are used as-is.
#[derive(Debug, Clone)]
pub struct FsWorkspace {
    root: PathBuf,
}

impl FsWorkspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let p = Path::new(path);
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            self.root.join(p)
        }
    }
}

#[async_trait]
impl DocumentProvider for FsWorkspace {
    async fn chars_by_path(&self, path: &str) -> std::result::Result<Option<String>, DocumentError> {
        match tokio::fs::read_to_string(self.resolve(path)).await {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DocumentError::ReadFailed {
                path: path.to_string(),
                reason: e.to_string(),
            }),
        }
    }
}

impl LanguageProvider for FsWorkspace {
    fn language(&self, path: &str) -> Language {
        language_of(path)
    }
}

/// Detect a language id from a file extension.
///
/// Unknown extensions pass through as their own id so that same-extension
/// files still rank against each other.
pub fn language_of(path: &str) -> Language {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");
    let id = match ext {
        "rs" => "rust",
        "py" | "pyi" => "python",
        "js" | "mjs" | "cjs" => "javascript",
        "ts" | "tsx" => "typescript",
        "go" => "go",
        "java" => "java",
        "kt" | "kts" => "kotlin",
        "c" | "h" => "c",
        "cpp" | "cc" | "cxx" | "hpp" => "cpp",
        "rb" => "ruby",
        "php" => "php",
        "cs" => "csharp",
        "swift" => "swift",
        "" => return Language::plain_text(),
        other => other,
    };
    Language::new(id)
}
