//! Error types for the Infill domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant.

use thiserror::Error;

/// The top-level error type for all Infill operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Provider errors ---
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    // --- Context ranking errors ---
    #[error("Context ranking error: {0}")]
    Context(#[from] ContextError),

    // --- Document errors ---
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // --- Generic ---
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),
}

#[derive(Debug, Error)]
pub enum ContextError {
    #[error("Workspace scan failed: {0}")]
    Scan(String),

    #[error("Ranker not configured: {0}")]
    NotConfigured(String),
}

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Failed to read {path}: {reason}")]
    ReadFailed { path: String, reason: String },
}
