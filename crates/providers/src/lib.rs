//! # Infill Providers
//!
//! Inference backend implementations. Each provider receives a finished
//! FIM prompt and returns the model's completion text verbatim — prompt
//! structure is entirely the engine's concern.

pub mod ollama;

pub use ollama::{DEFAULT_MODEL, OllamaProvider};
