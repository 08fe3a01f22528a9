//! # Infill Engine
//!
//! The request-level completion driver. One call to
//! [`CompletionEngine::complete`] runs the whole pipeline:
//!
//! 1. **Fetch** the document text (absent text ⇒ empty completion)
//! 2. **Split** it at the cursor into prefix and suffix
//! 3. **Rank** cross-file context under a hard deadline — partial results
//!    are the expected outcome, never an error
//! 4. **Budget & serialize** the FIM prompt within the token limit
//! 5. **Invoke** the inference provider and return its text verbatim
//!
//! Everything built during a request is request-scoped and discarded once
//! the completion text is returned; concurrent requests are independent.

pub mod service;

pub use service::{CompletionEngine, EngineConfig};
