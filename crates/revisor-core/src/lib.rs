//! Core traits and types for Revisor
//!
//! This crate defines the analysis record, the prompt sent to generative
//! models, the normalizer that turns untrusted model output into that record,
//! and the backend traits the CLI and provider crates plug into.

pub mod analysis;
pub mod backend;
pub mod error;
pub mod llm;
pub mod normalize;
pub mod prompt;
pub mod status;

#[cfg(test)]
mod tests;

pub use analysis::{AnalysisResult, Framework};
pub use backend::{AnalysisBackend, GenerativeBackend};
pub use error::{Error, Result};
pub use llm::{GenerationConfig, GenerationResult, LlmProvider};
pub use normalize::{ResponseShape, normalize, normalize_value, try_normalize};
pub use prompt::build_prompt;
pub use status::{RequestStatus, StatusBroadcaster};
