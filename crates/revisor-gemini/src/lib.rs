//! Gemini integration for Revisor
//!
//! This crate provides the Gemini implementation of the LlmProvider trait.

mod client;
mod config;


pub use client::GeminiClient;
pub use config::GeminiConfig;

// Re-export core types for convenience
pub use revisor_core::{GenerationConfig, GenerationResult, LlmProvider, Error, Result};
