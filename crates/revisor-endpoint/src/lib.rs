//! Remote analysis endpoint client for Revisor
//!
//! The endpoint takes `{code, framework}` and answers with a body that
//! already has the analysis shape, so no prompt is involved.

mod client;
mod config;

pub use client::EndpointClient;
pub use config::EndpointConfig;

pub use revisor_core::{AnalysisBackend, Error, Result};
