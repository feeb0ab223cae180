//! Unified Error Type System
//!
//! Centralized error types for the entire application.
//!
//! ## Design Principles
//!
//! - Single unified error type (FaqError) for the entire application
//! - Only the empty-topic precondition is ever surfaced across the
//!   generation pipeline boundary; every other generation failure is
//!   absorbed into the fallback path
//! - No panic/unwrap - all errors are recoverable

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FaqError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Generation Errors
    // -------------------------------------------------------------------------
    /// Remote chat-completion call failed (network, HTTP status, missing
    /// content). Absorbed by the pipeline, never propagated to its callers.
    #[error("LLM API error: {0}")]
    LlmApi(String),

    /// Operation timeout with context
    #[error("Timeout after {duration:?}: {operation}")]
    Timeout {
        operation: String,
        duration: Duration,
    },

    /// The model returned text that is not a usable FAQ array
    #[error("Malformed FAQ response: {0}")]
    MalformedResponse(String),

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    /// Precondition failure: the topic is missing or whitespace-only.
    /// The only error the pipeline's caller must branch on.
    #[error("topic must not be empty")]
    EmptyTopic,

    #[error("Config error: {0}")]
    Config(String),
}

impl FaqError {
    /// Create a timeout error
    pub fn timeout(operation: impl Into<String>, duration: Duration) -> Self {
        Self::Timeout {
            operation: operation.into(),
            duration,
        }
    }
}

pub type Result<T> = std::result::Result<T, FaqError>;
