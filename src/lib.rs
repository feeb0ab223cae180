//! faqgen - AI-Driven FAQ Content Generator
//!
//! Generates SEO/AI-citation-optimized FAQ content for a topic through a
//! chat-completion API, with a deterministic local fallback, and formats
//! freeform answers into typed display segments.
//!
//! ## Core Components
//!
//! - **Generation pipeline**: topic in, exactly three question/answer pairs
//!   out; every upstream failure degrades silently to fallback content
//! - **Formatting engine**: pure segmentation and key-point extraction over
//!   answer strings for structured rendering
//!
//! ## Quick Start
//!
//! ```ignore
//! use faqgen::{Config, FaqPipeline};
//!
//! let config = Config::default();
//! let pipeline = FaqPipeline::from_config(&config)?;
//! let outcome = pipeline.generate("碳中和").await?;
//! for pair in outcome.pairs() {
//!     println!("{}: {}", pair.question, pair.answer);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`ai`]: chat provider abstraction, prompts, response parsing
//! - [`faq`]: generation pipeline and fallback templates
//! - [`format`]: answer segmentation and key-point extraction
//! - [`server`]: axum HTTP surface
//! - [`config`]: layered figment configuration

pub mod ai;
pub mod cli;
pub mod config;
pub mod constants;
pub mod faq;
pub mod format;
pub mod server;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

pub use config::{Config, ConfigLoader};
pub use types::{FaqError, FaqOutcome, FaqPair, Result};

pub use faq::{FaqPipeline, fallback_faqs};
pub use format::{FormattedSegment, SegmentKind, extract_key_points, segment};

pub use ai::{ChatProvider, SharedProvider, create_provider};
