//! Configuration
//!
//! Layered configuration: built-in defaults, global and project TOML files,
//! FAQGEN_* environment variables.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{Config, GenerationConfig, LlmConfig, ServerConfig};
