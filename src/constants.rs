//! Global Constants
//!
//! Centralized constants for configuration and tuning.
//! All magic numbers should be defined here with documentation.

/// FAQ generation constants
pub mod generation {
    /// Number of question/answer pairs per FAQ result
    pub const FAQ_COUNT: usize = 3;

    /// Response-size cap for the chat-completion call
    pub const MAX_TOKENS: usize = 500;

    /// Creativity parameter, tuned low-moderate for consistency over novelty
    pub const TEMPERATURE: f32 = 0.3;

    /// Default output language for generated content
    pub const DEFAULT_LANGUAGE: &str = "简体中文";
}

/// HTTP/Network constants
pub mod network {
    /// Default chat-completion request timeout (seconds)
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Connection timeout (seconds)
    pub const CONNECTION_TIMEOUT_SECS: u64 = 10;
}

/// HTTP server constants
pub mod server {
    /// Default bind host
    pub const DEFAULT_HOST: &str = "127.0.0.1";

    /// Default bind port
    pub const DEFAULT_PORT: u16 = 3000;
}
